// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Constant-time lookup tables for the scalar multiplication engines.
//!
//! Every secret-indexed lookup scans the whole table and accumulates the
//! requested entry with a mask, so the memory access pattern is
//! independent of the index; negation is likewise applied by mask.

#![allow(non_snake_case)]

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::traits::Identity;

/// One of the two 128-entry precomputed comb tables of basepoint
/// multiples, selected from with or without a data-independent access
/// pattern.
pub(crate) struct CombTable(pub(crate) &'static [AffinePoint; 128]);

impl CombTable {
    /// Return \\(\pm\\)`table[index]` in constant time, scanning all
    /// 128 entries.
    pub fn select(&self, index: u8, negate: Choice) -> AffinePoint {
        debug_assert!(index < 128);

        let mut t = self.0[0];
        for (j, entry) in self.0.iter().enumerate().skip(1) {
            t.conditional_assign(entry, index.ct_eq(&(j as u8)));
        }
        t.conditional_negate(negate);
        t
    }

    /// Return \\(\pm\\)`table[index]` with a direct load.  The memory
    /// address depends on `index`; only for public scalars.
    pub fn select_vartime(&self, index: u8, negate: Choice) -> AffinePoint {
        debug_assert!(index < 128);

        let mut t = self.0[index as usize];
        t.conditional_negate(negate);
        t
    }
}

/// A lookup table of eight extended points, used by the variable-base
/// engine to hold the signed combinations of \\(P\\) and \\(\psi(P)\\).
#[derive(Copy, Clone)]
pub(crate) struct LookupTable8(pub(crate) [ExtendedPoint; 8]);

impl LookupTable8 {
    /// Return \\(\pm\\)`table[index]` in constant time.
    pub fn select(&self, index: u8, negate: Choice) -> ExtendedPoint {
        debug_assert!(index < 8);

        let mut t = self.0[0];
        for (j, entry) in self.0.iter().enumerate().skip(1) {
            t.conditional_assign(entry, index.ct_eq(&(j as u8)));
        }
        t.conditional_negate(negate);
        t
    }
}

/// A lookup table of sixteen extended points, used by the double-base
/// engine; entry zero is the identity so that an all-zero digit row
/// still selects a well-formed point.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable16(pub(crate) [ExtendedPoint; 16]);

impl Default for LookupTable16 {
    fn default() -> LookupTable16 {
        LookupTable16([ExtendedPoint::identity(); 16])
    }
}

impl LookupTable16 {
    /// Return \\(\pm\\)`table[index]` in constant time.
    pub fn select(&self, index: u8, negate: Choice) -> ExtendedPoint {
        debug_assert!(index < 16);

        let mut t = self.0[0];
        for (j, entry) in self.0.iter().enumerate().skip(1) {
            t.conditional_assign(entry, index.ct_eq(&(j as u8)));
        }
        t.conditional_negate(negate);
        t
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::BASEPOINT;
    use crate::gen_tables::GEN_TABLE_0;

    #[test]
    fn comb_select_matches_direct_index() {
        let table = CombTable(&GEN_TABLE_0);
        for index in [0u8, 1, 17, 64, 127] {
            for negate in [0u8, 1] {
                let ct = table.select(index, Choice::from(negate));
                let vt = table.select_vartime(index, Choice::from(negate));
                assert_eq!(ct, vt);
                if negate == 0 {
                    assert_eq!(ct, GEN_TABLE_0[index as usize]);
                } else {
                    assert_eq!(ct, -&GEN_TABLE_0[index as usize]);
                }
            }
        }
    }

    #[test]
    fn extended_select_negates_by_mask() {
        let b = BASEPOINT.to_extended();
        let two_b = b.double().to_extended();
        let table = LookupTable8([b, two_b, b, b, b, b, b, b]);
        assert_eq!(table.select(1, Choice::from(0)), two_b);
        assert_eq!(table.select(1, Choice::from(1)), -&two_b);
        assert_eq!(table.select(0, Choice::from(0)), b);
    }
}
