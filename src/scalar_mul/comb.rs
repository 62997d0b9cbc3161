// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Fixed-base scalar multiplication by the basepoint, using a signed
//! comb over two precomputed tables.
//!
//! The comb parameters are \\((t, w, v, e, d) = (252, 8, 2, 16, 32)\\):
//! the 256 bit positions of the recoded scalar are split into \\(w = 8\\)
//! rows of \\(d = 32\\) columns, a table entry covers one column (all
//! eight rows at once), and the two tables split the columns in half so
//! the main loop runs only \\(e = 16\\) iterations.
//!
//! A masked scalar is \\(k = 4m\\) with \\(m\\) odd.  The recoding gives
//!
//! ```text
//!     m = sum_c eps_c 2^c (1 + sum_j b_{j,c} 2^{32(j+1)}),
//! ```
//!
//! with signs \\(\varepsilon\_c = \pm 1\\) taken from \\(m \bmod 2^{32}\\)
//! and presence bits \\(b\_{j,c}\\) obtained by the sign-aligned borrow
//! rewrite of \\((m - (m \bmod 2^{32})) / 2^{32}\\).  Since
//! \\(\varepsilon\_{31} = +1\\) always, the borrow chain terminates, and
//! the top table digit is fixed, which is the precondition masking
//! enforces.  Column \\(c\\) then selects
//! \\(\pm\\)`GEN_TABLE`\\(\_{c/16}\\)`[b]`, and after the 16 rounds two
//! doublings restore the factor of four, so the result is \\([k]B\\).

use subtle::Choice;

use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::gen_tables::{GEN_TABLE_0, GEN_TABLE_1};
use crate::scalar::Scalar;
use crate::window::CombTable;

/// The comb digits of one recoded scalar: a sign and a 7-bit table
/// index per column.
struct CombDigits {
    /// Bit `c` set when \\(\varepsilon\_c = +1\\).
    signs: u32,
    /// `index[c]` holds the presence bits of rows 1 through 7.
    index: [u8; 32],
}

/// Recode `m = k / 4` (odd, below \\(2^{248}\\)) into comb digits.
fn comb_recode(m: &[u64; 4]) -> CombDigits {
    // Sign row from the low 32 bits: the unique signed-binary encoding
    // of V = m mod 2^32 over 32 digits.  V < 2^32 keeps the offset
    // addition from wrapping, so the top sign digit is always +1.
    let v32 = m[0] as u32;
    let signs = ((v32 - 1) >> 1).wrapping_add(1u32 << 31);

    // Remaining value (m - V) / 2^32, nonnegative, below 2^216.
    let mut x = [
        (m[0] >> 32) | (m[1] << 32),
        (m[1] >> 32) | (m[2] << 32),
        (m[2] >> 32) | (m[3] << 32),
        m[3] >> 32,
    ];

    // Presence rows by sign-aligned borrow rewriting, row-major.
    // The running value is a small signed quantity in two's complement.
    let mut index = [0u8; 32];
    for row in 0..7 {
        for (c, idx) in index.iter_mut().enumerate() {
            let bit = (x[0] & 1) as u8;
            *idx |= bit << row;

            // x <- (x -+ bit) >> 1, the sign taken from the sign row;
            // compute both the decrement and the increment and keep the
            // one the sign calls for, so no branch touches the scalar.
            let positive = ((signs >> c) & 1) as u64;
            let mut sub = [0u64; 4];
            let mut add = [0u64; 4];
            let mut borrow = bit as u64;
            let mut carry = bit as u64;
            for i in 0..4 {
                let (d, b) = x[i].overflowing_sub(borrow);
                sub[i] = d;
                borrow = b as u64;
                let (a, cr) = x[i].overflowing_add(carry);
                add[i] = a;
                carry = cr as u64;
            }
            let mask = positive.wrapping_neg();
            for i in 0..4 {
                x[i] = (sub[i] & mask) | (add[i] & !mask);
            }

            // arithmetic shift right by one across the four limbs
            x[0] = (x[0] >> 1) | (x[1] << 63);
            x[1] = (x[1] >> 1) | (x[2] << 63);
            x[2] = (x[2] >> 1) | (x[3] << 63);
            x[3] = ((x[3] as i64) >> 1) as u64;
        }
    }
    debug_assert_eq!(x, [0u64; 4]);

    CombDigits { signs, index }
}

/// Fixed-base scalar multiplication: compute \\([k]B\\) for the
/// basepoint \\(B\\).
///
/// The scalar must be masked (see [`Scalar::mask`]).  With `ct` set the
/// table lookups scan all 128 entries and run in constant time; without
/// it they use direct loads, which is faster but leaks the scalar
/// through the memory access pattern.  Both paths compute the same
/// function.
pub fn mul_gen(k: &Scalar, ct: bool) -> AffinePoint {
    let limbs = k.to_limbs();
    debug_assert_eq!(limbs[0] & 7, 4);
    debug_assert_eq!(limbs[3] >> 58, 0);

    // m = k / 4
    let m = [
        (limbs[0] >> 2) | (limbs[1] << 62),
        (limbs[1] >> 2) | (limbs[2] << 62),
        (limbs[2] >> 2) | (limbs[3] << 62),
        limbs[3] >> 2,
    ];
    let digits = comb_recode(&m);

    let table_0 = CombTable(&GEN_TABLE_0);
    let table_1 = CombTable(&GEN_TABLE_1);
    let select = |table: &CombTable, c: usize| -> AffinePoint {
        let negate = Choice::from((((digits.signs >> c) & 1) ^ 1) as u8);
        if ct {
            table.select(digits.index[c], negate)
        } else {
            table.select_vartime(digits.index[c], negate)
        }
    };

    // Columns 0..16 live in table 0, columns 16..32 in table 1 (whose
    // entries are pre-doubled 16 times), so one pass over 16 column
    // pairs covers all 32 columns.
    let mut r: ExtendedPoint =
        (&select(&table_0, 15).to_extended() + &select(&table_1, 31)).to_extended();
    for i in (0..15).rev() {
        let doubled = r.double().to_extended();
        let partial = (&doubled + &select(&table_0, i)).to_extended();
        r = (&partial + &select(&table_1, i + 16)).to_extended();
    }

    // Two doublings restore the cofactor factor of four: [4m]B = [k]B.
    r.mul_by_pow_2(2).to_affine()
}

/// Regenerate the comb tables from the basepoint by the bootstrap
/// procedure; used to validate the baked-in constants.
#[cfg(test)]
pub(crate) fn generate_tables() -> ([AffinePoint; 128], [AffinePoint; 128]) {
    use crate::constants::BASEPOINT;
    use crate::traits::Identity;

    let base = BASEPOINT.to_extended();
    let mut table_0 = [AffinePoint::identity(); 128];
    let mut table_1 = [AffinePoint::identity(); 128];

    for u in 0..128u32 {
        // (1 + sum_j u_j 2^{32(j+1)}) B
        let mut q = base;
        for j in 0..7u32 {
            if (u >> j) & 1 == 1 {
                let s = base.mul_by_pow_2(32 * (j + 1));
                q = (&q + &s).to_extended();
            }
        }
        table_0[u as usize] = q.to_affine();
        table_1[u as usize] = q.mul_by_pow_2(16).to_affine();
    }

    (table_0, table_1)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::constants::BASEPOINT;
    use crate::edwards::test::mul_reference;

    /// First end-to-end scalar, pre-masking.
    pub(crate) const VEC_K1: [u8; 32] = [
        0xa3, 0xe4, 0xc1, 0x1f, 0x1c, 0xf7, 0x27, 0x07, 0xa5, 0xc9, 0xf6, 0xb4, 0xf4, 0xe0,
        0x33, 0x94, 0x1e, 0x9e, 0x6a, 0xd6, 0xa6, 0x6b, 0x90, 0xa1, 0x68, 0xaf, 0xde, 0x6a,
        0x7a, 0xf2, 0x6d, 0x74,
    ];

    /// Second end-to-end scalar, pre-masking.
    pub(crate) const VEC_K2: [u8; 32] = [
        0x77, 0x3c, 0x8f, 0x3f, 0xf0, 0x9d, 0x9e, 0x8b, 0xa2, 0x8d, 0x0e, 0xa8, 0x90, 0x6b,
        0x0d, 0x5b, 0x4d, 0xa3, 0xf6, 0x1e, 0x8c, 0xa6, 0x46, 0x6e, 0x28, 0x1f, 0xa4, 0x7b,
        0xf0, 0xc1, 0x28, 0x1b,
    ];

    /// [mask(VEC_K1)] B, 64-byte affine encoding.
    const VEC_MUL_GEN_K1: [u8; 64] = [
        0xdb, 0x62, 0x41, 0x84, 0x1c, 0xd2, 0xdf, 0x74, 0x34, 0x72, 0x9b, 0x10, 0xe3, 0x6b,
        0xe3, 0x74, 0x89, 0x9d, 0xf9, 0x17, 0x8b, 0x4f, 0xa9, 0x45, 0x9b, 0x38, 0x6e, 0x58,
        0x20, 0x45, 0x10, 0x27, 0x1f, 0x42, 0xbb, 0xe2, 0x0f, 0x44, 0x1b, 0x0c, 0x7f, 0x27,
        0x22, 0x0d, 0xe1, 0x77, 0xc0, 0x6f, 0xca, 0xdf, 0x0b, 0x9d, 0x02, 0x93, 0xcc, 0xc3,
        0xd7, 0xa9, 0x5e, 0x17, 0x14, 0x8d, 0x29, 0x7c,
    ];

    /// [mask(VEC_K2)] B, 64-byte affine encoding.
    const VEC_MUL_GEN_K2: [u8; 64] = [
        0x31, 0x31, 0xc1, 0xac, 0x32, 0x21, 0xfb, 0xac, 0xfc, 0xc2, 0x22, 0x58, 0x42, 0xe2,
        0xfd, 0x46, 0x95, 0xe0, 0x5e, 0xf6, 0x4c, 0xed, 0x0e, 0xdc, 0x59, 0xde, 0x0a, 0xa6,
        0x0b, 0xf6, 0x74, 0x13, 0xf2, 0x56, 0x8a, 0xc3, 0xd7, 0x13, 0xd1, 0xfa, 0xe7, 0x1f,
        0x55, 0xd3, 0x10, 0x05, 0x56, 0x51, 0xb2, 0x79, 0x8f, 0xb9, 0xf7, 0xf6, 0x55, 0xed,
        0x69, 0x09, 0x1a, 0xd0, 0x17, 0xaf, 0xaa, 0x6f,
    ];

    #[test]
    fn baked_tables_match_bootstrap() {
        let (table_0, table_1) = generate_tables();
        for u in 0..128 {
            assert_eq!(table_0[u], GEN_TABLE_0[u], "table 0 entry {}", u);
            assert_eq!(table_1[u], GEN_TABLE_1[u], "table 1 entry {}", u);
        }
    }

    #[test]
    fn mul_gen_test_vectors() {
        let k1 = Scalar::from_bytes(&VEC_K1).mask();
        assert_eq!(mul_gen(&k1, true).to_bytes(), VEC_MUL_GEN_K1);
        let k2 = Scalar::from_bytes(&VEC_K2).mask();
        assert_eq!(mul_gen(&k2, false).to_bytes(), VEC_MUL_GEN_K2);
    }

    #[test]
    fn ct_and_vartime_lookups_agree() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let k = Scalar::random_masked(&mut rng);
            assert_eq!(mul_gen(&k, true).to_bytes(), mul_gen(&k, false).to_bytes());
        }
    }

    #[test]
    fn mul_gen_matches_double_and_add() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let k = Scalar::random_masked(&mut rng);
            let expected = mul_reference(&k.to_limbs(), &BASEPOINT);
            assert_eq!(mul_gen(&k, true), expected);
        }
    }

    #[test]
    fn mul_gen_edge_scalars() {
        // the smallest and largest masked scalars
        for bytes in [[0u8; 32], [0xFF; 32]] {
            let k = Scalar::from_bytes(&bytes).mask();
            let expected = mul_reference(&k.to_limbs(), &BASEPOINT);
            assert_eq!(mul_gen(&k, true), expected);
        }
    }
}
