// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Variable-base scalar multiplication accelerated by the GLS
//! endomorphism.
//!
//! A masked scalar decomposes as \\(k \equiv k\_1 + k\_2 \lambda\\) with
//! both halves below \\(2^{126}\\), so \\([k]P = [k\_1]P + [k\_2]\psi(P)\\)
//! runs in half the usual number of doublings.  After folding the signs
//! of \\(k\_1, k\_2\\) into the bases, \\(|k\_1|\\) is recoded as the
//! sign aligner and \\(|k\_2|\\) aligned to it; the main loop consumes
//! the digits two positions at a time.  A window of two aligner digits
//! is \\(s\_{i+1} (2 \mp 1)\\) — magnitude three when the digits agree
//! and one when they differ — so together with the two aligned digits
//! of \\(|k\_2|\\) every window selects \\(\pm T[j]\\) from the table
//!
//! ```text
//!     T[b]     = 3P + b E            b = 0..3,
//!     T[4 + b] = P + (2 b_1 - b_0) E
//! ```
//!
//! where \\(E = \psi(P)\\).  63 iterations of two doublings and one
//! add, a fixed top window, and one conditional subtraction (the
//! aligner's odd adjustment) complete the multiplication, all with a
//! scalar-independent trace.

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;

use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::endo::{decompose, psi};
use crate::scalar::Scalar;
use crate::scalar_mul::{align_bits, sign_aligner};
use crate::window::LookupTable8;

/// Build the window table over \\(P\\) and \\(E = \psi(P)\\).
pub(crate) fn gen_table_2(p: &ExtendedPoint, e: &ExtendedPoint) -> LookupTable8 {
    let p3 = (&p.double().to_extended() + p).to_extended();
    let e2 = e.double().to_extended();

    let t0 = p3;
    let t1 = (&p3 + e).to_extended();
    let t2 = (&p3 + &e2).to_extended();
    let t3 = (&t2 + e).to_extended();
    let t4 = *p;
    let t5 = (p - e).to_extended();
    let t6 = (p + &e2).to_extended();
    let t7 = (p + e).to_extended();

    LookupTable8([t0, t1, t2, t3, t4, t5, t6, t7])
}

/// Decode the two-bit windows at position `i` of the recoded pair into
/// a table index and a sign.
///
/// The high index bit is set when the two aligner digits differ (window
/// magnitude one rather than three); the sign is the upper aligner
/// digit.
#[inline]
pub(crate) fn window_digits(u: u128, v: u128, i: usize) -> (u8, Choice) {
    let wa = ((u >> i) & 3) as u8;
    let wb = ((v >> i) & 3) as u8;
    let hi = (wa & 1) ^ (wa >> 1);
    let index = (hi << 2) | wb;
    let negate = Choice::from((wa >> 1) ^ 1);
    (index, negate)
}

/// Variable-base scalar multiplication: compute \\([k]P\\).
///
/// The scalar must be masked (see [`Scalar::mask`]) and the point must
/// come from [`AffinePoint::from_bytes`] or the group operations of
/// this crate.  Constant-time in the scalar.
pub fn mul(k: &Scalar, point: &AffinePoint) -> AffinePoint {
    let (neg1, a1, neg2, a2) = decompose(k);

    let mut base = *point;
    base.conditional_negate(neg1);
    let mut endo_base = psi(point);
    endo_base.conditional_negate(neg2);

    let (u, lsb) = sign_aligner(a1);
    let v = align_bits(a2, u);

    let p = base.to_extended();
    let e = endo_base.to_extended();
    let table = gen_table_2(&p, &e);

    let (index, negate) = window_digits(u, v, 126);
    let mut r = table.select(index, negate);
    let mut i = 124usize;
    loop {
        let doubled = r.double().to_projective().double();
        let (index, negate) = window_digits(u, v, i);
        r = (&doubled.to_extended() + &table.select(index, negate)).to_extended();
        if i == 0 {
            break;
        }
        i -= 2;
    }

    // The aligner encoded |k1| + lsb; pay the odd adjustment back.
    let adjusted = (&r - &p).to_extended();
    r.conditional_assign(&adjusted, lsb);

    r.to_affine()
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{BASEPOINT, PSI_BASEPOINT};
    use crate::edwards::test::mul_reference;
    use crate::scalar_mul::comb::test::{VEC_K1, VEC_K2};
    use crate::traits::Identity;

    #[test]
    fn table_entries_sum_to_16p_plus_8e() {
        let p = BASEPOINT.to_extended();
        let e = PSI_BASEPOINT.to_extended();
        let table = gen_table_2(&p, &e);

        let mut sum = ExtendedPoint::identity();
        for entry in table.0.iter() {
            sum = (&sum + entry).to_extended();
        }

        let p16 = p.mul_by_pow_2(4);
        let e8 = e.mul_by_pow_2(3);
        let expected = (&p16 + &e8).to_extended();
        assert_eq!(sum, expected);
    }

    #[test]
    fn selector_truth_table() {
        // for the two-bit window pair (a, b) at position zero, the
        // selected point is +-T[idx] with idx and sign as follows
        let p = BASEPOINT.to_extended();
        let e = PSI_BASEPOINT.to_extended();
        let table = gen_table_2(&p, &e);

        let expected: [(u8, u8); 16] = [
            // (a, b) -> idx, negated when a's high bit is clear
            (0, 0), (1, 1), (2, 2), (3, 3),     // a = 0: -T[b]
            (4, 4), (5, 5), (6, 6), (7, 7),     // a = 1: -T[4+b]
            (8, 4), (9, 5), (10, 6), (11, 7),   // a = 2: +T[4+b]
            (12, 0), (13, 1), (14, 2), (15, 3), // a = 3: +T[b]
        ];
        for (ab, idx) in expected {
            let a = (ab >> 2) as u128;
            let b = (ab & 3) as u128;
            let (index, negate) = window_digits(a, b, 0);
            assert_eq!(index, idx);
            assert_eq!(negate.unwrap_u8(), ((ab >> 3) & 1) ^ 1);
            let selected = table.select(index, negate);
            let reference = if bool::from(negate) {
                -&table.0[idx as usize]
            } else {
                table.0[idx as usize]
            };
            assert_eq!(selected, reference);
        }
    }

    #[test]
    fn mul_matches_mul_gen_on_basepoint() {
        for bytes in [VEC_K1, VEC_K2] {
            let k = Scalar::from_bytes(&bytes).mask();
            let via_comb = crate::scalar_mul::comb::mul_gen(&k, true);
            let via_glv = mul(&k, &BASEPOINT);
            assert_eq!(via_glv.to_bytes(), via_comb.to_bytes());
        }
    }

    #[test]
    fn mul_matches_double_and_add() {
        let mut rng = rand::thread_rng();
        // on the basepoint
        for _ in 0..20 {
            let k = Scalar::random_masked(&mut rng);
            assert_eq!(mul(&k, &BASEPOINT), mul_reference(&k.to_limbs(), &BASEPOINT));
        }
        // and on another point of the subgroup
        let other = mul_reference(&[5, 0, 0, 0], &BASEPOINT);
        for _ in 0..20 {
            let k = Scalar::random_masked(&mut rng);
            assert_eq!(mul(&k, &other), mul_reference(&k.to_limbs(), &other));
        }
    }

    #[test]
    fn mul_edge_scalars() {
        for bytes in [[0u8; 32], [0xFF; 32]] {
            let k = Scalar::from_bytes(&bytes).mask();
            assert_eq!(mul(&k, &BASEPOINT), mul_reference(&k.to_limbs(), &BASEPOINT));
        }
    }
}
