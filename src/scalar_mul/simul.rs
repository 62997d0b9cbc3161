// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Simultaneous double-base scalar multiplication,
//! \\([k\_1]P + [k\_2]Q\\).
//!
//! Both scalars are GLS-decomposed, giving four half-length magnitudes
//! over the bases \\(P, \psi(P), Q, \psi(Q)\\) (signs folded into the
//! bases).  The first magnitude serves as the sign aligner; the other
//! three are rewritten with digits in \\(\\{0, \pm 1\\}\\) aligned to
//! it.  Each of the 128 rounds then needs one doubling and one addition
//! of \\(\pm T[j]\\), where \\(T\\) holds the sixteen non-negative
//! combinations \\(a P + b \psi(P) + c Q + d \psi(Q)\\),
//! \\(a, b, c, d \in \\{0, 1\\}\\), the all-zero entry being the
//! identity (the unified formulas make adding it harmless).

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;

use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::endo::{decompose, psi};
use crate::scalar::Scalar;
use crate::scalar_mul::{align_bits, sign_aligner};
use crate::window::LookupTable16;

/// Build the table of all \\(\\{0,1\\}\\)-combinations of the four
/// bases.
fn gen_table_4(bases: &[ExtendedPoint; 4]) -> LookupTable16 {
    let mut table = LookupTable16::default();
    for i in 1..16usize {
        // peel the lowest set bit: T[i] = T[i - lowbit] + base[log2(lowbit)]
        let low = i & i.wrapping_neg();
        let rest = i ^ low;
        let base = &bases[low.trailing_zeros() as usize];
        table.0[i] = (&table.0[rest] + base).to_extended();
    }
    table
}

/// Simultaneous double-base multiplication:
/// compute \\([k\_1]P + [k\_2]Q\\).
///
/// Both scalars must be masked (see [`Scalar::mask`]); both points must
/// come from [`AffinePoint::from_bytes`] or the group operations of
/// this crate.  Constant-time in both scalars.
pub fn simul(k1: &Scalar, p: &AffinePoint, k2: &Scalar, q: &AffinePoint) -> AffinePoint {
    let (neg1, a1, neg2, a2) = decompose(k1);
    let (neg3, a3, neg4, a4) = decompose(k2);

    let mut base_p = *p;
    base_p.conditional_negate(neg1);
    let mut base_ep = psi(p);
    base_ep.conditional_negate(neg2);
    let mut base_q = *q;
    base_q.conditional_negate(neg3);
    let mut base_eq = psi(q);
    base_eq.conditional_negate(neg4);

    let (u, lsb) = sign_aligner(a1);
    let v = align_bits(a2, u);
    let w = align_bits(a3, u);
    let x = align_bits(a4, u);

    let pe = base_p.to_extended();
    let bases = [
        pe,
        base_ep.to_extended(),
        base_q.to_extended(),
        base_eq.to_extended(),
    ];
    let table = gen_table_4(&bases);

    // The aligner digit is never zero, so every round's index is odd;
    // the even entries only serve to keep the scan uniform.
    let select = |i: usize| -> ExtendedPoint {
        let index = 1
            | ((((v >> i) & 1) as u8) << 1)
            | ((((w >> i) & 1) as u8) << 2)
            | ((((x >> i) & 1) as u8) << 3);
        let negate = Choice::from((((u >> i) & 1) as u8) ^ 1);
        table.select(index, negate)
    };

    let mut r = select(127);
    for i in (0..127).rev() {
        let doubled = r.double().to_extended();
        r = (&doubled + &select(i)).to_extended();
    }

    // The aligner encoded |k1(P)| + lsb; pay the odd adjustment back.
    let adjusted = (&r - &pe).to_extended();
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

    /// [mask(VEC_K1)] B + [mask(VEC_K2)] psi(B), 64-byte encoding.
    const VEC_SIMUL: [u8; 64] = [
        0x93, 0x9a, 0x70, 0x1d, 0x86, 0xc7, 0x34, 0xd5, 0x1e, 0xd9, 0xe9, 0x90, 0xc2, 0x66,
        0x94, 0x1a, 0x91, 0x2d, 0x52, 0x42, 0xc4, 0x67, 0x42, 0x88, 0xd9, 0x2b, 0xdb, 0xd5,
        0xd6, 0xd9, 0x73, 0x33, 0xf2, 0x95, 0x72, 0x38, 0x65, 0xe5, 0xc9, 0x48, 0x9c, 0xae,
        0x54, 0xfa, 0xfc, 0x4b, 0x56, 0x4b, 0x92, 0x1b, 0x4f, 0xff, 0x27, 0x62, 0x6f, 0xc3,
        0x0a, 0xb2, 0xd0, 0xd7, 0xd0, 0x16, 0x34, 0x5e,
    ];

    fn add_affine(a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        (&a.to_extended() + &b.to_extended()).to_extended().to_affine()
    }

    #[test]
    fn gen_table_4_entries() {
        let bases = [
            BASEPOINT.to_extended(),
            PSI_BASEPOINT.to_extended(),
            BASEPOINT.to_extended().double().to_extended(),
            PSI_BASEPOINT.to_extended().double().to_extended(),
        ];
        let table = gen_table_4(&bases);
        assert_eq!(table.0[0], ExtendedPoint::identity());
        // spot-check a few composite entries against direct sums
        let t3 = (&bases[0] + &bases[1]).to_extended();
        assert_eq!(table.0[3], t3);
        let t13 = (&(&bases[0] + &bases[2]).to_extended() + &bases[3]).to_extended();
        assert_eq!(table.0[13], t13);
        let mut t15 = bases[0];
        for base in &bases[1..] {
            t15 = (&t15 + base).to_extended();
        }
        assert_eq!(table.0[15], t15);
    }

    #[test]
    fn simul_test_vector() {
        let k1 = Scalar::from_bytes(&VEC_K1).mask();
        let k2 = Scalar::from_bytes(&VEC_K2).mask();
        let r = simul(&k1, &BASEPOINT, &k2, &PSI_BASEPOINT);
        assert_eq!(r.to_bytes(), VEC_SIMUL);
    }

    #[test]
    fn simul_matches_separate_multiplications() {
        let mut rng = rand::thread_rng();
        let other = mul_reference(&[7, 0, 0, 0], &BASEPOINT);
        for _ in 0..10 {
            let k1 = Scalar::random_masked(&mut rng);
            let k2 = Scalar::random_masked(&mut rng);
            let expected = add_affine(
                &mul_reference(&k1.to_limbs(), &BASEPOINT),
                &mul_reference(&k2.to_limbs(), &other),
            );
            assert_eq!(simul(&k1, &BASEPOINT, &k2, &other), expected);
        }
    }

    #[test]
    fn simul_edge_scalars() {
        for (b1, b2) in [([0u8; 32], [0xFF; 32]), ([0xFF; 32], [0u8; 32])] {
            let k1 = Scalar::from_bytes(&b1).mask();
            let k2 = Scalar::from_bytes(&b2).mask();
            let expected = add_affine(
                &mul_reference(&k1.to_limbs(), &BASEPOINT),
                &mul_reference(&k2.to_limbs(), &PSI_BASEPOINT),
            );
            assert_eq!(simul(&k1, &BASEPOINT, &k2, &PSI_BASEPOINT), expected);
        }
    }
}
