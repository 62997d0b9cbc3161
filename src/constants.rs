// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Curve constants and precomputed group elements.
//!
//! The curve is \\(-u x^2 + y^2 = 1 + d u x^2 y^2\\) over
//! \\(\mathbb F\_{p^2}\\) with \\(p = 2^{127} - 1\\), \\(u = 2 + i\\) and
//! \\(d = 109\\).  Its group order is \\(4q\\) with
//! \\(q = A^2 + B^2\\) prime, \\(A = 2^{126} - 1 = (p-1)/2\\) and
//! \\(B\\) half the trace of the underlying subfield curve; the identity
//! \\((p-1)^2 + (2B)^2 = 4q\\) ties the three together.  The basepoint is
//! \\(4 P\_0\\) for the curve point \\(P\_0\\) with smallest \\(x\\) of
//! the form \\((c, 0)\\) and lexicographically least \\(y\\).

use crate::edwards::AffinePoint;
use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::scalar::Scalar52;

/// The small curve constant `d`; the full Edwards coefficient is `d * u`.
pub(crate) const EC_D: u32 = 109;

/// The twist constant of the endomorphism:
/// \\(\psi(x, y) = (W\_x \bar x, \bar y)\\).
pub(crate) const ENDO_WX: Fp2 = Fp2 {
    c0: Fp(0x59F30C694ED33218695AB4D883DE0B89),
    c1: Fp(0x33E618D29DA66430D2B569B107BC1713),
};

/// The basepoint, a generator of the prime-order-\\(q\\) subgroup.
pub static BASEPOINT: AffinePoint = AffinePoint {
    x: Fp2 {
        c0: Fp(0x12C8124FEB812EDA257DF51CB10D46B9),
        c1: Fp(0x35AF79D0729C323734E5D78F601B4825),
    },
    y: Fp2 {
        c0: Fp(0x51F898119F270C3C1407A368945FF792),
        c1: Fp(0x0B8A275703B201B95D39E8D40D624E20),
    },
};

/// The image of the basepoint under the endomorphism,
/// \\(\psi(B) = \lambda B\\).
pub static PSI_BASEPOINT: AffinePoint = AffinePoint {
    x: Fp2 {
        c0: Fp(0x1D1565287D3C4B254A7F7FE8B28528A7),
        c1: Fp(0x46C524C92F7FD3AF2C979DC2E80E0F2F),
    },
    y: Fp2 {
        c0: Fp(0x51F898119F270C3C1407A368945FF792),
        c1: Fp(0x7475D8A8FC4DFE46A2C6172BF29DB1DF),
    },
};

/// The subgroup order
/// \\(q =\\) `0x0FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA6261414C0DC87D3CE9B68E3B09E01A5`,
/// as four little-endian 64-bit limbs.
pub static Q: [u64; 4] = [
    0xCE9B68E3B09E01A5,
    0xA6261414C0DC87D3,
    0xFFFFFFFFFFFFFFFF,
    0x0FFFFFFFFFFFFFFF,
];

// ------------------------------------------------------------------------
// Scalar decomposition constants.  A, B, q and the division helpers below
// are a matched set; none may be changed independently.
// ------------------------------------------------------------------------

/// \\(A = 2^{126} - 1\\).
pub(crate) const DECOMP_A: u128 = (1u128 << 126) - 1;

/// \\(B\\), with \\(q = A^2 + B^2\\).
pub(crate) const DECOMP_B: u128 = 0x62D2CF00A287A526;

/// \\(q\_0 = 2^{252} - q\\), used to fold the split quotient estimate.
pub(crate) const Q0: u128 = 0x59D9EBEB3F23782C3164971C4F61FE5B;

/// \\((q+1)/2\\), the rounding offset for division by \\(q\\), as four
/// little-endian 64-bit limbs.
pub(crate) const QROUND: [u64; 4] = [
    0xE74DB471D84F00D3,
    0xD3130A0A606E43E9,
    0xFFFFFFFFFFFFFFFF,
    0x07FFFFFFFFFFFFFF,
];

// ------------------------------------------------------------------------
// Montgomery arithmetic constants for the scalar field (mod q), with
// five 52-bit limbs and Montgomery modulus R = 2^260.
// ------------------------------------------------------------------------

/// `L` is the subgroup order \\(q\\) in 52-bit limbs.
pub(crate) const L: Scalar52 = Scalar52([
    0x000B68E3B09E01A5,
    0x00014C0DC87D3CE9,
    0x000FFFFFFFA62614,
    0x000FFFFFFFFFFFFF,
    0x00000FFFFFFFFFFF,
]);

/// `L` * `LFACTOR` = -1 (mod 2^52)
pub(crate) const LFACTOR: u64 = 0x000D7F43FF4701D3;

/// `R` = R % L where R = 2^260
pub(crate) const R: Scalar52 = Scalar52([
    0x00071C4F61FE5B00,
    0x0003F23782C31649,
    0x0000000059D9EBEB,
    0x0000000000000000,
    0x0000000000000000,
]);

/// `RR` = (R^2) % L where R = 2^260
pub(crate) const RR: Scalar52 = Scalar52([
    0x0009693936613641,
    0x0001DC5F19FD304A,
    0x00088566D8C32E59,
    0x0008E95EB7B0E1A9,
    0x00000F8B602171C8,
]);

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::ValidityCheck;

    #[test]
    fn basepoints_are_on_the_curve() {
        assert!(BASEPOINT.is_valid());
        assert!(PSI_BASEPOINT.is_valid());
    }

    #[test]
    fn q_is_a_squared_plus_b_squared() {
        // q = A^2 + B^2, computed in 256-bit pieces
        let a = DECOMP_A;
        let b = DECOMP_B;
        let a0 = a as u64 as u128;
        let a1 = (a >> 64) as u64 as u128;
        let lo = a0 * a0;
        let mid = 2 * a0 * a1;
        let hi = a1 * a1;
        let b2 = b * b;
        // a^2 + b^2 as (low128, high128)
        let (low, c1) = lo.overflowing_add(mid << 64);
        let (low, c2) = low.overflowing_add(b2);
        let high = hi + (mid >> 64) + (c1 as u128) + (c2 as u128);
        assert_eq!(low as u64, Q[0]);
        assert_eq!((low >> 64) as u64, Q[1]);
        assert_eq!(high as u64, Q[2]);
        assert_eq!((high >> 64) as u64, Q[3]);
    }

    #[test]
    fn q0_and_qround_match_q() {
        // q0 = 2^252 - q
        let mut borrow = 0i128;
        let pow = [0u64, 0, 0, 0x1000000000000000];
        let mut q0 = [0u64; 4];
        for i in 0..4 {
            let d = (pow[i] as i128) - (Q[i] as i128) - borrow;
            q0[i] = d as u64;
            borrow = (d < 0) as i128;
        }
        assert_eq!(borrow, 0);
        assert_eq!(q0[0] as u128 | ((q0[1] as u128) << 64), Q0);
        assert_eq!(q0[2], 0);
        assert_eq!(q0[3], 0);

        // qround = (q + 1) / 2
        let mut qp1 = Q;
        qp1[0] = qp1[0].wrapping_add(1); // q is odd, no carry chain needed
        for i in 0..4 {
            let lo = qp1[i] >> 1;
            let hi = if i < 3 { qp1[i + 1] << 63 } else { 0 };
            assert_eq!(QROUND[i], lo | hi);
        }
    }

    #[test]
    fn montgomery_constants_match_q() {
        // L is q repacked into 52-bit limbs
        let mask = (1u64 << 52) - 1;
        assert_eq!(L.0[0], Q[0] & mask);
        assert_eq!(L.0[1], ((Q[0] >> 52) | (Q[1] << 12)) & mask);
        assert_eq!(L.0[2], ((Q[1] >> 40) | (Q[2] << 24)) & mask);
        assert_eq!(L.0[3], ((Q[2] >> 28) | (Q[3] << 36)) & mask);
        assert_eq!(L.0[4], Q[3] >> 16);

        // L * LFACTOR = -1 mod 2^52
        assert_eq!(
            L.0[0].wrapping_mul(LFACTOR) & mask,
            mask
        );

        // R * R = RR * 1 in the Montgomery domain
        let rr = Scalar52::montgomery_mul(&R, &R);
        let one = Scalar52([1, 0, 0, 0, 0]);
        let rr2 = Scalar52::montgomery_mul(&RR, &one);
        for i in 0..5 {
            assert_eq!(rr.0[i], rr2.0[i]);
        }
    }
}
