// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! The GLS endomorphism \\(\psi\\) and scalar decomposition.
//!
//! The curve is the quadratic twist of a subfield curve, so the
//! \\(p\\)-power Frobenius induces an efficient endomorphism
//! \\(\psi(x, y) = (W\_x \bar x, \bar y)\\) acting on the prime-order
//! subgroup as multiplication by \\(\lambda = A B^{-1} \bmod q\\), a
//! square root of \\(-1\\).
//!
//! [`decompose`] splits a masked scalar \\(k\\) into \\((k\_1, k\_2)\\)
//! with \\(k \equiv k\_1 + k\_2 \lambda \pmod q\\) and both halves below
//! \\(2^{126}\\) in absolute value, by Babai rounding against the lattice
//! basis \\((A, -B), (B, A)\\) of determinant \\(A^2 + B^2 = q\\):
//!
//! ```text
//!     c1 = round(k A / q),   c2 = round(k B / q),
//!     k1 = k - c1 A - c2 B,  k2 = c1 B - c2 A.
//! ```
//!
//! The rounded divisions are exact and branch-free: the dividend plus
//! \\((q+1)/2\\) is split at \\(2^{252}\\), the high part is folded back
//! in with weight \\(q\_0 = 2^{252} - q\\), and at most two masked
//! subtractions of \\(q\\) finish the quotient.  Everything downstream
//! of the quotients is plain wrapping 128-bit arithmetic, since the
//! results are guaranteed short.

use subtle::Choice;
use subtle::ConditionallySelectable;

use crate::constants;
use crate::edwards::AffinePoint;
use crate::scalar::Scalar;

/// Compute `a + b + carry`, returning the result and the new carry.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a - (b + borrow)`, returning the result and the new borrow.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute `a + (b * c) + carry`, returning the result and the new carry.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Apply the endomorphism to an affine point.
pub(crate) fn psi(point: &AffinePoint) -> AffinePoint {
    AffinePoint {
        x: &constants::ENDO_WX * &point.x.conjugate(),
        y: point.y.conjugate(),
    }
}

/// `round((k * e + (q+1)/2) / q)` for a 256-bit `k` and 128-bit `e`,
/// exact and constant-time.  Requires `k < 2^250`, which masking
/// guarantees; the quotient then fits comfortably in 128 bits.
fn div_q_round(k: &[u64; 4], e: u128) -> u128 {
    let e0 = e as u64;
    let e1 = (e >> 64) as u64;

    // n = k * e
    let mut n = [0u64; 6];
    let mut carry = 0u64;
    for i in 0..4 {
        let (lo, c) = mac(n[i], k[i], e0, carry);
        n[i] = lo;
        carry = c;
    }
    n[4] = carry;
    carry = 0;
    for i in 0..4 {
        let (lo, c) = mac(n[i + 1], k[i], e1, carry);
        n[i + 1] = lo;
        carry = c;
    }
    n[5] = carry;

    // n += (q+1)/2
    let mut carry = 0u64;
    for i in 0..4 {
        let (lo, c) = adc(n[i], constants::QROUND[i], carry);
        n[i] = lo;
        carry = c;
    }
    for i in 4..6 {
        let (lo, c) = adc(n[i], 0, carry);
        n[i] = lo;
        carry = c;
    }

    // split n = z0 + z1 * 2^252
    let z1 = ((n[3] >> 60) as u128) | ((n[4] as u128) << 4) | ((n[5] as u128) << 68);
    let z0 = [n[0], n[1], n[2], n[3] & 0x0FFF_FFFF_FFFF_FFFF];

    // t = z0 + z1 * q0;  then floor(n / q) = z1 + floor(t / q)
    let z1_0 = z1 as u64;
    let z1_1 = (z1 >> 64) as u64;
    let q0_0 = constants::Q0 as u64;
    let q0_1 = (constants::Q0 >> 64) as u64;

    let mut prod = [0u64; 4];
    let (lo, c) = mac(0, z1_0, q0_0, 0);
    prod[0] = lo;
    let (lo, c) = mac(0, z1_0, q0_1, c);
    prod[1] = lo;
    prod[2] = c;
    let (lo, c) = mac(prod[1], z1_1, q0_0, 0);
    prod[1] = lo;
    let (lo, c) = mac(prod[2], z1_1, q0_1, c);
    prod[2] = lo;
    prod[3] = c;

    let mut t = [0u64; 5];
    let mut carry = 0u64;
    for i in 0..4 {
        let (lo, c) = adc(z0[i], prod[i], carry);
        t[i] = lo;
        carry = c;
    }
    t[4] = carry;

    // up to two corrective subtractions of q
    let mut quotient = z1;
    for _ in 0..2 {
        let mut diff = [0u64; 5];
        let mut borrow = 0u64;
        for i in 0..4 {
            let (lo, b) = sbb(t[i], constants::Q[i], borrow);
            diff[i] = lo;
            borrow = b;
        }
        let (lo, borrow) = sbb(t[4], 0, borrow);
        diff[4] = lo;

        let ge = Choice::from(((borrow == 0) as u8) & 1);
        for i in 0..5 {
            t[i] = u64::conditional_select(&t[i], &diff[i], ge);
        }
        quotient += (ge.unwrap_u8() as u128) & 1;
    }

    quotient
}

/// Extract `(sign, magnitude)` from a two's-complement 128-bit value.
#[inline]
fn sign_abs(v: u128) -> (Choice, u128) {
    let neg = Choice::from((v >> 127) as u8);
    let mask = (neg.unwrap_u8() as u128).wrapping_neg();
    (neg, (v ^ mask).wrapping_sub(mask))
}

/// Decompose a masked scalar into its two signed half-length parts.
///
/// Returns `(k1_negative, |k1|, k2_negative, |k2|)` with
/// \\(k \equiv \pm|k\_1| \pm |k\_2| \lambda \pmod q\\) and both
/// magnitudes below \\(2^{126}\\).
pub(crate) fn decompose(k: &Scalar) -> (Choice, u128, Choice, u128) {
    let limbs = k.to_limbs();

    let c1 = div_q_round(&limbs, constants::DECOMP_A);
    let c2 = div_q_round(&limbs, constants::DECOMP_B);

    let k_lo = (limbs[0] as u128) | ((limbs[1] as u128) << 64);
    let k1 = k_lo
        .wrapping_sub(c1.wrapping_mul(constants::DECOMP_A))
        .wrapping_sub(c2.wrapping_mul(constants::DECOMP_B));
    let k2 = c1
        .wrapping_mul(constants::DECOMP_B)
        .wrapping_sub(c2.wrapping_mul(constants::DECOMP_A));

    let (s1, a1) = sign_abs(k1);
    let (s2, a2) = sign_abs(k2);
    (s1, a1, s2, a2)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{BASEPOINT, PSI_BASEPOINT};
    use crate::traits::ValidityCheck;

    /// The eigenvalue lambda = A / B mod q, little-endian bytes.
    const LAMBDA: [u8; 32] = [
        0x8f, 0xf5, 0x8c, 0xbd, 0x17, 0x5d, 0xf9, 0xcb, 0xcc, 0xf5, 0x94, 0xde, 0x9c, 0xc4,
        0x27, 0xa8, 0xe2, 0x2b, 0xb4, 0xcb, 0x0c, 0x48, 0xa9, 0xb0, 0x1a, 0x0e, 0x82, 0x06,
        0x80, 0x10, 0xc2, 0x0e,
    ];

    fn scalar_from_u128(v: u128) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&v.to_le_bytes());
        Scalar::from_bytes(&bytes)
    }

    /// Assemble +-|v| as a scalar mod q.
    fn scalar_from_signed(neg: Choice, mag: u128) -> Scalar {
        let s = scalar_from_u128(mag);
        if neg.into() {
            &Scalar::ZERO - &s
        } else {
            s
        }
    }

    #[test]
    fn psi_of_basepoint_matches_constant() {
        let image = psi(&BASEPOINT);
        assert_eq!(image, PSI_BASEPOINT);
        assert!(image.is_valid());
    }

    #[test]
    fn psi_maps_curve_to_curve() {
        let p = crate::edwards::test::mul_reference(&[123456789, 0, 0, 0], &BASEPOINT);
        let image = psi(&p);
        assert!(image.is_valid());
    }

    #[test]
    fn psi_squared_is_negation() {
        // lambda^2 = -1 mod q, so psi(psi(P)) = -P on the subgroup.
        let p = crate::edwards::test::mul_reference(&[987654321, 0, 0, 0], &BASEPOINT);
        let twice = psi(&psi(&p));
        assert_eq!(twice, -&p);
    }

    #[test]
    fn decompose_reconstructs_scalar() {
        let lambda = Scalar::from_bytes(&LAMBDA);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let k = Scalar::random_masked(&mut rng);
            let (s1, a1, s2, a2) = decompose(&k);
            assert!(a1 < (1u128 << 126));
            assert!(a2 < (1u128 << 126));
            let k1 = scalar_from_signed(s1, a1);
            let k2 = scalar_from_signed(s2, a2);
            // k1 + k2 * lambda == k (mod q)
            let recombined = Scalar::mul_add(&k2, &lambda, &k1);
            assert_eq!(recombined.reduce(), k.reduce());
        }
    }

    #[test]
    fn decompose_edge_scalars() {
        for k in [
            Scalar::from_bytes(&[4u8; 32]).mask(),
            scalar_from_u128(4).mask(),
            scalar_from_u128((1u128 << 126) - 1).mask(),
            Scalar::from_bytes(&[0xFF; 32]).mask(),
        ] {
            let lambda = Scalar::from_bytes(&LAMBDA);
            let (s1, a1, s2, a2) = decompose(&k);
            assert!(a1 < (1u128 << 126));
            assert!(a2 < (1u128 << 126));
            let recombined = Scalar::mul_add(
                &scalar_from_signed(s2, a2),
                &lambda,
                &scalar_from_signed(s1, a1),
            );
            assert_eq!(recombined.reduce(), k.reduce());
        }
    }
}
