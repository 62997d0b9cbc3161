// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Scalars and arithmetic modulo the subgroup order \\(q\\).
//!
//! The public [`Scalar`] type is an opaque 32-byte little-endian
//! integer.  Scalars fed to the multiplication entry points must first
//! be masked with [`Scalar::mask`], which fixes the shape the engines
//! rely on: the low two bits are cleared and bit two is set (so the
//! scalar is four times an odd integer, clearing the cofactor), and the
//! top six bits are cleared (so the scalar is below \\(2^{250} < q\\)).
//!
//! Arithmetic modulo \\(q\\) is implemented on [`Scalar52`], five 52-bit
//! limbs with Montgomery multiplication at modulus \\(R = 2^{260}\\).
//! 52-bit limbs leave enough headroom to reduce a full 512-bit product,
//! which lets [`Scalar::mul_add`] accept raw (unreduced) 256-bit inputs.

use core::fmt::Debug;
use core::ops::Sub;

use subtle::Choice;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::constants;

/// An integer intended for use as a scalar multiple of a curve point,
/// in little-endian byte order.
#[derive(Copy, Clone, Default)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Scalar: {:?}", &self.bytes)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for Scalar {}

impl Scalar {
    /// The scalar zero.
    pub const ZERO: Scalar = Scalar { bytes: [0u8; 32] };

    /// Construct a scalar from its 32-byte little-endian encoding.
    /// Total: no reduction is performed here.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar {
        Scalar { bytes: *bytes }
    }

    /// The 32-byte little-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the scalar as a byte array.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Mask this scalar into the form the multiplication engines expect.
    ///
    /// Clears bits 0 and 1 and sets bit 2 (the scalar becomes
    /// \\(4m\\) with \\(m\\) odd, so the final cofactor doublings land
    /// the result on \\([k]P\\)), and clears the top six bits (the
    /// scalar is below \\(2^{250} < q\\)).  The precomputed generator
    /// tables are only guaranteed for scalars of this shape.
    pub fn mask(&self) -> Scalar {
        let mut bytes = self.bytes;
        bytes[0] = (bytes[0] & !3) | 4;
        bytes[31] &= 0x03;
        Scalar { bytes }
    }

    /// The scalar as four little-endian 64-bit limbs.
    pub(crate) fn to_limbs(&self) -> [u64; 4] {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(&self.bytes[8 * i..8 * i + 8]);
            *limb = u64::from_le_bytes(word);
        }
        limbs
    }

    /// Compute \\(a b + c \bmod q\\) on raw 256-bit inputs.
    ///
    /// This is the mod-\\(q\\) primitive a signature scheme layers on
    /// top of the group operations.
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let ab = Scalar52::mul(
            &Scalar52::from_bytes(&a.bytes),
            &Scalar52::from_bytes(&b.bytes),
        );
        let c_red = Scalar52::from_bytes(&c.bytes).reduce();
        Scalar {
            bytes: Scalar52::add(&ab, &c_red).as_bytes(),
        }
    }

    /// The canonical representative of this scalar modulo \\(q\\).
    pub fn reduce(&self) -> Scalar {
        Scalar {
            bytes: Scalar52::from_bytes(&self.bytes).reduce().as_bytes(),
        }
    }

    /// A uniformly random masked scalar; test helper.
    #[cfg(test)]
    pub(crate) fn random_masked<R: rand::Rng>(rng: &mut R) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes[..]);
        Scalar { bytes }.mask()
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    /// Subtraction modulo \\(q\\); both operands are reduced first.
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        let a = Scalar52::from_bytes(&self.bytes).reduce();
        let b = Scalar52::from_bytes(&rhs.bytes).reduce();
        Scalar {
            bytes: Scalar52::sub(&a, &b).as_bytes(),
        }
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

// ------------------------------------------------------------------------
// Limb arithmetic mod q
// ------------------------------------------------------------------------

/// u64 * u64 = u128 multiply helper
#[inline(always)]
const fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// An element of \\(\mathbb Z / q \mathbb Z\\) as five 52-bit limbs.
#[derive(Copy, Clone)]
pub(crate) struct Scalar52(pub(crate) [u64; 5]);

impl Debug for Scalar52 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Scalar52: {:?}", &self.0[..])
    }
}

impl Scalar52 {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);

    /// Unpack a 32 byte / 256 bit scalar into 5 52-bit limbs.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let mut words = [0u64; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            *word = u64::from_le_bytes(buf);
        }

        let mask = (1u64 << 52) - 1;
        Scalar52([
            words[0] & mask,
            ((words[0] >> 52) | (words[1] << 12)) & mask,
            ((words[1] >> 40) | (words[2] << 24)) & mask,
            ((words[2] >> 28) | (words[3] << 36)) & mask,
            words[3] >> 16,
        ])
    }

    /// Pack the limbs of this `Scalar52` into 32 bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        let limbs = &self.0;
        let words = [
            limbs[0] | (limbs[1] << 52),
            (limbs[1] >> 12) | (limbs[2] << 40),
            (limbs[2] >> 24) | (limbs[3] << 28),
            (limbs[3] >> 36) | (limbs[4] << 16),
        ];
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[8 * i..8 * i + 8].copy_from_slice(&words[i].to_le_bytes());
        }
        bytes
    }

    /// Compute `a + b` (mod q); both inputs must already be below q.
    pub fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = Scalar52::ZERO;
        let mask = (1u64 << 52) - 1;

        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a.0[i] + b.0[i] + (carry >> 52);
            sum.0[i] = carry & mask;
        }

        // subtract q if the sum is >= q
        Scalar52::sub(&sum, &constants::L)
    }

    /// Compute `a - b` (mod q).
    pub fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut difference = Scalar52::ZERO;
        let mask = (1u64 << 52) - 1;

        let mut borrow: u64 = 0;
        for i in 0..5 {
            borrow = a.0[i].wrapping_sub(b.0[i] + (borrow >> 63));
            difference.0[i] = borrow & mask;
        }

        // conditionally add q if the difference is negative
        let underflow_mask = ((borrow >> 63) ^ 1).wrapping_sub(1);
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = (carry >> 52) + difference.0[i] + (constants::L.0[i] & underflow_mask);
            difference.0[i] = carry & mask;
        }

        difference
    }

    /// Compute `a * b` as the full 9-limb product.
    #[inline(always)]
    #[rustfmt::skip] // keep alignment of z[*] calculations
    fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let a = a.0;
        let b = b.0;
        let mut z = [0u128; 9];

        z[0] = m(a[0], b[0]);
        z[1] = m(a[0], b[1]) + m(a[1], b[0]);
        z[2] = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]);
        z[3] = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]);
        z[4] = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);
        z[5] =                 m(a[1], b[4]) + m(a[2], b[3]) + m(a[3], b[2]) + m(a[4], b[1]);
        z[6] =                                 m(a[2], b[4]) + m(a[3], b[3]) + m(a[4], b[2]);
        z[7] =                                                 m(a[3], b[4]) + m(a[4], b[3]);
        z[8] =                                                                 m(a[4], b[4]);

        z
    }

    /// Compute `limbs/R` (mod q), where R is the Montgomery modulus 2^260.
    #[inline(always)]
    #[rustfmt::skip] // keep alignment of n* and r* calculations
    fn montgomery_reduce(limbs: &[u128; 9]) -> Scalar52 {
        #[inline(always)]
        fn part1(sum: u128) -> (u128, u64) {
            let p = (sum as u64).wrapping_mul(constants::LFACTOR) & ((1u64 << 52) - 1);
            ((sum + m(p, constants::L.0[0])) >> 52, p)
        }

        #[inline(always)]
        fn part2(sum: u128) -> (u128, u64) {
            let w = (sum as u64) & ((1u64 << 52) - 1);
            (sum >> 52, w)
        }

        let l = &constants::L.0;

        // the first half computes the Montgomery adjustment factor n,
        // and begins adding n*q to make the limbs divisible by R
        let (carry, n0) = part1(        limbs[0]);
        let (carry, n1) = part1(carry + limbs[1] + m(n0, l[1]));
        let (carry, n2) = part1(carry + limbs[2] + m(n0, l[2]) + m(n1, l[1]));
        let (carry, n3) = part1(carry + limbs[3] + m(n0, l[3]) + m(n1, l[2]) + m(n2, l[1]));
        let (carry, n4) = part1(carry + limbs[4] + m(n0, l[4]) + m(n1, l[3]) + m(n2, l[2]) + m(n3, l[1]));

        // limbs is divisible by R now, so we can divide by R by simply
        // storing the upper half as the result
        let (carry, r0) = part2(carry + limbs[5] + m(n1, l[4]) + m(n2, l[3]) + m(n3, l[2]) + m(n4, l[1]));
        let (carry, r1) = part2(carry + limbs[6] + m(n2, l[4]) + m(n3, l[3]) + m(n4, l[2]));
        let (carry, r2) = part2(carry + limbs[7] + m(n3, l[4]) + m(n4, l[3]));
        let (carry, r3) = part2(carry + limbs[8] + m(n4, l[4]));
        let         r4 = carry as u64;

        // result may be >= q, so attempt to subtract q
        Scalar52::sub(&Scalar52([r0, r1, r2, r3, r4]), &constants::L)
    }

    /// Compute `a * b` (mod q); the inputs need not be reduced.
    pub fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let ab = Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b));
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(&ab, &constants::RR))
    }

    /// Compute `(a * b) / R` (mod q), where R is the Montgomery
    /// modulus 2^260.
    pub fn montgomery_mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b))
    }

    /// Reduce an unreduced (up to 256-bit) value mod q:
    /// `(a * R) / R = a`.
    pub fn reduce(&self) -> Scalar52 {
        Scalar52::montgomery_mul(self, &constants::R)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn scalar(limbs: [u64; 4]) -> Scalar {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[8 * i..8 * i + 8].copy_from_slice(&limbs[i].to_le_bytes());
        }
        Scalar::from_bytes(&bytes)
    }

    #[test]
    fn mul_add_test_vector() {
        let x = scalar([
            0xFB8A86C9E6022515,
            0xD97FE1124FD8CC92,
            0x782777E7572BA130,
            0x0A64E21CF80B9B64,
        ]);
        let y = scalar([
            0xEC7442A2DDA82CE0,
            0x85F16DA062E80241,
            0x21309454C67D3636,
            0xE9296E5F048E01CC,
        ]);
        let z = scalar([
            0x140A07B4AD54B996,
            0x5B73600FD51C45CD,
            0xC83C13EF9A0A3AC3,
            0x003445C52BC607CF,
        ]);
        let r = Scalar::mul_add(&x, &y, &z);
        assert_eq!(
            r.to_limbs(),
            [
                0x9A5FC58C4E29F36E,
                0x0A03DAB8CF16D699,
                0x6F161E3B5D31BBCE,
                0x063D680741CBB9A1,
            ]
        );
    }

    #[test]
    fn mul_add_test_vector_saturated() {
        // x = 2^256 - 1, y = z = q - 1: exercises unreduced inputs
        let x = Scalar::from_bytes(&[0xFF; 32]);
        let mut qm1 = constants::Q;
        qm1[0] -= 1;
        let y = scalar(qm1);
        let r = Scalar::mul_add(&x, &y, &y);
        assert_eq!(
            r.to_limbs(),
            [
                0xB851F71EBA7E1BF5,
                0x08875560CEA50510,
                0xFFFFFFFFFFFFFFFA,
                0x0FFFFFFFFFFFFFFF,
            ]
        );
    }

    #[test]
    fn mask_shape() {
        let k = Scalar::from_bytes(&[0xFF; 32]).mask();
        let limbs = k.to_limbs();
        // low bits: ...100
        assert_eq!(limbs[0] & 7, 4);
        // below 2^250
        assert_eq!(limbs[3] >> 58, 0);
        // masking is idempotent
        assert_eq!(k.mask(), k);
    }

    #[test]
    fn reduce_of_q_is_zero() {
        let q = scalar(constants::Q);
        assert_eq!(q.reduce(), Scalar::ZERO);
        let one = scalar([1, 0, 0, 0]);
        assert_eq!(one.reduce(), one);
    }

    #[test]
    fn sub_wraps_mod_q() {
        let one = scalar([1, 0, 0, 0]);
        let minus_one = &Scalar::ZERO - &one;
        let mut qm1 = constants::Q;
        qm1[0] -= 1;
        assert_eq!(minus_one.to_limbs(), qm1);
        assert_eq!(&minus_one - &minus_one, Scalar::ZERO);
    }

    #[test]
    fn limb_packing_roundtrip() {
        let x = scalar([
            0x123456789ABCDEF0,
            0x0FEDCBA987654321,
            0xDEADBEEFCAFEBABE,
            0x0123455432100123,
        ]);
        let unpacked = Scalar52::from_bytes(&x.bytes);
        assert_eq!(unpacked.as_bytes(), x.bytes);
    }
}
