// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Arithmetic modulo the Mersenne prime \\(p = 2^{127} - 1\\), using a
//! single `u128` (two 64-bit limbs on every 64-bit target) with 128-bit
//! products split into 64-bit halves.
//!
//! Elements are kept in a redundant representation: any value below
//! \\(2^{127}\\) is accepted, so \\(p\\) itself is a second encoding of
//! zero.  Because \\(2^{127} \equiv 1 \pmod p\\), a bit carried out of
//! position 126 folds back in with weight one, which makes reduction a
//! shift and an add.  [`Fp::complete_reduce`] collapses the redundancy;
//! it is called on every serialization and before every equality test.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

/// Mask of the low 127 bits.
const MASK127: u128 = (1u128 << 127) - 1;

/// An element of \\(\mathbb F\_{2^{127}-1}\\).
///
/// Invariant: the stored value is below \\(2^{127}\\); the top bit is
/// always clear.  The value is not necessarily canonical.
#[derive(Copy, Clone, Default)]
pub(crate) struct Fp(pub(crate) u128);

impl Debug for Fp {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Fp(0x{:032x})", self.0)
    }
}

impl Zeroize for Fp {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Fold a value below \\(2^{128} - 1\\) into the low 127 bits.
#[inline(always)]
fn fold(t: u128) -> u128 {
    (t & MASK127) + (t >> 127)
}

impl Fp {
    /// The zero element.
    pub const ZERO: Fp = Fp(0);

    /// The one element.
    pub const ONE: Fp = Fp(1);

    /// The modulus \\(p = 2^{127} - 1\\).
    pub const P: u128 = MASK127;

    /// Construct an element from a small constant.
    #[inline]
    pub fn from_small(k: u32) -> Fp {
        Fp(k as u128)
    }

    /// Collapse to the canonical representative below \\(p\\).
    ///
    /// The only non-canonical value the invariant admits is \\(p\\)
    /// itself, which maps to zero.  Idempotent.
    #[inline]
    pub fn complete_reduce(&self) -> Fp {
        // x >= p  iff  x + 1 carries into bit 127.
        let q = (self.0 + 1) >> 127;
        Fp((self.0 + q) & MASK127)
    }

    /// Test whether this element represents zero (either encoding).
    pub fn is_zero(&self) -> Choice {
        self.complete_reduce().ct_eq(&Fp::ZERO)
    }

    /// Test whether the stored value is strictly below \\(p\\).
    ///
    /// Unlike [`Fp::is_zero`] this rejects the redundant encoding of
    /// zero, so it is a statement about bytes, not about field values.
    #[allow(dead_code)]
    pub fn in_field(&self) -> Choice {
        Choice::from((self.0 < Fp::P) as u8)
    }

    /// Reduce a 256-bit value given as `(low, high)` with
    /// `high < 2^126`.
    #[inline(always)]
    fn reduce_wide(low: u128, high: u128) -> Fp {
        // 2^128 = 2 mod p, so the high part re-enters with weight two.
        let t = (low & MASK127) + (low >> 127) + (high << 1);
        Fp(fold(t))
    }

    /// Multiply by a small constant.
    #[inline]
    pub fn mul_small(&self, k: u32) -> Fp {
        let lo = (self.0 as u64 as u128) * (k as u128);
        let hi = ((self.0 >> 64) as u64 as u128) * (k as u128);
        let (low, carry) = lo.overflowing_add(hi << 64);
        Fp::reduce_wide(low, (hi >> 64) + carry as u128)
    }

    /// Add a small constant.
    #[allow(dead_code)]
    #[inline]
    pub fn add_small(&self, k: u32) -> Fp {
        Fp(fold(self.0 + k as u128))
    }

    /// Compute the square of this element.
    #[inline]
    pub fn square(&self) -> Fp {
        let a0 = self.0 as u64;
        let a1 = (self.0 >> 64) as u64;

        let lo = m(a0, a0);
        let mid = m(a0, a1) << 1;
        let hi = m(a1, a1);

        let (low, carry) = lo.overflowing_add(mid << 64);
        let high = hi + (mid >> 64) + (carry as u128);
        Fp::reduce_wide(low, high)
    }

    /// Compute `self^(2^k)` by successive squarings.
    fn pow2k(&self, k: u32) -> Fp {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Compute the multiplicative inverse as \\(x^{p-2}\\).
    ///
    /// The exponent is \\(2^{127} - 3 = 4 (2^{125} - 1) + 1\\), reached
    /// through a ladder of all-ones exponents.  Zero maps to zero; the
    /// instruction trace does not depend on the input.
    pub fn invert(&self) -> Fp {
        let t2 = self.square() * self; //            x^(2^2 - 1)
        let t4 = t2.pow2k(2) * &t2; //               x^(2^4 - 1)
        let t5 = t4.square() * self; //              x^(2^5 - 1)
        let t10 = t5.pow2k(5) * &t5; //              x^(2^10 - 1)
        let t20 = t10.pow2k(10) * &t10; //           x^(2^20 - 1)
        let t40 = t20.pow2k(20) * &t20; //           x^(2^40 - 1)
        let t80 = t40.pow2k(40) * &t40; //           x^(2^80 - 1)
        let t120 = t80.pow2k(40) * &t40; //          x^(2^120 - 1)
        let t125 = t120.pow2k(5) * &t5; //           x^(2^125 - 1)

        t125.pow2k(2) * self //                      x^(2^127 - 3)
    }

    /// Compute the Legendre symbol \\(x^{(p-1)/2}\\).
    ///
    /// Returns one for nonzero squares, \\(p - 1\\) for non-squares and
    /// zero for zero.
    pub fn chi(&self) -> Fp {
        // (p-1)/2 = 2^126 - 1.
        let t2 = self.square() * self;
        let t4 = t2.pow2k(2) * &t2;
        let t5 = t4.square() * self;
        let t10 = t5.pow2k(5) * &t5;
        let t20 = t10.pow2k(10) * &t10;
        let t40 = t20.pow2k(20) * &t20;
        let t80 = t40.pow2k(40) * &t40;
        let t120 = t80.pow2k(40) * &t40;
        let t125 = t120.pow2k(5) * &t5;

        t125.square() * self //                      x^(2^126 - 1)
    }

    /// Serialize to 16 bytes, little-endian.  The encoding is canonical;
    /// the top bit of the last byte is always clear.
    pub fn to_bytes(&self) -> [u8; 16] {
        self.complete_reduce().0.to_le_bytes()
    }

    /// Deserialize from 16 bytes, little-endian.  The top bit is masked
    /// off, so every 16-byte string decodes to a valid element.
    pub fn from_bytes(bytes: &[u8; 16]) -> Fp {
        Fp(u128::from_le_bytes(*bytes) & MASK127)
    }
}

impl<'b> AddAssign<&'b Fp> for Fp {
    fn add_assign(&mut self, rhs: &'b Fp) {
        self.0 = fold(self.0 + rhs.0);
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp(fold(self.0 + rhs.0))
    }
}

impl<'b> SubAssign<&'b Fp> for Fp {
    fn sub_assign(&mut self, rhs: &'b Fp) {
        let result = (self as &Fp) - rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn sub(self, rhs: &'b Fp) -> Fp {
        // On borrow the difference is off by 2^128 = 2 mod p.  The
        // folded value is then at least two, so the subtraction below
        // cannot wrap.
        let (d, borrow) = self.0.overflowing_sub(rhs.0);
        Fp(fold(d) - 2 * (borrow as u128))
    }
}

impl<'b> MulAssign<&'b Fp> for Fp {
    fn mul_assign(&mut self, rhs: &'b Fp) {
        let result = (self as &Fp) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    fn mul(self, rhs: &'b Fp) -> Fp {
        let a0 = self.0 as u64;
        let a1 = (self.0 >> 64) as u64;
        let b0 = rhs.0 as u64;
        let b1 = (rhs.0 >> 64) as u64;

        // a1, b1 < 2^63, so the cross terms cannot overflow the u128 sum.
        let lo = m(a0, b0);
        let mid = m(a0, b1) + m(a1, b0);
        let hi = m(a1, b1);

        let (low, carry) = lo.overflowing_add(mid << 64);
        let high = hi + (mid >> 64) + (carry as u128);
        Fp::reduce_wide(low, high)
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        // Reduce first so that the negation of zero is zero rather than p.
        let x = self.complete_reduce();
        Fp(Fp::P - x.0).complete_reduce()
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        -&self
    }
}

define_add_variants!(LHS = Fp, RHS = Fp, Output = Fp);
define_sub_variants!(LHS = Fp, RHS = Fp, Output = Fp);
define_mul_variants!(LHS = Fp, RHS = Fp, Output = Fp);

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Fp, b: &Fp, choice: Choice) -> Fp {
        let mask = (choice.unwrap_u8() as u128).wrapping_neg();
        Fp(a.0 ^ (mask & (a.0 ^ b.0)))
    }
}

impl ConstantTimeEq for Fp {
    /// Bitwise equality of the stored representations.
    ///
    /// Callers comparing the *values* of elements produced by arithmetic
    /// must `complete_reduce` both sides first, since zero has two
    /// encodings.
    fn ct_eq(&self, other: &Fp) -> Choice {
        let v = self.0 ^ other.0;
        // v | -v has its top bit set exactly when v is nonzero.
        Choice::from((((v | v.wrapping_neg()) >> 127) as u8) ^ 1)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Fp) -> bool {
        self.complete_reduce()
            .ct_eq(&other.complete_reduce())
            .into()
    }
}
impl Eq for Fp {}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use subtle::ConditionallyNegatable;

    /// p, the redundant encoding of zero.
    const CP: Fp = Fp(Fp::P);
    /// p - 1, the canonical encoding of minus one.
    const CN1: Fp = Fp(Fp::P - 1);
    /// 2^64, spanning both limbs.
    const C64: Fp = Fp(1u128 << 64);
    /// 2^64 + 1.
    const C65: Fp = Fp((1u128 << 64) + 1);
    /// 2^64 - 1, the low limb filled.
    const C0F: Fp = Fp((1u128 << 64) - 1);

    /// First operand of the exponentiation vector.
    const CR1: Fp = Fp(0x6541AA8FCD8C4C6509744238EF199911);
    /// Second operand (the exponent).
    const CR2: Fp = Fp(0x5281A3886F35ED6FD204049593D4A1D1);
    /// CR1^CR2 mod p.
    const CX3: Fp = Fp(0x3F42AC9208EEFF87B766E7802FB7635F);

    /// Square-and-multiply reference exponentiation.
    fn exp(x: &Fp, e: &Fp) -> Fp {
        let mut r = Fp::ONE;
        for i in (0..127).rev() {
            r = r.square();
            if (e.0 >> i) & 1 == 1 {
                r = &r * x;
            }
        }
        r
    }

    #[test]
    fn zero_has_two_encodings() {
        assert!(bool::from(Fp::ZERO.is_zero()));
        assert!(bool::from(CP.is_zero()));
        assert!(!bool::from(CN1.is_zero()));
        assert_eq!(Fp::ZERO, CP);
    }

    #[test]
    fn in_field_rejects_only_p() {
        assert!(bool::from(Fp::ZERO.in_field()));
        assert!(bool::from(CN1.in_field()));
        assert!(bool::from(C64.in_field()));
        assert!(!bool::from(CP.in_field()));
    }

    #[test]
    fn complete_reduce_is_idempotent() {
        for x in [Fp::ZERO, Fp::ONE, C64, C65, CN1, CP] {
            let r = x.complete_reduce();
            assert_eq!(r.0, r.complete_reduce().0);
            assert!(r.0 < Fp::P);
        }
        assert_eq!(CP.complete_reduce().0, 0);
    }

    #[test]
    fn add_sub_roundtrip() {
        let cases = [Fp::ZERO, Fp::ONE, C0F, C64, C65, CN1, CP, CR1, CR2];
        for a in cases {
            for b in cases {
                assert_eq!(&(&a + &b) - &b, a);
                assert_eq!(&a + &b, &b + &a);
            }
        }
        // carries across the limb boundary
        assert_eq!(&C0F + &Fp::ONE, C64);
        assert_eq!(&C64 - &C0F, Fp::ONE);
        // wraparound through p
        assert_eq!(&CN1 + &Fp::ONE, Fp::ZERO);
        assert_eq!(&Fp::ZERO - &Fp::ONE, CN1);
    }

    #[test]
    fn neg_of_zero_is_zero() {
        assert_eq!((-&Fp::ZERO).0, 0);
        assert_eq!((-&CP).0, 0);
        assert_eq!(-&Fp::ONE, CN1);
        assert_eq!(-&CN1, Fp::ONE);
    }

    #[test]
    fn mul_matches_square() {
        for x in [Fp::ZERO, Fp::ONE, C0F, C64, C65, CN1, CP, CR1, CR2] {
            assert_eq!(&x * &x, x.square());
        }
    }

    #[test]
    fn mul_small_matches_mul() {
        for x in [Fp::ZERO, Fp::ONE, C0F, C64, C65, CN1, CP, CR1] {
            for k in [0u32, 1, 2, 109, 0xffffffff] {
                assert_eq!(x.mul_small(k), &x * &Fp::from_small(k));
            }
        }
    }

    #[test]
    fn mul_small_carries_across_the_product_halves() {
        // low64(hi) << 64 overflows the low word of the 192-bit product
        let x = Fp(0x00000001_00000001_FFFFFFFF_FFFFFFFF);
        assert_eq!(x.mul_small(0xffffffff), &x * &Fp::from_small(0xffffffff));
        // the same overflow, reachable with the curve constant
        let x = Fp(0x593F69B02593F69B_02593F69B02593F7);
        assert_eq!(x.mul_small(109), &x * &Fp::from_small(109));
    }

    #[test]
    fn add_small_matches_add() {
        for x in [Fp::ZERO, C0F, CN1, CP] {
            for k in [0u32, 1, 2, 3] {
                assert_eq!(x.add_small(k), &x + &Fp::from_small(k));
            }
        }
    }

    #[test]
    fn invert_vs_mul() {
        for x in [Fp::ONE, Fp(2), C0F, C64, C65, CN1, CR1, CR2] {
            assert_eq!(&x * &x.invert(), Fp::ONE);
        }
        // zero maps to zero rather than diverging
        assert!(bool::from(Fp::ZERO.invert().is_zero()));
        assert!(bool::from(CP.invert().is_zero()));
    }

    #[test]
    fn invert_is_exp_p_minus_2() {
        // p - 2 = 2^127 - 3
        let pm2 = Fp(Fp::P - 2);
        for x in [Fp(2), C64, CR1] {
            assert_eq!(x.invert(), exp(&x, &pm2));
        }
    }

    #[test]
    fn exp_test_vector() {
        assert_eq!(exp(&CR1, &CR2), CX3);
    }

    #[test]
    fn chi_separates_squares() {
        for x in [Fp(2), C64, CR1, CR2] {
            let c = x.square().chi().complete_reduce();
            assert_eq!(c, Fp::ONE);
        }
        assert!(bool::from(Fp::ZERO.chi().is_zero()));
    }

    #[test]
    fn bytes_roundtrip() {
        for x in [Fp::ZERO, Fp::ONE, C0F, C64, C65, CN1, CR1] {
            let b = x.to_bytes();
            assert_eq!(Fp::from_bytes(&b), x);
            assert_eq!(b[15] & 0x80, 0);
        }
        // load masks the top bit: all-ones decodes to p, which is zero
        let b = [0xffu8; 16];
        assert_eq!(Fp::from_bytes(&b).0, Fp::P);
        assert!(bool::from(Fp::from_bytes(&b).is_zero()));
    }

    #[test]
    fn conditional_assign_and_negate() {
        let mut r = CR2;
        r.conditional_assign(&CR1, Choice::from(0));
        assert_eq!(r, CR2);
        r.conditional_assign(&CR1, Choice::from(1));
        assert_eq!(r, CR1);

        let mut n = CR1;
        n.conditional_negate(Choice::from(0));
        assert_eq!(n, CR1);
        n.conditional_negate(Choice::from(1));
        assert_eq!(n, -&CR1);
    }
}
