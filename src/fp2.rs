// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Arithmetic in the quadratic extension
//! \\(\mathbb F\_{p^2} = \mathbb F\_p[i] / (i^2 + 1)\\).
//!
//! Since \\(p \equiv 3 \pmod 4\\), \\(-1\\) is a non-residue and the
//! extension is a field.  An element \\(c\_0 + c\_1 i\\) is stored as a
//! pair of [`Fp`] components.  Multiplication uses the three-multiply
//! Karatsuba schedule; squaring uses two.  The distinguished element
//! \\(u = 2 + i\\) appears in the curve constants, and multiplying by it
//! takes only additions.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::fp::Fp;

/// An element of \\(\mathbb F\_{p^2}\\), as \\(c\_0 + c\_1 i\\).
#[derive(Copy, Clone, Default)]
pub(crate) struct Fp2 {
    pub(crate) c0: Fp,
    pub(crate) c1: Fp,
}

impl Debug for Fp2 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Fp2 {{ c0: {:?}, c1: {:?} }}", self.c0, self.c1)
    }
}

impl Zeroize for Fp2 {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
    }
}

impl Fp2 {
    /// The zero element.
    pub const ZERO: Fp2 = Fp2 {
        c0: Fp::ZERO,
        c1: Fp::ZERO,
    };

    /// The one element.
    pub const ONE: Fp2 = Fp2 {
        c0: Fp::ONE,
        c1: Fp::ZERO,
    };

    /// Construct an element from a small constant.
    #[allow(dead_code)]
    pub fn from_small(k: u32) -> Fp2 {
        Fp2 {
            c0: Fp::from_small(k),
            c1: Fp::ZERO,
        }
    }

    /// Componentwise canonical reduction.
    pub fn complete_reduce(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.complete_reduce(),
            c1: self.c1.complete_reduce(),
        }
    }

    /// Test whether this element represents zero.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// The conjugate \\(c\_0 - c\_1 i\\), which is also the image of the
    /// \\(p\\)-power Frobenius.
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -&self.c1,
        }
    }

    /// The norm \\(c\_0^2 + c\_1^2 \in \mathbb F\_p\\).
    pub fn norm(&self) -> Fp {
        &self.c0.square() + &self.c1.square()
    }

    /// Squaring via \\((c\_0 + c\_1)(c\_0 - c\_1) + 2 c\_0 c\_1 i\\):
    /// two base-field multiplications.
    pub fn square(&self) -> Fp2 {
        let t = &self.c0 * &self.c1;
        Fp2 {
            c0: &(&self.c0 + &self.c1) * &(&self.c0 - &self.c1),
            c1: &t + &t,
        }
    }

    /// Multiply by the fixed element \\(u = 2 + i\\) using only
    /// additions and subtractions:
    /// \\((2 + i)(c\_0 + c\_1 i) = (2c\_0 - c\_1) + (c\_0 + 2c\_1) i\\).
    pub fn mul_u(&self) -> Fp2 {
        Fp2 {
            c0: &(&self.c0 + &self.c0) - &self.c1,
            c1: &(&self.c1 + &self.c1) + &self.c0,
        }
    }

    /// Multiply both components by a small constant.
    pub fn mul_small(&self, k: u32) -> Fp2 {
        Fp2 {
            c0: self.c0.mul_small(k),
            c1: self.c1.mul_small(k),
        }
    }

    /// The multiplicative inverse, via
    /// \\(1/(c\_0 + c\_1 i) = (c\_0 - c\_1 i) / (c\_0^2 + c\_1^2)\\).
    /// The base-field inversion is performed on the 127-bit norm.
    /// Zero maps to zero.
    pub fn invert(&self) -> Fp2 {
        let ni = self.norm().invert();
        Fp2 {
            c0: &self.c0 * &ni,
            c1: &(-&self.c1) * &ni,
        }
    }

    /// Test whether this element is a square in \\(\mathbb F\_{p^2}\\).
    ///
    /// \\(x^{(p^2-1)/2} = N(x)^{(p-1)/2}\\), so the quadratic character
    /// of the extension reduces to the base-field character of the norm.
    /// Zero counts as a square.
    pub fn is_square(&self) -> Choice {
        let c = self.norm().chi().complete_reduce();
        c.ct_eq(&Fp::ONE) | c.is_zero()
    }

    /// Serialize to 32 bytes: real part, then imaginary part.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.c0.to_bytes());
        bytes[16..].copy_from_slice(&self.c1.to_bytes());
        bytes
    }

    /// Deserialize from 32 bytes.  Total, like [`Fp::from_bytes`].
    pub fn from_bytes(bytes: &[u8; 32]) -> Fp2 {
        let mut lo = [0u8; 16];
        let mut hi = [0u8; 16];
        lo.copy_from_slice(&bytes[..16]);
        hi.copy_from_slice(&bytes[16..]);
        Fp2 {
            c0: Fp::from_bytes(&lo),
            c1: Fp::from_bytes(&hi),
        }
    }
}

impl<'b> AddAssign<&'b Fp2> for Fp2 {
    fn add_assign(&mut self, rhs: &'b Fp2) {
        self.c0 += &rhs.c0;
        self.c1 += &rhs.c1;
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            c0: &self.c0 + &rhs.c0,
            c1: &self.c1 + &rhs.c1,
        }
    }
}

impl<'b> SubAssign<&'b Fp2> for Fp2 {
    fn sub_assign(&mut self, rhs: &'b Fp2) {
        self.c0 -= &rhs.c0;
        self.c1 -= &rhs.c1;
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2 {
            c0: &self.c0 - &rhs.c0,
            c1: &self.c1 - &rhs.c1,
        }
    }
}

impl<'b> MulAssign<&'b Fp2> for Fp2 {
    fn mul_assign(&mut self, rhs: &'b Fp2) {
        let result = (self as &Fp2) * rhs;
        *self = result;
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        // Karatsuba: three base-field multiplications.
        let aa = &self.c0 * &rhs.c0;
        let bb = &self.c1 * &rhs.c1;
        let t = &(&self.c0 + &self.c1) * &(&rhs.c0 + &rhs.c1);
        Fp2 {
            c0: &aa - &bb,
            c1: &(&t - &aa) - &bb,
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        Fp2 {
            c0: -&self.c0,
            c1: -&self.c1,
        }
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        -&self
    }
}

define_add_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);
define_sub_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);
define_mul_variants!(LHS = Fp2, RHS = Fp2, Output = Fp2);

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Fp2, b: &Fp2, choice: Choice) -> Fp2 {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Fp2) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl PartialEq for Fp2 {
    fn eq(&self, other: &Fp2) -> bool {
        self.complete_reduce()
            .ct_eq(&other.complete_reduce())
            .into()
    }
}
impl Eq for Fp2 {}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn fe(a: u128, b: u128) -> Fp2 {
        Fp2 { c0: Fp(a), c1: Fp(b) }
    }

    /// u = 2 + i.
    const U: Fp2 = Fp2 { c0: Fp(2), c1: Fp(1) };

    #[test]
    fn mul_u_matches_mul() {
        for x in [
            Fp2::ZERO,
            Fp2::ONE,
            U,
            fe(0x6541AA8FCD8C4C6509744238EF199911, 0x5281A3886F35ED6FD204049593D4A1D1),
            fe(Fp::P, Fp::P - 1),
        ] {
            assert_eq!(x.mul_u(), &x * &U);
        }
    }

    #[test]
    fn square_matches_mul() {
        for x in [
            Fp2::ONE,
            U,
            fe(12345, 678910),
            fe(Fp::P - 1, 1u128 << 64),
            fe(0x6541AA8FCD8C4C6509744238EF199911, 0x5281A3886F35ED6FD204049593D4A1D1),
        ] {
            assert_eq!(x.square(), &x * &x);
        }
    }

    #[test]
    fn invert_vs_mul() {
        for x in [
            Fp2::ONE,
            U,
            fe(2, 0),
            fe(0, 1),
            fe(0x6541AA8FCD8C4C6509744238EF199911, 0x5281A3886F35ED6FD204049593D4A1D1),
        ] {
            assert_eq!(&x * &x.invert(), Fp2::ONE);
        }
        assert!(bool::from(Fp2::ZERO.invert().is_zero()));
    }

    #[test]
    fn conjugate_fixes_norm() {
        let x = fe(0x6541AA8FCD8C4C6509744238EF199911, 0x5281A3886F35ED6FD204049593D4A1D1);
        let n = &x * &x.conjugate();
        assert_eq!(n.c1.complete_reduce().0, 0);
        assert_eq!(n.c0, x.norm());
    }

    #[test]
    fn i_squared_is_minus_one() {
        let i = fe(0, 1);
        assert_eq!(i.square(), -&Fp2::ONE);
        // so i is a square root of -1 and -1 is a square in Fp2
        assert!(bool::from((-&Fp2::ONE).is_square()));
    }

    #[test]
    fn squares_have_square_character() {
        for x in [
            U,
            fe(3, 7),
            fe(0x6541AA8FCD8C4C6509744238EF199911, 1),
        ] {
            assert!(bool::from(x.square().is_square()));
        }
        // u = 2 + i is a non-square (this is what makes the curve twist work)
        assert!(!bool::from(U.is_square()));
    }

    #[test]
    fn bytes_roundtrip() {
        let x = fe(0x6541AA8FCD8C4C6509744238EF199911, 0x5281A3886F35ED6FD204049593D4A1D1);
        assert_eq!(Fp2::from_bytes(&x.to_bytes()), x);
    }
}
