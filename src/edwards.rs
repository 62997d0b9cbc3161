// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Group operations on the twisted Edwards curve
//! \\(-u x^2 + y^2 = 1 + d u x^2 y^2\\) over \\(\mathbb F\_{p^2}\\).
//!
//! # Curve representations
//!
//! Internally we use several models of the curve, following the approach
//! of the extended-coordinates literature:
//!
//! * `AffinePoint`: a pair \\((x, y)\\); the public wire format.
//! * `ExtendedPoint`: \\((X : Y : T : Z)\\) with \\(x = X/Z\\),
//!   \\(y = Y/Z\\), \\(xy = T/Z\\).
//! * `ProjectivePoint`: \\((X : Y : Z)\\), i.e. an extended point that
//!   has not paid for its \\(T\\) coordinate.
//! * `CompletedPoint`: \\(((X : Z), (Y : T))\\) in
//!   \\(\mathbb P^1 \times \mathbb P^1\\), the raw output of the addition
//!   and doubling formulas.
//!
//! A doubling or addition produces a `CompletedPoint`; converting it
//! `to_extended()` costs one extra multiplication (the \\(T\\)
//! coordinate) and `to_projective()` does not.  Chains of doublings
//! therefore stay in the projective model and only pay for \\(T\\) when
//! the next operation is an addition that consumes it.
//!
//! The formulas are the unified extended twisted Edwards formulas
//! specialized to \\(a = -u\\), \\(d = 109 u\\); multiplications by
//! \\(u = 2 + i\\) reduce to additions, and by \\(109\\) to a one-word
//! product.  They are exception-free on the points this crate lets in:
//! decoding rejects the cosets of the two order-two points at infinity
//! (the only inputs that could make a denominator vanish), and the
//! identity needs no special case.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::constants;
use crate::fp2::Fp2;
use crate::traits::{Identity, ValidityCheck};

// ------------------------------------------------------------------------
// Point types
// ------------------------------------------------------------------------

/// A point on the curve in affine coordinates.
///
/// This is the public representation; it serializes to 64 bytes
/// (\\(x\\) then \\(y\\), each 32 bytes little-endian).
#[derive(Copy, Clone)]
pub struct AffinePoint {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
}

/// A point \\((X : Y : T : Z)\\) in extended coordinates, with
/// \\(x = X/Z\\), \\(y = Y/Z\\), \\(xy = T/Z\\) and \\(Z \neq 0\\).
#[derive(Copy, Clone)]
pub(crate) struct ExtendedPoint {
    pub(crate) X: Fp2,
    pub(crate) Y: Fp2,
    pub(crate) T: Fp2,
    pub(crate) Z: Fp2,
}

/// A point \\((X : Y : Z)\\): an extended point without its \\(T\\).
#[derive(Copy, Clone)]
pub(crate) struct ProjectivePoint {
    pub(crate) X: Fp2,
    pub(crate) Y: Fp2,
    pub(crate) Z: Fp2,
}

/// A point \\(((X : Z), (Y : T))\\) in
/// \\(\mathbb P^1 \times \mathbb P^1\\), produced by the curve formulas.
#[derive(Copy, Clone)]
pub(crate) struct CompletedPoint {
    pub(crate) X: Fp2,
    pub(crate) Y: Fp2,
    pub(crate) Z: Fp2,
    pub(crate) T: Fp2,
}

impl Debug for AffinePoint {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "AffinePoint {{ x: {:?}, y: {:?} }}", &self.x, &self.y)
    }
}

impl Debug for ExtendedPoint {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(
            f,
            "ExtendedPoint {{ X: {:?}, Y: {:?}, T: {:?}, Z: {:?} }}",
            &self.X, &self.Y, &self.T, &self.Z
        )
    }
}

impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.y = Fp2::ONE;
    }
}

// ------------------------------------------------------------------------
// Constructors and identity
// ------------------------------------------------------------------------

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: Fp2::ZERO,
            y: Fp2::ONE,
        }
    }
}

impl Identity for ExtendedPoint {
    fn identity() -> ExtendedPoint {
        ExtendedPoint {
            X: Fp2::ZERO,
            Y: Fp2::ONE,
            T: Fp2::ZERO,
            Z: Fp2::ONE,
        }
    }
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: Fp2::ZERO,
            Y: Fp2::ONE,
            Z: Fp2::ONE,
        }
    }
}

// ------------------------------------------------------------------------
// Serialization
// ------------------------------------------------------------------------

impl AffinePoint {
    /// Serialize to 64 bytes: \\(x\\) then \\(y\\), canonically reduced.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.x.to_bytes());
        bytes[32..].copy_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Deserialize from 64 bytes.
    ///
    /// Returns `None` if the decoded pair does not satisfy the curve
    /// equation, or if the point lies in one of the two cosets of the
    /// order-two points at infinity.  Those cosets are the only inputs
    /// on which the unified formulas have exceptional cases, and no
    /// honestly generated point lands in them: the subgroup of
    /// order \\(q\\) and its translate by \\((0, -1)\\) both pass.
    ///
    /// The coset test uses the square-class of \\(1 + u x^2\\), which is
    /// a square exactly on the two admissible cosets.
    pub fn from_bytes(bytes: &[u8; 64]) -> Option<AffinePoint> {
        let mut xb = [0u8; 32];
        let mut yb = [0u8; 32];
        xb.copy_from_slice(&bytes[..32]);
        yb.copy_from_slice(&bytes[32..]);
        let x = Fp2::from_bytes(&xb);
        let y = Fp2::from_bytes(&yb);

        let xx = x.square();
        let yy = y.square();
        // -u x^2 + y^2 == 1 + 109 u x^2 y^2
        let lhs = &yy - &xx.mul_u();
        let rhs = &Fp2::ONE + &(&xx * &yy).mul_small(constants::EC_D).mul_u();
        let on_curve = lhs
            .complete_reduce()
            .ct_eq(&rhs.complete_reduce());

        let admissible = (&Fp2::ONE + &xx.mul_u()).is_square();

        if (on_curve & admissible).into() {
            Some(AffinePoint { x, y })
        } else {
            None
        }
    }

    /// Lift to extended coordinates with \\(Z = 1\\), \\(T = xy\\).
    pub(crate) fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            T: &self.x * &self.y,
            Z: Fp2::ONE,
        }
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging and tests, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for AffinePoint {
    fn is_valid(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &yy - &xx.mul_u();
        let rhs = &Fp2::ONE + &(&xx * &yy).mul_small(constants::EC_D).mul_u();
        lhs == rhs
    }
}

impl ValidityCheck for ExtendedPoint {
    fn is_valid(&self) -> bool {
        // The homogenized curve equation is -u X^2 + Y^2 = Z^2 + d u T^2,
        // plus the consistency constraint X Y = T Z.
        let lhs = &self.Y.square() - &self.X.square().mul_u();
        let rhs =
            &self.Z.square() + &self.T.square().mul_small(constants::EC_D).mul_u();
        let cross = (&self.X * &self.Y) == (&self.T * &self.Z);
        lhs == rhs && cross && !bool::from(self.Z.is_zero())
    }
}

// ------------------------------------------------------------------------
// Conversions between models
// ------------------------------------------------------------------------

impl ExtendedPoint {
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Normalize to affine coordinates with one inversion.
    pub(crate) fn to_affine(&self) -> AffinePoint {
        let zinv = self.Z.invert();
        AffinePoint {
            x: (&self.X * &zinv).complete_reduce(),
            y: (&self.Y * &zinv).complete_reduce(),
        }
    }
}

impl CompletedPoint {
    /// Convert to extended coordinates; pays one multiplication for
    /// the \\(T\\) coordinate relative to `to_projective`.
    pub(crate) fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            T: &self.X * &self.Y,
            Z: &self.Z * &self.T,
        }
    }

    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ProjectivePoint {
    /// Double this point, using the unified doubling formulas for
    /// \\(a = -u\\).  No \\(T\\) coordinate is consumed.
    pub(crate) fn double(&self) -> CompletedPoint {
        let A = self.X.square();
        let B = self.Y.square();
        let zz = self.Z.square();
        let C = &zz + &zz;
        let D = -&A.mul_u();
        let E = &(&(&self.X + &self.Y).square() - &A) - &B;
        let G = &D + &B;
        let F = &G - &C;
        let H = &D - &B;
        CompletedPoint {
            X: E,
            Y: H,
            Z: G,
            T: F,
        }
    }
}

impl ExtendedPoint {
    /// Double this point.
    pub(crate) fn double(&self) -> CompletedPoint {
        self.to_projective().double()
    }

    /// Compute \\(2^k\\) times this point by repeated doubling, staying
    /// in the projective model between doublings.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> ExtendedPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.to_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.to_projective();
        }
        // Unroll last iteration so we can go directly to_extended()
        s.double().to_extended()
    }
}

// ------------------------------------------------------------------------
// Addition
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = CompletedPoint;

    /// Unified addition: valid for any pair of admissible inputs,
    /// including \\(P = Q\\), \\(P = -Q\\) and the identity.
    fn add(self, other: &'b ExtendedPoint) -> CompletedPoint {
        let A = &self.X * &other.X;
        let B = &self.Y * &other.Y;
        let C = (&self.T * &other.T).mul_small(constants::EC_D).mul_u();
        let D = &self.Z * &other.Z;
        let E = &(&(&(&self.X + &self.Y) * &(&other.X + &other.Y)) - &A) - &B;
        let F = &D - &C;
        let G = &D + &C;
        let H = &B + &A.mul_u();
        CompletedPoint {
            X: E,
            Y: H,
            Z: G,
            T: F,
        }
    }
}

impl<'a, 'b> Add<&'b AffinePoint> for &'a ExtendedPoint {
    type Output = CompletedPoint;

    /// Mixed addition with an affine right operand
    /// (\\(Z\_2 = 1\\) saves one multiplication).
    fn add(self, other: &'b AffinePoint) -> CompletedPoint {
        let t2 = &other.x * &other.y;
        let A = &self.X * &other.x;
        let B = &self.Y * &other.y;
        let C = (&self.T * &t2).mul_small(constants::EC_D).mul_u();
        let E = &(&(&(&self.X + &self.Y) * &(&other.x + &other.y)) - &A) - &B;
        let F = &self.Z - &C;
        let G = &self.Z + &C;
        let H = &B + &A.mul_u();
        CompletedPoint {
            X: E,
            Y: H,
            Z: G,
            T: F,
        }
    }
}

impl<'a, 'b> Sub<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = CompletedPoint;

    fn sub(self, other: &'b ExtendedPoint) -> CompletedPoint {
        self + &(-other)
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -&self.x,
            y: self.y,
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;
    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl<'a> Neg for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    fn neg(self) -> ExtendedPoint {
        ExtendedPoint {
            X: -&self.X,
            Y: self.Y,
            T: -&self.T,
            Z: self.Z,
        }
    }
}

impl Neg for ExtendedPoint {
    type Output = ExtendedPoint;
    fn neg(self) -> ExtendedPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment and equality
// ------------------------------------------------------------------------

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &ExtendedPoint, b: &ExtendedPoint, choice: Choice) -> ExtendedPoint {
        ExtendedPoint {
            X: Fp2::conditional_select(&a.X, &b.X, choice),
            Y: Fp2::conditional_select(&a.Y, &b.Y, choice),
            T: Fp2::conditional_select(&a.T, &b.T, choice),
            Z: Fp2::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl ConstantTimeEq for ExtendedPoint {
    /// Projective equality: cross-multiply rather than normalize.
    fn ct_eq(&self, other: &ExtendedPoint) -> Choice {
        let x = (&self.X * &other.Z).complete_reduce();
        let x2 = (&other.X * &self.Z).complete_reduce();
        let y = (&self.Y * &other.Z).complete_reduce();
        let y2 = (&other.Y * &self.Z).complete_reduce();
        x.ct_eq(&x2) & y.ct_eq(&y2)
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &ExtendedPoint) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for ExtendedPoint {}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.x == other.x && self.y == other.y
    }
}
impl Eq for AffinePoint {}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::constants::{BASEPOINT, PSI_BASEPOINT, Q};
    use crate::traits::IsIdentity;

    /// Binary double-and-add, processing the full 256-bit scalar.
    /// Variable-time; reference only.
    pub(crate) fn mul_reference(k: &[u64; 4], point: &AffinePoint) -> AffinePoint {
        let mut r = ExtendedPoint::identity();
        let mut q = point.to_extended();
        for i in 0..256 {
            if (k[i / 64] >> (i % 64)) & 1 == 1 {
                r = (&r + &q).to_extended();
            }
            if i < 255 {
                q = q.double().to_extended();
            }
        }
        r.to_affine()
    }

    /// A curve point in the coset of an order-two point at infinity;
    /// decoding must reject it even though it satisfies the curve
    /// equation.
    const FORBIDDEN: [u8; 64] = [
        0x65, 0xa4, 0xe6, 0xd7, 0xb2, 0xd4, 0xf0, 0x72, 0x40, 0x95, 0x03, 0x56, 0x8d, 0x74,
        0x3d, 0x21, 0x13, 0xe3, 0x49, 0xc7, 0x25, 0x66, 0x13, 0x18, 0xc9, 0xa5, 0xe3, 0x70,
        0x3d, 0x39, 0x2f, 0x48, 0xac, 0x83, 0x91, 0xc3, 0x1c, 0xc3, 0x1a, 0x48, 0x50, 0xbe,
        0x52, 0x42, 0xf4, 0x4f, 0x3d, 0x4a, 0x86, 0x05, 0x3e, 0xd3, 0x4f, 0x4e, 0xb4, 0xc4,
        0xa0, 0xfd, 0xb3, 0x7e, 0x05, 0xe5, 0x42, 0x52,
    ];

    #[test]
    fn add_vs_double() {
        let b = BASEPOINT.to_extended();
        let sum = (&b + &b).to_extended();
        let dbl = b.double().to_extended();
        assert_eq!(sum, dbl);
        assert!(dbl.is_valid());
    }

    #[test]
    fn add_neg_is_identity() {
        let b = BASEPOINT.to_extended();
        let r = (&b + &(-&b)).to_extended();
        assert!(r.to_affine().is_identity());
    }

    #[test]
    fn identity_is_neutral() {
        let b = BASEPOINT.to_extended();
        let id = ExtendedPoint::identity();
        assert_eq!((&b + &id).to_extended(), b);
        assert_eq!((&id + &b).to_extended(), b);
        assert!(id.double().to_extended().to_affine().is_identity());
    }

    #[test]
    fn order_two_point_is_handled() {
        // (0, -1) has order two; the formulas must not misbehave on it.
        let t2 = AffinePoint {
            x: Fp2::ZERO,
            y: -&Fp2::ONE,
        }
        .to_extended();
        assert!(t2.double().to_extended().to_affine().is_identity());
        let b = BASEPOINT.to_extended();
        let shifted = (&b + &t2).to_extended();
        let back = (&shifted + &t2).to_extended();
        assert_eq!(back, b);
    }

    #[test]
    fn mixed_addition_matches_extended() {
        let b = BASEPOINT.to_extended();
        let sum_mixed = (&b + &PSI_BASEPOINT).to_extended();
        let sum_full = (&b + &PSI_BASEPOINT.to_extended()).to_extended();
        assert_eq!(sum_mixed, sum_full);
    }

    #[test]
    fn mul_by_pow_2_matches_doubling() {
        let b = BASEPOINT.to_extended();
        let mut expected = b;
        for _ in 0..5 {
            expected = expected.double().to_extended();
        }
        assert_eq!(b.mul_by_pow_2(5), expected);
    }

    #[test]
    fn basepoint_has_order_q() {
        let r = mul_reference(&Q, &BASEPOINT);
        assert!(r.is_identity());
        let r = mul_reference(&Q, &PSI_BASEPOINT);
        assert!(r.is_identity());
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = BASEPOINT.to_bytes();
        let p = AffinePoint::from_bytes(&bytes).unwrap();
        assert_eq!(p, BASEPOINT);
        assert_eq!(p.to_bytes(), bytes);
    }

    #[test]
    fn decode_rejects_off_curve() {
        // (0, 0) does not satisfy the curve equation
        assert!(AffinePoint::from_bytes(&[0u8; 64]).is_none());
        let mut corrupted = BASEPOINT.to_bytes();
        corrupted[0] ^= 1;
        assert!(AffinePoint::from_bytes(&corrupted).is_none());
    }

    #[test]
    fn decode_rejects_forbidden_coset() {
        // on the curve, but translated by a point at infinity
        assert!(AffinePoint::from_bytes(&FORBIDDEN).is_none());
    }

    #[test]
    fn decode_accepts_identity_and_torsion() {
        let id = AffinePoint::identity();
        assert_eq!(AffinePoint::from_bytes(&id.to_bytes()).unwrap(), id);
        let t2 = AffinePoint {
            x: Fp2::ZERO,
            y: -&Fp2::ONE,
        };
        assert!(AffinePoint::from_bytes(&t2.to_bytes()).is_some());
    }

    #[test]
    fn negation_flips_x() {
        let n = -&BASEPOINT;
        assert_eq!(n.y, BASEPOINT.y);
        assert_eq!(-&n, BASEPOINT);
        let sum = (&BASEPOINT.to_extended() + &n.to_extended()).to_extended();
        assert!(sum.to_affine().is_identity());
    }
}
