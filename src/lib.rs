// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

#![no_std]
#![deny(missing_docs)]
#![allow(clippy::many_single_char_names)]

//! # ted127-gls
//!
//! **A Rust implementation of field and group operations on a GLS twisted
//! Edwards curve over GF((2^127 - 1)^2).**
//!
//! The curve is
//!
//! ```text
//!     -u x^2 + y^2 = 1 + 109 u x^2 y^2,     u = 2 + i,
//! ```
//!
//! defined over the quadratic extension of the Mersenne field
//! \\(\mathbb F\_{2^{127}-1}\\).  The curve has a subgroup of prime order
//! \\(q = A^2 + B^2 \approx 2^{252}\\) (cofactor 4) and carries an
//! efficiently computable endomorphism \\(\psi\\) with
//! \\(\psi(P) = \lambda P\\), \\(\lambda^2 \equiv -1 \pmod q\\), which is
//! used to halve the length of variable-base scalar multiplication.
//!
//! Three scalar multiplication entry points are provided:
//!
//! * [`mul_gen`] — fixed-base multiplication of the basepoint, using a
//!   signed comb over two 128-entry precomputed tables;
//! * [`mul`] — variable-base multiplication, using the endomorphism and a
//!   joint sign-aligned recoding of the two half-length scalars;
//! * [`simul`] — simultaneous double-base multiplication
//!   \\(k\_1 P + k\_2 Q\\), as needed for signature verification.
//!
//! All three run in constant time: no branch and no memory index depends
//! on a scalar bit (table lookups scan every entry and select by mask).
//! `mul_gen` additionally offers an explicitly variable-time table lookup
//! for callers multiplying public scalars.
//!
//! Scalars must be run through [`Scalar::mask`] before use; masking clears
//! the cofactor and establishes the fixed-shape preconditions the comb
//! recoding relies on.

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

// Modules for low-level operations directly on field elements and curve points.

pub mod edwards;
pub(crate) mod fp;
pub(crate) mod fp2;
pub mod scalar;

// The GLS endomorphism and scalar decomposition.

pub(crate) mod endo;

// Scalar multiplication engines and constant-time lookup tables.

pub(crate) mod scalar_mul;
pub(crate) mod window;

// Miscellaneous common traits.

pub mod traits;

// Low-level curve and point constants, as well as precomputed group elements.

pub mod constants;
mod gen_tables;

pub use crate::edwards::AffinePoint;
pub use crate::scalar::Scalar;
pub use crate::scalar_mul::comb::mul_gen;
pub use crate::scalar_mul::glv::mul;
pub use crate::scalar_mul::simul::simul;
