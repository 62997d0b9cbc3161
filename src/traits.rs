// -*- mode: rust; -*-
//
// This file is part of ted127-gls.
// See LICENSE for licensing information.

//! Module for common traits.

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a curve point is equivalent to the identity point.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the curve.
    fn is_identity(&self) -> bool;
}

impl<T> IsIdentity for T
where
    T: PartialEq + Identity,
{
    fn is_identity(&self) -> bool {
        *self == T::identity()
    }
}

/// Trait for checking whether a point is on the curve.  Used only in
/// debug assertions and tests; not constant-time.
#[allow(dead_code)]
pub(crate) trait ValidityCheck {
    /// Checks whether the point is on the curve.
    fn is_valid(&self) -> bool;
}
