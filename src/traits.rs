// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

//! Module for common traits.

#![allow(non_snake_case)]

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}
