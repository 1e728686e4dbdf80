// -*- mode: rust; -*-
//
// This file is part of gls127.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//------------------------------------------------------------------------
// Documentation:
//------------------------------------------------------------------------
//! # gls127
//!
//! Constant-time scalar multiplication on a twisted Edwards curve defined
//! over the quadratic extension of the Mersenne field
//! \\( \mathbb F\_{p\^2} \\), \\( p = 2\^{127} - 1 \\).
//!
//! The curve \\( a x\^2 + y\^2 = 1 + d x\^2 y\^2 \\) with
//! \\( a = -(2 + i) \\) and \\( d = 109 (2 + i) \\) carries an efficiently
//! computable GLS endomorphism \\( \psi \\) acting as multiplication by
//! \\( \lambda = \sqrt{-1} \bmod q \\) on the prime-order subgroup, which
//! halves the length of the main multiplication loop.
//!
//! Three multiplication primitives are exposed on [`edwards::AffinePoint`]:
//!
//! * [`mul_gen`](edwards::AffinePoint::mul_gen) — fixed-base
//!   multiplication of the curve generator using two precomputed comb
//!   tables;
//! * [`mul`](edwards::AffinePoint::mul) — variable-base multiplication
//!   via endomorphism decomposition and an 8-entry on-the-fly table;
//! * [`simul`](edwards::AffinePoint::simul) — the simultaneous combination
//!   \\( k\_1 P + k\_2 Q \\).
//!
//! Scalars live in [`scalar::Scalar`] and are canonicalised with
//! [`masked`](scalar::Scalar::masked) before multiplication; the scalar
//! field product \\( xy + z \bmod q \\) is
//! [`Scalar::mul_add`](scalar::Scalar::mul_add).
//!
//! Every operation consuming secret data runs with secret-independent
//! control flow and memory access; table lookups scan every entry and the
//! branchless plumbing is built on [`subtle`].
//!
//! Off-curve inputs are never detected here: callers are responsible for
//! validating untrusted points, e.g. with
//! [`is_on_curve`](edwards::AffinePoint::is_on_curve).
//------------------------------------------------------------------------
// Linting:
//------------------------------------------------------------------------
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
extern crate std;

//------------------------------------------------------------------------
// gls127 public modules
//------------------------------------------------------------------------

#[macro_use]
mod macros;

// Point operations on the extension-field Edwards curve
pub mod edwards;

// Scalar arithmetic mod the group order, decomposition and recoding
pub mod scalar;

// Common traits
pub mod traits;

//------------------------------------------------------------------------
// gls127 internal modules
//------------------------------------------------------------------------

// Useful constants, like the generator and the group order
pub mod constants;

// Finite field arithmetic mod p = 2^127 - 1
pub(crate) mod fp;

// Quadratic extension arithmetic over Fp
pub(crate) mod fp2;

// Internal curve representations
pub(crate) mod curve_models;

// Generic code for window lookups
pub(crate) mod window;

pub use crate::edwards::AffinePoint;
pub use crate::edwards::EdwardsPoint;
pub use crate::scalar::Scalar;
