// Copyright 2024-2025 Irreducible Inc.

//! Polynomial arithmetic used by the commitment scheme, built atop the `simple_binius_field`
//! crate.
//!
//! This crate provides:
//!
//! * Univariate polynomials in coefficient form, and the Lagrange basis over small integer nodes
//! * Multilinear polynomial evaluation and the equality indicator tensor expansion

mod error;
mod multilinear;
mod univariate;

pub use error::*;
pub use multilinear::*;
pub use univariate::*;
