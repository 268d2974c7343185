// Copyright 2023-2024 Irreducible Inc.

//! Field arithmetic used by the polynomial commitment scheme.
//!
//! Every algorithm in the workspace is written once against the [`Field`] and [`PackedField`]
//! traits and runs unchanged over any of the implementations here:
//!
//! * the canonical binary tower fields, [`BinaryField1b`] through [`BinaryField128b`], as
//!   specified in [DP23], section 2.3;
//! * 64-bit prime fields, [`Goldilocks`] and [`Mersenne61`];
//! * exact [`Rational`] numbers, which is how the protocol is run over plain integers;
//! * [`PackedVector`], fixed-length vectors of any of the above with componentwise arithmetic.
//!
//! [DP23]: https://eprint.iacr.org/2023/1784

pub mod binary_field;
pub mod error;
pub mod field;
pub mod packed;
pub mod packed_vector;
pub mod prime_field;
pub mod rational;
#[cfg(test)]
mod tests;

pub use binary_field::*;
pub use error::*;
pub use field::Field;
pub use packed::PackedField;
pub use packed_vector::PackedVector;
pub use prime_field::*;
pub use rational::Rational;
