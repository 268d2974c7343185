// Copyright 2023 Ulvetanna Inc.

//! A basic small-field polynomial commitment scheme.
//!
//! The prover lays the evaluation table of a multilinear polynomial out as a matrix, extends
//! every row with a Reed–Solomon code and commits to the columns of the extended matrix with a
//! Merkle tree. An evaluation proof consists of a linear combination of the rows, `t'`, together
//! with a few columns opened at indices derived from the Merkle root. See [`poly_commit`].

pub mod fiat_shamir;
pub mod linear_code;
pub mod merkle_tree;
pub mod poly_commit;
#[allow(clippy::module_inception)]
pub mod reed_solomon;
