// Copyright 2024-2025 Irreducible Inc.
// Copyright (c) 2024 The Plonky3 Authors

//! Compression of `N` digests into one, as used to build interior Merkle tree nodes.
//!
//! Mirrors
//! [p3_symmetric](https://github.com/Plonky3/Plonky3/blob/main/symmetric/src/compression.rs).

/// Maps `N` values to one, only required to resist collisions when every input is itself a
/// compression output or a leaf digest.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}
