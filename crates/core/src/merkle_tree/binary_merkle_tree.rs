// Copyright 2024-2025 Irreducible Inc.

use std::array;

use digest::{Digest, Output};
use rayon::prelude::*;
use simple_binius_hash::{hash_bytes, PseudoCompressionFunction};
use simple_binius_utils::{bail, checked_arithmetics::checked_log_2};
use tracing::instrument;

use super::errors::Error;

/// A binary Merkle tree that commits to a vector of byte strings.
///
/// Each leaf is hashed into a digest, then a Merkle tree is constructed over the leaf digests.
/// The implementation requires that the number of leaves is a power of two.
#[derive(Debug, Clone)]
pub struct BinaryMerkleTree<D> {
	/// Base-2 logarithm of the number of leaves
	pub log_len: usize,
	/// The inner nodes, arranged as a flattened array of layers with the root at the end
	pub inner_nodes: Vec<D>,
}

#[instrument("BinaryMerkleTree::build", skip_all, level = "debug")]
pub fn build<H, C>(
	compression: &C,
	leaves: &[impl AsRef<[u8]> + Sync],
) -> Result<BinaryMerkleTree<Output<H>>, Error>
where
	H: Digest,
	C: PseudoCompressionFunction<Output<H>, 2> + Sync,
{
	let Some(log_len) = checked_log_2(leaves.len()) else {
		bail!(Error::PowerOfTwoLengthRequired);
	};
	let len = 1 << log_len;

	let mut inner_nodes = vec![Output::<H>::default(); 2 * len - 1];
	{
		let (mut prev_layer, mut remaining) = inner_nodes.split_at_mut(len);
		prev_layer
			.par_iter_mut()
			.zip(leaves.par_iter())
			.for_each(|(digest, leaf)| *digest = hash_bytes::<H>(leaf));

		for i in 1..log_len + 1 {
			let (next_layer, next_remaining) = remaining.split_at_mut(1 << (log_len - i));
			compress_layer(compression, prev_layer, next_layer);
			(prev_layer, remaining) = (next_layer, next_remaining);
		}
	}

	Ok(BinaryMerkleTree {
		log_len,
		inner_nodes,
	})
}

impl<D: Clone> BinaryMerkleTree<D> {
	pub fn root(&self) -> D {
		self.inner_nodes
			.last()
			.expect("MerkleTree inner nodes can't be empty")
			.clone()
	}

	/// Get a Merkle branch for the given index
	///
	/// The branch lists the sibling digests from the leaf layer up to, but excluding, the root.
	///
	/// Throws if the index is out of range
	pub fn branch(&self, index: usize) -> Result<Vec<D>, Error> {
		if index >= 1 << self.log_len {
			bail!(Error::IndexOutOfRange {
				max: (1 << self.log_len) - 1,
			});
		}

		let branch = (0..self.log_len)
			.map(|j| {
				let node_index = (((1 << j) - 1) << (self.log_len + 1 - j)) | (index >> j) ^ 1;
				self.inner_nodes[node_index].clone()
			})
			.collect();

		Ok(branch)
	}
}

#[instrument("MerkleTree::compress_layer", skip_all, level = "trace")]
fn compress_layer<D, C>(compression: &C, prev_layer: &[D], next_layer: &mut [D])
where
	D: Clone + Send + Sync,
	C: PseudoCompressionFunction<D, 2> + Sync,
{
	prev_layer
		.par_chunks_exact(2)
		.zip(next_layer.par_iter_mut())
		.for_each(|(prev_pair, next_digest)| {
			*next_digest = compression.compress(array::from_fn(|i| prev_pair[i].clone()));
		})
}
