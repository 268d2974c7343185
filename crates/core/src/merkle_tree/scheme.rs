// Copyright 2024 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use digest::{Digest, Output};
use getset::Getters;
use simple_binius_hash::{hash_bytes, PseudoCompressionFunction};
use simple_binius_utils::bail;
use subtle::ConstantTimeEq;

use super::{
	binary_merkle_tree::{self, BinaryMerkleTree},
	errors::{Error, VerificationError},
};

/// Commits to byte string leaves with a binary Merkle tree and checks openings of single leaves.
///
/// Leaves are hashed with `H` and inner nodes with the two-to-one compression `C`.
#[derive(Getters)]
pub struct BinaryMerkleTreeScheme<H, C> {
	#[getset(get = "pub")]
	compression: C,
	// This makes it so that `BinaryMerkleTreeScheme` remains Send + Sync
	// See https://doc.rust-lang.org/nomicon/phantom-data.html#table-of-phantomdata-patterns
	_phantom: PhantomData<fn() -> H>,
}

impl<H, C: fmt::Debug> fmt::Debug for BinaryMerkleTreeScheme<H, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BinaryMerkleTreeScheme")
			.field("compression", &self.compression)
			.finish()
	}
}

impl<H, C: Clone> Clone for BinaryMerkleTreeScheme<H, C> {
	fn clone(&self) -> Self {
		Self::new(self.compression.clone())
	}
}

impl<H, C> BinaryMerkleTreeScheme<H, C> {
	pub fn new(compression: C) -> Self {
		BinaryMerkleTreeScheme {
			compression,
			_phantom: PhantomData,
		}
	}
}

impl<H, C> BinaryMerkleTreeScheme<H, C>
where
	H: Digest,
	C: PseudoCompressionFunction<Output<H>, 2> + Sync,
{
	/// Builds the tree over `leaves`, whose number must be a power of two.
	pub fn build(
		&self,
		leaves: &[impl AsRef<[u8]> + Sync],
	) -> Result<BinaryMerkleTree<Output<H>>, Error> {
		binary_merkle_tree::build::<H, C>(&self.compression, leaves)
	}

	/// Checks that `leaf` sits at `index` in a tree with `1 << log_len` leaves and root `root`.
	pub fn verify_branch(
		&self,
		root: &Output<H>,
		log_len: usize,
		index: usize,
		leaf: &[u8],
		branch: &[Output<H>],
	) -> Result<(), Error> {
		if branch.len() != log_len {
			bail!(VerificationError::IncorrectBranchLength { expected: log_len });
		}

		if index >= 1 << log_len {
			bail!(Error::IndexOutOfRange {
				max: (1 << log_len) - 1,
			});
		}

		let leaf_digest = hash_bytes::<H>(leaf);

		let mut index = index;
		let computed_root = branch.iter().fold(leaf_digest, |node, branch_node| {
			let next_node = if index & 1 == 0 {
				self.compression.compress([node, branch_node.clone()])
			} else {
				self.compression.compress([branch_node.clone(), node])
			};
			index >>= 1;
			next_node
		});

		if bool::from(computed_root.as_slice().ct_eq(root.as_slice())) {
			Ok(())
		} else {
			bail!(VerificationError::InvalidProof)
		}
	}
}
