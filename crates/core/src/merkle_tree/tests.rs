// Copyright 2024 Irreducible Inc.

use assert_matches::assert_matches;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use simple_binius_hash::{
	hash_bytes, Groestl256, Groestl256ByteCompression, PseudoCompressionFunction, Sha256,
	Sha256ByteCompression,
};

use super::{BinaryMerkleTreeScheme, Error, VerificationError};

fn random_leaves(rng: &mut StdRng, n: usize) -> Vec<Vec<u8>> {
	(0..n)
		.map(|_| {
			let mut leaf = vec![0u8; 12];
			rng.fill_bytes(&mut leaf);
			leaf
		})
		.collect()
}

#[test]
fn test_binary_merkle_tree_open_correctly() {
	let mut rng = StdRng::seed_from_u64(0);
	let scheme = BinaryMerkleTreeScheme::<Groestl256, _>::new(Groestl256ByteCompression::default());

	let leaves = random_leaves(&mut rng, 16);
	let tree = scheme.build(&leaves).unwrap();
	assert_eq!(tree.log_len, 4);
	assert_eq!(tree.inner_nodes.len(), 31);

	let root = tree.root();
	for (i, leaf) in leaves.iter().enumerate() {
		let branch = tree.branch(i).unwrap();
		assert_eq!(branch.len(), 4);
		scheme.verify_branch(&root, 4, i, leaf, &branch).unwrap();
	}
}

#[test]
fn test_root_of_two_leaves() {
	let compression = Sha256ByteCompression::default();
	let scheme = BinaryMerkleTreeScheme::<Sha256, _>::new(compression.clone());

	let leaves = [b"left".to_vec(), b"right".to_vec()];
	let tree = scheme.build(&leaves).unwrap();
	let expected =
		compression.compress([hash_bytes::<Sha256>(b"left"), hash_bytes::<Sha256>(b"right")]);
	assert_eq!(tree.root(), expected);
	assert_eq!(tree.branch(0).unwrap(), vec![hash_bytes::<Sha256>(b"right")]);
}

#[test]
fn test_single_leaf_tree() {
	let scheme = BinaryMerkleTreeScheme::<Groestl256, _>::new(Groestl256ByteCompression::default());
	let tree = scheme.build(&[b"only".to_vec()]).unwrap();
	assert_eq!(tree.root(), hash_bytes::<Groestl256>(b"only"));
	assert!(tree.branch(0).unwrap().is_empty());
	scheme
		.verify_branch(&tree.root(), 0, 0, b"only", &[])
		.unwrap();
}

#[test]
fn test_build_requires_power_of_two() {
	let scheme = BinaryMerkleTreeScheme::<Groestl256, _>::new(Groestl256ByteCompression::default());
	let leaves = vec![vec![0u8]; 6];
	assert_matches!(scheme.build(&leaves), Err(Error::PowerOfTwoLengthRequired));
	let no_leaves: Vec<Vec<u8>> = Vec::new();
	assert_matches!(scheme.build(&no_leaves), Err(Error::PowerOfTwoLengthRequired));
}

#[test]
fn test_branch_index_out_of_range() {
	let mut rng = StdRng::seed_from_u64(1);
	let scheme = BinaryMerkleTreeScheme::<Groestl256, _>::new(Groestl256ByteCompression::default());
	let tree = scheme.build(&random_leaves(&mut rng, 8)).unwrap();
	assert_matches!(tree.branch(8), Err(Error::IndexOutOfRange { max: 7 }));
}

#[test]
fn test_verify_rejects_tampering() {
	let mut rng = StdRng::seed_from_u64(2);
	let scheme = BinaryMerkleTreeScheme::<Groestl256, _>::new(Groestl256ByteCompression::default());

	let leaves = random_leaves(&mut rng, 8);
	let tree = scheme.build(&leaves).unwrap();
	let root = tree.root();
	let branch = tree.branch(3).unwrap();

	let mut tampered_leaf = leaves[3].clone();
	tampered_leaf[0] ^= 1;
	assert_matches!(
		scheme.verify_branch(&root, 3, 3, &tampered_leaf, &branch),
		Err(Error::Verification(VerificationError::InvalidProof))
	);

	// A valid leaf checked at the wrong position.
	assert_matches!(
		scheme.verify_branch(&root, 3, 2, &leaves[3], &branch),
		Err(Error::Verification(VerificationError::InvalidProof))
	);

	let mut tampered_branch = branch.clone();
	tampered_branch[1][0] ^= 1;
	assert_matches!(
		scheme.verify_branch(&root, 3, 3, &leaves[3], &tampered_branch),
		Err(Error::Verification(VerificationError::InvalidProof))
	);

	assert_matches!(
		scheme.verify_branch(&root, 3, 3, &leaves[3], &branch[..2]),
		Err(Error::Verification(VerificationError::IncorrectBranchLength { expected: 3 }))
	);
	assert_matches!(
		scheme.verify_branch(&root, 3, 8, &leaves[3], &branch),
		Err(Error::IndexOutOfRange { max: 7 })
	);
}
