// Copyright 2024 Irreducible Inc.

use std::marker::PhantomData;

use digest::Digest;

use super::sampling::CanSample;

/// Samples indices in `0..modulus` from a hash of a commitment.
///
/// The `i`-th sample is the hash of `commitment || [i]`, read as a little-endian integer and
/// reduced modulo `modulus`. Both parties derive the same sequence from the commitment alone.
/// The counter is hashed as a single byte, so at most 256 distinct samples exist.
#[derive(Debug, Clone)]
pub struct IndexChallenger<H> {
	commitment: Vec<u8>,
	modulus: usize,
	counter: usize,
	_marker: PhantomData<fn() -> H>,
}

impl<H> IndexChallenger<H> {
	/// Panics if `modulus` is zero.
	pub fn new(commitment: &[u8], modulus: usize) -> Self {
		assert!(modulus > 0, "cannot sample from an empty index range");
		Self {
			commitment: commitment.to_vec(),
			modulus,
			counter: 0,
			_marker: PhantomData,
		}
	}
}

impl<H: Digest> CanSample<usize> for IndexChallenger<H> {
	fn sample(&mut self) -> usize {
		debug_assert!(self.counter <= u8::MAX as usize);
		let digest = H::new()
			.chain_update(&self.commitment)
			.chain_update([self.counter as u8])
			.finalize();
		self.counter += 1;
		le_bytes_mod(&digest, self.modulus)
	}
}

/// Derives `n_challenges` column indices in `0..modulus` from a commitment root.
pub fn challenge_indices<H: Digest>(
	commitment: &[u8],
	n_challenges: usize,
	modulus: usize,
) -> Vec<usize> {
	IndexChallenger::<H>::new(commitment, modulus).sample_vec(n_challenges)
}

/// Reduces the little-endian integer encoded by `bytes` modulo `modulus`.
fn le_bytes_mod(bytes: &[u8], modulus: usize) -> usize {
	let modulus = modulus as u128;
	bytes
		.iter()
		.rev()
		.fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % modulus) as usize
}

#[cfg(test)]
mod tests {
	use simple_binius_hash::{hash_bytes, Groestl256, Sha256};

	use super::*;

	#[test]
	fn test_le_bytes_mod() {
		assert_eq!(le_bytes_mod(&[0x01, 0x02], 1000), 0x0201 % 1000);
		assert_eq!(le_bytes_mod(&[0xff; 32], 1), 0);
		assert_eq!(le_bytes_mod(&[7, 0, 0, 0], 16), 7);
		// 2^64 mod (2^64 - 1) == 1
		assert_eq!(le_bytes_mod(&[0, 0, 0, 0, 0, 0, 0, 0, 1], usize::MAX), 1);
	}

	#[test]
	fn test_sample_is_hash_of_commitment_and_counter() {
		let root = hash_bytes::<Sha256>(b"root");
		let indices = challenge_indices::<Sha256>(&root, 3, 1 << 20);

		for (i, &index) in indices.iter().enumerate() {
			let mut preimage = root.to_vec();
			preimage.push(i as u8);
			let digest = hash_bytes::<Sha256>(&preimage);
			assert_eq!(index, le_bytes_mod(&digest, 1 << 20));
			assert!(index < 1 << 20);
		}
	}

	#[test]
	fn test_challenges_are_deterministic() {
		let root = hash_bytes::<Groestl256>(b"root");
		let mut challenger = IndexChallenger::<Groestl256>::new(&root, 64);
		let first: [usize; 4] = challenger.sample_array();
		assert_eq!(first.to_vec(), challenge_indices::<Groestl256>(&root, 4, 64));

		let other_root = hash_bytes::<Groestl256>(b"other root");
		let many = challenge_indices::<Groestl256>(&root, 32, 1 << 16);
		assert_ne!(many, challenge_indices::<Groestl256>(&other_root, 32, 1 << 16));
	}
}
