// Copyright 2023 Ulvetanna Inc.

use simple_binius_field::PackedField;
use simple_binius_utils::SerializeFixedWidth;

/// Evaluation proof of [`super::BasicPCS`].
///
/// This is the only artifact passed from the prover to the verifier. The commitment `root` is
/// carried inside the proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<P: PackedField, D> {
	/// Merkle root over the encoded columns
	pub root: D,
	pub evaluation_point: Vec<P::Scalar>,
	/// The claimed value of the multilinear extension at `evaluation_point`
	pub eval: P,
	/// Combination of the unencoded rows by the tensor expansion of the high coordinates
	pub t_prime: Vec<P>,
	/// Encoded columns at the challenge indices
	pub columns: Vec<Vec<P>>,
	pub branches: Vec<Vec<D>>,
	/// Number of bytes per word each committed value was serialized with.
	///
	/// Covers the widest value of the encoded matrix, not only of the table, since encoding grows
	/// values over the integers. The verifier cannot recompute it from the opened columns alone.
	pub element_width: usize,
}

impl<P: PackedField, D: AsRef<[u8]>> Proof<P, D> {
	/// Approximate size of the proof in bytes.
	///
	/// Counts the digests and the field elements the verifier cannot recompute, serialized with
	/// `element_width`. The evaluation point is an input of the verifier and is not counted.
	pub fn proof_size(&self) -> usize {
		let digest_bytes = self.root.as_ref().len()
			+ self
				.branches
				.iter()
				.flatten()
				.map(|digest| digest.as_ref().len())
				.sum::<usize>();
		let n_elements =
			1 + self.t_prime.len() + self.columns.iter().map(Vec::len).sum::<usize>();
		digest_bytes + n_elements * <P as SerializeFixedWidth>::n_words() * self.element_width
	}
}
