// Copyright 2023-2024 Irreducible Inc.

use simple_binius_field::PackedField;

/// A polynomial commitment scheme for multilinear polynomials given by their evaluation tables.
///
/// The commitment is part of the proof: a proof binds the prover to the committed table and
/// claims the value of its multilinear extension at the point recorded in the proof.
pub trait PolyCommitScheme<P: PackedField> {
	type Proof;
	type Error: std::error::Error + Send + Sync + 'static;

	/// Commits to `table` and proves its evaluation at `point`.
	fn prove(&self, table: &[P], point: &[P::Scalar]) -> Result<Self::Proof, Self::Error>;

	/// Checks an evaluation proof, returning an error describing the first failed check.
	fn verify(&self, proof: &Self::Proof) -> Result<(), Self::Error>;
}
