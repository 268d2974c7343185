// Copyright 2024 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("The argument length must be a power of two.")]
	PowerOfTwoLengthRequired,
	#[error("Index exceeds Merkle tree base size: {max}")]
	IndexOutOfRange { max: usize },
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
	#[error("Merkle tree branch is expected to have length {expected}")]
	IncorrectBranchLength { expected: usize },
	#[error("the proof is invalid")]
	InvalidProof,
}
