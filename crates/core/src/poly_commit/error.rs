// Copyright 2023 Ulvetanna Inc.

use simple_binius_utils::SerializationError;

use crate::{merkle_tree, reed_solomon};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the expansion factor must be a power of two and at least 2")]
	ExpansionFactorPowerOfTwoRequired,
	#[error("the number of challenges must be between 1 and {max}")]
	InvalidNumberOfChallenges { max: usize },
	#[error("{0}")]
	Math(#[from] simple_binius_math::Error),
	#[error("linear encoding error: {0}")]
	Encode(#[from] reed_solomon::Error),
	#[error("Merkle tree error: {0}")]
	MerkleTree(#[from] merkle_tree::Error),
	#[error("serialization error: {0}")]
	Serialization(#[from] SerializationError),
	#[error("verification failure: {0}")]
	Verification(#[from] VerificationError),
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
	#[error("incorrect number of column openings, expected {expected}")]
	NumberOfOpenings { expected: usize },
	#[error("column opening at index {index} has incorrect size, expected {expected}")]
	OpenedColumnSize { index: usize, expected: usize },
	#[error("partial evaluation (t') is the wrong size, expected {expected}")]
	PartialEvaluationSize { expected: usize },
	#[error("the evaluation point has too many coordinates")]
	EvaluationPointSize,
	#[error("element width is zero or wider than any value of the field")]
	InvalidElementWidth,
	#[error("Merkle branch for challenge column {challenge} is invalid")]
	MerkleBranch { challenge: usize },
	#[error("opened column {challenge} is inconsistent with the partial evaluation")]
	IncorrectColumnCombination { challenge: usize },
	#[error("evaluation is incorrect")]
	IncorrectEvaluation,
}
