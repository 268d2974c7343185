// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the field cannot represent every point of the evaluation domain")]
	DomainSizeTooLarge,
	#[error("the expansion factor must be at least one")]
	InvalidInvRate,
	#[error("message must have length {expected}")]
	IncorrectMessageLength { expected: usize },
	#[error("math error: {0}")]
	Math(#[from] simple_binius_math::Error),
}
