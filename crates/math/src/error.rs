// Copyright 2024 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the query must have size {expected}")]
	IncorrectQuerySize { expected: usize },
	#[error("the evaluation table length must be a power of two")]
	PowerOfTwoLengthRequired,
	#[error("attempted to divide by zero")]
	DivisionByZero,
	#[error("domain size is larger than the field")]
	DomainSizeTooLarge,
}
