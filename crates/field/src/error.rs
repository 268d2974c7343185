// Copyright 2023-2024 Irreducible Inc.

/// Error thrown when a field operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("index {index} is out of range 0..{max}")]
	IndexOutOfRange { index: usize, max: usize },
	/// Thrown when trying to initialize a field element with a value that has no faithful image
	/// in the field, such as an integer wider than a binary field.
	#[error("value is not in the field")]
	NotInField,
}
