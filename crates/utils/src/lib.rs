// Copyright 2024 Ulvetanna Inc.

//! Small helpers shared by every crate in the workspace.

pub mod checked_arithmetics;
pub mod error_utils;
pub mod serialization;
pub mod tracing;

pub use serialization::{SerializationError, SerializeFixedWidth};
