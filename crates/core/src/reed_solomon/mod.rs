// Copyright 2024-2025 Irreducible Inc.

mod error;
pub mod reed_solomon;

pub use error::*;
pub use reed_solomon::*;
