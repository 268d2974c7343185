// Copyright 2023-2024 Irreducible Inc

mod binary_merkle_tree;
mod errors;
mod scheme;
#[cfg(test)]
mod tests;

pub use binary_merkle_tree::*;
pub use errors::*;
pub use scheme::*;
