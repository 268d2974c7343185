// Copyright 2023-2025 Irreducible Inc.

//! Hash functions used to commit to codewords and to derive Fiat–Shamir challenges.
//!
//! Byte hashing is delegated to any [`digest::Digest`] implementation. Grøstl-256 is the default
//! throughout the workspace, with SHA-256 available as an alternative.

mod compression;
mod digest_compression;

pub use compression::*;
pub use digest::{Digest, Output};
pub use digest_compression::*;
pub use groestl_crypto::Groestl256;
pub use sha2::Sha256;

/// Hashes a byte string with the digest `H`.
pub fn hash_bytes<H: Digest>(data: impl AsRef<[u8]>) -> Output<H> {
	H::digest(data)
}
