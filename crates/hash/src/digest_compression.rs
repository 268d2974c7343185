// Copyright 2024-2025 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use digest::{Digest, Output};
use groestl_crypto::Groestl256;
use sha2::Sha256;

use crate::PseudoCompressionFunction;

/// Two-to-one compression of digests by hashing their concatenation.
pub struct DigestCompression<H> {
	_marker: PhantomData<fn() -> H>,
}

pub type Groestl256ByteCompression = DigestCompression<Groestl256>;
pub type Sha256ByteCompression = DigestCompression<Sha256>;

impl<H> Default for DigestCompression<H> {
	fn default() -> Self {
		Self {
			_marker: PhantomData,
		}
	}
}

impl<H> Clone for DigestCompression<H> {
	fn clone(&self) -> Self {
		Self::default()
	}
}

impl<H> fmt::Debug for DigestCompression<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DigestCompression").finish()
	}
}

impl<H: Digest> PseudoCompressionFunction<Output<H>, 2> for DigestCompression<H> {
	fn compress(&self, input: [Output<H>; 2]) -> Output<H> {
		H::new()
			.chain_update(input[0].as_slice())
			.chain_update(input[1].as_slice())
			.finalize()
	}
}
