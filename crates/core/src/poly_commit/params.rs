// Copyright 2024 Irreducible Inc.

use getset::CopyGetters;
use simple_binius_utils::{bail, checked_arithmetics::log2_strict_usize, ensure};

use super::error::Error;

/// Parameters of [`super::BasicPCS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PcsParams {
	/// Ratio between the length of an encoded row and the length of a row.
	expansion_factor: usize,
	/// Number of columns opened by an evaluation proof.
	n_challenges: usize,
}

impl PcsParams {
	/// The challenge counter is hashed as a single byte.
	pub const MAX_CHALLENGES: usize = 256;

	pub fn new(expansion_factor: usize, n_challenges: usize) -> Result<Self, Error> {
		// The Merkle tree over encoded columns needs a power of two number of leaves
		if expansion_factor < 2 || !expansion_factor.is_power_of_two() {
			bail!(Error::ExpansionFactorPowerOfTwoRequired);
		}
		ensure!(
			(1..=Self::MAX_CHALLENGES).contains(&n_challenges),
			Error::InvalidNumberOfChallenges {
				max: Self::MAX_CHALLENGES
			}
		);
		Ok(Self {
			expansion_factor,
			n_challenges,
		})
	}

	/// Base-2 logarithm of the expansion factor.
	pub fn log_expansion_factor(&self) -> usize {
		log2_strict_usize(self.expansion_factor)
	}
}

impl Default for PcsParams {
	fn default() -> Self {
		Self {
			expansion_factor: 8,
			n_challenges: 4,
		}
	}
}
