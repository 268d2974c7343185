// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Debug, Display},
	hash::Hash,
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand::RngCore;
use simple_binius_utils::SerializeFixedWidth;

use crate::Error;

/// This trait is based on `ff::Field` with some unused functionality removed.
///
/// Elements are not required to be `Copy`, so that exact arbitrary-precision numbers can be used
/// as a field. `Default` must return [`Field::zero`].
pub trait Field:
	Sized
	+ Eq
	+ Clone
	+ Default
	+ Send
	+ Sync
	+ Debug
	+ Display
	+ Hash
	+ 'static
	+ Neg<Output = Self>
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Mul<Output = Self>
	+ Sum
	+ Product
	+ for<'a> Sum<&'a Self>
	+ for<'a> Product<&'a Self>
	+ AddAssign
	+ SubAssign
	+ MulAssign
	+ SerializeFixedWidth
{
	/// The zero element of the field, the additive identity.
	fn zero() -> Self;

	/// The one element of the field, the multiplicative identity.
	fn one() -> Self;

	/// Returns an element chosen uniformly at random using a user-provided RNG.
	fn random(rng: impl RngCore) -> Self;

	/// Lifts a small non-negative integer into the field.
	///
	/// Distinct integers in the supported range map to distinct elements, which is what lets
	/// `0, 1, 2, ...` be used as interpolation nodes. Fails with [`Error::NotInField`] when the
	/// integer has no such image, e.g. 300 in an 8-bit binary field.
	fn from_small_int(value: u64) -> Result<Self, Error>;

	/// Returns true iff this element is zero.
	fn is_zero(&self) -> bool {
		*self == Self::zero()
	}

	/// Returns the element multiplied by itself.
	fn square(&self) -> Self {
		self.clone() * self.clone()
	}

	/// Computes the multiplicative inverse of this element, failing if the element is zero.
	fn invert(&self) -> Option<Self>;

	/// Exponentiates `self` by `exp` with square-and-multiply.
	fn pow(&self, exp: u128) -> Self {
		let mut res = Self::one();
		for i in (0..u128::BITS - exp.leading_zeros()).rev() {
			res = res.square();
			if (exp >> i) & 1 == 1 {
				res *= self.clone();
			}
		}
		res
	}
}
