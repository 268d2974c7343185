// Copyright 2024 Irreducible Inc.

//! Traits for working with field elements in groups.

use std::{
	fmt::Debug,
	iter::{self, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use simple_binius_utils::SerializeFixedWidth;

use crate::{Error, Field};

/// A group of field elements operated on componentwise.
///
/// This is the element type of the committed evaluation table. Evaluation points, Lagrange
/// weights and tensor products always live in [`PackedField::Scalar`], and packed values are
/// scaled by them with `Mul<Self::Scalar>`. Every [`Field`] is a `PackedField` of width one,
/// so the same code covers the plain and packed constructions.
pub trait PackedField:
	Default
	+ Debug
	+ Clone
	+ Eq
	+ Sized
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Mul<Output = Self>
	+ AddAssign
	+ SubAssign
	+ MulAssign
	+ Mul<Self::Scalar, Output = Self>
	+ MulAssign<Self::Scalar>
	+ Sum
	+ Send
	+ Sync
	+ SerializeFixedWidth
	+ 'static
{
	type Scalar: Field;

	/// The number of field elements packed into one packed element.
	const WIDTH: usize;

	/// Get the scalar at a given index.
	fn get_checked(&self, i: usize) -> Result<Self::Scalar, Error>;

	/// Set the scalar at a given index.
	fn set_checked(&mut self, i: usize, scalar: Self::Scalar) -> Result<(), Error>;

	/// Get the scalar at a given index.
	fn get(&self, i: usize) -> Self::Scalar {
		self.get_checked(i).expect("index must be less than width")
	}

	/// Set the scalar at a given index.
	fn set(&mut self, i: usize, scalar: Self::Scalar) {
		self.set_checked(i, scalar)
			.expect("index must be less than width")
	}

	fn iter(&self) -> impl Iterator<Item = Self::Scalar> + '_ {
		(0..Self::WIDTH).map(move |i| self.get(i))
	}

	/// Initialize every position to `scalar`.
	fn broadcast(scalar: Self::Scalar) -> Self;

	/// Construct a packed field element from a function that returns scalar values by index.
	fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;
}

impl<F: Field> PackedField for F {
	type Scalar = F;

	const WIDTH: usize = 1;

	fn get_checked(&self, i: usize) -> Result<Self::Scalar, Error> {
		(i == 0)
			.then(|| self.clone())
			.ok_or(Error::IndexOutOfRange { index: i, max: 1 })
	}

	fn set_checked(&mut self, i: usize, scalar: Self::Scalar) -> Result<(), Error> {
		if i != 0 {
			return Err(Error::IndexOutOfRange { index: i, max: 1 });
		}
		*self = scalar;
		Ok(())
	}

	fn iter(&self) -> impl Iterator<Item = Self::Scalar> + '_ {
		iter::once(self.clone())
	}

	fn broadcast(scalar: Self::Scalar) -> Self {
		scalar
	}

	fn from_fn(mut f: impl FnMut(usize) -> Self::Scalar) -> Self {
		f(0)
	}
}
