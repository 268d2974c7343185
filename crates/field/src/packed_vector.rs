// Copyright 2024 Irreducible Inc.

use std::{
	array,
	iter::Sum,
	ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use bytes::BufMut;
use simple_binius_utils::{SerializationError, SerializeFixedWidth};

use crate::{Error, Field, PackedField};

/// A fixed-length vector of field elements with componentwise arithmetic.
///
/// Used for the packed construction, where each entry of the committed table is a vector and the
/// Reed–Solomon code runs over vectors rather than over single elements. Multiplication by a
/// scalar scales every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedVector<F, const N: usize>(pub [F; N]);

impl<F: Field, const N: usize> PackedVector<F, N> {
	pub const fn new(values: [F; N]) -> Self {
		Self(values)
	}

	pub fn into_inner(self) -> [F; N] {
		self.0
	}
}

impl<F: Field, const N: usize> Default for PackedVector<F, N> {
	fn default() -> Self {
		Self(array::from_fn(|_| F::zero()))
	}
}

impl<F: Field, const N: usize> From<[F; N]> for PackedVector<F, N> {
	fn from(values: [F; N]) -> Self {
		Self(values)
	}
}

impl<F: Field, const N: usize> Add for PackedVector<F, N> {
	type Output = Self;

	fn add(mut self, rhs: Self) -> Self::Output {
		self += rhs;
		self
	}
}

impl<F: Field, const N: usize> Sub for PackedVector<F, N> {
	type Output = Self;

	fn sub(mut self, rhs: Self) -> Self::Output {
		self -= rhs;
		self
	}
}

impl<F: Field, const N: usize> Mul for PackedVector<F, N> {
	type Output = Self;

	fn mul(mut self, rhs: Self) -> Self::Output {
		self *= rhs;
		self
	}
}

impl<F: Field, const N: usize> Mul<F> for PackedVector<F, N> {
	type Output = Self;

	fn mul(mut self, rhs: F) -> Self::Output {
		self *= rhs;
		self
	}
}

impl<F: Field, const N: usize> AddAssign for PackedVector<F, N> {
	fn add_assign(&mut self, rhs: Self) {
		for (x, y) in self.0.iter_mut().zip(rhs.0) {
			*x += y;
		}
	}
}

impl<F: Field, const N: usize> SubAssign for PackedVector<F, N> {
	fn sub_assign(&mut self, rhs: Self) {
		for (x, y) in self.0.iter_mut().zip(rhs.0) {
			*x -= y;
		}
	}
}

impl<F: Field, const N: usize> MulAssign for PackedVector<F, N> {
	fn mul_assign(&mut self, rhs: Self) {
		for (x, y) in self.0.iter_mut().zip(rhs.0) {
			*x *= y;
		}
	}
}

impl<F: Field, const N: usize> MulAssign<F> for PackedVector<F, N> {
	fn mul_assign(&mut self, rhs: F) {
		for x in &mut self.0 {
			*x *= rhs.clone();
		}
	}
}

impl<F: Field, const N: usize> Sum for PackedVector<F, N> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::default(), |acc, x| acc + x)
	}
}

/// Components are written back to back, each with the batch width.
impl<F: Field, const N: usize> SerializeFixedWidth for PackedVector<F, N> {
	const MAX_BIT_LEN: Option<usize> = F::MAX_BIT_LEN;

	fn bit_len(&self) -> usize {
		self.0.iter().map(|x| x.bit_len()).max().unwrap_or(0)
	}

	fn n_words() -> usize {
		N * F::n_words()
	}

	fn serialize_le(
		&self,
		width: usize,
		mut write_buf: impl BufMut,
	) -> Result<(), SerializationError> {
		self.0
			.iter()
			.try_for_each(|x| x.serialize_le(width, &mut write_buf))
	}
}

impl<F: Field, const N: usize> PackedField for PackedVector<F, N> {
	type Scalar = F;

	const WIDTH: usize = N;

	fn get_checked(&self, i: usize) -> Result<F, Error> {
		self.0
			.get(i)
			.cloned()
			.ok_or(Error::IndexOutOfRange { index: i, max: N })
	}

	fn set_checked(&mut self, i: usize, scalar: F) -> Result<(), Error> {
		let slot = self
			.0
			.get_mut(i)
			.ok_or(Error::IndexOutOfRange { index: i, max: N })?;
		*slot = scalar;
		Ok(())
	}

	fn broadcast(scalar: F) -> Self {
		Self(array::from_fn(|_| scalar.clone()))
	}

	fn from_fn(f: impl FnMut(usize) -> F) -> Self {
		Self(array::from_fn(f))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{BinaryField16b, Rational};

	type P = PackedVector<BinaryField16b, 4>;

	#[test]
	fn test_componentwise_ops() {
		let a = P::from_fn(|i| BinaryField16b::new(i as u16 + 1));
		let b = P::broadcast(BinaryField16b::new(3));
		assert_eq!((a + b).get(0), BinaryField16b::new(2));
		assert_eq!((a * b).get(2), BinaryField16b::new(3) * BinaryField16b::new(3));
		assert_eq!(a - a, P::default());
	}

	#[test]
	fn test_scale_by_scalar() {
		let a = PackedVector::new([Rational::from_integer(2), Rational::from_integer(-3)]);
		assert_eq!(a.clone() - a.clone(), PackedVector::default());
		let scaled = a * Rational::from_integer(5);
		assert_eq!(
			scaled.into_inner(),
			[Rational::from_integer(10), Rational::from_integer(-15)]
		);
	}

	#[test]
	fn test_get_set_out_of_range() {
		let mut a = P::default();
		assert_eq!(a.get_checked(4), Err(Error::IndexOutOfRange { index: 4, max: 4 }));
		assert!(a.set_checked(3, BinaryField16b::new(7)).is_ok());
		assert_eq!(a.iter().collect::<Vec<_>>()[3], BinaryField16b::new(7));
	}

	#[test]
	fn test_serialize_le() {
		let a = P::from_fn(|i| BinaryField16b::new(0x0100 * i as u16));
		let mut buf = Vec::new();
		a.serialize_le(2, &mut buf).unwrap();
		assert_eq!(buf, [0, 0, 0, 1, 0, 2, 0, 3]);
		assert_eq!(a.bit_len(), 10);
		assert_eq!(P::n_words(), 4);
	}
}
