// Copyright 2024 Irreducible Inc.

use std::{
	fmt::{self, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytes::BufMut;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rand::{Rng, RngCore};
use simple_binius_utils::{serialization::write_le_bytes, SerializationError, SerializeFixedWidth};

use crate::{Error, Field};

/// Exact arbitrary-precision rational numbers.
///
/// This is the field used to run the protocol over plain integers: integers embed exactly and the
/// divisions performed by Lagrange interpolation never lose precision. Values are kept reduced
/// with a positive denominator, so structural equality is numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational(BigRational);

impl Rational {
	pub fn from_integer(value: impl Into<BigInt>) -> Self {
		Self(BigRational::from_integer(value.into()))
	}

	/// Builds `num / den` in lowest terms. Returns `None` when `den` is zero.
	pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Option<Self> {
		let den = den.into();
		(!den.is_zero()).then(|| Self(BigRational::new(num.into(), den)))
	}

	pub fn numerator(&self) -> &BigInt {
		self.0.numer()
	}

	pub fn denominator(&self) -> &BigInt {
		self.0.denom()
	}

	pub fn is_integer(&self) -> bool {
		self.0.is_integer()
	}

	pub fn into_inner(self) -> BigRational {
		self.0
	}
}

/// Maps `0, -1, 1, -2, 2, ...` to `0, 1, 2, 3, 4, ...`.
fn zigzag(value: &BigInt) -> BigUint {
	let doubled = value.magnitude() << 1u32;
	if value.is_negative() {
		doubled - 1u32
	} else {
		doubled
	}
}

impl Default for Rational {
	fn default() -> Self {
		Self(BigRational::zero())
	}
}

impl From<i64> for Rational {
	fn from(value: i64) -> Self {
		Self::from_integer(value)
	}
}

impl From<BigRational> for Rational {
	fn from(value: BigRational) -> Self {
		Self(value)
	}
}

impl Neg for Rational {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self(-self.0)
	}
}

impl Add for Rational {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 + rhs.0)
	}
}

impl Sub for Rational {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0 - rhs.0)
	}
}

impl Mul for Rational {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		Self(self.0 * rhs.0)
	}
}

impl AddAssign for Rational {
	fn add_assign(&mut self, rhs: Self) {
		self.0 += rhs.0;
	}
}

impl SubAssign for Rational {
	fn sub_assign(&mut self, rhs: Self) {
		self.0 -= rhs.0;
	}
}

impl MulAssign for Rational {
	fn mul_assign(&mut self, rhs: Self) {
		self.0 *= rhs.0;
	}
}

impl Sum for Rational {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for Rational {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), |acc, x| acc + x.clone())
	}
}

impl Product for Rational {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for Rational {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::one(), |acc, x| acc * x.clone())
	}
}

/// Encodes as the zig-zag numerator followed by the denominator, `width` bytes each.
impl SerializeFixedWidth for Rational {
	const MAX_BIT_LEN: Option<usize> = None;

	fn bit_len(&self) -> usize {
		zigzag(self.numerator())
			.bits()
			.max(self.denominator().magnitude().bits()) as usize
	}

	fn n_words() -> usize {
		2
	}

	fn serialize_le(
		&self,
		width: usize,
		mut write_buf: impl BufMut,
	) -> Result<(), SerializationError> {
		write_le_bytes(&zigzag(self.numerator()).to_bytes_le(), width, &mut write_buf)?;
		write_le_bytes(&self.denominator().magnitude().to_bytes_le(), width, &mut write_buf)
	}
}

impl Field for Rational {
	fn zero() -> Self {
		Self(BigRational::zero())
	}

	fn one() -> Self {
		Self(BigRational::one())
	}

	/// A uniformly random integer in `-1000..1000`. The field is infinite, so there is no uniform
	/// distribution over all of it.
	fn random(mut rng: impl RngCore) -> Self {
		Self::from_integer(rng.gen_range(-1000i64..1000))
	}

	fn from_small_int(value: u64) -> Result<Self, Error> {
		Ok(Self::from_integer(value))
	}

	fn invert(&self) -> Option<Self> {
		(!self.0.is_zero()).then(|| Self(self.0.recip()))
	}
}

impl Display for Rational {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.is_integer() {
			write!(f, "{}", self.numerator())
		} else {
			write!(f, "{}/{}", self.numerator(), self.denominator())
		}
	}
}
