// Copyright 2024 Irreducible Inc.

use std::{
	fmt::{self, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytes::BufMut;
use rand::{Rng, RngCore};
use simple_binius_utils::{
	serialization::{uint_bit_len, write_uint_le},
	SerializationError, SerializeFixedWidth,
};

use crate::{Error, Field};

/// The prime field of integers modulo a 64-bit prime `MODULUS`, in canonical form.
///
/// `MODULUS` must be prime for [`Field::invert`] to be correct; this is not checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PrimeField64<const MODULUS: u64>(u64);

/// The Goldilocks field, integers modulo `2^64 - 2^32 + 1`.
pub type Goldilocks = PrimeField64<0xffff_ffff_0000_0001>;

/// Integers modulo the Mersenne prime `2^61 - 1`.
pub type Mersenne61 = PrimeField64<0x1fff_ffff_ffff_ffff>;

impl<const MODULUS: u64> PrimeField64<MODULUS> {
	pub const MODULUS: u64 = MODULUS;
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);

	/// Reduces `value` into the field.
	pub const fn new(value: u64) -> Self {
		Self(value % MODULUS)
	}

	pub const fn new_checked(value: u64) -> Result<Self, Error> {
		if value >= MODULUS {
			return Err(Error::NotInField);
		}
		Ok(Self(value))
	}

	/// The canonical representative in `0..MODULUS`.
	pub const fn val(self) -> u64 {
		self.0
	}
}

impl<const MODULUS: u64> Neg for PrimeField64<MODULUS> {
	type Output = Self;

	fn neg(self) -> Self::Output {
		if self.0 == 0 {
			self
		} else {
			Self(MODULUS - self.0)
		}
	}
}

impl<const MODULUS: u64> Add for PrimeField64<MODULUS> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let (sum, overflow) = self.0.overflowing_add(rhs.0);
		if overflow || sum >= MODULUS {
			Self(sum.wrapping_sub(MODULUS))
		} else {
			Self(sum)
		}
	}
}

impl<const MODULUS: u64> Sub for PrimeField64<MODULUS> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		if self.0 >= rhs.0 {
			Self(self.0 - rhs.0)
		} else {
			Self(self.0 + (MODULUS - rhs.0))
		}
	}
}

impl<const MODULUS: u64> Mul for PrimeField64<MODULUS> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		Self(((self.0 as u128 * rhs.0 as u128) % MODULUS as u128) as u64)
	}
}

impl<const MODULUS: u64> AddAssign for PrimeField64<MODULUS> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<const MODULUS: u64> SubAssign for PrimeField64<MODULUS> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<const MODULUS: u64> MulAssign for PrimeField64<MODULUS> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<const MODULUS: u64> Sum for PrimeField64<MODULUS> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a, const MODULUS: u64> Sum<&'a Self> for PrimeField64<MODULUS> {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + *x)
	}
}

impl<const MODULUS: u64> Product for PrimeField64<MODULUS> {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a, const MODULUS: u64> Product<&'a Self> for PrimeField64<MODULUS> {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * *x)
	}
}

impl<const MODULUS: u64> SerializeFixedWidth for PrimeField64<MODULUS> {
	const MAX_BIT_LEN: Option<usize> = Some(64);

	fn bit_len(&self) -> usize {
		uint_bit_len(self.0 as u128)
	}

	fn serialize_le(&self, width: usize, write_buf: impl BufMut) -> Result<(), SerializationError> {
		write_uint_le(self.0 as u128, width, write_buf)
	}
}

impl<const MODULUS: u64> Field for PrimeField64<MODULUS> {
	fn zero() -> Self {
		Self::ZERO
	}

	fn one() -> Self {
		Self::ONE
	}

	fn random(mut rng: impl RngCore) -> Self {
		Self(rng.gen_range(0..MODULUS))
	}

	fn from_small_int(value: u64) -> Result<Self, Error> {
		Self::new_checked(value)
	}

	/// Fermat inversion, `x^(p - 2)`.
	fn invert(&self) -> Option<Self> {
		(!self.is_zero()).then(|| self.pow((MODULUS - 2) as u128))
	}
}

impl<const MODULUS: u64> Display for PrimeField64<MODULUS> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
