// Copyright 2023 Ulvetanna Inc.

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

/// A finite field with characteristic 2.
pub trait BinaryField: Field {
	const N_BITS: usize;
}

/// Macro to generate an implementation of a BinaryField.
///
/// Several methods must be implemented separately directly on the struct
/// - fn multiply(self, rhs: Self) -> Self;
/// - fn tower_square(self) -> Self;
/// - fn tower_invert(self) -> Option<Self>;
macro_rules! binary_field {
	($vis:vis $name:ident($typ:ty), $n_bits:expr) => {
		#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#[repr(transparent)]
		$vis struct $name(pub(crate) $typ);

		impl $name {
			const MASK: $typ = <$typ>::MAX >> (<$typ>::BITS as usize - $n_bits);

			pub const ZERO: Self = Self(0);
			pub const ONE: Self = Self(1);

			pub const fn new(value: $typ) -> Self {
				assert!(value & !Self::MASK == 0);
				Self(value)
			}

			pub const fn new_checked(value: $typ) -> Result<Self, Error> {
				if value & !Self::MASK != 0 {
					return Err(Error::NotInField);
				}
				Ok(Self(value))
			}

			pub const fn val(self) -> $typ {
				self.0
			}
		}

		impl Neg for $name {
			type Output = Self;

			fn neg(self) -> Self::Output {
				self
			}
		}

		impl Add<Self> for $name {
			type Output = Self;

			#[allow(clippy::suspicious_arithmetic_impl)]
			fn add(self, rhs: Self) -> Self::Output {
				$name(self.0 ^ rhs.0)
			}
		}

		impl Sub<Self> for $name {
			type Output = Self;

			#[allow(clippy::suspicious_arithmetic_impl)]
			fn sub(self, rhs: Self) -> Self::Output {
				$name(self.0 ^ rhs.0)
			}
		}

		impl Mul<Self> for $name {
			type Output = Self;

			fn mul(self, rhs: Self) -> Self::Output {
				self.multiply(rhs)
			}
		}

		impl AddAssign<Self> for $name {
			#[allow(clippy::suspicious_op_assign_impl)]
			fn add_assign(&mut self, rhs: Self) {
				self.0 ^= rhs.0;
			}
		}

		impl SubAssign<Self> for $name {
			#[allow(clippy::suspicious_op_assign_impl)]
			fn sub_assign(&mut self, rhs: Self) {
				self.0 ^= rhs.0;
			}
		}

		impl MulAssign<Self> for $name {
			fn mul_assign(&mut self, rhs: Self) {
				*self = self.multiply(rhs);
			}
		}

		impl Sum<Self> for $name {
			fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
				iter.fold(Self::ZERO, |acc, x| acc + x)
			}
		}

		impl<'a> Sum<&'a Self> for $name {
			fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
				iter.fold(Self::ZERO, |acc, x| acc + *x)
			}
		}

		impl Product<Self> for $name {
			fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
				iter.fold(Self::ONE, |acc, x| acc * x)
			}
		}

		impl<'a> Product<&'a Self> for $name {
			fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
				iter.fold(Self::ONE, |acc, x| acc * *x)
			}
		}

		impl SerializeFixedWidth for $name {
			const MAX_BIT_LEN: Option<usize> = Some($n_bits);

			fn bit_len(&self) -> usize {
				uint_bit_len(self.0 as u128)
			}

			fn serialize_le(
				&self,
				width: usize,
				write_buf: impl BufMut,
			) -> Result<(), SerializationError> {
				write_uint_le(self.0 as u128, width, write_buf)
			}
		}

		impl Field for $name {
			fn zero() -> Self {
				Self::ZERO
			}

			fn one() -> Self {
				Self::ONE
			}

			fn random(mut rng: impl RngCore) -> Self {
				Self(rng.gen::<$typ>() & Self::MASK)
			}

			fn from_small_int(value: u64) -> Result<Self, Error> {
				if value as u128 > Self::MASK as u128 {
					return Err(Error::NotInField);
				}
				Ok(Self(value as $typ))
			}

			fn square(&self) -> Self {
				self.tower_square()
			}

			fn invert(&self) -> Option<Self> {
				self.tower_invert()
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				let width = <Self as BinaryField>::N_BITS.max(4) / 4;
				write!(f, "0x{repr:0>width$x}", repr = self.0)
			}
		}

		impl BinaryField for $name {
			const N_BITS: usize = $n_bits;
		}
	};
}

/// Generates one level of the tower, `$name = $subfield[X] / (X^2 + alpha X + 1)`, where alpha
/// is the generator of the previous level.
///
/// An element is stored as the concatenation of its low and high coordinates `a0 + a1 X`.
macro_rules! binary_tower_level {
	($subfield:ident($subtyp:ty) < $name:ident($typ:ty)) => {
		impl From<$name> for ($subfield, $subfield) {
			fn from(src: $name) -> ($subfield, $subfield) {
				let lo = (src.0 as $subtyp) & $subfield::MASK;
				let hi = (src.0 >> <$subfield as BinaryField>::N_BITS) as $subtyp;
				($subfield(lo), $subfield(hi))
			}
		}

		impl From<($subfield, $subfield)> for $name {
			fn from((a, b): ($subfield, $subfield)) -> Self {
				$name(a.0 as $typ | ((b.0 as $typ) << <$subfield as BinaryField>::N_BITS))
			}
		}

		impl From<$subfield> for $name {
			fn from(elem: $subfield) -> Self {
				$name(elem.0 as $typ)
			}
		}

		impl TryFrom<$name> for $subfield {
			type Error = Error;

			fn try_from(elem: $name) -> Result<Self, Self::Error> {
				if elem.0 >> <$subfield as BinaryField>::N_BITS == 0 {
					Ok($subfield(elem.0 as $subtyp))
				} else {
					Err(Error::NotInField)
				}
			}
		}

		impl $name {
			/// Karatsuba multiplication over the subfield.
			fn multiply(self, rhs: Self) -> Self {
				let (a0, a1) = self.into();
				let (b0, b1) = rhs.into();
				let z0 = a0 * b0;
				let z2 = a1 * b1;
				let z0z2 = z0 + z2;
				let z1 = (a0 + a1) * (b0 + b1) - z0z2;
				(z0z2, z1 + z2.mul_alpha()).into()
			}

			/// Multiplies by the generator of this level, which is the alpha of the next one.
			pub fn mul_alpha(self) -> Self {
				let (a0, a1) = self.into();
				(a1, a0 + a1.mul_alpha()).into()
			}

			fn tower_square(self) -> Self {
				let (a0, a1) = self.into();
				let z0 = a0.tower_square();
				let z2 = a1.tower_square();
				(z0 + z2, z2.mul_alpha()).into()
			}

			fn tower_invert(self) -> Option<Self> {
				let (a0, a1) = self.into();
				let a0z1 = a0 + a1.mul_alpha();
				let delta = a0 * a0z1 + a1.tower_square();
				delta.tower_invert().map(|delta_inv| {
					let inv0 = delta_inv * a0z1;
					let inv1 = delta_inv * a1;
					(inv0, inv1).into()
				})
			}
		}
	};
	($subfield:ident($subtyp:ty) < $name:ident($typ:ty) $(< $extfield:ident($exttyp:ty))+) => {
		binary_tower_level!($subfield($subtyp) < $name($typ));
		binary_tower_level!($name($typ) $(< $extfield($exttyp))+);
	};
}

binary_field!(pub BinaryField1b(u8), 1);
binary_field!(pub BinaryField2b(u8), 2);
binary_field!(pub BinaryField4b(u8), 4);
binary_field!(pub BinaryField8b(u8), 8);
binary_field!(pub BinaryField16b(u16), 16);
binary_field!(pub BinaryField32b(u32), 32);
binary_field!(pub BinaryField64b(u64), 64);
binary_field!(pub BinaryField128b(u128), 128);

impl BinaryField1b {
	fn multiply(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}

	/// The bottom of the tower is `GF(2)[X] / (X^2 + X + 1)`, so alpha is one.
	pub fn mul_alpha(self) -> Self {
		self
	}

	fn tower_square(self) -> Self {
		self
	}

	fn tower_invert(self) -> Option<Self> {
		(self.0 != 0).then_some(self)
	}
}

binary_tower_level!(
	BinaryField1b(u8)
	< BinaryField2b(u8)
	< BinaryField4b(u8)
	< BinaryField8b(u8)
	< BinaryField16b(u16)
	< BinaryField32b(u32)
	< BinaryField64b(u64)
	< BinaryField128b(u128)
);
