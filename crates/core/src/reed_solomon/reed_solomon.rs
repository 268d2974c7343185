// Copyright 2023-2025 Irreducible Inc.

//! [Reed–Solomon] codes over the small integer evaluation domain.
//!
//! See [`ReedSolomonCode`] for details.
//!
//! [Reed–Solomon]: <https://en.wikipedia.org/wiki/Reed%E2%80%93Solomon_error_correction>

use getset::Getters;
use rayon::prelude::*;
use simple_binius_field::{Field, PackedField};
use simple_binius_math::{compute_lagrange_poly, eval_poly_at, small_int_domain};
use simple_binius_utils::bail;
use tracing::instrument;

use super::error::Error;
use crate::linear_code::LinearCode;

/// A systematic Reed–Solomon code whose messages are evaluations at `0, 1, ..., dim - 1`.
///
/// A message is interpreted as the values of its unique interpolating polynomial of degree less
/// than `dim`, and the codeword continues those values at the points `dim, ..., len - 1`. The
/// Lagrange basis over the message nodes is computed once on construction, naively in
/// $O(dim^2)$ field operations per basis polynomial, and the basis values at every new point are
/// cached, so encoding costs $O(dim)$ per new symbol.
#[derive(Debug, Clone, Getters)]
pub struct ReedSolomonCode<F: Field> {
	dim: usize,
	inv_rate: usize,
	/// Values of the Lagrange basis at each point beyond the message nodes.
	///
	/// Entry `k` holds the `dim` basis values at the point `dim + k`.
	#[get = "pub"]
	extension_weights: Vec<Vec<F>>,
}

impl<F: Field> ReedSolomonCode<F> {
	/// Constructs a code with dimension `dim` and block length `dim * inv_rate`.
	///
	/// ## Throws
	///
	/// * `InvalidInvRate` if `inv_rate` is zero
	/// * `DomainSizeTooLarge` if the field cannot represent `dim * inv_rate` distinct integers
	#[instrument(skip_all, level = "debug")]
	pub fn new(dim: usize, inv_rate: usize) -> Result<Self, Error> {
		if inv_rate == 0 {
			bail!(Error::InvalidInvRate);
		}
		let len = dim.checked_mul(inv_rate).ok_or(Error::DomainSizeTooLarge)?;
		let domain = small_int_domain::<F>(len).map_err(|_| Error::DomainSizeTooLarge)?;
		let (nodes, new_points) = domain.split_at(dim);

		let basis = nodes
			.par_iter()
			.map(|node| compute_lagrange_poly(dim, node.clone()))
			.collect::<Result<Vec<_>, _>>()?;

		let extension_weights = new_points
			.par_iter()
			.map(|x| {
				basis
					.iter()
					.map(|basis_i| eval_poly_at(basis_i, x.clone()))
					.collect()
			})
			.collect();

		Ok(Self {
			dim,
			inv_rate,
			extension_weights,
		})
	}
}

impl<F: Field> LinearCode for ReedSolomonCode<F> {
	type F = F;
	type EncodeError = Error;

	fn dim(&self) -> usize {
		self.dim
	}

	fn inv_rate(&self) -> usize {
		self.inv_rate
	}

	fn encode<P>(&self, message: &[P]) -> Result<Vec<P>, Error>
	where
		P: PackedField<Scalar = F>,
	{
		if message.len() != self.dim {
			bail!(Error::IncorrectMessageLength { expected: self.dim });
		}

		let mut codeword = Vec::with_capacity(self.len());
		codeword.extend_from_slice(message);
		codeword.par_extend(self.extension_weights.par_iter().map(|weights| {
			message
				.iter()
				.zip(weights)
				.map(|(value, weight)| value.clone() * weight.clone())
				.sum::<P>()
		}));
		Ok(codeword)
	}
}

/// Extends `values`, read as evaluations at `0, ..., N - 1`, to the evaluations of the same
/// polynomial at `0, ..., factor * N - 1`.
///
/// Convenience wrapper that builds a one-off [`ReedSolomonCode`]. Callers extending many vectors
/// of the same length should construct the code once.
pub fn extend<P: PackedField>(values: &[P], factor: usize) -> Result<Vec<P>, Error> {
	ReedSolomonCode::<P::Scalar>::new(values.len(), factor)?.encode(values)
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use proptest::prelude::*;
	use simple_binius_field::{BinaryField32b, BinaryField4b, Goldilocks, PackedVector, Rational};

	use super::*;

	fn rationals(values: &[i128]) -> Vec<Rational> {
		values.iter().copied().map(Rational::from_integer).collect()
	}

	#[test]
	fn test_extend_squares() {
		let extended = extend(&rationals(&[1, 4, 9, 16]), 2).unwrap();
		assert_eq!(extended, rationals(&[1, 4, 9, 16, 25, 36, 49, 64]));
	}

	#[test]
	fn test_extend_row_of_table() {
		// Values grow well past the width of the inputs.
		let extended = extend(&rationals(&[15, 92]), 8).unwrap();
		let expected = (0..16).map(|x| 15 + 77 * x).collect::<Vec<_>>();
		assert_eq!(extended, rationals(&expected));
	}

	#[test]
	fn test_extend_matches_polynomial_evaluation() {
		let coeffs = [5, 0, 7, 11].map(Goldilocks::new);
		let values = (0..4)
			.map(|x| eval_poly_at(&coeffs, Goldilocks::new(x)))
			.collect::<Vec<_>>();
		let extended = extend(&values, 4).unwrap();
		for (x, &value) in extended.iter().enumerate() {
			assert_eq!(value, eval_poly_at(&coeffs, Goldilocks::new(x as u64)));
		}
	}

	#[test]
	fn test_extend_long_row_exactly() {
		// Lagrange denominators over 32 nodes are products up to 31!
		let coeffs = rationals(&[3, 0, -2, 1]);
		let values = (0..32)
			.map(|x| eval_poly_at(&coeffs, Rational::from_integer(x)))
			.collect::<Vec<_>>();
		let extended = extend(&values, 8).unwrap();
		assert_eq!(extended.len(), 256);
		for (x, value) in extended.iter().enumerate() {
			assert_eq!(value, &eval_poly_at(&coeffs, Rational::from_integer(x as i128)));
		}
	}

	#[test]
	fn test_extend_packed() {
		let values = [
			PackedVector([Rational::from_integer(1), Rational::from_integer(2)]),
			PackedVector([Rational::from_integer(4), Rational::from_integer(2)]),
		];
		let extended = extend(&values, 2).unwrap();
		assert_eq!(
			extended[3].clone().into_inner(),
			[Rational::from_integer(10), Rational::from_integer(2)]
		);
	}

	#[test]
	fn test_code_parameters() {
		let code = ReedSolomonCode::<BinaryField32b>::new(4, 8).unwrap();
		assert_eq!(code.dim(), 4);
		assert_eq!(code.len(), 32);
		assert_eq!(code.extension_weights().len(), 28);
	}

	#[test]
	fn test_code_errors() {
		assert_matches!(
			ReedSolomonCode::<BinaryField4b>::new(4, 8),
			Err(Error::DomainSizeTooLarge)
		);
		assert_matches!(ReedSolomonCode::<Goldilocks>::new(4, 0), Err(Error::InvalidInvRate));

		let code = ReedSolomonCode::<Goldilocks>::new(4, 2).unwrap();
		assert_matches!(
			code.encode(&[Goldilocks::ONE; 3]),
			Err(Error::IncorrectMessageLength { expected: 4 })
		);
	}

	proptest! {
		#[test]
		fn test_extension_fixpoint(values in prop::collection::vec(-1000i128..1000, 1..9)) {
			let values = rationals(&values);
			let extended = extend(&values, 8).unwrap();
			prop_assert_eq!(extended.len(), 8 * values.len());
			prop_assert_eq!(&extended[..values.len()], &values[..]);
		}

		#[test]
		fn test_extension_linearity(
			a in prop::collection::vec(any::<u32>(), 8),
			b in prop::collection::vec(any::<u32>(), 8),
			c1 in any::<u32>(),
			c2 in any::<u32>(),
		) {
			let a = a.into_iter().map(BinaryField32b::new).collect::<Vec<_>>();
			let b = b.into_iter().map(BinaryField32b::new).collect::<Vec<_>>();
			let (c1, c2) = (BinaryField32b::new(c1), BinaryField32b::new(c2));

			let code = ReedSolomonCode::<BinaryField32b>::new(8, 8).unwrap();
			let combined = a
				.iter()
				.zip(&b)
				.map(|(&a_i, &b_i)| c1 * a_i + c2 * b_i)
				.collect::<Vec<_>>();

			let lhs = code.encode(&combined).unwrap();
			let rhs = code
				.encode(&a)
				.unwrap()
				.into_iter()
				.zip(code.encode(&b).unwrap())
				.map(|(x, y)| c1 * x + c2 * y)
				.collect::<Vec<_>>();
			prop_assert_eq!(lhs, rhs);
		}
	}
}
