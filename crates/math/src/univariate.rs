// Copyright 2023-2024 Irreducible Inc.

use crate::Error;
use simple_binius_field::{Field, PackedField};

/// Evaluates a univariate polynomial given by its coefficients, lowest degree first.
///
/// Uses Horner's method. With packed coefficients every lane is evaluated at the same point.
pub fn eval_poly_at<P: PackedField>(coeffs: &[P], x: P::Scalar) -> P {
	coeffs
		.iter()
		.rev()
		.fold(P::default(), |acc, coeff| acc * x.clone() + coeff.clone())
}

/// Multiplies two polynomials in coefficient form.
///
/// The result has `a.len() + b.len() - 1` coefficients, or none if either input is empty.
pub fn mul_polys<P: PackedField>(a: &[P], b: &[P]) -> Vec<P> {
	if a.is_empty() || b.is_empty() {
		return Vec::new();
	}

	let mut result = vec![P::default(); a.len() + b.len() - 1];
	for (i, a_i) in a.iter().enumerate() {
		for (j, b_j) in b.iter().enumerate() {
			result[i + j] += a_i.clone() * b_j.clone();
		}
	}
	result
}

/// Lifts the integers `0, 1, ..., size - 1` into the field.
///
/// These are the interpolation nodes of the Reed–Solomon code. Fails if the field cannot
/// represent all of them as distinct elements.
pub fn small_int_domain<F: Field>(size: usize) -> Result<Vec<F>, Error> {
	(0..size as u64)
		.map(|i| F::from_small_int(i).map_err(|_| Error::DomainSizeTooLarge))
		.collect()
}

/// Computes the Lagrange basis polynomial over the nodes `0, 1, ..., size - 1` that targets
/// `point`.
///
/// The result is $\prod_{i \ne point} (X - i) / \prod_{i \ne point} (point - i)$ in coefficient
/// form. When `point` is one of the nodes it is one there and zero at every other node.
///
/// ## Preconditions
///
/// * The nodes must be distinct field elements, which [`small_int_domain`] checks. Under that
///   precondition the denominator never vanishes, and `DivisionByZero` is returned otherwise.
pub fn compute_lagrange_poly<F: Field>(size: usize, point: F) -> Result<Vec<F>, Error> {
	let nodes = small_int_domain::<F>(size)?;

	let mut numerator = vec![F::one()];
	let mut denominator = F::one();
	for node in nodes.into_iter().filter(|node| *node != point) {
		denominator *= point.clone() - node.clone();
		numerator = mul_polys(&numerator, &[-node, F::one()]);
	}

	let denominator_inv = denominator.invert().ok_or(Error::DivisionByZero)?;
	Ok(numerator
		.into_iter()
		.map(|coeff| coeff * denominator_inv.clone())
		.collect())
}
