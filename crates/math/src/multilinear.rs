// Copyright 2024 Irreducible Inc.

use crate::Error;
use rayon::prelude::*;
use simple_binius_field::{Field, PackedField};
use simple_binius_utils::{bail, checked_arithmetics::checked_log_2};

/// Evaluates the multilinear extension of `table` at `point`.
///
/// `table` holds the values of an $n$-variate multilinear polynomial over the boolean hypercube,
/// where bit $j$ of index $i$ selects the value of coordinate $j$. The result is
///
/// $$
/// \sum_i table_i \prod_j \begin{cases} r_j & \text{if bit } j \text{ of } i \text{ is set} \\
/// 1 - r_j & \text{otherwise} \end{cases}
/// $$
///
/// ## Throws
///
/// * `PowerOfTwoLengthRequired` if the table length is not a power of two
/// * `IncorrectQuerySize` if the point does not have one coordinate per variable
pub fn multilinear_poly_eval<P: PackedField>(table: &[P], point: &[P::Scalar]) -> Result<P, Error> {
	let n_vars = checked_log_2(table.len()).ok_or(Error::PowerOfTwoLengthRequired)?;
	if point.len() != n_vars {
		bail!(Error::IncorrectQuerySize { expected: n_vars });
	}

	let eval = table
		.par_iter()
		.enumerate()
		.map(|(i, value)| {
			let weight = point
				.iter()
				.enumerate()
				.map(|(j, r_j)| {
					if (i >> j) & 1 == 1 {
						r_j.clone()
					} else {
						P::Scalar::one() - r_j.clone()
					}
				})
				.product::<P::Scalar>();
			value.clone() * weight
		})
		.sum();
	Ok(eval)
}

/// Computes the tensor product expansion of an evaluation point.
///
/// Returns the $2^n$ values
///
/// $$
/// (1 - r_0, r_0) \otimes \ldots \otimes (1 - r_{n-1}, r_{n-1}),
/// $$
///
/// which are the values of the equality indicator $\widetilde{eq}(X, r)$ over the hypercube. For
/// any table of matching size, the inner product with this vector is
/// [`multilinear_poly_eval`] of the table at `point`.
pub fn evaluation_tensor_product<F: Field>(point: &[F]) -> Vec<F> {
	let mut values = vec![F::zero(); 1 << point.len()];
	values[0] = F::one();

	for (i, r_i) in point.iter().enumerate() {
		let (xs, ys) = values.split_at_mut(1 << i);
		xs.par_iter_mut()
			.zip(ys[..1 << i].par_iter_mut())
			.with_min_len(64)
			.for_each(|(x, y)| {
				// x * (1 - r_i) = x - x * r_i, so the product is shared
				let prod = x.clone() * r_i.clone();
				*x -= prod.clone();
				*y = prod;
			});
	}
	values
}

/// Inner product of packed values with scalar weights.
///
/// Panics if the lengths differ.
pub fn inner_product<P: PackedField>(values: &[P], weights: &[P::Scalar]) -> P {
	assert_eq!(values.len(), weights.len(), "inner product arguments must have equal length");
	values
		.iter()
		.zip(weights)
		.map(|(value, weight)| value.clone() * weight.clone())
		.sum()
}
