// Copyright 2023 Ulvetanna Inc.

use digest::{Digest, Output};
use getset::{CopyGetters, Getters};
use itertools::izip;
use rayon::prelude::*;
use simple_binius_field::PackedField;
use simple_binius_hash::{Groestl256, Groestl256ByteCompression, PseudoCompressionFunction};
use simple_binius_math::{
	evaluation_tensor_product, inner_product, multilinear_poly_eval, Error as MathError,
};
use simple_binius_utils::{
	bail,
	checked_arithmetics::{bytes_for_bits, checked_log_2},
	SerializationError, SerializeFixedWidth,
};
use tracing::{debug, instrument};

use super::{
	error::{Error, VerificationError},
	grid::GridShape,
	params::PcsParams,
	pcs::PolyCommitScheme,
	proof::Proof,
};
use crate::{
	fiat_shamir::challenge_indices, linear_code::LinearCode, merkle_tree::BinaryMerkleTreeScheme,
	reed_solomon::ReedSolomonCode,
};

/// Byte width limit for committed values whose type has no maximum bit length.
pub const MAX_UNBOUNDED_ELEMENT_WIDTH: usize = 1 << 16;

/// The basic small-field multilinear polynomial commitment scheme, following [DP23].
///
/// The evaluation table is laid out as a [`GridShape`] matrix. Every row is extended with a
/// [`ReedSolomonCode`] and the columns of the extended matrix are committed with a binary Merkle
/// tree. The evaluation at a point $r$ splits into a combination of rows by the tensor expansion
/// of the high coordinates of $r$, called $t'$, followed by a combination of the entries of $t'$
/// by the tensor expansion of the low coordinates. Because the code is linear, the verifier can
/// check $t'$ against a few opened columns of the committed matrix.
///
/// # Type Parameters
///
/// * `H`: The digest used for Merkle leaves and challenge derivation.
/// * `C`: The two-to-one compression used for inner Merkle nodes.
///
/// [DP23]: https://eprint.iacr.org/2023/1784
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct BasicPCS<H, C> {
	#[getset(get_copy = "pub")]
	params: PcsParams,
	#[getset(get = "pub")]
	merkle_scheme: BinaryMerkleTreeScheme<H, C>,
}

impl<H, C> BasicPCS<H, C> {
	pub fn new(params: PcsParams, compression: C) -> Self {
		Self {
			params,
			merkle_scheme: BinaryMerkleTreeScheme::new(compression),
		}
	}
}

impl BasicPCS<Groestl256, Groestl256ByteCompression> {
	pub fn new_using_groestl_merkle_tree(params: PcsParams) -> Self {
		Self::new(params, Groestl256ByteCompression::default())
	}
}

impl Default for BasicPCS<Groestl256, Groestl256ByteCompression> {
	fn default() -> Self {
		Self::new_using_groestl_merkle_tree(PcsParams::default())
	}
}

impl<H, C> BasicPCS<H, C>
where
	H: Digest,
	C: PseudoCompressionFunction<Output<H>, 2> + Sync,
{
	/// Commits to `table` and proves the evaluation of its multilinear extension at `point`.
	///
	/// ## Throws
	///
	/// * `PowerOfTwoLengthRequired` if the table length is not a power of two
	/// * `IncorrectQuerySize` if `point` does not have one coordinate per variable
	/// * `Encode` if the field is too small for the encoded row length
	#[instrument("BasicPCS::prove", skip_all, fields(n_vars = point.len()), level = "debug")]
	pub fn prove<P: PackedField>(
		&self,
		table: &[P],
		point: &[P::Scalar],
	) -> Result<Proof<P, Output<H>>, Error> {
		let n_vars = checked_log_2(table.len()).ok_or(MathError::PowerOfTwoLengthRequired)?;
		if point.len() != n_vars {
			bail!(MathError::IncorrectQuerySize { expected: n_vars });
		}

		let shape = GridShape::new(n_vars);
		let row_length = shape.row_length();
		let code = ReedSolomonCode::<P::Scalar>::new(row_length, self.params.expansion_factor())?;

		let extended_rows = extend_rows(&code, table)?;

		let row_combination = evaluation_tensor_product(&point[shape.log_row_length..]);
		let t_prime = (0..row_length)
			.into_par_iter()
			.map(|j| {
				table
					.iter()
					.skip(j)
					.step_by(row_length)
					.zip(&row_combination)
					.map(|(value, weight)| value.clone() * weight.clone())
					.sum::<P>()
			})
			.collect::<Vec<P>>();

		let columns = (0..code.len())
			.into_par_iter()
			.map(|j| extended_rows.iter().map(|row| row[j].clone()).collect::<Vec<_>>())
			.collect::<Vec<Vec<P>>>();

		// Extended values can be much wider than the table values, the width has to cover them
		let max_bit_len = extended_rows
			.par_iter()
			.flat_map_iter(|row| row.iter().map(|value| value.bit_len()))
			.max()
			.unwrap_or(0);
		let element_width = bytes_for_bits(max_bit_len);
		let max_width = max_element_width::<P>();
		if element_width > max_width {
			bail!(SerializationError::ValueTooWide { width: max_width });
		}

		let leaves = columns
			.par_iter()
			.map(|column| serialize_column(column, element_width))
			.collect::<Result<Vec<_>, _>>()?;
		let tree = self.merkle_scheme.build(&leaves)?;
		let root = tree.root();

		// The challenges depend on the root, so they can only be derived after commitment
		let challenges = challenge_indices::<H>(&root, self.params.n_challenges(), code.len());
		debug!(?challenges, "sampled column challenges");

		let (opened_columns, branches): (Vec<_>, Vec<_>) = challenges
			.iter()
			.map(|&challenge| -> Result<_, Error> {
				Ok((columns[challenge].clone(), tree.branch(challenge)?))
			})
			.collect::<Result<Vec<_>, _>>()?
			.into_iter()
			.unzip();

		let eval = multilinear_poly_eval(table, point)?;

		Ok(Proof {
			root,
			evaluation_point: point.to_vec(),
			eval,
			t_prime,
			columns: opened_columns,
			branches,
			element_width,
		})
	}

	/// Verifies an evaluation proof.
	///
	/// Checks, in order, the shape of the proof, the Merkle openings of the challenge columns, the
	/// consistency of each opened column with the encoding of $t'$, and finally the claimed
	/// evaluation against $t'$. The first failing check is reported.
	#[instrument(
		"BasicPCS::verify",
		skip_all,
		fields(n_vars = proof.evaluation_point.len()),
		level = "debug"
	)]
	pub fn verify<P: PackedField>(&self, proof: &Proof<P, Output<H>>) -> Result<(), Error> {
		let point = &proof.evaluation_point;
		if point.len() >= usize::BITS as usize {
			bail!(VerificationError::EvaluationPointSize);
		}

		let shape = GridShape::new(point.len());
		self.check_proof_shape(proof, shape)?;

		let code =
			ReedSolomonCode::<P::Scalar>::new(shape.row_length(), self.params.expansion_factor())?;
		let log_code_len = shape.log_row_length + self.params.log_expansion_factor();

		let challenges = challenge_indices::<H>(&proof.root, self.params.n_challenges(), code.len());

		for (&challenge, column, branch) in izip!(&challenges, &proof.columns, &proof.branches) {
			let result = serialize_column(column, proof.element_width)
				.map_err(Error::from)
				.and_then(|leaf| {
					self.merkle_scheme
						.verify_branch(&proof.root, log_code_len, challenge, &leaf, branch)
						.map_err(Error::from)
				});
			debug!(challenge, valid = result.is_ok(), "Merkle branch check");
			if let Err(err) = result {
				debug!(challenge, %err, "rejected Merkle opening");
				bail!(VerificationError::MerkleBranch { challenge });
			}
		}

		let extended_t_prime = code.encode(&proof.t_prime)?;
		let row_combination = evaluation_tensor_product(&point[shape.log_row_length..]);
		for (&challenge, column) in challenges.iter().zip(&proof.columns) {
			let computed = inner_product(column, &row_combination);
			let expected = &extended_t_prime[challenge];
			debug!(challenge, ?computed, ?expected, "column combination check");
			if &computed != expected {
				bail!(VerificationError::IncorrectColumnCombination { challenge });
			}
		}

		let col_combination = evaluation_tensor_product(&point[..shape.log_row_length]);
		let computed_eval = inner_product(&proof.t_prime, &col_combination);
		debug!(?computed_eval, claimed = ?proof.eval, "evaluation check");
		if computed_eval != proof.eval {
			bail!(VerificationError::IncorrectEvaluation);
		}

		Ok(())
	}
}

impl<P, H, C> PolyCommitScheme<P> for BasicPCS<H, C>
where
	P: PackedField,
	H: Digest,
	C: PseudoCompressionFunction<Output<H>, 2> + Sync,
{
	type Proof = Proof<P, Output<H>>;
	type Error = Error;

	fn prove(&self, table: &[P], point: &[P::Scalar]) -> Result<Self::Proof, Error> {
		Self::prove(self, table, point)
	}

	fn verify(&self, proof: &Self::Proof) -> Result<(), Error> {
		Self::verify(self, proof)
	}
}

impl<H, C> BasicPCS<H, C> {
	fn check_proof_shape<P: PackedField, D>(
		&self,
		proof: &Proof<P, D>,
		shape: GridShape,
	) -> Result<(), Error> {
		let n_challenges = self.params.n_challenges();
		if proof.columns.len() != n_challenges || proof.branches.len() != n_challenges {
			bail!(VerificationError::NumberOfOpenings {
				expected: n_challenges,
			});
		}

		for (index, column) in proof.columns.iter().enumerate() {
			if column.len() != shape.row_count() {
				bail!(VerificationError::OpenedColumnSize {
					index,
					expected: shape.row_count(),
				});
			}
		}

		if proof.t_prime.len() != shape.row_length() {
			bail!(VerificationError::PartialEvaluationSize {
				expected: shape.row_length(),
			});
		}

		if proof.element_width == 0 || proof.element_width > max_element_width::<P>() {
			bail!(VerificationError::InvalidElementWidth);
		}

		Ok(())
	}
}

/// Largest byte width a value of `P` may be committed with.
///
/// Types with unbounded encodings, such as exact rationals, are capped at
/// [`MAX_UNBOUNDED_ELEMENT_WIDTH`].
fn max_element_width<P: PackedField>() -> usize {
	<P as SerializeFixedWidth>::MAX_BIT_LEN.map_or(MAX_UNBOUNDED_ELEMENT_WIDTH, bytes_for_bits)
}

#[instrument(skip_all, level = "debug")]
fn extend_rows<P, LC>(code: &LC, table: &[P]) -> Result<Vec<Vec<P>>, LC::EncodeError>
where
	P: PackedField,
	LC: LinearCode<F = P::Scalar> + Sync,
{
	table
		.par_chunks_exact(code.dim())
		.map(|row| code.encode(row))
		.collect()
}

fn serialize_column<P: PackedField>(
	column: &[P],
	element_width: usize,
) -> Result<Vec<u8>, SerializationError> {
	let leaf_len = column
		.len()
		.checked_mul(<P as SerializeFixedWidth>::n_words())
		.and_then(|n_words| n_words.checked_mul(element_width))
		.ok_or(SerializationError::LengthOverflow)?;
	let mut leaf = Vec::with_capacity(leaf_len);
	for value in column {
		value.serialize_le(element_width, &mut leaf)?;
	}
	Ok(leaf)
}
