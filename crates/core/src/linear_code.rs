// Copyright 2023-2024 Irreducible Inc.

//! Linear error-correcting code traits.

use simple_binius_field::{Field, PackedField};

/// An encodable [linear error-correcting code](https://en.wikipedia.org/wiki/Linear_code) intended
/// for use in a Brakedown-style polynomial commitment scheme.
///
/// Codes are systematic: the first `dim()` symbols of a codeword are the message. Linearity means
/// that encoding commutes with taking linear combinations of messages, which is what lets a
/// verifier check a combination of rows against a combination of codeword columns.
///
/// Requirements:
/// - `len()` is a multiple of `dim()`
#[allow(clippy::len_without_is_empty)]
pub trait LinearCode {
	type F: Field;
	type EncodeError: std::error::Error + Send + Sync + 'static;

	/// The block length.
	fn len(&self) -> usize {
		self.dim() * self.inv_rate()
	}

	/// The dimension.
	fn dim(&self) -> usize;

	/// The reciprocal of the rate, ie. `self.len() / self.dim()`.
	fn inv_rate(&self) -> usize;

	/// Encodes a message of `dim()` symbols into a codeword of `len()` symbols.
	///
	/// Packed messages are encoded lane by lane.
	///
	/// ## Throws
	///
	/// * If the message does not have exactly `dim()` symbols.
	fn encode<P>(&self, message: &[P]) -> Result<Vec<P>, Self::EncodeError>
	where
		P: PackedField<Scalar = Self::F>;
}
