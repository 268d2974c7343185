// Copyright 2024-2025 Irreducible Inc.

use bytes::BufMut;

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum SerializationError {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("value needs more than {width} bytes")]
	ValueTooWide { width: usize },
	#[error("encoded length overflows usize")]
	LengthOverflow,
}

/// Values with a little-endian encoding whose width is picked by the caller.
///
/// The width is chosen once for a whole batch of values, usually as the smallest number of bytes
/// covering the widest value, so that every value of the batch encodes to the same length.
pub trait SerializeFixedWidth {
	/// Upper bound on [`Self::bit_len`] over all values, `None` if values are unbounded.
	const MAX_BIT_LEN: Option<usize>;

	/// Number of significant bits of the encoding.
	fn bit_len(&self) -> usize;

	/// Number of `width`-byte words written by [`Self::serialize_le`].
	fn n_words() -> usize {
		1
	}

	/// Writes `Self::n_words() * width` bytes.
	///
	/// Fails with [`SerializationError::ValueTooWide`] rather than truncating.
	fn serialize_le(&self, width: usize, write_buf: impl BufMut) -> Result<(), SerializationError>;
}

/// Writes the low `width` bytes of `value`, failing if any higher bit is set.
pub fn write_uint_le(
	value: u128,
	width: usize,
	write_buf: impl BufMut,
) -> Result<(), SerializationError> {
	write_le_bytes(&value.to_le_bytes(), width, write_buf)
}

/// Writes a little-endian byte string zero-extended or truncated to `width` bytes.
///
/// Only zero bytes may be truncated.
pub fn write_le_bytes(
	bytes: &[u8],
	width: usize,
	mut write_buf: impl BufMut,
) -> Result<(), SerializationError> {
	let (low, high) = bytes.split_at(bytes.len().min(width));
	if high.iter().any(|&byte| byte != 0) {
		return Err(SerializationError::ValueTooWide { width });
	}
	if write_buf.remaining_mut() < width {
		return Err(SerializationError::WriteBufferFull);
	}
	write_buf.put_slice(low);
	write_buf.put_bytes(0, width - low.len());
	Ok(())
}

/// Number of significant bits of an unsigned integer.
pub const fn uint_bit_len(value: u128) -> usize {
	(u128::BITS - value.leading_zeros()) as usize
}
