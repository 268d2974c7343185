// Copyright 2024 Irreducible Inc.

/// The matrix an evaluation table is laid out as before encoding.
///
/// A table over $n$ variables has $2^{\lfloor n/2 \rfloor}$ columns and $2^{\lceil n/2 \rceil}$
/// rows. Row $i$ holds the table entries $i \cdot row\_length$ through
/// $(i + 1) \cdot row\_length - 1$, so the low coordinates of the point select the column and the
/// high coordinates select the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
	pub log_row_length: usize,
	pub log_row_count: usize,
}

impl GridShape {
	pub const fn new(n_vars: usize) -> Self {
		let log_row_length = n_vars / 2;
		Self {
			log_row_length,
			log_row_count: n_vars - log_row_length,
		}
	}

	pub const fn row_length(&self) -> usize {
		1 << self.log_row_length
	}

	pub const fn row_count(&self) -> usize {
		1 << self.log_row_count
	}
}
