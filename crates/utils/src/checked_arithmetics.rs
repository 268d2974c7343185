// Copyright 2024 Irreducible Inc.

/// Base-2 logarithm of `n`, panicking if `n` is not a power of two.
pub fn log2_strict_usize(n: usize) -> usize {
	assert!(n.is_power_of_two(), "{n} is not a power of two");
	n.trailing_zeros() as usize
}

/// Base-2 logarithm of `n`, or `None` if `n` is not a power of two.
pub fn checked_log_2(n: usize) -> Option<usize> {
	n.is_power_of_two().then(|| n.trailing_zeros() as usize)
}

/// Smallest number of bytes that holds `n_bits` bits. Never less than one.
pub const fn bytes_for_bits(n_bits: usize) -> usize {
	if n_bits == 0 {
		1
	} else {
		n_bits.div_ceil(8)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_log2_strict() {
		assert_eq!(log2_strict_usize(1), 0);
		assert_eq!(log2_strict_usize(2), 1);
		assert_eq!(log2_strict_usize(64), 6);
	}

	#[test]
	#[should_panic]
	fn test_log2_strict_fail() {
		_ = log2_strict_usize(6)
	}

	#[test]
	fn test_checked_log_2() {
		assert_eq!(checked_log_2(8), Some(3));
		assert_eq!(checked_log_2(0), None);
		assert_eq!(checked_log_2(12), None);
	}

	#[test]
	fn test_bytes_for_bits() {
		assert_eq!(bytes_for_bits(0), 1);
		assert_eq!(bytes_for_bits(1), 1);
		assert_eq!(bytes_for_bits(8), 1);
		assert_eq!(bytes_for_bits(9), 2);
		assert_eq!(bytes_for_bits(64), 8);
	}
}
