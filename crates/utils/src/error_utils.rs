// Copyright 2024 Irreducible Inc.

/// Returns early with the given error, converted with `Into`.
///
/// With the `bail_panic` feature enabled this panics instead, which gives a backtrace pointing
/// at the exact check that failed. Useful when debugging a rejected proof.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err)
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into())
	};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct Failed(u32);

	fn check(value: u32) -> Result<u32, Failed> {
		ensure!(value < 10, Failed(value));
		if value == 7 {
			bail!(Failed(7));
		}
		Ok(value)
	}

	#[test]
	fn test_ensure_and_bail() {
		assert_eq!(check(3), Ok(3));
		assert_eq!(check(7), Err(Failed(7)));
		assert_eq!(check(12), Err(Failed(12)));
	}
}
