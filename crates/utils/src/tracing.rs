// Copyright 2023 Ulvetanna Inc.

/// Installs a global `tracing` subscriber for binaries, benches and tests.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Prover and verifier spans are emitted at
/// `debug` level, per-challenge checks at `debug` as well. Calling this more than once is harmless.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_target(false))
		.try_init();
}
