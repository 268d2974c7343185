// Copyright 2024 Irreducible Inc.

//! Non-interactive derivation of the verifier's column queries from the prover's commitment.

mod index_challenger;
mod sampling;

pub use index_challenger::*;
pub use sampling::*;
