// Copyright 2023-2024 Irreducible Inc.

mod basic_pcs;
mod error;
mod grid;
mod params;
mod pcs;
mod proof;

pub use basic_pcs::{BasicPCS, MAX_UNBOUNDED_ELEMENT_WIDTH};
pub use error::*;
pub use grid::GridShape;
pub use params::PcsParams;
pub use pcs::*;
pub use proof::Proof;
