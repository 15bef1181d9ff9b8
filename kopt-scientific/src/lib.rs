//! Scientific crate contains logic to read point sets and tours used to benchmark k-opt local search
//! for the Euclidean TSP.
//!
//!
//! # Supported formats
//!
//! - **plain**: a list of whitespace separated coordinates, one point per line
//! - **tsplib** subset of TSPLIB95 format: `TSP` problems with `EUC_2D` edge weights and `TOUR` files
//!
//! Tours are written and read either in TSPLIB `TOUR` format or as a plain list of zero based point ids,
//! one per line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use kopt_core as core;

pub mod common;
pub mod points;
pub mod tsplib;
