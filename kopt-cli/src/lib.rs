//! A crate contains the command line interface of k-opt local search for the *Euclidean Traveling
//! Salesman Problem* together with its extensions:
//!
//! - **config**: json configuration of the search, hill climbing and perturbations
//! - **formats**: a registry of point set and tour readers/writers
//! - **interruption**: a quota which stops the search on time limit or on Ctrl-C
//!

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/features/solve_test.rs"]
mod solve_test;

pub use kopt_core as core;
pub use kopt_scientific as scientific;

pub mod extensions;
