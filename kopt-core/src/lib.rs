//! Core crate contains building blocks of a k-opt local search for the ***Euclidean Traveling Salesman Problem***.
//!
//! The search maintains a single closed tour over a fixed point set and repeatedly applies sequential
//! (and, optionally, non-sequential) k-opt moves which shorten the tour until a local optimum is reached.
//! Main parts are:
//!  - a point quadtree used to restrict neighbor lookups to a geometric neighborhood
//!  - a tour with O(1) successor/predecessor queries and in-place edge swaps
//!  - a recursive move finder with cycle feasibility check and multi-cycle merge
//!  - a hill climbing driver with perturbations to escape local optima

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/local_search_test.rs"]
mod local_search_test;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
