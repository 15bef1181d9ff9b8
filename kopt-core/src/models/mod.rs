//! A collection of models to represent point sets and tours.

pub mod common;
pub mod problem;
pub mod solution;
