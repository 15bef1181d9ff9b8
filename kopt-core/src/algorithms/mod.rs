//! A collection of reusable algorithms which depend only on problem models.

pub mod quadtree;
