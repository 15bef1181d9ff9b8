use crate::utils::Float;

/// Identifies a point in a point set, point ids are always in `0..N` range.
pub type PointId = usize;

/// Represents a distance between two points or a sum of such distances.
pub type Length = Float;
