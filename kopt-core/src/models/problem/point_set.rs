#[cfg(test)]
#[path = "../../../tests/unit/models/problem/point_set_test.rs"]
mod point_set_test;

use crate::models::common::{BoundingBox, PointId};
use crate::utils::{Float, GenericError, GenericResult};

/// A fixed set of points on a plane addressed by their ids. Immutable for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct PointSet {
    xs: Vec<Float>,
    ys: Vec<Float>,
}

impl PointSet {
    /// Creates a new point set from coordinate arrays.
    pub fn new(xs: Vec<Float>, ys: Vec<Float>) -> GenericResult<Self> {
        if xs.len() != ys.len() {
            return Err(format!("coordinate arrays have different length: x={}, y={}", xs.len(), ys.len()).into());
        }

        if xs.is_empty() {
            return Err("point set is empty".into());
        }

        if let Some(idx) = xs.iter().zip(ys.iter()).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(GenericError::from(format!("point {idx} has non finite coordinates")));
        }

        Ok(Self { xs, ys })
    }

    /// Creates a new point set from a list of (x, y) pairs.
    pub fn from_coordinates<I>(coordinates: I) -> GenericResult<Self>
    where
        I: IntoIterator<Item = (Float, Float)>,
    {
        let (xs, ys) = coordinates.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Returns amount of points.
    pub fn size(&self) -> usize {
        self.xs.len()
    }

    /// Returns x coordinate of the point.
    pub fn x(&self, point: PointId) -> Float {
        self.xs[point]
    }

    /// Returns y coordinate of the point.
    pub fn y(&self, point: PointId) -> Float {
        self.ys[point]
    }

    /// Returns both coordinates of the point.
    pub fn coordinates(&self, point: PointId) -> (Float, Float) {
        (self.xs[point], self.ys[point])
    }

    /// Returns all x coordinates.
    pub fn xs(&self) -> &[Float] {
        self.xs.as_slice()
    }

    /// Returns all y coordinates.
    pub fn ys(&self) -> &[Float] {
        self.ys.as_slice()
    }

    /// Returns the smallest box containing all points.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::enclosing(self.xs.iter().copied().zip(self.ys.iter().copied())).unwrap_or_default()
    }
}
