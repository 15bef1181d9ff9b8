#[cfg(test)]
#[path = "../../../tests/unit/models/common/bounding_box_test.rs"]
mod bounding_box_test;

use crate::utils::Float;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Minimum x coordinate.
    pub min_x: Float,
    /// Maximum x coordinate.
    pub max_x: Float,
    /// Minimum y coordinate.
    pub min_y: Float,
    /// Maximum y coordinate.
    pub max_y: Float,
}

impl BoundingBox {
    /// Creates a square box centered at given coordinates.
    pub fn around(x: Float, y: Float, radius: Float) -> Self {
        Self { min_x: x - radius, max_x: x + radius, min_y: y - radius, max_y: y + radius }
    }

    /// Creates the smallest box which encloses all given coordinates.
    /// Returns `None` if there are no coordinates.
    pub fn enclosing<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Float, Float)>,
    {
        coordinates.into_iter().fold(None, |acc: Option<Self>, (x, y)| {
            Some(match acc {
                Some(bbox) => Self {
                    min_x: bbox.min_x.min(x),
                    max_x: bbox.max_x.max(x),
                    min_y: bbox.min_y.min(y),
                    max_y: bbox.max_y.max(y),
                },
                None => Self { min_x: x, max_x: x, min_y: y, max_y: y },
            })
        })
    }

    /// Grows the box to include given coordinates.
    pub fn extend(&mut self, x: Float, y: Float) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Returns true if boxes overlap, shared borders count as overlap.
    pub fn touches(&self, other: &BoundingBox) -> bool {
        let too_high = self.min_y > other.max_y;
        let too_low = self.max_y < other.min_y;
        let left = self.max_x < other.min_x;
        let right = self.min_x > other.max_x;

        !(too_high || too_low || left || right)
    }

    /// Returns true if the point lies inside the box or on its border.
    pub fn contains(&self, x: Float, y: Float) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns box width.
    pub fn width(&self) -> Float {
        self.max_x - self.min_x
    }

    /// Returns box height.
    pub fn height(&self) -> Float {
        self.max_y - self.min_y
    }
}
