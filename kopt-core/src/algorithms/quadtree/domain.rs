#[cfg(test)]
#[path = "../../../tests/unit/algorithms/quadtree/domain_test.rs"]
mod domain_test;

use crate::models::common::BoundingBox;
use crate::models::problem::PointSet;
use crate::utils::{Float, GenericResult};

/// The bounding rectangle of a point set subdivided into a fixed amount of depth levels.
#[derive(Clone, Debug)]
pub struct Domain {
    bbox: BoundingBox,
    max_depth: usize,
    cell_widths: Vec<Float>,
    cell_heights: Vec<Float>,
}

impl Domain {
    /// A default amount of depth levels.
    pub const DEFAULT_MAX_DEPTH: usize = 15;

    /// Maximum supported amount of depth levels.
    pub const LIMIT_MAX_DEPTH: usize = 31;

    /// Creates a new domain enclosing all points.
    pub fn new(points: &PointSet, max_depth: usize) -> GenericResult<Self> {
        if max_depth == 0 || max_depth > Self::LIMIT_MAX_DEPTH {
            let limit = Self::LIMIT_MAX_DEPTH;
            return Err(format!("quadtree max depth should be in [1, {limit}], got {max_depth}").into());
        }

        let mut bbox = points.bounding_box();

        // degenerated sets (all points on a line) still need a non empty area
        if bbox.width() <= 0. {
            bbox.max_x = bbox.min_x + 1.;
        }
        if bbox.height() <= 0. {
            bbox.max_y = bbox.min_y + 1.;
        }

        let (cell_widths, cell_heights) = (0..=max_depth)
            .map(|depth| {
                let divisions = (1_u64 << depth) as Float;
                (bbox.width() / divisions, bbox.height() / divisions)
            })
            .unzip();

        Ok(Self { bbox, max_depth, cell_widths, cell_heights })
    }

    /// Returns the bounding box of the whole domain.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Returns amount of depth levels.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns width of a cell at given depth.
    pub fn cell_width(&self, depth: usize) -> Float {
        self.cell_widths[depth]
    }

    /// Returns height of a cell at given depth.
    pub fn cell_height(&self, depth: usize) -> Float {
        self.cell_heights[depth]
    }

    /// Returns grid coordinates of a point at the maximum depth.
    pub fn quantize(&self, x: Float, y: Float) -> (u32, u32) {
        let grid = (1_u64 << self.max_depth) as Float;
        let last = ((1_u64 << self.max_depth) - 1) as u32;

        let quantize = |value: Float, min: Float, extent: Float| {
            (((value - min) / extent * grid).floor().max(0.) as u32).min(last)
        };

        (quantize(x, self.bbox.min_x, self.bbox.width()), quantize(y, self.bbox.min_y, self.bbox.height()))
    }

    /// Returns a box of the cell at given depth which contains a point with given grid coordinates
    /// (as returned by `quantize`).
    pub fn cell_box(&self, depth: usize, grid_x: u32, grid_y: u32) -> BoundingBox {
        let shift = self.max_depth - depth;
        let width = self.cell_width(depth);
        let height = self.cell_height(depth);

        let min_x = self.bbox.min_x + (grid_x >> shift) as Float * width;
        let min_y = self.bbox.min_y + (grid_y >> shift) as Float * height;

        BoundingBox { min_x, max_x: min_x + width, min_y, max_y: min_y + height }
    }
}
