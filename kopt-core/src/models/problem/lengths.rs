#[cfg(test)]
#[path = "../../../tests/unit/models/problem/lengths_test.rs"]
mod lengths_test;

use crate::models::common::{Length, PointId};
use crate::models::problem::PointSet;
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::sync::Arc;

/// Calculates Euclidean distances between points, optionally memoizing them.
///
/// The cache keeps one hash map per point keyed by the larger point id of the pair, so each unordered
/// pair is stored once. It is interior mutable and therefore not meant to be shared between threads.
pub struct LengthCalculator {
    points: Arc<PointSet>,
    cache: Option<RefCell<Vec<FxHashMap<PointId, Length>>>>,
}

impl LengthCalculator {
    /// Creates a new instance of `LengthCalculator` without caching.
    pub fn new(points: Arc<PointSet>) -> Self {
        Self { points, cache: None }
    }

    /// Creates a new instance of `LengthCalculator` which memoizes every calculated length.
    pub fn with_cache(points: Arc<PointSet>) -> Self {
        let cache = RefCell::new(vec![FxHashMap::default(); points.size()]);
        Self { points, cache: Some(cache) }
    }

    /// Returns a distance between two points.
    pub fn length(&self, a: PointId, b: PointId) -> Length {
        let Some(cache) = self.cache.as_ref() else {
            return self.compute(a, b);
        };

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if let Some(&length) = cache.borrow()[lo].get(&hi) {
            return length;
        }

        let length = self.compute(lo, hi);
        cache.borrow_mut()[lo].insert(hi, length);

        length
    }

    /// Returns underlying point set.
    pub fn points(&self) -> &PointSet {
        self.points.as_ref()
    }

    /// Returns a shared reference to the underlying point set.
    pub fn shared_points(&self) -> Arc<PointSet> {
        self.points.clone()
    }

    /// Returns true if lengths are memoized.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Returns total amount of memoized lengths.
    pub fn entries(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.borrow().iter().map(|entries| entries.len()).sum())
    }

    /// Returns average amount of memoized lengths per point.
    pub fn entry_ratio(&self) -> Float {
        self.entries() as Float / self.points.size() as Float
    }

    /// Removes all memoized lengths.
    pub fn clear(&self) {
        if let Some(cache) = self.cache.as_ref() {
            cache.borrow_mut().iter_mut().for_each(|entries| entries.clear());
        }
    }

    fn compute(&self, a: PointId, b: PointId) -> Length {
        let dx = self.points.x(a) - self.points.x(b);
        let dy = self.points.y(a) - self.points.y(b);

        dx.hypot(dy)
    }
}
