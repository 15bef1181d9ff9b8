#[cfg(test)]
#[path = "../../tests/unit/solver/kmove_test.rs"]
mod kmove_test;

use crate::models::common::{Length, PointId};
use std::ops::Add;

/// Describes a k-opt move: for every `i`, edge `(removes[i], next(removes[i]))` is deleted and a new edge
/// `(starts[i], ends[i])` is inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KMove {
    /// Start points of new edges.
    pub starts: Vec<PointId>,
    /// End points of new edges.
    pub ends: Vec<PointId>,
    /// Points whose outgoing edges are deleted.
    pub removes: Vec<PointId>,
}

impl KMove {
    /// Creates a new instance of `KMove`.
    pub fn new(starts: Vec<PointId>, ends: Vec<PointId>, removes: Vec<PointId>) -> Self {
        Self { starts, ends, removes }
    }

    /// Returns the amount of started edge exchanges.
    pub fn current_k(&self) -> usize {
        self.starts.len()
    }

    /// Returns true if the outgoing edge of the point is not deleted yet.
    pub fn removable(&self, point: PointId) -> bool {
        !self.removes.contains(&point)
    }

    /// Returns true if the point can start one more new edge.
    pub fn startable(&self, point: PointId) -> bool {
        self.starts.iter().filter(|&&start| start == point).count() < 2
    }

    /// Returns true if the point can end one more new edge.
    pub fn endable(&self, point: PointId) -> bool {
        self.ends.iter().filter(|&&end| end == point).count() < 2
    }

    /// Returns true if a new edge between the points is already inserted.
    pub fn has_addition(&self, a: PointId, b: PointId) -> bool {
        self.starts.iter().zip(self.ends.iter()).any(|(&start, &end)| (start, end) == (a, b) || (start, end) == (b, a))
    }

    /// Returns true if both moves delete different edges.
    pub fn is_disjoint(&self, other: &KMove) -> bool {
        self.removes.iter().all(|remove| other.removable(*remove))
    }

    /// Checks that every deleted edge has a replacement.
    ///
    /// # Panics
    /// Panics if arrays have different length.
    pub fn validate(&self) {
        assert!(
            self.starts.len() == self.ends.len() && self.ends.len() == self.removes.len(),
            "inconsistent k-move: starts={:?}, ends={:?}, removes={:?}",
            self.starts,
            self.ends,
            self.removes
        );
    }

    /// Removes all edges.
    pub fn clear(&mut self) {
        self.starts.clear();
        self.ends.clear();
        self.removes.clear();
    }

    pub(crate) fn push_removal(&mut self, start: PointId, remove: PointId) {
        self.starts.push(start);
        self.removes.push(remove);
    }

    pub(crate) fn pop_removal(&mut self) {
        self.starts.pop();
        self.removes.pop();
    }

    pub(crate) fn push_addition(&mut self, end: PointId) {
        self.ends.push(end);
    }

    pub(crate) fn pop_addition(&mut self) {
        self.ends.pop();
    }
}

impl Add for &KMove {
    type Output = KMove;

    fn add(self, rhs: Self) -> Self::Output {
        KMove {
            starts: self.starts.iter().chain(rhs.starts.iter()).copied().collect(),
            ends: self.ends.iter().chain(rhs.ends.iter()).copied().collect(),
            removes: self.removes.iter().chain(rhs.removes.iter()).copied().collect(),
        }
    }
}

/// Keeps the remaining length budget of a partial move: total length of deleted edges minus total
/// length of inserted ones. Every change is pushed on a stack and can be reverted exactly.
#[derive(Clone, Debug, Default)]
pub struct KMargin {
    totals: Vec<Length>,
}

impl KMargin {
    /// Returns current margin.
    pub fn total(&self) -> Length {
        self.totals.last().copied().unwrap_or(0.)
    }

    /// Returns amount of pushed changes.
    pub fn depth(&self) -> usize {
        self.totals.len()
    }

    /// Increases margin by the length of a deleted edge.
    pub fn increase(&mut self, length: Length) {
        self.totals.push(self.total() + length);
    }

    /// Decreases margin by the length of an inserted edge if it does not exceed the margin.
    /// Returns false and keeps margin untouched otherwise.
    pub fn decrease(&mut self, length: Length) -> bool {
        let total = self.total();
        if length > total {
            return false;
        }

        self.totals.push(total - length);
        true
    }

    /// Reverts the last change.
    pub fn pop(&mut self) {
        self.totals.pop();
    }

    /// Removes all changes.
    pub fn clear(&mut self) {
        self.totals.clear();
    }
}
