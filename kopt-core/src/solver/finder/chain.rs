use crate::models::common::{Length, PointId};
use crate::solver::{KMargin, KMove};
use std::ops::{Deref, DerefMut};

/// A partial move built by the search together with its remaining margin.
#[derive(Default)]
pub(crate) struct Chain {
    pub kmove: KMove,
    pub margin: KMargin,
}

impl Chain {
    /// Deletes the edge `(remove, next(remove))` and makes `start` the start of the next new edge.
    pub fn remove_edge(&mut self, start: PointId, remove: PointId, length: Length) -> ChainGuard<'_> {
        self.kmove.push_removal(start, remove);
        self.margin.increase(length);

        ChainGuard { chain: self, step: Step::Removal }
    }

    /// Inserts a new edge ending at `end` if its length does not exceed the margin.
    pub fn add_edge(&mut self, end: PointId, length: Length) -> Option<ChainGuard<'_>> {
        if !self.margin.decrease(length) {
            return None;
        }
        self.kmove.push_addition(end);

        Some(ChainGuard { chain: self, step: Step::Addition })
    }
}

enum Step {
    Removal,
    Addition,
}

/// Reverts one step of the chain when dropped, so the chain always matches current recursion depth
/// regardless how the search leaves the scope.
pub(crate) struct ChainGuard<'a> {
    chain: &'a mut Chain,
    step: Step,
}

impl Deref for ChainGuard<'_> {
    type Target = Chain;

    fn deref(&self) -> &Self::Target {
        self.chain
    }
}

impl DerefMut for ChainGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.chain
    }
}

impl Drop for ChainGuard<'_> {
    fn drop(&mut self) {
        match self.step {
            Step::Removal => self.chain.kmove.pop_removal(),
            Step::Addition => self.chain.kmove.pop_addition(),
        }
        self.chain.margin.pop();
    }
}
