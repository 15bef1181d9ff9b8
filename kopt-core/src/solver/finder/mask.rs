use crate::models::common::PointId;
use crate::models::solution::Tour;

/// Restricts search to a subset of starting points.
#[derive(Clone, Debug)]
pub struct Mask {
    active: Vec<bool>,
}

impl Mask {
    /// Creates a new mask with all points active.
    pub fn new(size: usize) -> Self {
        Self { active: vec![true; size] }
    }

    /// Creates a new mask with only given points active.
    pub fn with_actives(size: usize, actives: &[PointId]) -> Self {
        let mut mask = Self::new(size);
        mask.reset(actives);

        mask
    }

    /// Creates a new mask activating `length` consecutive points of the tour starting from `start`
    /// together with their predecessors.
    pub fn with_segment(tour: &Tour, start: PointId, length: usize) -> Self {
        let mut mask = Self::with_actives(tour.size(), &[]);

        mask.activate(tour.prev(start));
        std::iter::successors(Some(start), |&point| Some(tour.next(point)))
            .take(length.min(tour.size()))
            .for_each(|point| mask.activate(point));

        mask
    }

    /// Deactivates all points except given ones.
    pub fn reset(&mut self, actives: &[PointId]) {
        self.active.fill(false);
        actives.iter().for_each(|&point| self.active[point] = true);
    }

    /// Activates the point.
    pub fn activate(&mut self, point: PointId) {
        self.active[point] = true;
    }

    /// Activates all points.
    pub fn activate_all(&mut self) {
        self.active.fill(true);
    }

    /// Returns true if the point is active.
    pub fn is_active(&self, point: PointId) -> bool {
        self.active[point]
    }

    /// Returns amount of active points.
    pub fn count_active(&self) -> usize {
        self.active.iter().filter(|&&active| active).count()
    }
}
