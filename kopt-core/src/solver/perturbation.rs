//! Perturbations restructure several tour edges at once to escape a local optimum.

#[cfg(test)]
#[path = "../../tests/unit/solver/perturbation_test.rs"]
mod perturbation_test;

use crate::models::common::PointId;
use crate::models::solution::Tour;
use crate::solver::KMove;
use crate::utils::Random;

/// Specifies a perturbation kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerturbationKind {
    /// Double bridge over four random tour positions.
    DoubleBridge,
    /// Double bridge over ten consecutive points starting from a random point.
    SegmentDoubleBridge,
}

/// Configures perturbation rounds run after the initial hill climbing.
#[derive(Clone, Debug)]
pub struct PerturbationConfig {
    /// Perturbation kind.
    pub kind: PerturbationKind,
    /// Maximum amount of perturbation rounds.
    pub max_rounds: usize,
}

impl PerturbationKind {
    /// Returns minimum tour size the perturbation can be applied to.
    pub fn min_size(&self) -> usize {
        match self {
            Self::DoubleBridge => 8,
            Self::SegmentDoubleBridge => 10,
        }
    }

    /// Creates a perturbation move for the tour or returns `None` if the tour is too small.
    pub fn create_move(&self, tour: &Tour, random: &dyn Random) -> Option<KMove> {
        if tour.size() < self.min_size() {
            return None;
        }

        match self {
            Self::DoubleBridge => random_double_bridge(tour, random),
            Self::SegmentDoubleBridge => {
                let start = random.uniform_int(0, tour.size() as i32 - 1) as PointId;
                segment_double_bridge(tour, start)
            }
        }
    }
}

/// Creates a double bridge move which reconnects four segments `A B C D` as `A D C B`. Segment borders
/// are chosen randomly, every segment has at least two points.
pub fn random_double_bridge(tour: &Tour, random: &dyn Random) -> Option<KMove> {
    let size = tour.size();
    if size < PerturbationKind::DoubleBridge.min_size() {
        return None;
    }

    let last = size as i32;
    let first_end = random.uniform_int(4, last - 4);
    let second_start = random.uniform_int(2, first_end - 2);
    let second_end = random.uniform_int(first_end + 2, last - 2);
    let shift = random.uniform_int(0, last - 1) as usize;

    let order = tour.order();
    let [a, b, c, d] = [0, second_start, first_end, second_end].map(|offset| order[(shift + offset as usize) % size]);

    Some(double_bridge(tour, [a, b, c, d]))
}

/// Creates a double bridge move on ten consecutive points starting from `start`.
pub fn segment_double_bridge(tour: &Tour, start: PointId) -> Option<KMove> {
    if tour.size() < PerturbationKind::SegmentDoubleBridge.min_size() {
        return None;
    }

    let points = std::iter::successors(Some(start), |&point| Some(tour.next(point))).take(10).collect::<Vec<_>>();

    let mut kmove = KMove::default();
    for (a, b) in [(points[1], points[5]), (points[3], points[7])] {
        kmove.starts.extend([a, tour.next(a)]);
        kmove.ends.extend([tour.next(b), b]);
        kmove.removes.extend([a, b]);
    }

    Some(kmove)
}

/// Creates a double bridge move for points given in the tour order.
fn double_bridge(tour: &Tour, points: [PointId; 4]) -> KMove {
    let [a, b, c, d] = points;

    KMove::new(vec![a, b, c, d], vec![tour.next(c), tour.next(d), tour.next(a), tour.next(b)], vec![a, b, c, d])
}
