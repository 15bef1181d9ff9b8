//! Reconnects a tour split into several cycles back into a single cycle.

#[cfg(test)]
#[path = "../../tests/unit/solver/merge_test.rs"]
mod merge_test;

use crate::algorithms::quadtree::Quadtree;
use crate::models::common::{Length, PointId};
use crate::models::solution::Tour;

/// Merges all cycles of the tour into one using 2-opt style exchanges between the cycle of point 0 and
/// other cycles. Every exchange may make the tour longer, but total increase must stay below `margin`.
///
/// Returns a merged copy of the tour or `None` if no such sequence of exchanges is found.
pub fn merge(quadtree: &Quadtree, tour: &Tour, margin: Length) -> Option<Tour> {
    if tour.cycles() == 1 {
        return Some(tour.clone());
    }

    if margin <= 0. || tour.min_cycle_size() < 2 {
        return None;
    }

    let ingroup_id = tour.cycle_id(0);

    (0..tour.size()).filter(|&point| tour.cycle_id(point) == ingroup_id).find_map(|point| {
        // if the sum of new edges is below the limit, each of them is shorter than this radius
        let radius = tour.length(point) + tour.max_outgroup_length() + margin / 2.;

        quadtree
            .query(&tour.search_box(point, radius))
            .into_iter()
            .filter(|&other| tour.cycle_id(other) != ingroup_id)
            .find_map(|other| try_exchange(quadtree, tour, margin, point, other))
    })
}

/// Tries both ways to reconnect edges `(a, next(a))` and `(b, next(b))` from different cycles.
fn try_exchange(quadtree: &Quadtree, tour: &Tour, margin: Length, a: PointId, b: PointId) -> Option<Tour> {
    let next_a = tour.next(a);
    let next_b = tour.next(b);

    let removed = tour.length(a) + tour.length(b);
    let limit = removed + margin;

    [[b, next_b], [next_b, b]].into_iter().find_map(|ends| {
        let added = tour.length_between(a, ends[0]) + tour.length_between(next_a, ends[1]);
        if added >= limit {
            return None;
        }

        let mut merged = tour.clone();
        merged.multicycle_swap(&[a, next_a], &ends, &[a, b]);

        if merged.min_cycle_size() < 2 || merged.cycles() >= tour.cycles() {
            return None;
        }

        merge(quadtree, &merged, limit - added)
    })
}
