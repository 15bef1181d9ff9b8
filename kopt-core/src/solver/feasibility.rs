//! Decides whether a k-opt move keeps the tour a single cycle without applying it.
//!
//! Deleting `k` edges splits the cycle into `k` segments. Broken edges are ordered by their position in
//! the tour, so segment `j` runs from the second point of broken edge `j` (its head, port `2j`) to the
//! first point of broken edge `j + 1` (its tail, port `2j + 1`). New edges connect ports, so the resulting
//! structure is a small graph with `2k` ports where every port has exactly one segment neighbour
//! (`port ^ 1`) and one new edge neighbour. Its connected components are the cycles of the new tour.

#[cfg(test)]
#[path = "../../tests/unit/solver/feasibility_test.rs"]
mod feasibility_test;

use crate::models::common::PointId;
use crate::models::solution::Tour;
use crate::solver::KMove;
use rustc_hash::FxHashMap;
use tinyvec::ArrayVec;

/// Ports of a point: a point is either an end of one segment or a single point segment with two ports.
type Ports = ArrayVec<[usize; 2]>;

const NO_PORT: usize = usize::MAX;

/// Returns true if applying the move to a single cycle tour results in a single cycle.
///
/// # Panics
/// Panics if the move is inconsistent: arrays of different size, repeated deleted edges or a point with
/// more new edges than deleted ones.
pub fn feasible(tour: &Tour, kmove: &KMove) -> bool {
    match count_cycles(tour, kmove) {
        Some(cycles) => cycles == 1,
        None => panic!("cannot check feasibility of inconsistent k-move: {kmove:?}"),
    }
}

/// Returns amount of cycles the single cycle tour would have after applying the move or `None` if the
/// move does not describe a valid edge exchange.
pub fn count_cycles(tour: &Tour, kmove: &KMove) -> Option<usize> {
    let k = kmove.removes.len();
    if k == 0 || kmove.starts.len() != k || kmove.ends.len() != k {
        return None;
    }

    let origin = kmove.removes[0];
    let mut broken = kmove.removes.iter().map(|&first| (first, tour.next(first))).collect::<Vec<_>>();
    broken.sort_by_key(|&(first, _)| tour.sequence(first, origin));

    if broken.windows(2).any(|pair| pair[0].0 == pair[1].0) {
        return None;
    }

    let mut ports: FxHashMap<PointId, Ports> = FxHashMap::default();
    for segment in 0..k {
        ports.entry(broken[segment].1).or_default().push(2 * segment);
        ports.entry(broken[(segment + 1) % k].0).or_default().push(2 * segment + 1);
    }

    let mut partners = vec![NO_PORT; 2 * k];
    for (&start, &end) in kmove.starts.iter().zip(kmove.ends.iter()) {
        let start_port = free_port(&ports, &partners, start, NO_PORT)?;
        let end_port = free_port(&ports, &partners, end, start_port)?;

        partners[start_port] = end_port;
        partners[end_port] = start_port;
    }

    let mut visited = vec![false; 2 * k];
    let mut cycles = 0;
    for port in 0..2 * k {
        if visited[port] {
            continue;
        }

        cycles += 1;
        let mut current = port;
        while !visited[current] {
            visited[current] = true;
            visited[current ^ 1] = true;
            current = partners[current ^ 1];
        }
    }

    Some(cycles)
}

fn free_port(ports: &FxHashMap<PointId, Ports>, partners: &[usize], point: PointId, taken: usize) -> Option<usize> {
    ports.get(&point)?.iter().copied().find(|&port| port != taken && partners[port] == NO_PORT)
}
