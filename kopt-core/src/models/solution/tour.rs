#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::{BoundingBox, Length, PointId};
use crate::models::problem::{LengthCalculator, PointSet};
use crate::utils::{GenericError, GenericResult};
use std::rc::Rc;

/// A closed tour over a fixed point set stored as an undirected adjacency list.
///
/// Every point keeps two unordered adjacents, the traversal direction (`next`) and the position of
/// each point within its cycle (`sequence`) are derived from them after every structural change.
/// Normally the tour is a single Hamiltonian cycle, but `multicycle_swap` may split it into several
/// cycles which are tracked separately until merged back.
///
/// Cloning is O(N): it is used to try risky moves speculatively and discard them on failure.
#[derive(Clone)]
pub struct Tour {
    lengths: Rc<LengthCalculator>,
    adjacents: Vec<[Option<PointId>; 2]>,
    next: Vec<PointId>,
    sequence: Vec<usize>,
    cycle_ids: Vec<usize>,
    cycles: usize,
    min_cycle_size: usize,
    max_outgroup_length: Length,
}

impl Tour {
    /// Creates a new tour visiting points in the given order.
    /// Returns an error if the order is not a permutation of all point ids.
    pub fn new(lengths: Rc<LengthCalculator>, initial: &[PointId]) -> GenericResult<Self> {
        let size = lengths.points().size();

        if size < 3 {
            return Err(format!("tour requires at least 3 points, got {size}").into());
        }

        if initial.len() != size {
            return Err(format!("initial tour has {} points, expected {size}", initial.len()).into());
        }

        let mut seen = vec![false; size];
        for &point in initial {
            match seen.get_mut(point) {
                Some(seen) if !*seen => *seen = true,
                Some(_) => return Err(format!("initial tour visits point {point} more than once").into()),
                None => return Err(format!("initial tour has unknown point {point}").into()),
            }
        }

        let mut adjacents = vec![[None, None]; size];
        for (idx, &point) in initial.iter().enumerate() {
            let next = initial[(idx + 1) % size];
            let prev = initial[(idx + size - 1) % size];
            adjacents[point] = [Some(next), Some(prev)];
        }

        let mut tour = Self {
            lengths,
            adjacents,
            next: vec![0; size],
            sequence: vec![0; size],
            cycle_ids: vec![0; size],
            cycles: 1,
            min_cycle_size: size,
            max_outgroup_length: 0.,
        };
        tour.update_structure();

        Ok(tour)
    }

    /// Creates a new tour visiting points in ascending order of their ids.
    pub fn identity(lengths: Rc<LengthCalculator>) -> GenericResult<Self> {
        let initial = (0..lengths.points().size()).collect::<Vec<_>>();
        Self::new(lengths, initial.as_slice())
    }

    /// Returns amount of points in the tour.
    pub fn size(&self) -> usize {
        self.next.len()
    }

    /// Returns underlying point set.
    pub fn points(&self) -> &PointSet {
        self.lengths.points()
    }

    /// Returns length calculator used by the tour.
    pub fn lengths(&self) -> &LengthCalculator {
        self.lengths.as_ref()
    }

    /// Returns a successor of the point.
    #[inline]
    pub fn next(&self, point: PointId) -> PointId {
        self.next[point]
    }

    /// Returns a predecessor of the point.
    ///
    /// # Panics
    /// Panics if none of the point's adjacents is its successor which means that the tour is corrupted.
    pub fn prev(&self, point: PointId) -> PointId {
        let next = Some(self.next[point]);
        match self.adjacents[point] {
            [first, Some(second)] if first == next => second,
            [Some(first), second] if second == next => first,
            adjacents => panic!(
                "cannot determine previous point: point={point}, next={}, adjacents={adjacents:?}",
                self.next[point]
            ),
        }
    }

    /// Returns true if points are connected by an edge of the tour.
    pub fn has_edge(&self, a: PointId, b: PointId) -> bool {
        self.adjacents[a].contains(&Some(b))
    }

    /// Returns a length of the edge between the point and its successor.
    #[inline]
    pub fn length(&self, point: PointId) -> Length {
        self.lengths.length(point, self.next[point])
    }

    /// Returns a length of the edge between the point and its predecessor.
    pub fn prev_length(&self, point: PointId) -> Length {
        self.lengths.length(point, self.prev(point))
    }

    /// Returns a distance between two arbitrary points.
    #[inline]
    pub fn length_between(&self, a: PointId, b: PointId) -> Length {
        self.lengths.length(a, b)
    }

    /// Returns total length of all edges.
    pub fn total_length(&self) -> Length {
        (0..self.size()).map(|point| self.length(point)).sum()
    }

    /// Returns the position of the point relative to `start` within their cycle.
    pub fn sequence(&self, point: PointId, start: PointId) -> usize {
        let start_sequence = self.sequence[start];
        let raw_sequence = self.sequence[point];

        if raw_sequence < start_sequence {
            raw_sequence + self.size() - start_sequence
        } else {
            raw_sequence - start_sequence
        }
    }

    /// Returns a square search box around the point.
    pub fn search_box(&self, point: PointId, radius: Length) -> BoundingBox {
        let (x, y) = self.points().coordinates(point);
        BoundingBox::around(x, y, radius)
    }

    /// Returns a search box around the point with radius of its outgoing edge.
    pub fn search_box_next(&self, point: PointId) -> BoundingBox {
        self.search_box(point, self.length(point))
    }

    /// Returns a search box around the point with radius of its incoming edge.
    pub fn search_box_prev(&self, point: PointId) -> BoundingBox {
        self.search_box(point, self.prev_length(point))
    }

    /// Returns amount of cycles.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Returns id of the cycle the point belongs to. The cycle containing point 0 always has id 0.
    pub fn cycle_id(&self, point: PointId) -> usize {
        self.cycle_ids[point]
    }

    /// Returns size of the smallest cycle.
    pub fn min_cycle_size(&self) -> usize {
        self.min_cycle_size
    }

    /// Returns the longest edge outside of the cycle containing point 0.
    pub fn max_outgroup_length(&self) -> Length {
        self.max_outgroup_length
    }

    /// Deletes edges `(p, next(p))` for every `p` in `removes`, then connects `starts[i]` with `ends[i]`
    /// and recomputes traversal order.
    ///
    /// The resulting structure is expected to be a single cycle: this is not verified here. When it is not,
    /// the tour ends up tracking several cycles the same way `multicycle_swap` does.
    pub fn swap(&mut self, starts: &[PointId], ends: &[PointId], removes: &[PointId]) {
        self.relink(starts, ends, removes);
        self.update_structure();
    }

    /// Same as `swap`, but the result is allowed to have several cycles.
    pub fn multicycle_swap(&mut self, starts: &[PointId], ends: &[PointId], removes: &[PointId]) {
        self.relink(starts, ends, removes);
        self.update_multicycle();
    }

    /// Returns all points in traversal order starting from point 0. When the tour has several cycles,
    /// they follow each other ordered by their smallest point id.
    pub fn order(&self) -> Vec<PointId> {
        let size = self.size();
        let mut visited = vec![false; size];
        let mut order = Vec::with_capacity(size);

        for start in 0..size {
            if visited[start] {
                continue;
            }

            let mut current = start;
            loop {
                visited[current] = true;
                order.push(current);
                current = self.next[current];

                if current == start || visited[current] {
                    break;
                }
            }
        }

        order
    }

    /// Checks that following successors from point 0 visits every point exactly once and that
    /// successor and predecessor links agree with each other.
    pub fn validate(&self) -> GenericResult<()> {
        let size = self.size();
        let mut visited = vec![false; size];
        let mut current = 0;

        for step in 0..size {
            if visited[current] {
                return Err(GenericError::from(format!(
                    "invalid tour: point {current} is visited twice after {step} steps of {size}"
                )));
            }
            visited[current] = true;

            let next = self.next[current];
            if !self.adjacents[current].contains(&Some(next)) || !self.adjacents[next].contains(&Some(current)) {
                return Err(format!("invalid tour: edge ({current}, {next}) is not in adjacency list").into());
            }

            current = next;
        }

        if current != 0 {
            return Err(format!("invalid tour: traversal did not return to start after {size} steps").into());
        }

        if let Some(point) = (0..size).find(|&point| self.next[self.prev(point)] != point) {
            return Err(format!("invalid tour: next and prev disagree at point {point}").into());
        }

        Ok(())
    }

    fn relink(&mut self, starts: &[PointId], ends: &[PointId], removes: &[PointId]) {
        assert_eq!(starts.len(), ends.len(), "new edges have mismatched endpoints");

        // NOTE all removed edges are defined by successors before any link changes
        removes.iter().for_each(|&point| self.break_adjacency(point, self.next[point]));
        starts.iter().zip(ends.iter()).for_each(|(&start, &end)| self.create_adjacency(start, end));
    }

    /// Recomputes successors by one traversal from point 0, falls back to multi cycle bookkeeping when
    /// the traversal does not cover all points.
    fn update_structure(&mut self) {
        let visited = self.update_next(0, 0);

        if visited == self.size() {
            self.cycle_ids.fill(0);
            self.cycles = 1;
            self.min_cycle_size = visited;
            self.max_outgroup_length = 0.;
        } else {
            self.update_multicycle();
        }
    }

    fn update_multicycle(&mut self) {
        let size = self.size();
        let unassigned = usize::MAX;
        self.cycle_ids.fill(unassigned);
        self.cycles = 0;
        self.min_cycle_size = usize::MAX;

        let mut cycle_start = Some(0);
        while let Some(start) = cycle_start {
            let cycle_size = self.update_next(start, self.cycles);
            self.min_cycle_size = self.min_cycle_size.min(cycle_size);
            self.cycles += 1;

            cycle_start = (start + 1..size).find(|&point| self.cycle_ids[point] == unassigned);
        }

        let ingroup_id = self.cycle_ids[0];
        self.max_outgroup_length = (0..size)
            .filter(|&point| self.cycle_ids[point] != ingroup_id)
            .map(|point| self.length(point))
            .fold(0., Length::max);
    }

    /// Traverses the cycle containing `start`, assigns successors, sequence and cycle ids.
    /// Returns the amount of visited points.
    fn update_next(&mut self, start: PointId, cycle_id: usize) -> usize {
        let mut prev = start;
        let mut current = self.adjacent(start, 0);
        let mut sequence = 0;

        self.next[start] = current;
        self.sequence[start] = 0;
        self.cycle_ids[start] = cycle_id;

        while current != start {
            sequence += 1;
            assert!(sequence < self.size(), "cycle traversal exceeds total amount of points");

            let next = self.get_other(current, prev);
            self.next[current] = next;
            self.sequence[current] = sequence;
            self.cycle_ids[current] = cycle_id;

            prev = current;
            current = next;
        }

        sequence + 1
    }

    fn adjacent(&self, point: PointId, slot: usize) -> PointId {
        self.adjacents[point][slot].unwrap_or_else(|| panic!("point {point} has vacant adjacency slot {slot}"))
    }

    fn get_other(&self, point: PointId, adjacent: PointId) -> PointId {
        if self.adjacents[point][0] == Some(adjacent) { self.adjacent(point, 1) } else { self.adjacent(point, 0) }
    }

    fn create_adjacency(&mut self, a: PointId, b: PointId) {
        self.fill_adjacent(a, b);
        self.fill_adjacent(b, a);
    }

    fn fill_adjacent(&mut self, point: PointId, adjacent: PointId) {
        match self.adjacents[point].iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => *slot = Some(adjacent),
            None => panic!("no available adjacency slot: {point} -> {adjacent}"),
        }
    }

    fn break_adjacency(&mut self, a: PointId, b: PointId) {
        self.vacate_adjacent_slot(a, b);
        self.vacate_adjacent_slot(b, a);
    }

    fn vacate_adjacent_slot(&mut self, point: PointId, adjacent: PointId) {
        if let Some(slot) = self.adjacents[point].iter_mut().find(|slot| **slot == Some(adjacent)) {
            *slot = None;
        }
    }
}
