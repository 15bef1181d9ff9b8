use super::*;
use crate::models::common::PointId;
use crate::solver::{count_cycles, feasible};
use rand::seq::SliceRandom;
use std::ops::ControlFlow;

/// Keeps the state of one `find_best` call. Recursive methods return `ControlFlow::Break` once the search
/// should stop, the chain is unwound by its guards on the way back.
pub(super) struct Search<'s> {
    tour: &'s Tour,
    quadtree: &'s Quadtree,
    config: &'s FinderConfig,
    random: &'s dyn Random,
    nonsequential_moves: &'s mut Vec<Improvement>,
    statistics: &'s mut FinderStatistics,
    best: Option<Improvement>,
    swap_end: PointId,
}

impl<'s> Search<'s> {
    pub fn new(
        tour: &'s Tour,
        quadtree: &'s Quadtree,
        config: &'s FinderConfig,
        random: &'s dyn Random,
        nonsequential_moves: &'s mut Vec<Improvement>,
        statistics: &'s mut FinderStatistics,
    ) -> Self {
        Self { tour, quadtree, config, random, nonsequential_moves, statistics, best: None, swap_end: 0 }
    }

    pub fn into_best(self) -> Option<Improvement> {
        self.best
    }

    /// Starts chains from the point by deleting its incoming edge, then its outgoing edge.
    pub fn start(&mut self, chain: &mut Chain, point: PointId) -> ControlFlow<()> {
        let prev = self.tour.prev(point);
        let next = self.tour.next(point);

        for (remove, swap_end) in [(prev, prev), (point, next)] {
            let mut chain = chain.remove_edge(point, remove, self.tour.length(remove));
            self.swap_end = swap_end;
            self.update_depth(chain.kmove.current_k());
            self.try_nearby_points(&mut chain, point)?;
        }

        ControlFlow::Continue(())
    }

    fn try_nearby_points(&mut self, chain: &mut Chain, start: PointId) -> ControlFlow<()> {
        let previous_end = chain.kmove.ends.last().copied();

        for point in self.search_neighborhood(chain, start) {
            let is_self = point == start;
            let is_old_edge = self.tour.has_edge(start, point);
            let is_backtrack = previous_end == Some(point);
            let is_new_edge = chain.kmove.has_addition(start, point);

            if is_self || is_old_edge || is_backtrack || is_new_edge || !chain.kmove.endable(point) {
                continue;
            }

            let Some(mut chain) = chain.add_edge(point, self.tour.length_between(start, point)) else {
                continue;
            };

            if point == self.swap_end {
                self.final_move_check(&chain)?;
            }

            self.delete_both_edges(&mut chain, point)?;
        }

        ControlFlow::Continue(())
    }

    fn delete_both_edges(&mut self, chain: &mut Chain, end: PointId) -> ControlFlow<()> {
        let prev = self.tour.prev(end);
        let next = self.tour.next(end);

        for (remove, start) in [(prev, prev), (end, next)] {
            if !chain.kmove.removable(remove) || !chain.kmove.startable(start) {
                continue;
            }

            let mut chain = chain.remove_edge(start, remove, self.tour.length(remove));
            self.update_depth(chain.kmove.current_k());

            if self.is_last_removal(chain.kmove.current_k()) {
                let is_used_edge =
                    self.tour.has_edge(start, self.swap_end) || chain.kmove.has_addition(start, self.swap_end);
                if start == self.swap_end || is_used_edge {
                    continue;
                }

                let closing = self.tour.length_between(start, self.swap_end);
                if let Some(chain) = chain.add_edge(self.swap_end, closing) {
                    self.final_move_check(&chain)?;
                }
            } else {
                self.try_nearby_points(&mut chain, start)?;
            }
        }

        ControlFlow::Continue(())
    }

    fn final_move_check(&mut self, chain: &Chain) -> ControlFlow<()> {
        let gain = chain.margin.total();
        if gain <= self.config.min_improvement {
            return ControlFlow::Continue(());
        }

        self.statistics.closed_chains += 1;

        match self.config.strategy {
            SearchStrategy::Nonsequential => match count_cycles(self.tour, &chain.kmove) {
                Some(1) => self.accept(&chain.kmove, gain),
                Some(_) => {
                    self.keep_nonsequential(&chain.kmove, gain);
                    ControlFlow::Continue(())
                }
                None => ControlFlow::Continue(()),
            },
            _ if feasible(self.tour, &chain.kmove) => self.accept(&chain.kmove, gain),
            _ => ControlFlow::Continue(()),
        }
    }

    fn accept(&mut self, kmove: &KMove, gain: Length) -> ControlFlow<()> {
        self.statistics.feasible_moves += 1;

        if self.best.as_ref().is_none_or(|best| gain > best.gain) {
            self.best = Some(Improvement { kmove: kmove.clone(), gain });
        }

        match self.config.mode {
            SearchMode::FirstImprovement => ControlFlow::Break(()),
            SearchMode::BestImprovement => ControlFlow::Continue(()),
        }
    }

    fn keep_nonsequential(&mut self, kmove: &KMove, gain: Length) {
        if self.nonsequential_moves.len() < self.config.max_nonsequential_moves {
            self.statistics.nonsequential_moves += 1;
            self.nonsequential_moves.push(Improvement { kmove: kmove.clone(), gain });
        }
    }

    fn update_depth(&mut self, depth: usize) {
        self.statistics.max_depth = self.statistics.max_depth.max(depth);
    }

    fn is_last_removal(&self, k: usize) -> bool {
        match self.config.strategy {
            SearchStrategy::Random { .. } => k >= 2 * self.config.kmax,
            SearchStrategy::Optimal | SearchStrategy::Nonsequential => k >= self.config.kmax,
        }
    }

    /// Returns candidate end points of a new edge starting at the point. Any point closer than the
    /// margin is inside of the search box, so the box query does not lose gainful candidates.
    fn search_neighborhood(&mut self, chain: &Chain, point: PointId) -> Vec<PointId> {
        let depth = chain.kmove.current_k();
        let radius = chain.margin.total();

        let mut points = self.quadtree.query(&self.tour.search_box(point, radius));

        if let SearchStrategy::Random { sample_size } = self.config.strategy {
            if depth >= self.config.kmax {
                let tour = self.tour;
                points.retain(|&other| tour.length_between(point, other) <= radius);
                points.shuffle(&mut self.random.get_rng());
                points.truncate(sample_size);
            }
        }

        points
    }
}
