//! The move finder searches for an improving k-opt move.
//!
//! For every starting point, the search deletes one of its two tour edges and then repeatedly inserts a
//! new edge to a nearby point and deletes one of the edges of that point, while the accumulated margin
//! (deleted minus inserted length) stays non negative. A chain is closed by connecting the last start with
//! the other endpoint of the first deleted edge. A closed chain with positive gain is accepted if it
//! keeps the tour a single cycle.

#[cfg(test)]
#[path = "../../../tests/unit/solver/finder/finder_test.rs"]
mod finder_test;

mod chain;
use self::chain::Chain;

mod mask;
pub use self::mask::Mask;

mod nonsequential;
use self::nonsequential::combine_moves;

mod search;
use self::search::Search;

use crate::algorithms::quadtree::Quadtree;
use crate::models::common::Length;
use crate::models::solution::Tour;
use crate::solver::KMove;
use crate::utils::{GenericResult, Random, compare_floats};
use std::rc::Rc;

/// Specifies when the search stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Returns the first found improving move.
    FirstImprovement,
    /// Scans all starting points and returns the move with the largest gain.
    BestImprovement,
}

/// Specifies how neighborhoods are explored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Explores every candidate up to `kmax` deleted edges.
    Optimal,
    /// Explores every candidate up to `kmax` deleted edges, then continues deeper (up to twice `kmax`)
    /// trying only a random sample of candidates on each level.
    Random {
        /// Maximum amount of candidates tried on each level beyond `kmax`.
        sample_size: usize,
    },
    /// Same as optimal, but also keeps improving moves which split the tour into several cycles.
    /// If no sequential move exists, pairs of such moves are combined into a single cycle move.
    Nonsequential,
}

/// Configures the move finder.
#[derive(Clone, Debug)]
pub struct FinderConfig {
    /// Maximum amount of edges replaced by one move.
    pub kmax: usize,
    /// Search mode.
    pub mode: SearchMode,
    /// Search strategy.
    pub strategy: SearchStrategy,
    /// Minimum gain of a move to be accepted.
    pub min_improvement: Length,
    /// Maximum amount of non sequential moves kept during one search.
    pub max_nonsequential_moves: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            kmax: 3,
            mode: SearchMode::FirstImprovement,
            strategy: SearchStrategy::Optimal,
            min_improvement: 1E-7,
            max_nonsequential_moves: 64,
        }
    }
}

/// An improving move with its gain.
#[derive(Clone, Debug)]
pub struct Improvement {
    /// A move to apply.
    pub kmove: KMove,
    /// Tour length reduction after applying the move.
    pub gain: Length,
}

/// Keeps counters collected by the finder across all searches.
#[derive(Clone, Debug, Default)]
pub struct FinderStatistics {
    /// Amount of `find_best` calls.
    pub searches: usize,
    /// Amount of closed chains with positive gain.
    pub closed_chains: usize,
    /// Amount of closed chains which keep a single cycle.
    pub feasible_moves: usize,
    /// Amount of kept non sequential moves.
    pub nonsequential_moves: usize,
    /// Maximum amount of deleted edges reached in a chain.
    pub max_depth: usize,
}

/// Searches for improving k-opt moves on a tour.
pub struct Finder<'a> {
    quadtree: &'a Quadtree,
    config: FinderConfig,
    random: Rc<dyn Random>,
    mask: Option<Mask>,
    nonsequential_moves: Vec<Improvement>,
    statistics: FinderStatistics,
}

impl<'a> Finder<'a> {
    /// Creates a new instance of `Finder`.
    pub fn new(quadtree: &'a Quadtree, config: FinderConfig, random: Rc<dyn Random>) -> GenericResult<Self> {
        if config.kmax < 2 {
            return Err(format!("kmax should be at least 2, got {}", config.kmax).into());
        }

        if let SearchStrategy::Random { sample_size: 0 } = config.strategy {
            return Err("random strategy requires positive sample size".into());
        }

        Ok(Self {
            quadtree,
            config,
            random,
            mask: None,
            nonsequential_moves: Vec::default(),
            statistics: FinderStatistics::default(),
        })
    }

    /// Returns finder configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Returns the quadtree used for neighborhood queries.
    pub fn quadtree(&self) -> &'a Quadtree {
        self.quadtree
    }

    /// Returns random generator used by the finder.
    pub fn random(&self) -> &dyn Random {
        self.random.as_ref()
    }

    /// Restricts starting points of the search, `None` removes restriction.
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        self.mask = mask;
    }

    /// Returns collected statistics.
    pub fn statistics(&self) -> &FinderStatistics {
        &self.statistics
    }

    /// Returns improving moves found by the last search which split the tour into several cycles,
    /// ordered by descending gain. Non empty only for the non sequential strategy.
    pub fn take_nonsequential_moves(&mut self) -> Vec<Improvement> {
        let mut moves = std::mem::take(&mut self.nonsequential_moves);
        moves.sort_by(|a, b| compare_floats(b.gain, a.gain));

        moves
    }

    /// Searches for an improving move which keeps the tour a single cycle.
    /// Returns `None` if the tour is a local optimum for the configured `kmax`.
    pub fn find_best(&mut self, tour: &Tour) -> Option<Improvement> {
        self.nonsequential_moves.clear();
        self.statistics.searches += 1;

        let mut search = Search::new(
            tour,
            self.quadtree,
            &self.config,
            self.random.as_ref(),
            &mut self.nonsequential_moves,
            &mut self.statistics,
        );

        let mut chain = Chain::default();
        for point in 0..tour.size() {
            if self.mask.as_ref().is_some_and(|mask| !mask.is_active(point)) {
                continue;
            }

            if search.start(&mut chain, point).is_break() {
                break;
            }
        }

        let best = search.into_best();
        debug_assert!(chain.kmove.starts.is_empty() && chain.margin.depth() == 0, "chain is not empty after search");

        best.or_else(|| match self.config.strategy {
            SearchStrategy::Nonsequential => {
                combine_moves(tour, self.nonsequential_moves.as_slice(), self.config.min_improvement)
            }
            _ => None,
        })
    }
}
