#[cfg(test)]
#[path = "../../tests/unit/solver/hill_climb_test.rs"]
mod hill_climb_test;

use crate::models::common::Length;
use crate::models::solution::Tour;
use crate::solver::{Finder, Improvement, Mask, Telemetry, merge};
use crate::utils::{GenericResult, Quota};
use std::sync::Arc;

/// A callback which receives the current tour periodically, e.g. to write it to a file.
pub type Checkpoint = Box<dyn FnMut(&Tour) -> GenericResult<()>>;

/// Configures hill climbing.
#[derive(Clone, Debug, Default)]
pub struct HillClimbConfig {
    /// Amount of applied moves between checkpoints, `None` disables checkpoints.
    pub save_period: Option<usize>,
    /// Validates the tour after optimization.
    pub validate_tour: bool,
}

/// Applies improving moves found by the finder until none is left.
pub struct HillClimber<'a> {
    finder: Finder<'a>,
    config: HillClimbConfig,
    quota: Option<Arc<dyn Quota>>,
    checkpoint: Option<Checkpoint>,
    applied: usize,
}

impl<'a> HillClimber<'a> {
    /// Creates a new instance of `HillClimber`.
    pub fn new(finder: Finder<'a>, config: HillClimbConfig) -> Self {
        Self { finder, config, quota: None, checkpoint: None, applied: 0 }
    }

    /// Sets a quota which stops climbing once reached.
    pub fn with_quota(mut self, quota: Arc<dyn Quota>) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Sets a checkpoint callback called every `save_period` applied moves.
    pub fn with_checkpoint(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HillClimbConfig {
        &self.config
    }

    /// Returns the move finder.
    pub fn finder(&self) -> &Finder<'a> {
        &self.finder
    }

    /// Returns true if the quota is reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }

    /// Climbs until a local optimum is reached or quota is exceeded, calling checkpoint periodically.
    /// Returns amount of applied moves.
    pub fn climb(&mut self, tour: &mut Tour, telemetry: &mut Telemetry) -> GenericResult<usize> {
        self.climb_with(tour, telemetry, true)
    }

    /// Climbs on a tour which may be discarded afterwards: search starts only from masked points and
    /// checkpoints are skipped.
    pub fn climb_masked(&mut self, tour: &mut Tour, mask: Mask, telemetry: &mut Telemetry) -> GenericResult<usize> {
        self.finder.set_mask(Some(mask));
        let result = self.climb_with(tour, telemetry, false);
        self.finder.set_mask(None);

        result
    }

    /// Calls checkpoint unconditionally if it is set.
    pub fn save_final(&mut self, tour: &Tour) -> GenericResult<()> {
        match self.checkpoint.as_mut() {
            Some(checkpoint) => checkpoint(tour),
            None => Ok(()),
        }
    }

    fn climb_with(&mut self, tour: &mut Tour, telemetry: &mut Telemetry, save: bool) -> GenericResult<usize> {
        let mut applied = 0;

        while !self.is_quota_reached() {
            if let Some(Improvement { kmove, gain }) = self.finder.find_best(tour) {
                tour.swap(&kmove.starts, &kmove.ends, &kmove.removes);
                telemetry.on_improvement(kmove.current_k(), gain, tour.total_length());
            } else if let Some((merged, gain)) = self.try_merge(tour) {
                *tour = merged;
                telemetry.on_merge(gain, tour.total_length());
            } else {
                break;
            }

            applied += 1;

            if save {
                self.applied += 1;
                self.save(tour)?;
            }
        }

        Ok(applied)
    }

    /// Applies improving non sequential moves kept by the last search and merges resulting cycles back.
    /// Returns the merged tour together with its gain.
    fn try_merge(&mut self, tour: &Tour) -> Option<(Tour, Length)> {
        let length = tour.total_length();
        let min_improvement = self.finder.config().min_improvement;
        let quadtree = self.finder.quadtree();

        self.finder.take_nonsequential_moves().into_iter().find_map(|Improvement { kmove, gain }| {
            let mut split = tour.clone();
            split.multicycle_swap(&kmove.starts, &kmove.ends, &kmove.removes);

            merge(quadtree, &split, gain)
                .map(|merged| {
                    let merged_length = merged.total_length();
                    (merged, length - merged_length)
                })
                .filter(|(merged, gain)| *gain > min_improvement && merged.validate().is_ok())
        })
    }

    fn save(&mut self, tour: &Tour) -> GenericResult<()> {
        match (self.config.save_period, self.checkpoint.as_mut()) {
            (Some(period), Some(checkpoint)) if period > 0 && self.applied % period == 0 => checkpoint(tour),
            _ => Ok(()),
        }
    }
}
