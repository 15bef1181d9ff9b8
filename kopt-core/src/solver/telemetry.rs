//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::common::Length;
use crate::solver::FinderStatistics;
use crate::utils::{Float, Timer};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the optimizer.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Encapsulates different measurements regarding search execution.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Search duration in milliseconds.
    pub duration: usize,
    /// Total amount of applied improving moves.
    pub improvements: usize,
    /// Amount of successful multi-cycle merges.
    pub merges: usize,
    /// Total amount of perturbation rounds.
    pub perturbations: usize,
    /// Amount of perturbation rounds which resulted in a shorter tour.
    pub accepted_perturbations: usize,
    /// Tour length before search.
    pub initial_length: Length,
    /// Tour length after search.
    pub final_length: Length,
    /// Speed: improvements per second.
    pub speed: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often improvements are logged.
        log_every: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: Metrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { metrics: Metrics::default(), time: Timer::start(), mode }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Reports initial tour.
    pub fn on_initial(&mut self, size: usize, length: Length) {
        self.metrics.initial_length = length;
        self.metrics.final_length = length;

        self.log(format!("[{}s] initial tour: {size} points, length {length:.3}", self.time.elapsed_secs()).as_str());
    }

    /// Reports an applied improving move.
    pub fn on_improvement(&mut self, k: usize, gain: Length, length: Length) {
        self.metrics.improvements += 1;
        self.metrics.final_length = length;

        let improvements = self.metrics.improvements;
        if let TelemetryMode::OnlyLogging { log_every, .. } = &self.mode {
            if improvements % (*log_every).max(1) == 0 {
                self.log(
                    format!(
                        "[{}s] iteration {improvements}: length {length:.3} ({k}-opt, gain {gain:.3})",
                        self.time.elapsed_secs()
                    )
                    .as_str(),
                );
            }
        }
    }

    /// Reports a merged non sequential move.
    pub fn on_merge(&mut self, gain: Length, length: Length) {
        self.metrics.merges += 1;
        self.metrics.final_length = length;

        self.log(
            format!("[{}s] merged non sequential move: length {length:.3}, gain {gain:.3}", self.time.elapsed_secs())
                .as_str(),
        );
    }

    /// Reports a perturbation round.
    pub fn on_perturbation(&mut self, round: usize, accepted: bool, length: Length) {
        self.metrics.perturbations += 1;

        if accepted {
            self.metrics.accepted_perturbations += 1;
            self.metrics.final_length = length;
            self.log(
                format!("[{}s] perturbation round {round} accepted: length {length:.3}", self.time.elapsed_secs())
                    .as_str(),
            );
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, length: Length, statistics: &FinderStatistics) {
        let duration = self.time.elapsed_millis() as usize;
        let speed = self.metrics.improvements as Float / self.time.elapsed_secs_as_float().max(Float::EPSILON);

        self.metrics.duration = duration;
        self.metrics.final_length = length;
        self.metrics.speed = speed;

        self.log(
            format!(
                "[{}s] total improvements: {}, merges: {}, perturbations: {} of {} accepted, speed: {speed:.2} moves/sec",
                self.time.elapsed_secs(),
                self.metrics.improvements,
                self.metrics.merges,
                self.metrics.accepted_perturbations,
                self.metrics.perturbations,
            )
            .as_str(),
        );
        self.log(
            format!(
                "\tsearches: {}, closed chains: {}, feasible: {}, non sequential: {}, max depth: {}",
                statistics.searches,
                statistics.closed_chains,
                statistics.feasible_moves,
                statistics.nonsequential_moves,
                statistics.max_depth
            )
            .as_str(),
        );
        self.log(
            format!("\tlength: {:.3} -> {length:.3}, took {duration}ms", self.metrics.initial_length).as_str(),
        );
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Metrics {
        self.metrics
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
