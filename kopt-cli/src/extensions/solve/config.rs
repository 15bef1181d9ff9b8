//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use kopt_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies move search configuration.
    pub search: Option<SearchConfig>,
    /// Specifies hill climbing configuration.
    pub hill_climb: Option<HillClimbingConfig>,
    /// Specifies perturbation type.
    pub perturbation: Option<PerturbationType>,
    /// Specifies quadtree configuration.
    pub quadtree: Option<QuadtreeConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies randomization seed.
    pub seed: Option<u64>,
}

/// A move search configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum amount of edges replaced by one move. Default is 3.
    pub kmax: Option<usize>,
    /// Stops on the first improving move instead of searching for the best one. Default is true.
    pub first_improvement: Option<bool>,
    /// Search strategy. Default is optimal.
    pub strategy: Option<StrategyType>,
    /// Minimum gain of accepted move. Default is 1E-7.
    pub min_improvement: Option<Float>,
    /// Memoizes calculated lengths. Default is false.
    pub length_cache: Option<bool>,
}

/// A search strategy configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum StrategyType {
    /// Explores all candidates.
    Optimal,

    /// Samples candidates beyond kmax.
    #[serde(rename_all = "camelCase")]
    Random {
        /// Amount of candidates tried on each level.
        sample_size: usize,
    },

    /// Combines moves which split the tour into several cycles.
    #[serde(rename_all = "camelCase")]
    Nonsequential {
        /// Maximum amount of kept non sequential moves. Default is 64.
        max_moves: Option<usize>,
    },
}

/// A hill climbing configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HillClimbingConfig {
    /// Amount of applied moves between writing intermediate tours.
    pub save_period: Option<usize>,
    /// Validates the final tour.
    pub validate_tour: Option<bool>,
}

/// A perturbation configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum PerturbationType {
    /// Random double bridge.
    DoubleBridge {
        /// Amount of perturbation rounds.
        rounds: usize,
    },

    /// Double bridge on a short segment.
    SegmentDoubleBridge {
        /// Amount of perturbation rounds.
        rounds: usize,
    },
}

/// A quadtree configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadtreeConfig {
    /// Maximum quadtree depth.
    pub max_depth: Option<usize>,
}

/// An algorithm termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time in seconds.
    pub max_time: Option<usize>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging to stdout.
    pub enabled: bool,
    /// Logs every n-th improvement. Default is 100.
    pub log_every: Option<usize>,
}

/// Solver settings resolved from configuration with defaults applied.
#[derive(Clone, Debug)]
pub struct SolverSettings {
    /// Move finder configuration.
    pub finder: FinderConfig,
    /// Hill climbing configuration.
    pub hill_climb: HillClimbConfig,
    /// Perturbation configuration.
    pub perturbation: Option<PerturbationConfig>,
    /// Maximum quadtree depth.
    pub max_depth: usize,
    /// Memoizes calculated lengths.
    pub length_cache: bool,
    /// Max time in seconds.
    pub max_time: Option<usize>,
    /// Logs every n-th improvement when set.
    pub log_every: Option<usize>,
    /// Randomization seed.
    pub seed: Option<u64>,
}

/// Default amount of improvements between log messages.
pub const DEFAULT_LOG_EVERY: usize = 100;

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            finder: FinderConfig::default(),
            hill_climb: HillClimbConfig::default(),
            perturbation: None,
            max_depth: Domain::DEFAULT_MAX_DEPTH,
            length_cache: false,
            max_time: None,
            log_every: None,
            seed: None,
        }
    }
}

impl SolverSettings {
    /// Creates telemetry which writes to the given logger if logging is enabled.
    pub fn create_telemetry(&self, logger: InfoLogger) -> Telemetry {
        Telemetry::new(match self.log_every {
            Some(log_every) => TelemetryMode::OnlyLogging { logger, log_every },
            None => TelemetryMode::None,
        })
    }

    /// Creates length calculator over given points.
    pub fn create_lengths(&self, points: Arc<PointSet>) -> LengthCalculator {
        if self.length_cache { LengthCalculator::with_cache(points) } else { LengthCalculator::new(points) }
    }

    /// Creates random generator: repeatable if seed is set.
    pub fn create_random(&self) -> DefaultRandom {
        self.seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates solver settings from config file.
pub fn create_settings_from_config_file<R: Read>(reader: BufReader<R>) -> GenericResult<SolverSettings> {
    read_config(reader).and_then(|config| create_settings_from_config(&config))
}

/// Creates solver settings from config.
pub fn create_settings_from_config(config: &Config) -> GenericResult<SolverSettings> {
    let mut settings = SolverSettings::default();

    if let Some(search) = &config.search {
        configure_search(&mut settings, search)?;
    }

    if let Some(hill_climb) = &config.hill_climb {
        if hill_climb.save_period == Some(0) {
            return Err("save period should be positive".into());
        }

        settings.hill_climb.save_period = hill_climb.save_period;
        settings.hill_climb.validate_tour = hill_climb.validate_tour.unwrap_or(false);
    }

    settings.perturbation = config.perturbation.as_ref().map(|perturbation| match perturbation {
        PerturbationType::DoubleBridge { rounds } => {
            PerturbationConfig { kind: PerturbationKind::DoubleBridge, max_rounds: *rounds }
        }
        PerturbationType::SegmentDoubleBridge { rounds } => {
            PerturbationConfig { kind: PerturbationKind::SegmentDoubleBridge, max_rounds: *rounds }
        }
    });

    if let Some(max_depth) = config.quadtree.as_ref().and_then(|quadtree| quadtree.max_depth) {
        if max_depth == 0 || max_depth > Domain::LIMIT_MAX_DEPTH {
            return Err(format!("quadtree max depth should be in [1, {}], got {max_depth}", Domain::LIMIT_MAX_DEPTH)
                .into());
        }

        settings.max_depth = max_depth;
    }

    settings.max_time = config.termination.as_ref().and_then(|termination| termination.max_time);

    settings.log_every = match &config.logging {
        Some(LoggingConfig { enabled: true, log_every: Some(0) }) => return Err("log every should be positive".into()),
        Some(LoggingConfig { enabled: true, log_every }) => Some(log_every.unwrap_or(DEFAULT_LOG_EVERY)),
        _ => None,
    };

    settings.seed = config.seed;

    Ok(settings)
}

fn configure_search(settings: &mut SolverSettings, search: &SearchConfig) -> GenericResult<()> {
    let finder = &mut settings.finder;

    if let Some(kmax) = search.kmax {
        if kmax < 2 {
            return Err(format!("kmax should be at least 2, got {kmax}").into());
        }
        finder.kmax = kmax;
    }

    if let Some(first_improvement) = search.first_improvement {
        finder.mode = if first_improvement { SearchMode::FirstImprovement } else { SearchMode::BestImprovement };
    }

    match &search.strategy {
        Some(StrategyType::Optimal) | None => {}
        Some(StrategyType::Random { sample_size: 0 }) => return Err("sample size should be positive".into()),
        Some(StrategyType::Random { sample_size }) => {
            finder.strategy = SearchStrategy::Random { sample_size: *sample_size };
        }
        Some(StrategyType::Nonsequential { max_moves }) => {
            finder.strategy = SearchStrategy::Nonsequential;
            finder.max_nonsequential_moves = max_moves.unwrap_or(finder.max_nonsequential_moves);
        }
    }

    if let Some(min_improvement) = search.min_improvement {
        if !min_improvement.is_finite() || min_improvement < 0. {
            return Err(format!("min improvement should be non negative, got {min_improvement}").into());
        }
        finder.min_improvement = min_improvement;
    }

    settings.length_cache = search.length_cache.unwrap_or(false);

    Ok(())
}
