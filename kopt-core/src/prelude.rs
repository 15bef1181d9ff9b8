//! This module reimports a common used types.

// Reimport core types
pub use crate::algorithms::quadtree::{Domain, Quadtree};

pub use crate::models::common::{BoundingBox, Length, PointId};
pub use crate::models::problem::{LengthCalculator, PointSet};
pub use crate::models::solution::Tour;

pub use crate::solver::{Finder, FinderConfig, Improvement, KMove, Mask, SearchMode, SearchStrategy};
pub use crate::solver::{HillClimbConfig, HillClimber, Solver};
pub use crate::solver::{InfoLogger, Metrics, Telemetry, TelemetryMode};
pub use crate::solver::{PerturbationConfig, PerturbationKind};

// Reimport utils
pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Float, GenericError, GenericResult};
pub use crate::utils::{Quota, TimeQuota, Timer};
