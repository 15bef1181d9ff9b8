//! The solver module contains the k-opt search engine and the driver loop around it.
//!
//! A typical run builds a `Quadtree` over the points, creates a `Tour` from an initial permutation
//! and passes both to a `Solver`:
//!
//! ```
//! # use kopt_core::prelude::*;
//! # use std::rc::Rc;
//! # use std::sync::Arc;
//! let points = Arc::new(PointSet::from_coordinates(vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.)])?);
//! let quadtree = Quadtree::with_max_depth(points.clone(), Domain::DEFAULT_MAX_DEPTH)?;
//! let tour = Tour::new(Rc::new(LengthCalculator::new(points)), &[0, 2, 1, 3])?;
//!
//! let finder = Finder::new(&quadtree, FinderConfig::default(), Rc::new(DefaultRandom::new_repeatable(0)))?;
//! let climber = HillClimber::new(finder, HillClimbConfig::default());
//! let (tour, _) = Solver::new(climber, None, Telemetry::new(TelemetryMode::None)).solve(tour)?;
//!
//! assert!((tour.total_length() - 4.).abs() < 1E-9);
//! # Ok::<(), GenericError>(())
//! ```

mod feasibility;
pub use self::feasibility::*;

mod finder;
pub use self::finder::*;

mod hill_climb;
pub use self::hill_climb::*;

mod kmove;
pub use self::kmove::*;

mod merge;
pub use self::merge::merge;

mod perturbation;
pub use self::perturbation::*;

mod telemetry;
pub use self::telemetry::*;

use crate::models::solution::Tour;
use crate::utils::GenericResult;

/// Runs hill climbing followed by optional perturbation rounds.
pub struct Solver<'a> {
    climber: HillClimber<'a>,
    perturbation: Option<PerturbationConfig>,
    telemetry: Telemetry,
}

impl<'a> Solver<'a> {
    /// Creates a new instance of `Solver`.
    pub fn new(climber: HillClimber<'a>, perturbation: Option<PerturbationConfig>, telemetry: Telemetry) -> Self {
        Self { climber, perturbation, telemetry }
    }

    /// Improves the tour and returns it together with collected metrics.
    pub fn solve(mut self, mut tour: Tour) -> GenericResult<(Tour, Metrics)> {
        self.telemetry.start();
        self.telemetry.on_initial(tour.size(), tour.total_length());

        self.climber.climb(&mut tour, &mut self.telemetry)?;

        if let Some(perturbation) = self.perturbation.clone() {
            tour = self.perturb(tour, &perturbation)?;
        }

        self.climber.save_final(&tour)?;

        if self.climber.config().validate_tour {
            tour.validate()?;
            self.telemetry.log("tour is valid");
        }

        self.telemetry.on_result(tour.total_length(), self.climber.finder().statistics());

        Ok((tour, self.telemetry.take_metrics()))
    }

    /// Perturbs a copy of the tour, climbs locally around perturbed edges and keeps the copy if it is shorter.
    fn perturb(&mut self, mut tour: Tour, config: &PerturbationConfig) -> GenericResult<Tour> {
        let min_improvement = self.climber.finder().config().min_improvement;
        let mut accepted = 0;

        for round in 0..config.max_rounds {
            if self.climber.is_quota_reached() {
                break;
            }

            let Some(kmove) = config.kind.create_move(&tour, self.climber.finder().random()) else {
                self.telemetry.log(format!("tour is too small for {:?} perturbation", config.kind).as_str());
                break;
            };

            let mut candidate = tour.clone();
            candidate.swap(&kmove.starts, &kmove.ends, &kmove.removes);

            let mask_points = kmove.starts.iter().chain(kmove.ends.iter()).copied().collect::<Vec<_>>();
            let mask = Mask::with_actives(tour.size(), mask_points.as_slice());
            self.climber.climb_masked(&mut candidate, mask, &mut self.telemetry)?;

            let is_accepted = candidate.total_length() < tour.total_length() - min_improvement;
            if is_accepted {
                tour = candidate;
                accepted += 1;
            }

            self.telemetry.on_perturbation(round, is_accepted, tour.total_length());
        }

        // masked climbs do not revisit the whole tour
        if accepted > 0 {
            self.climber.climb(&mut tour, &mut self.telemetry)?;
        }

        Ok(tour)
    }
}
