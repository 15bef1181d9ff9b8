use crate::extensions::solve::config::{create_settings_from_config, read_config};
use crate::extensions::solve::interruption::create_interruption_quota;
use crate::helpers::*;
use kopt_core::prelude::*;
use kopt_scientific::tsplib::TsplibProblem;
use std::io::BufReader;
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn can_solve_problem_using_full_config() {
    let points = Arc::new(BufReader::new(open_test_file(CIRCLE_PROBLEM_PATH)).read_tsplib().expect("cannot read"));
    let config = read_config(BufReader::new(open_test_file(FULL_CONFIG_PATH))).expect("cannot read config");
    let settings = create_settings_from_config(&config).expect("cannot create settings");

    let lengths = Rc::new(settings.create_lengths(points.clone()));
    let tour = Tour::new(lengths.clone(), &[0, 8, 1, 9, 2, 10, 3, 11, 4, 12, 5, 13, 6, 14, 7, 15])
        .expect("cannot create tour");
    let quadtree = Quadtree::with_max_depth(points, settings.max_depth).expect("cannot create quadtree");
    let finder = Finder::new(&quadtree, settings.finder.clone(), Rc::new(settings.create_random()))
        .expect("cannot create finder");
    let climber = HillClimber::new(finder, settings.hill_climb.clone())
        .with_quota(create_interruption_quota(settings.max_time));
    let telemetry = settings.create_telemetry(Arc::new(|_: &str| {}));

    let (tour, metrics) =
        Solver::new(climber, settings.perturbation.clone(), telemetry).solve(tour).expect("cannot solve");

    assert_length_eq!(tour.total_length(), 624.2890304516104, 1E-3);
    assert!(metrics.improvements > 0);
    assert_eq!(metrics.perturbations, 50);
    assert!(lengths.is_cached());
    assert!(lengths.entries() > 0);
}
