use crate::helpers::*;
use crate::points::PlainPointsProblem;
use crate::tsplib::TsplibProblem;
use kopt_core::prelude::*;
use std::io::BufReader;
use std::rc::Rc;
use std::sync::Arc;

fn solve_problem(points: PointSet, step: usize, perturbation: Option<PerturbationConfig>) -> Tour {
    let size = points.size();
    let order = (0..size).map(|idx| (idx * step) % size).collect::<Vec<_>>();

    let points = Arc::new(points);
    let quadtree = Quadtree::with_max_depth(points.clone(), Domain::DEFAULT_MAX_DEPTH).expect("cannot create quadtree");
    let tour = Tour::new(Rc::new(LengthCalculator::new(points)), order.as_slice()).expect("cannot create tour");

    let random = Rc::new(DefaultRandom::new_repeatable(0));
    let finder = Finder::new(&quadtree, FinderConfig::default(), random).expect("cannot create finder");
    let climber = HillClimber::new(finder, HillClimbConfig { save_period: None, validate_tour: true });

    let (tour, _) =
        Solver::new(climber, perturbation, Telemetry::new(TelemetryMode::None)).solve(tour).expect("cannot solve");

    tour
}

#[test]
fn can_solve_circle_problem_to_optimum() {
    let file = get_test_resource("../../data/tsplib/circle16.tsp").expect("cannot open file");
    let points = BufReader::new(file).read_tsplib().expect("cannot read problem");

    let tour = solve_problem(points, 7, None);

    assert_length_eq!(tour.total_length(), 624.2890304516104, 1E-3);
}

#[test]
fn can_solve_grid_problem_close_to_optimum() {
    let points = BufReader::new(get_test_resource("../../data/plain/grid8x8.txt").expect("cannot open file"))
        .read_points()
        .expect("cannot read problem");
    let perturbation = PerturbationConfig { kind: PerturbationKind::SegmentDoubleBridge, max_rounds: 200 };

    let tour = solve_problem(points, 27, Some(perturbation));

    assert_eq!(tour.size(), 64);
    assert!(tour.total_length() < 64. * 1.15, "tour is too long: {}", tour.total_length());
}
