use crate::helpers::models::*;
use crate::helpers::solver::{create_finder, create_finder_config};
use crate::prelude::*;
use std::f64::consts::PI;
use std::sync::Arc;

struct ReachedQuota;

impl Quota for ReachedQuota {
    fn is_reached(&self) -> bool {
        true
    }
}

fn solve_tour(
    tour: Tour,
    quadtree: &Quadtree,
    config: FinderConfig,
    perturbation: Option<PerturbationConfig>,
) -> (Tour, Metrics) {
    let finder = create_finder(quadtree, config);
    let climber = HillClimber::new(finder, HillClimbConfig { save_period: None, validate_tour: true });

    Solver::new(climber, perturbation, Telemetry::new(TelemetryMode::None)).solve(tour).expect("cannot solve")
}

fn create_polygon(size: usize, radius: Float) -> Vec<(Float, Float)> {
    (0..size)
        .map(|idx| {
            let angle = 2. * PI * idx as Float / size as Float;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

parameterized_test! {can_solve_crossed_square, (kmax, mode, strategy), {
    let points = create_unit_square();
    let quadtree = create_quadtree(points.clone());
    let tour = create_tour(points, &[0, 2, 1, 3]);

    let (tour, metrics) = solve_tour(tour, &quadtree, create_finder_config(kmax, mode, strategy), None);

    assert_length_eq!(tour.total_length(), 4.);
    assert_length_eq!(metrics.initial_length, 2. + 2. * Float::sqrt(2.));
    assert_length_eq!(metrics.final_length, 4.);
    assert_eq!(metrics.improvements, 1);
}}

can_solve_crossed_square! {
    case01_two_opt: (2, SearchMode::FirstImprovement, SearchStrategy::Optimal),
    case02_three_opt_best: (3, SearchMode::BestImprovement, SearchStrategy::Optimal),
    case03_random: (3, SearchMode::FirstImprovement, SearchStrategy::Random { sample_size: 2 }),
    case04_nonsequential: (3, SearchMode::FirstImprovement, SearchStrategy::Nonsequential),
}

parameterized_test! {can_find_convex_hull_tour_of_polygon, (size, kmax, seed), {
    let points = create_point_set(create_polygon(size, 10.).as_slice());
    let quadtree = create_quadtree(points.clone());
    let tour = create_tour(points, create_random_order(size, seed).as_slice());
    let perimeter = size as Float * 20. * (PI / size as Float).sin();

    let config = create_finder_config(kmax, SearchMode::FirstImprovement, SearchStrategy::Optimal);

    let (tour, _) = solve_tour(tour, &quadtree, config, None);

    assert_length_eq!(tour.total_length(), perimeter, 1E-6);
}}

can_find_convex_hull_tour_of_polygon! {
    case01_two_opt_small: (12, 2, 0),
    case02_two_opt_large: (50, 2, 1),
    case03_three_opt: (50, 3, 2),
    case04_five_opt: (30, 5, 3),
}

#[test]
fn can_solve_grid_close_to_optimum() {
    let points = create_grid_points(6, 6);
    let quadtree = create_quadtree(points.clone());
    let tour = create_tour(points, create_random_order(36, 0).as_slice());
    let perturbation = PerturbationConfig { kind: PerturbationKind::SegmentDoubleBridge, max_rounds: 200 };

    let (tour, metrics) = solve_tour(tour, &quadtree, FinderConfig::default(), Some(perturbation));

    assert!(tour.total_length() >= 36. - 1E-9);
    assert!(tour.total_length() < 36. * 1.15);
    assert_eq!(metrics.perturbations, 200);
    assert!(metrics.accepted_perturbations <= metrics.perturbations);
}

parameterized_test! {can_improve_with_perturbations, (kind, seed), {
    let size = 150;
    let points = create_random_points(size, 1000., seed);
    let quadtree = create_quadtree(points.clone());
    let order = create_random_order(size, seed);
    let config = FinderConfig { kmax: 3, ..FinderConfig::default() };

    let (climbed, _) = solve_tour(create_tour(points.clone(), order.as_slice()), &quadtree, config.clone(), None);
    let perturbation = PerturbationConfig { kind, max_rounds: 50 };
    let (perturbed, metrics) = solve_tour(create_tour(points, order.as_slice()), &quadtree, config, Some(perturbation));

    assert!(perturbed.total_length() <= climbed.total_length() + 1E-9);
    assert_length_eq!(metrics.final_length, perturbed.total_length());
    assert!(metrics.final_length < metrics.initial_length);
}}

can_improve_with_perturbations! {
    case01_double_bridge: (PerturbationKind::DoubleBridge, 0),
    case02_segment_double_bridge: (PerturbationKind::SegmentDoubleBridge, 1),
}

#[test]
fn can_keep_tour_when_quota_is_reached() {
    let size = 50;
    let points = create_random_points(size, 100., 0);
    let quadtree = create_quadtree(points.clone());
    let tour = create_tour(points, create_random_order(size, 0).as_slice());
    let initial_order = tour.order();

    let finder = create_finder(&quadtree, FinderConfig::default());
    let climber = HillClimber::new(finder, HillClimbConfig::default()).with_quota(Arc::new(ReachedQuota));
    let perturbation = PerturbationConfig { kind: PerturbationKind::DoubleBridge, max_rounds: 10 };
    let solver = Solver::new(climber, Some(perturbation), Telemetry::new(TelemetryMode::None));

    let (tour, metrics) = solver.solve(tour).expect("cannot solve");

    assert_eq!(tour.order(), initial_order);
    assert_eq!(metrics.improvements, 0);
    assert_eq!(metrics.perturbations, 0);
}

#[test]
fn can_skip_perturbation_on_small_tour() {
    let points = create_unit_square();
    let quadtree = create_quadtree(points.clone());
    let tour = create_tour(points, &[0, 1, 2, 3]);
    let perturbation = PerturbationConfig { kind: PerturbationKind::DoubleBridge, max_rounds: 10 };

    let (tour, metrics) = solve_tour(tour, &quadtree, FinderConfig::default(), Some(perturbation));

    assert_length_eq!(tour.total_length(), 4.);
    assert_eq!(metrics.perturbations, 0);
}
