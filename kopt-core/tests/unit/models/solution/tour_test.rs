use super::*;
use crate::helpers::models::*;

#[test]
fn can_create_tour_with_given_order() {
    let tour = create_tour(create_grid_points(3, 2), &[0, 1, 2, 5, 4, 3]);

    assert_eq!(tour.size(), 6);
    assert_eq!(tour.next(0), 1);
    assert_eq!(tour.next(2), 5);
    assert_eq!(tour.next(3), 0);
    assert_eq!(tour.prev(0), 3);
    assert_eq!(tour.prev(5), 2);
    assert_eq!(tour.order(), vec![0, 1, 2, 5, 4, 3]);
    assert_eq!(tour.cycles(), 1);
    assert!(tour.validate().is_ok());
}

#[test]
fn can_keep_traversal_direction_when_point_zero_is_not_first() {
    let tour = create_tour(create_grid_points(3, 2), &[4, 3, 0, 1, 2, 5]);

    assert_eq!(tour.next(0), 1);
    assert_eq!(tour.order(), vec![0, 1, 2, 5, 4, 3]);
}

parameterized_test! {can_reject_invalid_initial_tour, (order, expected), {
    let points = create_grid_points(2, 2);
    let result = Tour::new(Rc::new(LengthCalculator::new(points)), order.as_slice());

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_reject_invalid_initial_tour! {
    case01_short: (vec![0, 1, 2], "initial tour has 3 points, expected 4"),
    case02_duplicate: (vec![0, 1, 1, 2], "initial tour visits point 1 more than once"),
    case03_unknown: (vec![0, 1, 2, 7], "initial tour has unknown point 7"),
}

#[test]
fn can_reject_too_small_point_set() {
    let points = create_point_set(&[(0., 0.), (1., 1.)]);

    assert!(Tour::identity(Rc::new(LengthCalculator::new(points))).is_err());
}

#[test]
fn can_calculate_lengths() {
    let tour = create_tour(create_unit_square(), &[0, 2, 1, 3]);

    assert_length_eq!(tour.length(0), Length::sqrt(2.));
    assert_length_eq!(tour.prev_length(0), 1.);
    assert_length_eq!(tour.length_between(1, 3), Length::sqrt(2.));
    assert_length_eq!(tour.total_length(), 2. + 2. * Length::sqrt(2.));
}

#[test]
fn can_get_relative_sequence() {
    let tour = create_identity_tour(create_grid_points(3, 3));

    assert_eq!(tour.sequence(4, 0), 4);
    assert_eq!(tour.sequence(4, 2), 2);
    assert_eq!(tour.sequence(1, 7), 3);
    assert_eq!(tour.sequence(7, 7), 0);
}

#[test]
fn can_swap_edges_with_two_opt_move() {
    let mut tour = create_tour(create_unit_square(), &[0, 2, 1, 3]);

    // deletes (0, 2) and (1, 3), inserts (0, 1) and (2, 3)
    tour.swap(&[0, 2], &[1, 3], &[0, 1]);

    assert!(tour.validate().is_ok());
    assert_length_eq!(tour.total_length(), 4.);
    assert!(tour.has_edge(0, 1));
    assert!(tour.has_edge(2, 3));
    assert!(!tour.has_edge(0, 2));
    (0..4).for_each(|point| {
        assert_eq!(tour.prev(tour.next(point)), point);
        assert_eq!(tour.next(tour.prev(point)), point);
    });
}

#[test]
fn can_swap_with_reversed_segment() {
    // 0 -> 1 -> 2 -> 3 -> 4 -> 5 -> 0
    let mut tour = create_identity_tour(create_grid_points(6, 1));

    // deletes (1, 2) and (3, 4), inserts (1, 3) and (2, 4)
    tour.swap(&[1, 2], &[3, 4], &[1, 3]);

    assert!(tour.validate().is_ok());
    assert_eq!(tour.next(1), 3);
    assert_eq!(tour.prev(3), 1);
    assert_eq!(tour.next(3), 2);
    assert_eq!(tour.next(2), 4);
    assert_eq!(tour.prev(4), 2);
    assert_eq!(tour.order(), vec![0, 1, 3, 2, 4, 5]);
}

#[test]
fn can_track_cycles_after_multicycle_swap() {
    // 0 -> 1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 0
    let points = create_point_set(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (3., 5.), (2., 5.), (1., 5.), (0., 5.)]);
    let mut tour = create_identity_tour(points);

    // deletes (1, 2) and (5, 6), inserts (1, 6) and (2, 5)
    tour.multicycle_swap(&[1, 2], &[6, 5], &[1, 5]);

    assert_eq!(tour.cycles(), 2);
    assert_eq!(tour.min_cycle_size(), 4);
    assert_eq!(tour.cycle_id(0), 0);
    assert_eq!(tour.cycle_id(6), 0);
    assert_eq!(tour.cycle_id(7), 0);
    assert_eq!(tour.cycle_id(2), 1);
    assert_eq!(tour.cycle_id(5), 1);
    assert_length_eq!(tour.max_outgroup_length(), 5.);
    assert!(tour.validate().is_err());
    assert_eq!(tour.order().len(), 8);
}

#[test]
fn can_switch_to_multicycle_bookkeeping_on_split_swap() {
    let points = create_point_set(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (3., 5.), (2., 5.), (1., 5.), (0., 5.)]);
    let mut tour = create_identity_tour(points);

    tour.swap(&[1, 2], &[6, 5], &[1, 5]);

    assert_eq!(tour.cycles(), 2);

    // merges cycles back: deletes (1, 6) and (5, 2), inserts (1, 2) and (5, 6)
    assert_eq!(tour.next(1), 6);
    assert_eq!(tour.next(5), 2);
    tour.multicycle_swap(&[1, 5], &[2, 6], &[1, 5]);

    assert_eq!(tour.cycles(), 1);
    assert!(tour.validate().is_ok());
}

#[test]
fn can_round_trip_order() {
    let points = create_random_points(50, 100., 3);
    let tour = create_tour(points.clone(), create_random_order(50, 5).as_slice());

    let copy = create_tour(points, tour.order().as_slice());

    assert_eq!(copy.order(), tour.order());
    assert_length_eq!(copy.total_length(), tour.total_length());
    (0..50).for_each(|point| {
        assert_eq!(copy.next(point), tour.next(point));
        assert_eq!(copy.prev(point), tour.prev(point));
    });
}

#[test]
fn can_create_search_boxes() {
    let tour = create_tour(create_unit_square(), &[0, 1, 2, 3]);

    assert_eq!(tour.search_box(2, 0.5), BoundingBox { min_x: 0.5, max_x: 1.5, min_y: 0.5, max_y: 1.5 });
    assert_eq!(tour.search_box_next(0), BoundingBox { min_x: -1., max_x: 1., min_y: -1., max_y: 1. });
    assert_eq!(tour.search_box_prev(0), BoundingBox { min_x: -1., max_x: 1., min_y: -1., max_y: 1. });
}

#[test]
#[should_panic(expected = "no available adjacency slot")]
fn can_panic_on_adjacency_overflow() {
    let mut tour = create_identity_tour(create_grid_points(4, 1));

    tour.swap(&[0], &[2], &[]);
}
