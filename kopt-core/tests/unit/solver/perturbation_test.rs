use super::*;
use crate::helpers::models::{
    create_grid_points, create_identity_tour, create_random_order, create_random_points, create_tour,
};
use crate::helpers::solver::is_single_cycle_after;
use crate::solver::count_cycles;
use crate::utils::DefaultRandom;

#[test]
fn can_create_double_bridge_on_smallest_tour() {
    let tour = create_identity_tour(create_grid_points(4, 2));
    let random = DefaultRandom::new_repeatable(0);

    let kmove = random_double_bridge(&tour, &random).expect("cannot create double bridge");

    assert_eq!(kmove.current_k(), 4);
    assert_eq!(count_cycles(&tour, &kmove), Some(1));
    assert!(is_single_cycle_after(&tour, &kmove));
}

parameterized_test! {can_create_feasible_random_double_bridge, (size, seed), {
    let points = create_random_points(size, 100., seed);
    let tour = create_tour(points, create_random_order(size, seed).as_slice());
    let random = DefaultRandom::new_repeatable(seed);

    (0..20).for_each(|_| {
        let kmove = random_double_bridge(&tour, &random).expect("cannot create double bridge");
        kmove.validate();

        let mut removes = kmove.removes.clone();
        removes.sort_unstable();
        removes.dedup();
        assert_eq!(removes.len(), 4);
        assert_eq!(count_cycles(&tour, &kmove), Some(1));
        assert!(is_single_cycle_after(&tour, &kmove));
    });
}}

can_create_feasible_random_double_bridge! {
    case01_small: (9, 0),
    case02_medium: (20, 1),
    case03_large: (100, 2),
}

#[test]
fn can_create_segment_double_bridge() {
    let tour = create_identity_tour(create_grid_points(5, 2));

    let kmove = segment_double_bridge(&tour, 0).expect("cannot create segment double bridge");

    assert_eq!(kmove, KMove::new(vec![1, 2, 3, 4], vec![6, 5, 8, 7], vec![1, 5, 3, 7]));
    assert!(is_single_cycle_after(&tour, &kmove));
}

#[test]
fn can_create_segment_double_bridge_from_any_start() {
    let size = 15;
    let tour = create_tour(create_random_points(size, 10., 3), create_random_order(size, 3).as_slice());

    (0..size).for_each(|start| {
        let kmove = segment_double_bridge(&tour, start).expect("cannot create segment double bridge");

        assert_eq!(count_cycles(&tour, &kmove), Some(1));
        assert!(is_single_cycle_after(&tour, &kmove));
    });
}

parameterized_test! {can_reject_too_small_tour, (kind, size, expected), {
    let tour = create_identity_tour(create_grid_points(size, 1));
    let random = DefaultRandom::new_repeatable(0);

    assert_eq!(kind.create_move(&tour, &random).is_some(), expected);
}}

can_reject_too_small_tour! {
    case01_double_bridge_small: (PerturbationKind::DoubleBridge, 7, false),
    case02_double_bridge_enough: (PerturbationKind::DoubleBridge, 8, true),
    case03_segment_small: (PerturbationKind::SegmentDoubleBridge, 9, false),
    case04_segment_enough: (PerturbationKind::SegmentDoubleBridge, 10, true),
}
