use super::*;
use crate::helpers::models::{create_grid_points, create_point_set, create_quadtree, create_random_points};

fn distance(points: &PointSet, a: PointId, b: PointId) -> Length {
    let (ax, ay) = points.coordinates(a);
    let (bx, by) = points.coordinates(b);

    (ax - bx).hypot(ay - by)
}

#[test]
fn can_build_tree_with_all_points() {
    let points = create_random_points(200, 100., 0);

    let quadtree = create_quadtree(points.clone());

    assert_eq!(quadtree.count_points(), 200);
    assert_eq!(quadtree.root().total_points(), 200);
    assert!(quadtree.count_nodes() > 1);
    assert!(quadtree.validate().is_ok());
}

#[test]
fn can_build_tree_with_single_point() {
    let points = create_point_set(&[(5., 5.)]);

    let quadtree = create_quadtree(points);

    assert_eq!(quadtree.count_points(), 1);
    assert!(quadtree.validate().is_ok());
}

#[test]
fn can_keep_duplicated_points_in_one_leaf() {
    let points = create_point_set(&[(1., 1.), (1., 1.), (1., 1.), (3., 3.)]);

    let quadtree = create_quadtree(points);

    let leaf = (0..quadtree.count_nodes())
        .map(|index| quadtree.node(index))
        .find(|node| node.is_leaf() && node.points().len() == 3)
        .expect("cannot find leaf with duplicates");
    assert_eq!(leaf.points(), &[0, 1, 2]);
    assert!(quadtree.validate().is_ok());
}

#[test]
fn can_build_tree_with_limited_depth() {
    let points = create_grid_points(4, 4);

    let quadtree = Quadtree::with_max_depth(points, 1).expect("invalid depth");

    assert_eq!(quadtree.count_nodes(), 5);
    assert!(quadtree.root().children().all(|child| quadtree.node(child).points().len() == 4));
    assert!(quadtree.validate().is_ok());
}

#[test]
fn can_keep_points_inside_of_node_boxes() {
    let points = create_random_points(100, 10., 1);

    let quadtree = create_quadtree(points.clone());

    (0..quadtree.count_nodes()).map(|index| quadtree.node(index)).filter(|node| node.is_leaf()).for_each(|leaf| {
        leaf.points().iter().for_each(|&point| {
            let (x, y) = points.coordinates(point);
            assert!(leaf.bounding_box().contains(x, y));
        })
    });
}

#[test]
fn can_query_whole_domain() {
    let points = create_grid_points(5, 5);
    let quadtree = create_quadtree(points);

    let mut found = quadtree.query(&BoundingBox { min_x: -1., max_x: 10., min_y: -1., max_y: 10. });
    found.sort_unstable();

    assert_eq!(found, (0..25).collect::<Vec<_>>());
}

#[test]
fn can_return_nothing_outside_of_domain() {
    let points = create_grid_points(5, 5);
    let quadtree = create_quadtree(points);

    let found = quadtree.query(&BoundingBox { min_x: 10., max_x: 11., min_y: 10., max_y: 11. });

    assert!(found.is_empty());
}

#[test]
fn can_append_query_results_to_buffer() {
    let points = create_grid_points(3, 3);
    let quadtree = create_quadtree(points);
    let mut found = vec![42];

    quadtree.query_into(&BoundingBox::around(0., 0., 0.1), &mut found);

    assert_eq!(found, vec![42, 0]);
}

parameterized_test! {can_find_every_point_within_radius, (size, radius, seed), {
    let points = create_random_points(size, 100., seed);
    let quadtree = create_quadtree(points.clone());

    (0..size).for_each(|point| {
        let found = quadtree.query_around(point, radius);

        (0..size).filter(|&other| distance(points.as_ref(), point, other) <= radius).for_each(|other| {
            assert!(found.contains(&other), "point {other} is missing around {point} with radius {radius}");
        });
    });
}}

can_find_every_point_within_radius! {
    case01_small_radius: (150, 5., 0),
    case02_medium_radius: (150, 20., 1),
    case03_zero_radius: (50, 0., 2),
    case04_large_radius: (50, 200., 3),
}

#[test]
fn can_find_grid_neighbours() {
    let points = create_grid_points(10, 10);
    let quadtree = create_quadtree(points.clone());

    let mut found = quadtree
        .query_around(55, 1.)
        .into_iter()
        .filter(|&other| other != 55 && distance(points.as_ref(), 55, other) <= 1.)
        .collect::<Vec<_>>();
    found.sort_unstable();

    assert_eq!(found, vec![45, 54, 56, 65]);
}
