use super::*;

parameterized_test! {can_interleave_coordinate_bits, (x, y, expected), {
    assert_eq!(morton_key(x, y), expected);
}}

can_interleave_coordinate_bits! {
    case01_origin: (0, 0, 0),
    case02_x_only: (1, 0, 0b01),
    case03_y_only: (0, 1, 0b10),
    case04_both: (1, 1, 0b11),
    case05_second_bit: (2, 0, 0b0100),
    case06_mixed: (2, 1, 0b0110),
    case07_all_bits: (3, 3, 0b1111),
    case08_max_x: (u32::MAX, 0, 0x5555_5555_5555_5555),
    case09_max_y: (0, u32::MAX, 0xAAAA_AAAA_AAAA_AAAA),
}

#[test]
fn can_keep_grid_order_within_quadrant() {
    let keys = [(0, 0), (1, 0), (0, 1), (1, 1)].map(|(x, y)| morton_key(x, y));

    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

parameterized_test! {can_build_insertion_path, (x, y, depth, expected), {
    let path = insertion_path(morton_key(x, y), depth).collect::<Vec<_>>();

    assert_eq!(path, expected);
}}

can_build_insertion_path! {
    case01_origin: (0, 0, 2, vec![0, 0]),
    case02_upper_x: (2, 1, 2, vec![1, 2]),
    case03_corner: (3, 3, 2, vec![3, 3]),
    case04_single_level: (1, 0, 1, vec![1]),
    case05_deeper: (4, 0, 3, vec![1, 0, 0]),
    case06_empty: (1, 1, 0, vec![]),
}
