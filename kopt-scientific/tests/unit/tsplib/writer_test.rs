use super::*;
use crate::helpers::{create_example_points, create_tour};
use crate::tsplib::TsplibTour;

#[test]
fn can_write_tour() {
    let tour = create_tour(create_example_points(), &[0, 5, 1, 3, 2, 4]);
    let mut buffer = Vec::new();

    tour.write_tsplib(BufWriter::new(&mut buffer), "example.tour").expect("cannot write tour");

    assert_eq!(
        String::from_utf8(buffer).expect("invalid utf8"),
        "NAME : example.tour\nCOMMENT : Length 60.00\nTYPE : TOUR\nDIMENSION : 6\nTOUR_SECTION\n1\n6\n2\n4\n3\n5\n-1\nEOF\n"
    );
}

#[test]
fn can_read_written_tour() {
    let order = vec![0, 3, 1, 5, 2, 4];
    let tour = create_tour(create_example_points(), order.as_slice());
    let mut buffer = Vec::new();

    tour.write_tsplib(BufWriter::new(&mut buffer), "tour").expect("cannot write tour");
    let result = String::from_utf8(buffer).expect("invalid utf8").read_tsplib_tour().expect("cannot read tour");

    assert_eq!(result, order);
}
