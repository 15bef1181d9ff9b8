#[cfg(test)]
#[path = "../../tests/unit/common/tour_reader_test.rs"]
mod tour_reader_test;

use crate::common::{is_blank, parse_int, read_line};
use kopt_core::prelude::{GenericResult, PointId};
use std::io::{BufReader, Read};

/// Reads an initial tour stored as a list of zero based point ids, one per line.
/// NOTE: the tour is not checked to be a permutation here, it is done when the tour is created.
pub fn read_init_tour<R: Read>(mut reader: BufReader<R>) -> GenericResult<Vec<PointId>> {
    let mut buffer = String::new();
    let mut order = Vec::new();

    while read_line(&mut reader, &mut buffer)? > 0 {
        if is_blank(buffer.as_str()) {
            continue;
        }

        order.push(parse_int(buffer.trim(), "cannot parse point id")?);
    }

    if order.is_empty() {
        return Err("initial tour is empty".into());
    }

    Ok(order)
}
