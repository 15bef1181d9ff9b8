#[cfg(test)]
#[path = "../../tests/unit/points/reader_test.rs"]
mod reader_test;

use crate::common::{is_blank, parse_float, read_line};
use kopt_core::prelude::{Float, GenericResult, PointSet};
use std::io::{BufReader, Read};

/// A trait to read a point set in plain format.
pub trait PlainPointsProblem {
    /// Reads a point set.
    fn read_points(self) -> GenericResult<PointSet>;
}

impl<R: Read> PlainPointsProblem for BufReader<R> {
    fn read_points(self) -> GenericResult<PointSet> {
        PlainPointsReader::new(self).read_points()
    }
}

impl PlainPointsProblem for String {
    fn read_points(self) -> GenericResult<PointSet> {
        PlainPointsReader::new(BufReader::new(self.as_bytes())).read_points()
    }
}

struct PlainPointsReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
}

impl<R: Read> PlainPointsReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader }
    }

    fn read_points(&mut self) -> GenericResult<PointSet> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();

        let mut line_number = 0;
        while read_line(&mut self.reader, &mut self.buffer)? > 0 {
            line_number += 1;

            if is_blank(self.buffer.as_str()) {
                continue;
            }

            let (x, y) = parse_coordinates(self.buffer.as_str())
                .map_err(|err| err.with_context(format!("line {line_number}").as_str()))?;

            xs.push(x);
            ys.push(y);
        }

        PointSet::new(xs, ys)
    }
}

fn parse_coordinates(line: &str) -> GenericResult<(Float, Float)> {
    let data = line.split_whitespace().collect::<Vec<_>>();

    if data.len() != 2 {
        return Err(format!("unexpected point data: '{}'", line.trim()).into());
    }

    Ok((parse_float(data[0], "cannot parse x")?, parse_float(data[1], "cannot parse y")?))
}
