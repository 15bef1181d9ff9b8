#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use kopt_core::prelude::{Float, GenericError, GenericResult, PointId, PointSet};
use std::collections::HashMap;
use std::io::{BufReader, Read};

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads tsplib95 problem as a point set.
    fn read_tsplib(self) -> GenericResult<PointSet>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> GenericResult<PointSet> {
        TsplibReader::new(self).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> GenericResult<PointSet> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

/// A trait to read tsplib95 tour.
pub trait TsplibTour {
    /// Reads tsplib95 tour as zero based point ids.
    fn read_tsplib_tour(self) -> GenericResult<Vec<PointId>>;
}

impl<R: Read> TsplibTour for BufReader<R> {
    fn read_tsplib_tour(self) -> GenericResult<Vec<PointId>> {
        TsplibReader::new(self).read_tour()
    }
}

impl TsplibTour for String {
    fn read_tsplib_tour(self) -> GenericResult<Vec<PointId>> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_tour()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    specification: HashMap<String, String>,
    dimension: Option<usize>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, specification: HashMap::default(), dimension: None }
    }

    fn read_problem(&mut self) -> GenericResult<PointSet> {
        self.read_specification("NODE_COORD_SECTION")?;
        self.check_value("TYPE", "TSP")?;
        self.check_value("EDGE_WEIGHT_TYPE", "EUC_2D")?;

        let coordinates = self.read_coordinates()?;
        self.read_eof()?;

        let (xs, ys) = coordinates.into_iter().unzip();

        PointSet::new(xs, ys)
    }

    fn read_tour(&mut self) -> GenericResult<Vec<PointId>> {
        self.read_specification("TOUR_SECTION")?;
        self.check_value("TYPE", "TOUR")?;

        let dimension = self.dimension()?;
        let mut order = Vec::with_capacity(dimension);

        loop {
            let line = self.read_data_line("TOUR_SECTION")?;
            if line == "-1" {
                break;
            }

            order.extend(
                line.split_whitespace()
                    .map(|id| parse_node_id(id, dimension))
                    .collect::<GenericResult<Vec<_>>>()?,
            );
        }

        if order.len() != dimension {
            return Err(format!("expecting {dimension} nodes in TOUR_SECTION, got {}", order.len()).into());
        }

        self.read_eof()?;

        Ok(order)
    }

    /// Reads colon separated key value pairs until the section line.
    fn read_specification(&mut self, section: &str) -> GenericResult<()> {
        loop {
            let line = self.read_data_line("specification")?;

            if line == section {
                break;
            }

            let (key, value) =
                line.split_once(':').ok_or_else(|| format!("expected colon separated string, got: '{line}'"))?;
            self.specification.insert(key.trim().to_string(), value.trim().to_string());
        }

        let dimension = self
            .specification
            .get("DIMENSION")
            .ok_or_else(|| GenericError::from("cannot find DIMENSION"))
            .and_then(|dimension| parse_int(dimension, "cannot parse DIMENSION"))?;

        if dimension == 0 {
            return Err("DIMENSION should be positive".into());
        }

        self.dimension = Some(dimension);

        Ok(())
    }

    fn read_coordinates(&mut self) -> GenericResult<Vec<(Float, Float)>> {
        let dimension = self.dimension()?;
        let mut coordinates = vec![None; dimension];

        for _ in 0..dimension {
            let line = self.read_data_line("NODE_COORD_SECTION")?;
            let data = line.split_whitespace().collect::<Vec<_>>();

            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let id = parse_node_id(data[0], dimension)?;
            let x = parse_float(data[1], "cannot parse coord.0")?;
            let y = parse_float(data[2], "cannot parse coord.1")?;

            if coordinates[id].replace((x, y)).is_some() {
                return Err(format!("duplicated node id: '{}'", data[0]).into());
            }
        }

        coordinates.into_iter().map(|coordinate| coordinate.ok_or_else(|| "missing node coordinates".into())).collect()
    }

    fn read_eof(&mut self) -> GenericResult<()> {
        loop {
            match read_line(&mut self.reader, &mut self.buffer)? {
                0 => return Ok(()),
                _ if self.buffer.trim().is_empty() => continue,
                _ if self.buffer.trim() == "EOF" => return Ok(()),
                _ => return Err(format!("expecting EOF, got: '{}'", self.buffer.trim()).into()),
            }
        }
    }

    fn check_value(&self, key: &str, expected: &str) -> GenericResult<()> {
        match self.specification.get(key) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(format!("expecting '{expected}' as {key}, got '{actual}'").into()),
            None => Err(format!("cannot find {key}").into()),
        }
    }

    fn dimension(&self) -> GenericResult<usize> {
        self.dimension.ok_or_else(|| "dimension is not read".into())
    }

    /// Returns the next non blank trimmed line or fails with unexpected end of data.
    fn read_data_line(&mut self, section: &str) -> GenericResult<String> {
        loop {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Err(format!("unexpected end of data in {section}").into());
            }

            if !self.buffer.trim().is_empty() {
                return Ok(self.buffer.trim().to_string());
            }
        }
    }
}

fn parse_node_id(data: &str, dimension: usize) -> GenericResult<PointId> {
    let id = parse_int(data, "cannot parse node id")?;

    if id == 0 || id > dimension {
        return Err(format!("node id should be in [1, {dimension}], got {id}").into());
    }

    Ok(id - 1)
}
