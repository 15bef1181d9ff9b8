//! Contains format readers and writers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use kopt_core::prelude::{GenericResult, PointId, PointSet, Tour};
use kopt_scientific::common::{read_init_tour, write_tour};
use kopt_scientific::points::PlainPointsProblem;
use kopt_scientific::tsplib::{TsplibProblem, TsplibSolution, TsplibTour};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::sync::Arc;

/// A reader for point set.
pub struct ProblemReader(pub Box<dyn Fn(File) -> GenericResult<PointSet>>);

/// A reader for initial tour given as zero based point ids.
pub struct TourReader(pub Box<dyn Fn(File) -> GenericResult<Vec<PointId>>>);

/// A writer for tour. Accepts a tour name which is used by formats supporting it.
#[allow(clippy::type_complexity)]
#[derive(Clone)]
pub struct TourWriter(pub Arc<dyn Fn(&Tour, &str, BufWriter<Box<dyn Write>>) -> GenericResult<()>>);

/// Maps format name to its readers and writer.
pub type FormatMap<'a> = HashMap<&'a str, (ProblemReader, TourReader, TourWriter)>;

/// Gets available format readers/writers.
pub fn get_formats<'a>() -> FormatMap<'a> {
    let mut formats = FormatMap::default();

    add_plain(&mut formats);
    add_tsplib(&mut formats);

    formats
}

fn add_plain(formats: &mut FormatMap) {
    formats.insert(
        "plain",
        (
            ProblemReader(Box::new(|problem: File| BufReader::new(problem).read_points())),
            TourReader(Box::new(|tour: File| read_init_tour(BufReader::new(tour)))),
            TourWriter(Arc::new(|tour: &Tour, _: &str, writer: BufWriter<Box<dyn Write>>| {
                write_tour(writer, tour)
            })),
        ),
    );
}

fn add_tsplib(formats: &mut FormatMap) {
    formats.insert(
        "tsplib",
        (
            ProblemReader(Box::new(|problem: File| BufReader::new(problem).read_tsplib())),
            TourReader(Box::new(|tour: File| BufReader::new(tour).read_tsplib_tour())),
            TourWriter(Arc::new(|tour: &Tour, name: &str, writer: BufWriter<Box<dyn Write>>| {
                tour.write_tsplib(writer, name)
            })),
        ),
    );
}
