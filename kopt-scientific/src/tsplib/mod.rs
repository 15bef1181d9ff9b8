//! A subset of TSPLIB95 format: `TSP` problems with `EUC_2D` edge weights and `TOUR` files.
//!
//! TSPLIB node ids are one based, they are converted to zero based point ids on reading and back on writing.

mod reader;
pub use self::reader::{TsplibProblem, TsplibTour};

mod writer;
pub use self::writer::TsplibSolution;
