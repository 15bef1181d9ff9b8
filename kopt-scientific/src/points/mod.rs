//! A plain points format: every non blank line contains `x y` coordinates of one point, lines starting
//! with `#` are comments. Point ids are zero based line numbers of data lines.

mod reader;
pub use self::reader::PlainPointsProblem;
