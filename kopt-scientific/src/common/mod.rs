//! Contains common text reading and writing functionality.

mod text_reader;
pub(crate) use self::text_reader::*;

mod tour_reader;
pub use self::tour_reader::read_init_tour;

mod tour_writer;
pub use self::tour_writer::write_tour;
