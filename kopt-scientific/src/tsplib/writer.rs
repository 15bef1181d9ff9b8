#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use kopt_core::prelude::{GenericResult, Tour};
use std::io::{BufWriter, Write};

/// A trait to write tsplib95 tour.
pub trait TsplibSolution<W: Write> {
    /// Writes tsplib95 tour with given name.
    fn write_tsplib(&self, writer: BufWriter<W>, name: &str) -> GenericResult<()>;
}

impl<W: Write> TsplibSolution<W> for Tour {
    fn write_tsplib(&self, mut writer: BufWriter<W>, name: &str) -> GenericResult<()> {
        writeln!(writer, "NAME : {name}")?;
        writeln!(writer, "COMMENT : Length {:.2}", self.total_length())?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "DIMENSION : {}", self.size())?;
        writeln!(writer, "TOUR_SECTION")?;
        self.order().into_iter().try_for_each(|point| writeln!(writer, "{}", point + 1))?;
        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;
        writer.flush()?;

        Ok(())
    }
}
