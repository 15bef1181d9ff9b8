#[cfg(test)]
#[path = "../../tests/unit/common/tour_writer_test.rs"]
mod tour_writer_test;

use kopt_core::prelude::{GenericResult, Tour};
use std::io::{BufWriter, Write};

/// Writes the tour as a list of zero based point ids in visiting order, starting from point 0.
pub fn write_tour<W: Write>(mut writer: BufWriter<W>, tour: &Tour) -> GenericResult<()> {
    tour.order().into_iter().try_for_each(|point| writeln!(writer, "{point}"))?;
    writer.flush()?;

    Ok(())
}
