#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use kopt_core::prelude::{Float, GenericError, GenericResult};
use std::io::prelude::*;
use std::io::{BufReader, Read};

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Returns true if the line has no data: it is empty or it is a comment.
pub(crate) fn is_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

pub(crate) fn parse_float(data: &str, err_msg: &str) -> GenericResult<Float> {
    let value = data.parse::<Float>().map_err(|err| GenericError::from(format!("{err_msg}: '{err}'")))?;

    if value.is_finite() { Ok(value) } else { Err(format!("{err_msg}: '{data}' is not finite").into()) }
}

pub(crate) fn parse_int(data: &str, err_msg: &str) -> GenericResult<usize> {
    data.parse::<usize>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
