//! Readers and writers for the tabular formats handled by the crate: count
//! tables, count matrices and GTF annotations.

pub mod counts;
pub mod gtf;

use std::fs::File;
use std::path::Path;

use log::debug;
use polars::prelude::*;

use crate::error::{
    GeneCountError,
    Result,
};

pub(crate) fn open_input<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());
    File::open(path).map_err(|e| GeneCountError::io(path, e))
}

pub(crate) fn create_output<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    debug!("Creating {}", path.display());
    File::create(path).map_err(|e| GeneCountError::io(path, e))
}

/// Reads a delimited file with a header row, keeping every column as
/// strings. Type conversion is left to the caller so that gene identifiers
/// which look numeric are never reinterpreted.
pub(crate) fn read_string_table<P: AsRef<Path>>(
    path: P,
    separator: u8,
) -> Result<DataFrame> {
    let file = open_input(&path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(separator))
        .into_reader_with_file_handle(file)
        .finish()?;
    Ok(df)
}
