use std::path::Path;

use log::{
    debug,
    info,
};
use polars::prelude::*;

use super::{
    create_output,
    read_string_table,
};
use crate::data_structs::counts::{
    CountMatrix,
    CountTable,
};
use crate::error::Result;

/// Reads a tab-separated per-sample count file.
pub fn read_count_table<P: AsRef<Path>>(path: P) -> Result<CountTable> {
    let path = path.as_ref();
    let df = read_string_table(path, b'\t')?;
    let table = CountTable::try_from_df(path, &df)?;
    debug!(
        "Read {} genes for sample '{}' from {}",
        table.len(),
        table.label(),
        path.display()
    );
    Ok(table)
}

/// Reads a comma-separated count matrix with a header row.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<CountMatrix> {
    let path = path.as_ref();
    let df = read_string_table(path, b',')?;
    CountMatrix::try_from_df(path, df)
}

/// Writes a count matrix as comma-separated values with a header row.
pub fn write_matrix<P: AsRef<Path>>(
    df: &DataFrame,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let file = create_output(path)?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df.clone())?;
    info!(
        "Wrote {} genes x {} samples to {}",
        df.height(),
        df.width().saturating_sub(1),
        path.display()
    );
    Ok(())
}
