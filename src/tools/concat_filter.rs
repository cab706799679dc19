use std::path::Path;

use log::info;

use crate::data_structs::counts::{
    AlignMode,
    CountMatrix,
    CountTable,
};
use crate::error::Result;

/// Gene counts before and after all-zero rows were dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixSummary {
    pub samples:        usize,
    pub genes_total:    usize,
    pub genes_retained: usize,
}

/// Builds the count matrix from `inputs`, writes it unfiltered to `temp`,
/// then reads `temp` back and writes the rows with at least one non-zero
/// count to `output`.
///
/// The temporary file is left in place.
pub fn concatenate_filter<P, T, O>(
    inputs: &[P],
    temp: T,
    output: O,
    mode: AlignMode,
) -> Result<MatrixSummary>
where
    P: AsRef<Path>,
    T: AsRef<Path>,
    O: AsRef<Path>, {
    let tables = inputs
        .iter()
        .map(CountTable::from_path)
        .collect::<Result<Vec<_>>>()?;

    let matrix = CountMatrix::try_from_tables(&tables, mode)?;
    matrix.write_csv(&temp)?;
    drop(matrix);

    let unfiltered = CountMatrix::read_csv(&temp)?;
    let filtered = unfiltered.drop_zero_rows()?;
    filtered.write_csv(&output)?;

    let summary = MatrixSummary {
        samples:        filtered.n_samples(),
        genes_total:    unfiltered.height(),
        genes_retained: filtered.height(),
    };
    info!(
        "Retained {} of {} genes across {} samples",
        summary.genes_retained, summary.genes_total, summary.samples
    );
    Ok(summary)
}
