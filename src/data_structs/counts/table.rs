use std::path::{
    Path,
    PathBuf,
};

use polars::prelude::*;

use crate::error::{
    GeneCountError,
    Result,
};

/// Name of the gene identifier column in count tables and matrices.
pub const GENE_COL: &str = "gene";
/// Name of the count column in per-sample count tables.
pub const COUNT_COL: &str = "count";

/// Derives the sample label from a count file path: the file name up to
/// its first `.`.
///
/// ```
/// use genecount::data_structs::counts::sample_label;
///
/// assert_eq!(sample_label("out/sampleA.counts.tsv").unwrap(), "sampleA");
/// assert_eq!(sample_label("sampleB").unwrap(), "sampleB");
/// ```
pub fn sample_label<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_owned))
        .unwrap_or_default();

    if label.is_empty() {
        return Err(GeneCountError::EmptyLabel {
            path: path.to_path_buf(),
        });
    }
    Ok(label)
}

/// Converts a string column into non-null 64-bit counts. Surrounding
/// whitespace is ignored.
pub(crate) fn parse_counts(
    path: &Path,
    series: &Series,
) -> Result<Series> {
    let invalid = |reason: String| {
        GeneCountError::InvalidCount {
            path: path.to_path_buf(),
            column: series.name().to_string(),
            reason,
        }
    };

    if series.null_count() > 0 {
        return Err(invalid(format!(
            "{} empty values",
            series.null_count()
        )));
    }
    let trimmed = series
        .cast(&DataType::String)?
        .str()?
        .into_iter()
        .map(|value| value.map(str::trim))
        .collect::<StringChunked>()
        .with_name(series.name().clone())
        .into_series();
    trimmed
        .strict_cast(&DataType::Int64)
        .map_err(|e| invalid(e.to_string()))
}

pub(crate) fn require_column<'a>(
    path: &Path,
    df: &'a DataFrame,
    name: &str,
) -> Result<&'a Column> {
    df.column(name).map_err(|_| {
        GeneCountError::MissingColumn {
            path:   path.to_path_buf(),
            column: name.to_string(),
        }
    })
}

/// Counts of a single sample, as read from one count file.
///
/// The count column is already renamed to the sample label.
#[derive(Debug, Clone)]
pub struct CountTable {
    path:   PathBuf,
    label:  String,
    genes:  Series,
    counts: Series,
}

impl CountTable {
    /// Reads a tab-separated count file with `gene` and `count` columns.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::counts::read_count_table(path)
    }

    /// Builds a table from an already loaded frame. Columns other than
    /// `gene` and `count` are ignored, as are rows where both are empty.
    pub fn try_from_df<P: AsRef<Path>>(
        path: P,
        df: &DataFrame,
    ) -> Result<Self> {
        let path = path.as_ref();
        let label = sample_label(path)?;

        let genes = require_column(path, df, GENE_COL)?.as_materialized_series();
        let counts = require_column(path, df, COUNT_COL)?.as_materialized_series();

        // Blank lines are read as rows with both fields null.
        let filled = &genes.is_not_null() | &counts.is_not_null();
        let genes = genes.filter(&filled)?.cast(&DataType::String)?;
        let counts = parse_counts(path, &counts.filter(&filled)?)?
            .with_name(label.as_str().into());

        Ok(Self {
            path: path.to_path_buf(),
            label,
            genes,
            counts,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gene identifiers in file order.
    pub fn genes(&self) -> &Series {
        &self.genes
    }

    /// Counts in file order, named after the sample.
    pub fn counts(&self) -> &Series {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
