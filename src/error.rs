//! Error type shared by the count matrix and annotation pipelines.
//!
//! Errors fall into two groups: I/O failures (a file could not be opened,
//! read or written) and format failures (the file was readable, but its
//! content does not match what the pipeline expects).

use std::io;
use std::path::{
    Path,
    PathBuf,
};

use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeneCountError>;

#[derive(Debug, Error)]
pub enum GeneCountError {
    /// File could not be opened, read, created or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// Count table lacks one of the required columns.
    #[error("{}: required column '{column}' is missing", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// A count column holds nulls or values that are not integers.
    #[error("{}: column '{column}' must contain integer counts ({reason})", .path.display())]
    InvalidCount {
        path:   PathBuf,
        column: String,
        reason: String,
    },

    /// Input file does not list the same genes, in the same order, as the
    /// reference file.
    #[error(
        "{}: gene order differs from {} at row {row} (expected '{expected}', found '{found}')",
        .path.display(),
        .reference.display()
    )]
    GeneOrderMismatch {
        path:      PathBuf,
        reference: PathBuf,
        row:       usize,
        expected:  String,
        found:     String,
    },

    #[error("{}: gene '{gene}' occurs more than once", .path.display())]
    DuplicateGene { path: PathBuf, gene: String },

    #[error("sample label '{label}' derived from {} is already in use", .path.display())]
    DuplicateSample { path: PathBuf, label: String },

    #[error("at least one count table is required to build a matrix")]
    NoInputs,

    #[error("cannot derive a sample label from {}", .path.display())]
    EmptyLabel { path: PathBuf },

    #[error("line {line}: expected at least 9 tab-separated columns, found {columns}")]
    ShortLine { line: usize, columns: usize },

    /// Annotation line is not valid UTF-8.
    #[error("{} line {line}: not valid UTF-8 text", .path.display())]
    InvalidText { path: PathBuf, line: usize },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl GeneCountError {
    pub fn io<P: AsRef<Path>>(
        path: P,
        source: io::Error,
    ) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if the error originates from the file system rather
    /// than from the content of a file.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io { .. } => true,
            Self::Polars(PolarsError::IO { .. }) => true,
            Self::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }

    pub fn is_format(&self) -> bool {
        !self.is_io()
    }
}
