//! # genecount
//!
//! `genecount` holds the two table transformations of an RNA-seq count
//! pipeline:
//!
//! * **Count matrix assembly**: per-sample `gene`/`count` files are merged
//!   into one genes × samples matrix ([`CountMatrix`]), written to a
//!   temporary CSV, read back and stripped of genes with zero counts in
//!   every sample ([`concatenate_filter`]).
//! * **Gene id extraction**: a GTF annotation is streamed line by line and
//!   every `gene` feature with both `gene_id` and `gene_name` attributes is
//!   written as a `gene_id,gene_name` row ([`extract_gene_ids`]).
//!
//! Count tables and matrices are handled as `polars` data frames; the gene
//! id table is written with `csv`. All fallible operations return
//! [`GeneCountError`], which separates I/O failures from malformed input.
//!
//! The command-line front-ends live in the `genecount-cli` crate.
//!
//! ## Usage
//!
//! ```no_run
//! use genecount::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let summary = concatenate_filter(
//!         &["sampleA.counts.tsv", "sampleB.counts.tsv"],
//!         "matrix.unfiltered.csv",
//!         "matrix.csv",
//!         AlignMode::Strict,
//!     )?;
//!     println!("{} genes retained", summary.genes_retained);
//!
//!     extract_gene_ids("annotation.gtf", "gene_ids.csv")?;
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod tools;

pub use crate::data_structs::annotation::{
    GeneIdRecord,
    GtfAttributes,
    GtfEntry,
};
pub use crate::data_structs::counts::{
    AlignMode,
    CountMatrix,
    CountTable,
};
pub use crate::error::GeneCountError;
pub use crate::tools::{
    concatenate_filter,
    extract_gene_ids,
};
