//! End-to-end pipelines behind the command-line tools.

mod concat_filter;
mod gene_ids;

pub use concat_filter::{
    concatenate_filter,
    MatrixSummary,
};
pub use gene_ids::{
    extract_gene_ids,
    ExtractSummary,
};
