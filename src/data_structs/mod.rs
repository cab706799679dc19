//! In-memory representations of count tables, count matrices and GTF
//! annotation lines.

pub mod annotation;
pub mod counts;

pub use annotation::{
    GeneIdRecord,
    GtfAttributes,
    GtfEntry,
};
pub use counts::{
    AlignMode,
    CountMatrix,
    CountTable,
};
