mod matrix;
mod table;

pub use matrix::{
    AlignMode,
    CountMatrix,
};
pub use table::{
    sample_label,
    CountTable,
    COUNT_COL,
    GENE_COL,
};
