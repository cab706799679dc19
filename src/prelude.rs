pub use crate::data_structs::annotation::{
    GeneIdRecord,
    GtfAttributes,
    GtfEntry,
};
pub use crate::data_structs::counts::{
    sample_label,
    AlignMode,
    CountMatrix,
    CountTable,
};
pub use crate::error::{
    GeneCountError,
    Result,
};
pub use crate::io::gtf::{
    GeneIdWriter,
    GtfReader,
};
pub use crate::tools::{
    concatenate_filter,
    extract_gene_ids,
    ExtractSummary,
    MatrixSummary,
};
