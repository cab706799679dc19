mod gtf_entry;

pub use gtf_entry::{
    GeneIdRecord,
    GtfAttributes,
    GtfEntry,
    GENE_FEATURE,
    GTF_COLUMNS,
};

#[cfg(test)]
mod tests;
