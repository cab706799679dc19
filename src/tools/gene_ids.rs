use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::io::gtf::{
    GeneIdWriter,
    GtfReader,
};
use crate::io::{
    create_output,
    open_input,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Physical lines read, comments included.
    pub lines:   usize,
    pub genes:   usize,
    pub written: usize,
}

/// Streams a GTF file and writes one `gene_id,gene_name` row per `gene`
/// feature that carries both attributes, in input order.
pub fn extract_gene_ids<I, O>(
    input: I,
    output: O,
) -> Result<ExtractSummary>
where
    I: AsRef<Path>,
    O: AsRef<Path>, {
    let input = input.as_ref();
    let mut reader = GtfReader::new(BufReader::new(open_input(input)?)).with_path(input);
    let mut writer = GeneIdWriter::new(create_output(&output)?);

    let mut genes = 0;
    for entry in reader.by_ref() {
        let entry = entry?;
        if !entry.is_gene() {
            continue;
        }
        genes += 1;
        if let Some(record) = entry.gene_id_record() {
            writer.write_record(&record)?;
        }
    }

    let summary = ExtractSummary {
        lines: reader.lines_read(),
        genes,
        written: writer.written(),
    };
    writer.finish()?;

    info!(
        "Wrote {} gene ids out of {} gene features ({} lines) to {}",
        summary.written,
        summary.genes,
        summary.lines,
        output.as_ref().display()
    );
    Ok(summary)
}
