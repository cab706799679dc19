use std::path::Path;

use hashbrown::{
    HashMap,
    HashSet,
};
use itertools::{
    EitherOrBoth,
    Itertools,
};
use log::{
    debug,
    warn,
};
use polars::prelude::*;

use super::table::{
    parse_counts,
    require_column,
    CountTable,
    GENE_COL,
};
use crate::error::{
    GeneCountError,
    Result,
};

/// How sample columns are lined up against the gene order of the first
/// count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignMode {
    /// Every table must list the same genes in the same order.
    #[default]
    Strict,
    /// Tables are matched by gene id. Genes missing from a table count as
    /// zero, genes absent from the first table are dropped.
    Join,
}

/// Genes × samples count matrix. The first column is always `gene`,
/// followed by one `Int64` column per sample.
#[derive(Debug, Clone)]
pub struct CountMatrix {
    data: DataFrame,
}

impl CountMatrix {
    /// Concatenates per-sample tables into one matrix, using the gene
    /// column of the first table as the row order.
    pub fn try_from_tables(
        tables: &[CountTable],
        mode: AlignMode,
    ) -> Result<Self> {
        let reference = tables.first().ok_or(GeneCountError::NoInputs)?;
        debug!(
            "Reference gene order taken from {} ({} genes)",
            reference.path().display(),
            reference.len()
        );

        let mut labels = HashSet::new();
        let mut columns = Vec::with_capacity(tables.len() + 1);
        columns.push(Column::from(reference.genes().clone()));

        if mode == AlignMode::Join {
            let genes = reference.genes().str()?;
            if let Some(gene) = genes.into_iter().flatten().duplicates().next() {
                return Err(GeneCountError::DuplicateGene {
                    path: reference.path().to_path_buf(),
                    gene: gene.to_string(),
                });
            }
        }

        for table in tables {
            if !labels.insert(table.label()) {
                return Err(GeneCountError::DuplicateSample {
                    path:  table.path().to_path_buf(),
                    label: table.label().to_string(),
                });
            }

            let counts = match mode {
                AlignMode::Strict => {
                    check_gene_order(reference, table)?;
                    table.counts().clone()
                },
                AlignMode::Join => join_counts(reference, table)?,
            };
            columns.push(Column::from(counts));
        }

        Ok(Self {
            data: DataFrame::new(columns)?,
        })
    }

    /// Validates a frame read back from disk: `gene` must be the first
    /// column and every other column must hold integer counts.
    pub fn try_from_df<P: AsRef<Path>>(
        path: P,
        df: DataFrame,
    ) -> Result<Self> {
        let path = path.as_ref();
        let names = df.get_column_names();
        if names.first().map(|name| name.as_str()) != Some(GENE_COL) {
            return Err(GeneCountError::MissingColumn {
                path:   path.to_path_buf(),
                column: GENE_COL.to_string(),
            });
        }

        let mut columns = Vec::with_capacity(df.width());
        let genes = require_column(path, &df, GENE_COL)?
            .as_materialized_series()
            .cast(&DataType::String)?;
        columns.push(Column::from(genes));
        for column in df.get_columns().iter().skip(1) {
            columns.push(Column::from(parse_counts(
                path,
                column.as_materialized_series(),
            )?));
        }

        Ok(Self {
            data: DataFrame::new(columns)?,
        })
    }

    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::counts::read_matrix(path)
    }

    pub fn write_csv<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<()> {
        crate::io::counts::write_matrix(&self.data, path)
    }

    /// Returns a new matrix holding only the genes with a non-zero count in
    /// at least one sample. Row order is preserved.
    pub fn drop_zero_rows(&self) -> Result<Self> {
        let mut keep = BooleanChunked::full("keep".into(), false, self.height());
        for column in self.data.get_columns().iter().skip(1) {
            let nonzero = column.as_materialized_series().not_equal(0i64)?;
            keep = &keep | &nonzero;
        }

        let data = self.data.filter(&keep)?;
        debug!(
            "Dropped {} all-zero rows out of {}",
            self.height() - data.height(),
            self.height()
        );
        Ok(Self { data })
    }

    pub fn genes(&self) -> Result<Vec<String>> {
        let genes = self.data.column(GENE_COL)?.as_materialized_series().str()?;
        Ok(genes
            .into_iter()
            .map(|gene| gene.unwrap_or_default().to_string())
            .collect())
    }

    pub fn sample_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .skip(1)
            .map(|name| name.to_string())
            .collect()
    }

    /// Number of genes.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn n_samples(&self) -> usize {
        self.data.width().saturating_sub(1)
    }

    pub fn as_df(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_df(self) -> DataFrame {
        self.data
    }
}

fn check_gene_order(
    reference: &CountTable,
    table: &CountTable,
) -> Result<()> {
    let expected = reference.genes().str()?;
    let found = table.genes().str()?;

    for (row, pair) in expected.into_iter().zip_longest(found).enumerate() {
        let (expected, found) = match pair {
            EitherOrBoth::Both(e, f) if e == f => continue,
            EitherOrBoth::Both(e, f) => (e.unwrap_or_default(), f.unwrap_or_default()),
            EitherOrBoth::Left(e) => (e.unwrap_or_default(), "<end of file>"),
            EitherOrBoth::Right(f) => ("<end of file>", f.unwrap_or_default()),
        };
        return Err(GeneCountError::GeneOrderMismatch {
            path:      table.path().to_path_buf(),
            reference: reference.path().to_path_buf(),
            row:       row + 1,
            expected:  expected.to_string(),
            found:     found.to_string(),
        });
    }
    Ok(())
}

fn join_counts(
    reference: &CountTable,
    table: &CountTable,
) -> Result<Series> {
    let genes = table.genes().str()?;
    let counts = table.counts().i64()?;

    let mut lookup = HashMap::with_capacity(table.len());
    for (gene, count) in genes.into_iter().zip(counts) {
        let gene = gene.unwrap_or_default();
        if lookup.insert(gene, count.unwrap_or(0)).is_some() {
            return Err(GeneCountError::DuplicateGene {
                path: table.path().to_path_buf(),
                gene: gene.to_string(),
            });
        }
    }

    let reference_genes = reference.genes().str()?;
    let aligned = reference_genes
        .into_iter()
        .map(|gene| lookup.remove(gene.unwrap_or_default()).unwrap_or(0))
        .collect_vec();

    if !lookup.is_empty() {
        warn!(
            "{}: {} genes absent from {} were dropped",
            table.path().display(),
            lookup.len(),
            reference.path().display()
        );
    }
    Ok(Series::new(table.label().into(), aligned))
}
