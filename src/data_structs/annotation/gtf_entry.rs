use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::Serialize;

use crate::error::{
    GeneCountError,
    Result,
};

/// Number of tab-separated columns in a GTF line.
pub const GTF_COLUMNS: usize = 9;
/// Feature type of the lines the gene id table is built from.
pub const GENE_FEATURE: &str = "gene";

/// Attribute column of a GTF line, decomposed into key/value pairs.
///
/// Pairs are separated by `;`, keys and values by whitespace. Surrounding
/// double quotes are stripped from values, and a repeated key keeps its
/// last value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GtfAttributes {
    values: HashMap<String, String>,
}

impl GtfAttributes {
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `gene_id`, if present and non-empty.
    pub fn gene_id(&self) -> Option<&str> {
        self.get("gene_id").filter(|v| !v.is_empty())
    }

    /// Value of `gene_name`, if present and non-empty.
    pub fn gene_name(&self) -> Option<&str> {
        self.get("gene_name").filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for GtfAttributes {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut values = HashMap::new();
        for pair in s.split(';') {
            // Bare keys carry no value and are skipped.
            let Some((key, value)) = pair.trim().split_once(char::is_whitespace)
            else {
                continue;
            };
            let value = value.trim().trim_matches('"');
            values.insert(key.to_string(), value.to_string());
        }
        Ok(Self { values })
    }
}

/// One feature line of a GTF file.
#[derive(Debug, Clone, PartialEq)]
pub struct GtfEntry {
    pub seqname:      String,
    pub source:       String,
    pub feature_type: String,
    pub start:        Option<u64>,
    pub end:          Option<u64>,
    pub strand:       char,
    pub attributes:   GtfAttributes,
}

impl GtfEntry {
    /// Parses a single non-comment line. `line_no` is 1-based and only used
    /// for error reporting.
    ///
    /// Coordinates that are not integers are kept as `None`; only the column
    /// count is validated.
    pub fn parse_line(
        line_no: usize,
        line: &str,
    ) -> Result<Self> {
        let fields = line
            .trim_end_matches(['\n', '\r'])
            .split('\t')
            .collect::<Vec<_>>();
        if fields.len() < GTF_COLUMNS {
            return Err(GeneCountError::ShortLine {
                line:    line_no,
                columns: fields.len(),
            });
        }

        let attributes = match GtfAttributes::from_str(fields[8]) {
            Ok(attributes) => attributes,
            Err(never) => match never {},
        };

        Ok(Self {
            seqname: fields[0].to_string(),
            source: fields[1].to_string(),
            feature_type: fields[2].to_string(),
            start: fields[3].parse().ok(),
            end: fields[4].parse().ok(),
            strand: fields[6].chars().next().unwrap_or('.'),
            attributes,
        })
    }

    pub fn is_gene(&self) -> bool {
        self.feature_type == GENE_FEATURE
    }

    /// Gene id/name pair for `gene` features carrying both attributes.
    pub fn gene_id_record(&self) -> Option<GeneIdRecord> {
        if !self.is_gene() {
            return None;
        }
        Some(GeneIdRecord {
            gene_id:   self.attributes.gene_id()?.to_string(),
            gene_name: self.attributes.gene_name()?.to_string(),
        })
    }
}

/// Row of the gene id lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneIdRecord {
    pub gene_id:   String,
    pub gene_name: String,
}

impl fmt::Display for GeneIdRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{},{}", self.gene_id, self.gene_name)
    }
}
