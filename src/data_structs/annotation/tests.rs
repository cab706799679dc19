use std::str::FromStr;

use rstest::rstest;

use super::*;
use crate::error::GeneCountError;

const GENE_LINE: &str =
    "chr1\t.\tgene\t1\t100\t.\t+\t.\tgene_id \"ENSG1\"; gene_name \"TP53\";";

#[test]
fn test_attributes_parsing() {
    let attributes = GtfAttributes::from_str(
        "gene_id \"ENSG1\"; gene_version \"5\"; gene_name \"TP53\"; gene_biotype \"protein_coding\";",
    )
    .unwrap();

    assert_eq!(attributes.len(), 4);
    assert_eq!(attributes.gene_id(), Some("ENSG1"));
    assert_eq!(attributes.gene_name(), Some("TP53"));
    assert_eq!(attributes.get("gene_version"), Some("5"));
    assert_eq!(attributes.get("transcript_id"), None);
}

#[rstest]
#[case::unquoted("gene_id ENSG1; gene_name TP53", "ENSG1", "TP53")]
#[case::no_trailing_semicolon("gene_id \"ENSG1\"; gene_name \"TP53\"", "ENSG1", "TP53")]
#[case::value_with_space("gene_id \"ENSG1\"; gene_name \"tumor protein\";", "ENSG1", "tumor protein")]
#[case::extra_spaces("  gene_id   \"ENSG1\" ;gene_name \"TP53\"  ;", "ENSG1", "TP53")]
fn test_attribute_variants(
    #[case] raw: &str,
    #[case] gene_id: &str,
    #[case] gene_name: &str,
) {
    let attributes = GtfAttributes::from_str(raw).unwrap();
    assert_eq!(attributes.gene_id(), Some(gene_id));
    assert_eq!(attributes.gene_name(), Some(gene_name));
}

#[test]
fn test_bare_keys_are_ignored() {
    let attributes = GtfAttributes::from_str("gene_id \"G\"; flag; ;").unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes.get("flag"), None);
}

#[test]
fn test_repeated_key_keeps_last_value() {
    let attributes = GtfAttributes::from_str("tag \"basic\"; tag \"CCDS\";").unwrap();
    assert_eq!(attributes.get("tag"), Some("CCDS"));
}

#[test]
fn test_empty_values_are_absent() {
    let attributes = GtfAttributes::from_str("gene_id \"\"; gene_name \"TP53\";").unwrap();
    assert_eq!(attributes.gene_id(), None);
    assert_eq!(attributes.gene_name(), Some("TP53"));
}

#[test]
fn test_parse_gene_line() {
    let entry = GtfEntry::parse_line(1, GENE_LINE).unwrap();
    assert_eq!(entry.seqname, "chr1");
    assert_eq!(entry.source, ".");
    assert_eq!(entry.feature_type, GENE_FEATURE);
    assert_eq!(entry.start, Some(1));
    assert_eq!(entry.end, Some(100));
    assert_eq!(entry.strand, '+');
    assert!(entry.is_gene());

    let record = entry.gene_id_record().unwrap();
    assert_eq!(record.to_string(), "ENSG1,TP53");
}

#[test]
fn test_parse_line_strips_line_endings() {
    let entry = GtfEntry::parse_line(1, &format!("{GENE_LINE}\r\n")).unwrap();
    assert_eq!(entry.attributes.gene_name(), Some("TP53"));
}

#[test]
fn test_non_gene_feature_has_no_record() {
    let line = GENE_LINE.replace("\tgene\t", "\texon\t");
    let entry = GtfEntry::parse_line(1, &line).unwrap();
    assert!(!entry.is_gene());
    assert_eq!(entry.attributes.gene_id(), Some("ENSG1"));
    assert_eq!(entry.gene_id_record(), None);
}

#[rstest]
#[case::no_name("gene_id \"ENSG1\";")]
#[case::no_id("gene_name \"TP53\";")]
#[case::empty("")]
fn test_gene_without_both_attributes(#[case] attributes: &str) {
    let line = format!("chr1\tsrc\tgene\t1\t100\t.\t-\t.\t{attributes}");
    let entry = GtfEntry::parse_line(3, &line).unwrap();
    assert_eq!(entry.gene_id_record(), None);
}

#[test]
fn test_short_line() {
    let err = GtfEntry::parse_line(7, "chr1\t.\tgene\t1\t100").unwrap_err();
    match err {
        GeneCountError::ShortLine { line, columns } => {
            assert_eq!(line, 7);
            assert_eq!(columns, 5);
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unparsable_coordinates() {
    let line = GENE_LINE.replace("\t1\t100\t", "\tstart\tend\t");
    let entry = GtfEntry::parse_line(1, &line).unwrap();
    assert_eq!(entry.start, None);
    assert_eq!(entry.end, None);
    assert!(entry.gene_id_record().is_some());
}
