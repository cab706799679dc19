use genecount::prelude::*;
use rstest::{
    fixture,
    rstest,
};
use tempfile::TempDir;

mod common;
use common::{
    read_lines,
    write_counts,
    write_raw,
};

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
fn test_two_samples_drop_all_zero_rows(workdir: TempDir) -> anyhow::Result<()> {
    let a = write_counts(&workdir, "sampleA.counts.tsv", &[("G1", 0), ("G2", 5)]);
    let b = write_counts(&workdir, "sampleB.counts.tsv", &[("G1", 0), ("G2", 0)]);
    let temp = workdir.path().join("matrix.tmp.csv");
    let output = workdir.path().join("matrix.csv");

    let summary = concatenate_filter(&[a, b], &temp, &output, AlignMode::Strict)?;

    assert_eq!(read_lines(&output), vec!["gene,sampleA,sampleB", "G2,5,0"]);
    assert_eq!(
        summary,
        MatrixSummary {
            samples:        2,
            genes_total:    2,
            genes_retained: 1,
        }
    );
    Ok(())
}

#[rstest]
fn test_temp_file_holds_unfiltered_matrix(workdir: TempDir) -> anyhow::Result<()> {
    let a = write_counts(&workdir, "a.tsv", &[("G1", 0), ("G2", 1), ("G3", 0)]);
    let temp = workdir.path().join("unfiltered.csv");
    let output = workdir.path().join("filtered.csv");

    concatenate_filter(&[a], &temp, &output, AlignMode::Strict)?;

    assert_eq!(read_lines(&temp), vec!["gene,a", "G1,0", "G2,1", "G3,0"]);
    assert_eq!(read_lines(&output), vec!["gene,a", "G2,1"]);
    Ok(())
}

#[rstest]
fn test_single_input_round_trip(workdir: TempDir) -> anyhow::Result<()> {
    let rows = [("ENSG01", 12), ("ENSG02", 0), ("ENSG03", 7), ("ENSG04", 0)];
    let input = write_counts(&workdir, "liver_rep1.verse.exon.txt", &rows);
    let output = workdir.path().join("out.csv");

    concatenate_filter(&[input], workdir.path().join("t.csv"), &output, AlignMode::Strict)?;

    let expected = std::iter::once("gene,liver_rep1".to_string())
        .chain(
            rows.iter()
                .filter(|(_, count)| *count != 0)
                .map(|(gene, count)| format!("{gene},{count}")),
        )
        .collect::<Vec<_>>();
    assert_eq!(read_lines(&output), expected);
    Ok(())
}

#[rstest]
fn test_extra_columns_are_ignored(workdir: TempDir) -> anyhow::Result<()> {
    let input = write_raw(
        &workdir,
        "s1.tsv",
        "length\tgene\tcount\n100\tG1\t3\n200\tG2\t0\n",
    );
    let output = workdir.path().join("out.csv");

    concatenate_filter(&[input], workdir.path().join("t.csv"), &output, AlignMode::Strict)?;

    assert_eq!(read_lines(&output), vec!["gene,s1", "G1,3"]);
    Ok(())
}

#[rstest]
#[case::trailing("gene\tcount\nG1\t0\nG2\t5\n\n")]
#[case::inner("gene\tcount\nG1\t0\n\nG2\t5\n")]
fn test_blank_lines_are_skipped(
    workdir: TempDir,
    #[case] content: &str,
) -> anyhow::Result<()> {
    let input = write_raw(&workdir, "a.tsv", content);
    let output = workdir.path().join("out.csv");

    concatenate_filter(&[input], workdir.path().join("t.csv"), &output, AlignMode::Strict)?;

    assert_eq!(read_lines(&output), vec!["gene,a", "G2,5"]);
    Ok(())
}

#[rstest]
fn test_padded_counts_are_accepted(workdir: TempDir) -> anyhow::Result<()> {
    let input = write_raw(&workdir, "a.tsv", "gene\tcount\nG1\t 5\nG2\t0 \n");
    let output = workdir.path().join("out.csv");

    concatenate_filter(&[input], workdir.path().join("t.csv"), &output, AlignMode::Strict)?;

    assert_eq!(read_lines(&output), vec!["gene,a", "G1,5"]);
    Ok(())
}

#[rstest]
fn test_gene_without_count_is_format_error(workdir: TempDir) {
    let input = write_raw(&workdir, "a.tsv", "gene\tcount\nG1\t\nG2\t5\n");
    let err = concatenate_filter(
        &[input],
        workdir.path().join("t.csv"),
        workdir.path().join("out.csv"),
        AlignMode::Strict,
    )
    .unwrap_err();

    assert!(matches!(err, GeneCountError::InvalidCount { .. }));
    assert!(err.is_format());
}

#[rstest]
fn test_join_mode_fills_missing_genes(workdir: TempDir) -> anyhow::Result<()> {
    let a = write_counts(&workdir, "a.tsv", &[("G1", 1), ("G2", 0), ("G3", 0)]);
    let b = write_counts(&workdir, "b.tsv", &[("G3", 4), ("G9", 8)]);
    let output = workdir.path().join("out.csv");

    concatenate_filter(&[a, b], workdir.path().join("t.csv"), &output, AlignMode::Join)?;

    assert_eq!(read_lines(&output), vec!["gene,a,b", "G1,1,0", "G3,0,4"]);
    Ok(())
}

#[rstest]
fn test_strict_mode_rejects_misaligned_inputs(workdir: TempDir) {
    let a = write_counts(&workdir, "a.tsv", &[("G1", 1), ("G2", 2)]);
    let b = write_counts(&workdir, "b.tsv", &[("G2", 2), ("G1", 1)]);
    let output = workdir.path().join("out.csv");

    let err = concatenate_filter(&[a, b], workdir.path().join("t.csv"), &output, AlignMode::Strict)
        .unwrap_err();

    assert!(matches!(err, GeneCountError::GeneOrderMismatch { .. }));
    assert!(err.is_format());
    assert!(!output.exists());
}

#[rstest]
fn test_missing_input_is_io_error(workdir: TempDir) {
    let missing = workdir.path().join("absent.tsv");
    let err = concatenate_filter(
        &[missing],
        workdir.path().join("t.csv"),
        workdir.path().join("out.csv"),
        AlignMode::Strict,
    )
    .unwrap_err();

    assert!(matches!(err, GeneCountError::Io { .. }));
    assert!(err.is_io());
}

#[rstest]
#[case::no_count("gene\treads\nG1\t1\n", "count")]
#[case::no_gene("id\tcount\nG1\t1\n", "gene")]
fn test_missing_column_is_format_error(
    workdir: TempDir,
    #[case] content: &str,
    #[case] column: &str,
) {
    let input = write_raw(&workdir, "bad.tsv", content);
    let err = concatenate_filter(
        &[input],
        workdir.path().join("t.csv"),
        workdir.path().join("out.csv"),
        AlignMode::Strict,
    )
    .unwrap_err();

    match err {
        GeneCountError::MissingColumn { column: missing, .. } => assert_eq!(missing, column),
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_unwritable_output_is_io_error(workdir: TempDir) {
    let a = write_counts(&workdir, "a.tsv", &[("G1", 1)]);
    let output = workdir.path().join("no_such_dir").join("out.csv");

    let err = concatenate_filter(&[a], workdir.path().join("t.csv"), &output, AlignMode::Strict)
        .unwrap_err();

    assert!(err.is_io());
}

#[rstest]
fn test_matrix_read_back(workdir: TempDir) -> anyhow::Result<()> {
    let path = write_raw(&workdir, "m.csv", "gene,s1,s2\nG1,0,0\nG2,0,3\n");
    let matrix = CountMatrix::read_csv(&path)?;

    assert_eq!(matrix.sample_names(), vec!["s1", "s2"]);
    assert_eq!(matrix.drop_zero_rows()?.genes()?, vec!["G2"]);
    Ok(())
}
