#![allow(dead_code)]
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use tempfile::TempDir;

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Writes a tab-separated count file with a `gene`/`count` header.
pub fn write_counts(
    dir: &TempDir,
    name: &str,
    rows: &[(&str, i64)],
) -> PathBuf {
    let mut content = String::from("gene\tcount\n");
    for (gene, count) in rows {
        content.push_str(&format!("{gene}\t{count}\n"));
    }
    write_raw(dir, name, &content)
}

pub fn write_raw(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}
