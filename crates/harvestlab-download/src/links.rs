//! Links file parsing

use crate::error::DownloadError;
use std::fs::{self, File};
use std::path::Path;

/// Reads the links to download, in file order
///
/// A `.csv` file is read as harvester output: the header row is skipped
/// and the first column of every row is a link. Any other file holds one
/// link per line. Surrounding whitespace is trimmed and blank entries are
/// dropped; duplicates are kept.
///
/// # Errors
///
/// Returns error if the file cannot be read or a CSV file is malformed
pub fn read_links(path: &Path) -> Result<Vec<String>, DownloadError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv_links(path)
    } else {
        let content = fs::read_to_string(path).map_err(|source| DownloadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse_lines(&content))
    }
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_csv_links(path: &Path) -> Result<Vec<String>, DownloadError> {
    let file = File::open(path).map_err(|source| DownloadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let mut links = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DownloadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(link) = record.get(0).map(str::trim)
            && !link.is_empty()
        {
            links.push(link.to_string());
        }
    }

    Ok(links)
}
