//! CSV output for harvested links

use crate::error::LinksError;
use std::collections::BTreeSet;
use std::path::Path;

/// Header of the single output column
pub const HEADER: &str = "repository_url";

/// Writes `repository_url` followed by one row per link, overwriting `path`
///
/// Rows follow the set's lexicographic order. Fields containing the
/// delimiter, quotes or line breaks are quoted.
///
/// # Errors
///
/// Returns error if the file cannot be created or written
pub fn write_csv(path: &Path, links: &BTreeSet<String>) -> Result<(), LinksError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record([HEADER])?;
    for link in links {
        writer.write_record([link])?;
    }
    writer.flush()?;

    Ok(())
}
