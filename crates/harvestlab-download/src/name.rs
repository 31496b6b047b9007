//! Saved file naming

use reqwest::header::{CONTENT_DISPOSITION, HeaderMap};
use url::Url;

/// Picks the file name a download is saved under
///
/// Preference order:
/// 1. `filename=` of a `Content-Disposition` header
/// 2. the last non-empty segment of the URL path
/// 3. `download_<index>`
///
/// Only the final path component of a candidate is used, so a server
/// cannot place files outside the output directory.
///
/// # Examples
///
/// ```rust
/// use harvestlab_download::file_name_for;
/// use reqwest::header::HeaderMap;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/acme/widgets/archive/main.zip").unwrap();
/// assert_eq!(file_name_for(&HeaderMap::new(), &url, 3), "main.zip");
/// ```
pub fn file_name_for(headers: &HeaderMap, url: &Url, index: usize) -> String {
    headers
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(disposition_file_name)
        .and_then(safe_file_name)
        .or_else(|| {
            url.path_segments()
                .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
                .and_then(safe_file_name)
        })
        .unwrap_or_else(|| format!("download_{index}"))
}

/// Whether the header marks the body as an attachment
pub(crate) fn is_attachment(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("attachment"))
}

fn disposition_file_name(value: &str) -> Option<&str> {
    value.split(';').skip(1).find_map(|param| {
        let (key, raw) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let raw = raw.trim();
        Some(
            raw.strip_prefix('"')
                .and_then(|quoted| quoted.strip_suffix('"'))
                .unwrap_or(raw),
        )
    })
}

fn safe_file_name(candidate: &str) -> Option<String> {
    let name = candidate
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(candidate)
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.chars().any(char::is_control) {
        return None;
    }
    Some(name.to_string())
}
