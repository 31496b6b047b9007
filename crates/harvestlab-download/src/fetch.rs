//! Single link download

use crate::error::LinkError;
use crate::name::{file_name_for, is_attachment};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads `link` into `output_dir`
///
/// The body is read fully before anything is written, then saved through
/// a `.part` sibling renamed into place. A failed link leaves no file
/// behind; an existing file of the same name is replaced.
///
/// An HTML response is only saved when the server marks it as an
/// attachment, since a plain page means the link did not lead to a file.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `link` - URL as read from the links file
/// * `output_dir` - Existing directory receiving the file
/// * `index` - 1-based position of the link, used for the fallback name
///
/// # Returns
///
/// Path of the saved file
pub fn download_link(
    client: &Client,
    link: &str,
    output_dir: &Path,
    index: usize,
) -> Result<PathBuf, LinkError> {
    let url = Url::parse(link).map_err(|source| LinkError::InvalidUrl {
        url: link.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LinkError::UnsupportedScheme {
            url: link.to_string(),
        });
    }

    let network = |source| LinkError::Network {
        url: link.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LinkError::HttpStatus {
            url: link.to_string(),
            status,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if content_type.starts_with("text/html") && !is_attachment(response.headers()) {
        return Err(LinkError::NotADownload {
            url: link.to_string(),
            content_type,
        });
    }

    let name = file_name_for(response.headers(), response.url(), index);
    let bytes = response.bytes().map_err(network)?;
    debug!("Downloaded {} bytes from {}", bytes.len(), link);

    let path = output_dir.join(&name);
    let part = output_dir.join(format!("{name}.part"));
    if let Err(source) = fs::write(&part, &bytes).and_then(|()| fs::rename(&part, &path)) {
        let _ = fs::remove_file(&part);
        return Err(LinkError::Save { path, source });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvestlab_core::DownloadConfig;
    use harvestlab_testkit::temp_dir_in_workspace;
    use mockito::Server;

    fn client() -> Client {
        crate::build_client(&DownloadConfig::default()).unwrap()
    }

    #[test]
    fn test_download_link_saves_body_under_disposition_name() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/acme/widgets/archive/main.zip")
            .with_status(200)
            .with_header("content-type", "application/zip")
            .with_header("content-disposition", "attachment; filename=widgets-main.zip")
            .with_body("PK\x03\x04 zip bytes")
            .create();

        let temp = temp_dir_in_workspace();
        let link = format!("{}/acme/widgets/archive/main.zip", server.url());

        let path = download_link(&client(), &link, temp.path(), 1).unwrap();

        mock.assert();
        assert_eq!(path, temp.path().join("widgets-main.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"PK\x03\x04 zip bytes");
        assert!(!temp.path().join("widgets-main.zip.part").exists());
    }

    #[test]
    fn test_download_link_http_error_writes_nothing() {
        let mut server = Server::new();
        let _mock = server.mock("GET", "/gone.zip").with_status(404).create();

        let temp = temp_dir_in_workspace();
        let link = format!("{}/gone.zip", server.url());

        match download_link(&client(), &link, temp.path(), 1) {
            Err(LinkError::HttpStatus { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("Expected HttpStatus, got: {:?}", other),
        }
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_download_link_rejects_plain_html_page() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/home")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><body>Download will start soon</body></html>")
            .create();

        let temp = temp_dir_in_workspace();
        let link = format!("{}/home", server.url());

        let result = download_link(&client(), &link, temp.path(), 1);
        assert!(matches!(result, Err(LinkError::NotADownload { .. })));
    }

    #[test]
    fn test_download_link_invalid_and_unsupported() {
        let temp = temp_dir_in_workspace();

        let result = download_link(&client(), "not a url", temp.path(), 1);
        assert!(matches!(result, Err(LinkError::InvalidUrl { .. })));

        let result = download_link(&client(), "ftp://example.com/a.zip", temp.path(), 1);
        assert!(matches!(result, Err(LinkError::UnsupportedScheme { .. })));
    }

    #[test]
    fn test_download_link_network_error() {
        let temp = temp_dir_in_workspace();

        let result = download_link(&client(), "http://127.0.0.1:1/a.zip", temp.path(), 1);
        assert!(matches!(result, Err(LinkError::Network { .. })));
    }
}
