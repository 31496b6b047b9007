//! End-to-end downloader tests against mocked file hosts

use harvestlab_core::DownloadConfig;
use harvestlab_download::{LinkError, LinkObserver, NoopObserver, run};
use harvestlab_testkit::temp_dir_in_workspace;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::Path;

fn mock_file(server: &mut ServerGuard, path: &str, name: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_header("content-disposition", &format!("attachment; filename={name}"))
        .with_body(body)
        .create()
}

fn config_for(links_file: &Path, output_dir: &Path) -> DownloadConfig {
    DownloadConfig {
        links_file: links_file.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        connect_timeout_secs: 5,
        timeout_secs: 5,
        ..Default::default()
    }
}

#[derive(Default)]
struct RecordingObserver {
    started: Vec<(usize, usize)>,
    saved: Vec<usize>,
    skipped: Vec<usize>,
}

impl LinkObserver for RecordingObserver {
    fn link_started(&mut self, index: usize, total: usize, _url: &str) {
        self.started.push((index, total));
    }

    fn link_saved(&mut self, index: usize, _path: &Path) {
        self.saved.push(index);
    }

    fn link_skipped(&mut self, index: usize, _error: &LinkError) {
        self.skipped.push(index);
    }
}

#[test]
fn test_failures_are_skipped_and_loop_continues() {
    let mut server = Server::new();
    let one = mock_file(&mut server, "/acme/one/archive/main.zip", "one-main.zip", "first");
    let gone = server.mock("GET", "/acme/gone/archive/main.zip").with_status(404).create();
    let page = server
        .mock("GET", "/home")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html></html>")
        .create();
    let two = server
        .mock("GET", "/files/two.tar.gz")
        .with_status(200)
        .with_header("content-type", "application/gzip")
        .with_body("second")
        .create();

    let temp = temp_dir_in_workspace();
    let links_file = temp.path().join("links.txt");
    let base = server.url();
    fs::write(
        &links_file,
        format!(
            "{base}/acme/one/archive/main.zip\n{base}/acme/gone/archive/main.zip\n\n{base}/home\nnot a link\n{base}/files/two.tar.gz\n"
        ),
    )
    .unwrap();
    let output = temp.path().join("downloads");

    let mut observer = RecordingObserver::default();
    let report = run(&config_for(&links_file, &output), &mut observer).unwrap();

    for mock in [&one, &gone, &page, &two] {
        mock.assert();
    }

    assert_eq!(observer.started, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    assert_eq!(observer.saved, vec![1, 5]);
    assert_eq!(observer.skipped, vec![2, 3, 4]);
    assert_eq!(report.total(), 5);

    assert!(matches!(report.skipped[0].error, LinkError::HttpStatus { .. }));
    assert!(matches!(report.skipped[1].error, LinkError::NotADownload { .. }));
    assert!(matches!(report.skipped[2].error, LinkError::InvalidUrl { .. }));

    assert_eq!(fs::read_to_string(output.join("one-main.zip")).unwrap(), "first");
    assert_eq!(fs::read_to_string(output.join("two.tar.gz")).unwrap(), "second");

    let mut names: Vec<String> = fs::read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["one-main.zip", "two.tar.gz"]);
}

#[test]
fn test_harvester_csv_as_links_file() {
    let mut server = Server::new();
    let _a = mock_file(&mut server, "/acme/a", "a.zip", "A");
    let _b = mock_file(&mut server, "/acme/b", "b.zip", "B");

    let temp = temp_dir_in_workspace();
    let links_file = temp.path().join("repos.csv");
    let base = server.url();
    fs::write(
        &links_file,
        format!("repository_url\r\n{base}/acme/a\r\n{base}/acme/b\r\n"),
    )
    .unwrap();
    let output = temp.path().join("out");

    let report = run(&config_for(&links_file, &output), &mut NoopObserver).unwrap();

    assert_eq!(report.saved.len(), 2);
    assert!(report.skipped.is_empty());
    assert_eq!(report.saved[0].path, output.join("a.zip"));
    assert_eq!(report.saved[1].url, format!("{base}/acme/b"));
}

#[test]
fn test_rerun_replaces_existing_file() {
    let mut server = Server::new();
    let _file = mock_file(&mut server, "/acme/a", "a.zip", "fresh");

    let temp = temp_dir_in_workspace();
    let links_file = temp.path().join("links.txt");
    fs::write(&links_file, format!("{}/acme/a\n", server.url())).unwrap();
    let output = temp.path().join("downloads");
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("a.zip"), "stale and longer than the new body").unwrap();

    run(&config_for(&links_file, &output), &mut NoopObserver).unwrap();

    assert_eq!(fs::read_to_string(output.join("a.zip")).unwrap(), "fresh");
}

#[test]
fn test_failed_link_keeps_previous_download() {
    let mut server = Server::new();
    let _down = server.mock("GET", "/acme/a").with_status(502).create();

    let temp = temp_dir_in_workspace();
    let links_file = temp.path().join("links.txt");
    fs::write(&links_file, format!("{}/acme/a\n", server.url())).unwrap();
    let output = temp.path().join("downloads");
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("a"), "from an earlier run").unwrap();

    let report = run(&config_for(&links_file, &output), &mut NoopObserver).unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(fs::read_to_string(output.join("a")).unwrap(), "from an earlier run");
}
