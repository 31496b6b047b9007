//! File-based configuration loading

use harvestlab_core::{Config, HarvestlabError};
use harvestlab_testkit::temp_dir_in_workspace;
use std::fs;

#[test]
fn test_load_or_default_without_file() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("harvestlab.toml");

    let config = Config::load_or_default(&path).unwrap();
    assert_eq!(config.links.total_pages, 312);
}

#[test]
fn test_from_file_missing_is_parse_error() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("missing.toml");

    let result = Config::from_file(&path);
    assert!(matches!(result, Err(HarvestlabError::ConfigParseError(_))));
}

#[test]
fn test_from_file_reads_every_section() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("harvestlab.toml");
    fs::write(
        &path,
        r#"
[links]
total_pages = 7
owner = "kanripo"

[tiles]
jpeg_quality = 88

[download]
output_dir = "archives"
"#,
    )
    .unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.links.total_pages, 7);
    assert_eq!(loaded.links.owner.as_deref(), Some("kanripo"));
    assert_eq!(loaded.tiles.jpeg_quality, 88);
    assert_eq!(loaded.download.output_dir, std::path::PathBuf::from("archives"));
}

#[test]
fn test_load_or_default_rejects_wrong_value_type() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("harvestlab.toml");
    fs::write(&path, "[download]\ntimeout_secs = \"soon\"\n").unwrap();

    let result = Config::load_or_default(&path);
    assert!(matches!(result, Err(HarvestlabError::ConfigParseError(_))));
}
