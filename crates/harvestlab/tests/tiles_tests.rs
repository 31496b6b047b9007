//! `harvestlab tiles` end-to-end tests

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use harvestlab_testkit::{CHUNK_COLORS, temp_dir_in_workspace, write_chunk_group, write_solid_chunk};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn harvestlab() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_tiles_names_duplicated_index() {
    let temp = temp_dir_in_workspace();
    let source = temp.path().join("images");
    fs::create_dir_all(&source).unwrap();
    for (i, color) in CHUNK_COLORS.iter().take(7).enumerate() {
        write_solid_chunk(&source, &format!("003-{}.jpg", i + 1), 2, 2, *color);
    }
    write_solid_chunk(&source, "003-2.png", 2, 2, [0, 0, 0]);

    harvestlab()
        .current_dir(temp.path())
        .args(["tiles", "--source", "images", "--out-dir", "merged"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "group 003 has 8 chunks, expected 8 (missing 8; duplicated 2); skipped",
        ));
}

#[test]
fn test_tiles_merges_complete_groups_and_warns_on_partial() {
    let temp = temp_dir_in_workspace();
    let source = temp.path().join("images");
    fs::create_dir_all(&source).unwrap();
    write_chunk_group(&source, "001", 3, 2);
    for (i, color) in CHUNK_COLORS.iter().take(7).enumerate() {
        write_solid_chunk(&source, &format!("002-{}.jpg", i + 1), 3, 2, *color);
    }

    harvestlab()
        .current_dir(temp.path())
        .args(["tiles", "--source", "images", "--out-dir", "merged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 complete chunk groups"))
        .stdout(predicate::str::contains("group 002 has 7 chunks, expected 8 (missing 8)"))
        .stdout(predicate::str::contains("1 succeeded, 0 failed, 1 skipped"));

    let composite = image::open(temp.path().join("merged").join("001.jpg")).unwrap();
    assert_eq!((composite.width(), composite.height()), (12, 4));
    assert!(!temp.path().join("merged").join("002.jpg").exists());
}

#[test]
fn test_tiles_json_summary_reports_failures() {
    let temp = temp_dir_in_workspace();
    let source = temp.path().join("chunks");
    fs::create_dir_all(&source).unwrap();
    write_chunk_group(&source, "abc", 2, 2);
    write_chunk_group(&source, "xyz", 2, 2);
    fs::write(source.join("xyz-7.jpg"), b"garbage").unwrap();

    fs::write(
        temp.path().join("harvestlab.toml"),
        "[tiles]\nsource_dir = \"chunks\"\noutput_dir = \"out\"\njpeg_quality = 80\n",
    )
    .unwrap();

    let output = harvestlab()
        .current_dir(temp.path())
        .args(["tiles", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["groups"], 2);
    assert_eq!(summary["saved"], serde_json::json!(["abc"]));
    assert_eq!(summary["failed"][0]["id"], "xyz");
    assert_eq!(summary["skipped"], serde_json::json!([]));
    assert!(temp.path().join("out").join("abc.jpg").exists());
}

#[test]
fn test_tiles_missing_source_fails() {
    let temp = temp_dir_in_workspace();

    harvestlab()
        .current_dir(temp.path())
        .args(["tiles", "--source", "absent", "--out-dir", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent"));
}
