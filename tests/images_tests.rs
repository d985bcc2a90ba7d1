//! Integration tests for images, show and rm

#![cfg(unix)]

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_images_empty_store() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .arg("images")
        .assert()
        .success()
        .stdout(predicate::str::contains("No images built."));
}

#[test]
fn test_images_lists_built_image() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();

    ws.cmd()
        .arg("images")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built images (1):"))
        .stdout(predicate::str::contains("pollbot"))
        .stdout(predicate::str::contains("Base: sh:1.0"))
        .stdout(predicate::str::contains("Entry point: bot.py"));
}

#[test]
fn test_images_sorted_by_name() {
    let ws = TestWorkspace::new();
    ws.bootstrap("zebra");
    ws.cmd().arg("build").assert().success();
    ws.write_recipe("alpha");
    ws.cmd().arg("build").assert().success();

    let output = ws.cmd().arg("images").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let alpha = stdout.find("alpha").expect("alpha listed");
    let zebra = stdout.find("zebra").expect("zebra listed");
    assert!(alpha < zebra);
}

#[test]
fn test_show_image_details() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.write_manifest("requests==2.31.0\ndiscord.py\n");
    ws.cmd().arg("build").assert().success();

    ws.cmd()
        .args(["show", "pollbot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pollbot"))
        .stdout(predicate::str::contains("Base: sh:1.0"))
        .stdout(predicate::str::contains("Layer:"))
        .stdout(predicate::str::contains("Entry point: bot.py"))
        .stdout(predicate::str::contains("Dependencies:"))
        .stdout(predicate::str::contains("requests ==2.31.0"))
        .stdout(predicate::str::contains("discord.py"));
}

#[test]
fn test_show_defaults_to_workspace_recipe() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();

    ws.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base: sh:1.0"));
}

#[test]
fn test_show_survives_cleared_cache() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();
    ws.cmd().args(["cache", "clear"]).assert().success();

    // The dependency section is dropped, show itself still works
    ws.cmd()
        .args(["show", "pollbot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependencies:").not());
}

#[test]
fn test_show_unknown_image() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image 'ghost' not found"));
}

#[test]
fn test_rm_with_yes_flag() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();

    ws.cmd()
        .args(["rm", "pollbot", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed image: pollbot"));

    assert!(!ws.store_path("images/pollbot").exists());
}

#[test]
fn test_rm_keeps_base_and_layer() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();

    ws.cmd().args(["rm", "pollbot", "--yes"]).assert().success();

    assert!(ws.store_path("bases/sh/1.0").exists());
    assert_eq!(
        std::fs::read_dir(ws.store_path("layers"))
            .expect("layers dir missing")
            .count(),
        1
    );
}

#[test]
fn test_rm_unknown_image() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["rm", "ghost", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image 'ghost' not found"));
}

#[test]
fn test_rm_without_yes_needs_terminal() {
    let ws = TestWorkspace::new();
    ws.bootstrap("pollbot");
    ws.cmd().arg("build").assert().success();

    // No TTY on stdin, so the confirmation prompt cannot be answered
    ws.cmd().args(["rm", "pollbot"]).assert().failure();

    assert!(ws.store_path("images/pollbot").exists());
}
