//! Integration tests for base runtime registration

#![cfg(unix)]

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_base_add_registers_runtime() {
    let ws = TestWorkspace::new();
    let source = ws.build_base_source(&["requests"]);

    ws.cmd()
        .args(["base", "add", "sh:1.0"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered base sh:1.0"));

    assert!(ws.store_path("bases/sh/1.0/base.yaml").is_file());
    assert!(ws
        .store_path("bases/sh/1.0/rootfs/bin/install.sh")
        .is_file());
}

#[test]
fn test_base_list_shows_registered() {
    let ws = TestWorkspace::new();
    ws.register_base("sh:1.0", &["requests"]);

    ws.cmd()
        .args(["base", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered bases (1):"))
        .stdout(predicate::str::contains("sh:1.0"));
}

#[test]
fn test_base_list_empty() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["base", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bases registered."));
}

#[test]
fn test_base_add_rejects_duplicate() {
    let ws = TestWorkspace::new();
    ws.register_base("sh:1.0", &["requests"]);
    let source = ws.build_base_source(&["requests"]);

    ws.cmd()
        .args(["base", "add", "sh:1.0"])
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));
}

#[test]
fn test_base_add_rejects_untagged_reference() {
    let ws = TestWorkspace::new();
    let source = ws.build_base_source(&[]);

    ws.cmd()
        .args(["base", "add", "sh"])
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base reference"));
}

#[test]
fn test_base_add_requires_manifest() {
    let ws = TestWorkspace::new();
    ws.write_file("empty-base/rootfs/placeholder", "");

    ws.cmd()
        .args(["base", "add", "sh:1.0"])
        .arg(ws.path.join("empty-base"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base manifest"));
}

#[test]
fn test_base_add_requires_rootfs() {
    let ws = TestWorkspace::new();
    ws.write_file(
        "bare-base/base.yaml",
        "install: [\"/bin/true\"]\nrun: [\"/bin/true\"]\n",
    );

    ws.cmd()
        .args(["base", "add", "sh:1.0"])
        .arg(ws.path.join("bare-base"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("rootfs"));
}

#[test]
fn test_base_rm() {
    let ws = TestWorkspace::new();
    ws.register_base("sh:1.0", &["requests"]);

    ws.cmd()
        .args(["base", "rm", "sh:1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed base: sh:1.0"));

    assert!(!ws.store_path("bases/sh/1.0").exists());
}

#[test]
fn test_base_rm_unknown() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["base", "rm", "ghost:9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base 'ghost:9.9' not found"));
}

#[test]
fn test_two_tags_of_same_base() {
    let ws = TestWorkspace::new();
    ws.register_base("sh:1.0", &["requests"]);
    ws.register_base("sh:2.0", &["requests", "discord.py"]);

    ws.cmd()
        .args(["base", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered bases (2):"))
        .stdout(predicate::str::contains("sh:1.0"))
        .stdout(predicate::str::contains("sh:2.0"));
}
