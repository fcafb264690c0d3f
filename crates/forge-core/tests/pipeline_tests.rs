//! End-to-end pipeline tests against a temporary destination tree

use forge_core::run;
use forge_test_utils::{delimited_response, sample_site_response};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

#[test]
fn full_site_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&sample_site_response(), dir.path());

    assert!(report.is_clean());
    assert_eq!(
        report.written(),
        vec![
            &PathBuf::from("index.html"),
            &PathBuf::from("style.css"),
            &PathBuf::from("main.js")
        ]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("main.js")).unwrap(),
        "console.log('valmis');"
    );
}

#[test]
fn subdirectories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let text = delimited_response(&[("images/logo.svg", "<svg/>"), ("index.html", "<html></html>")]);
    let report = run(&text, dir.path());

    assert!(report.is_clean());
    assert!(dir.path().join("images").is_dir());
    assert_eq!(
        fs::read_to_string(dir.path().join("images/logo.svg")).unwrap(),
        "<svg/>"
    );
}

#[test]
fn traversal_entry_is_skipped_others_written() {
    let dir = tempfile::tempdir().unwrap();
    let text = delimited_response(&[("../../etc/passwd", "root::0:0"), ("safe.txt", "fine")]);
    let report = run(&text, dir.path());

    assert_eq!(report.written(), vec![&PathBuf::from("safe.txt")]);
    assert_eq!(report.skipped().len(), 1);
    assert!(!report.has_io_failures());
    assert!(!dir.path().parent().unwrap().join("etc").exists());
}

#[test]
fn unparseable_text_lands_as_default_document() {
    let dir = tempfile::tempdir().unwrap();
    let text = "The model felt chatty today and produced no files at all.";
    let report = run(text, dir.path());

    assert!(report.fallback);
    assert_eq!(report.written(), vec![&PathBuf::from("index.html")]);
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        text
    );
}

#[test]
fn rerun_produces_identical_tree() {
    let dir = tempfile::tempdir().unwrap();
    let text = sample_site_response();

    let first = run(&text, dir.path());
    let second = run(&text, dir.path());

    assert_eq!(first.written(), second.written());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&delimited_response(&[("a.txt", "x")]), dir.path());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["strategy"], "delimited-sections");
    assert_eq!(json["fallback"], false);
    assert!(json["outcomes"].is_array());
}
