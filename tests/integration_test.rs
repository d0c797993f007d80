// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for a11ylint

use a11ylint::config::Config;
use a11ylint::landmarks::{
    detect_main_content, detect_navigation_content, is_main_first, is_nav_before_main,
};
use a11ylint::report::{generate_report, OutputFormat};
use a11ylint::scanner;
use scraper::Html;
use std::path::Path;

fn parse_fixture(name: &str) -> Html {
    let content = std::fs::read_to_string(Path::new("tests/fixtures").join(name))
        .expect("fixture readable");
    Html::parse_document(&content)
}

#[test]
fn test_scan_accessible_fixture() {
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/accessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");

    assert!(
        diagnostics.is_empty(),
        "Accessible fixture should be clean, got: {:?}",
        diagnostics.diagnostics.iter().map(|d| &d.rule_id).collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");

    assert!(
        diagnostics.len() >= 8,
        "Inaccessible fixture should have many diagnostics, got {}",
        diagnostics.len()
    );
    assert!(diagnostics.has_errors());

    // The misordered navigation is caught by the structure rule
    assert!(diagnostics
        .diagnostics
        .iter()
        .any(|d| d.rule_id == "structure-nav-after-main"));
}

#[test]
fn test_scan_fixtures_directory() {
    let diagnostics = scanner::scan_directory(
        Path::new("tests/fixtures"),
        &Config::default(),
    )
    .expect("scan should succeed");

    assert!(
        diagnostics.len() >= 8,
        "Fixture directory should accumulate diagnostics, got {}",
        diagnostics.len()
    );
}

#[test]
fn test_semantic_exclude_config() {
    let config = Config {
        semantic_exclude: true,
        ..Config::default()
    };
    let with_semantics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");
    let without_semantics =
        scanner::scan_file(Path::new("tests/fixtures/inaccessible.html"), &config)
            .expect("scan should succeed");

    assert!(with_semantics
        .diagnostics
        .iter()
        .any(|d| d.rule_id == "semantics-missing-role"));
    assert!(!without_semantics
        .diagnostics
        .iter()
        .any(|d| d.rule_id == "semantics-missing-role"));
}

#[test]
fn test_implicit_landmark_detection() {
    let document = parse_fixture("implicit_landmarks.html");

    let main = detect_main_content(&document).expect("content landmark inferred");
    let nav = detect_navigation_content(&document).expect("navigation landmark inferred");

    assert_eq!(main.value().attr("id"), Some("content"));
    assert_eq!(nav.value().attr("id"), Some("menu"));

    assert!(is_nav_before_main(&document, main, nav));
    assert!(is_main_first(&document, Some(main), true));
}

#[test]
fn test_explicit_landmark_detection() {
    let document = parse_fixture("accessible.html");

    let main = detect_main_content(&document).expect("main landmark detected");
    let nav = detect_navigation_content(&document).expect("nav landmark detected");

    assert_eq!(main.value().name(), "main");
    assert_eq!(nav.value().name(), "nav");
    assert!(is_nav_before_main(&document, main, nav));
}

#[test]
fn test_json_report_valid() {
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");

    let report = generate_report(&diagnostics, OutputFormat::Json);
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("JSON report should be valid JSON");

    assert!(parsed["diagnostics"].is_array());
    assert!(!parsed["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_sarif_report_valid() {
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");

    let report = generate_report(&diagnostics, OutputFormat::Sarif);
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("SARIF report should be valid JSON");

    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "a11ylint");
    assert!(parsed["runs"][0]["results"].is_array());
}

#[test]
fn test_text_report_format() {
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &Config::default(),
    )
    .expect("scan should succeed");

    let report = generate_report(&diagnostics, OutputFormat::Text);

    assert!(report.contains("a11ylint Accessibility Report"));
    assert!(report.contains("WCAG"));
    assert!(report.contains("RESULT: FAIL"));
}

#[test]
fn test_max_problems_caps_output() {
    let config = Config {
        max_problems: 3,
        ..Config::default()
    };
    let diagnostics = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &config,
    )
    .expect("scan should succeed");

    assert_eq!(diagnostics.len(), 3);
}
