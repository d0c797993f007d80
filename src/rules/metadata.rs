// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document metadata rule - WCAG 2.4.2 Page Titled, 1.4.4 Resize Text,
//! 3.1.1 Language of Page
//!
//! Checks the document head and root: a non-empty `<title>`, a viewport
//! that does not disable zoom, and a `lang` attribute on `<html>`.

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use regex::Regex;
use scraper::{Html, Selector};
use std::path::Path;

/// Document metadata rule
pub struct MetadataRule;

impl Rule for MetadataRule {
    fn id(&self) -> &str {
        "metadata"
    }

    fn description(&self) -> &str {
        "Checks page title, viewport zoom, and document language (WCAG 2.4.2, 1.4.4, 3.1.1)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        check_title(document, path, &mut diagnostics);
        check_viewport(document, source, path, &mut diagnostics);
        check_lang(document, source, path, &mut diagnostics);

        diagnostics
    }
}

fn check_title(document: &Html, path: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let selector = Selector::parse("title").expect("valid selector");
    let title_text = document
        .select(&selector)
        .next()
        .map(|t| t.text().collect::<String>());

    let missing = match title_text {
        Some(text) => text.trim().is_empty(),
        None => true,
    };

    if missing {
        diagnostics.push(
            Diagnostic::new(
                "metadata-missing-title",
                Severity::Error,
                "Document has no title. The title is the first thing a screen reader announces.",
            )
            .with_wcag("2.4.2")
            .with_file(path.to_path_buf())
            .with_suggestion("Add a descriptive <title> to the document head"),
        );
    }
}

fn check_viewport(document: &Html, source: &str, path: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let selector = Selector::parse(r#"meta[name="viewport"]"#).expect("valid selector");
    let max_scale = Regex::new(r"maximum-scale\s*=\s*([0-9.]+)").expect("valid regex");

    for meta in document.select(&selector) {
        let content = meta.value().attr("content").unwrap_or("");
        let content_lower = content.to_lowercase();

        let blocks_zoom = content_lower.contains("user-scalable=no")
            || max_scale
                .captures(&content_lower)
                .and_then(|c| c[1].parse::<f64>().ok())
                .map(|scale| scale < 2.0)
                .unwrap_or(false);

        if blocks_zoom {
            let mut diagnostic = Diagnostic::new(
                "metadata-viewport-zoom",
                Severity::Warning,
                "Viewport disables or limits zoom. Low-vision users must be able to scale the page.",
            )
            .with_wcag("1.4.4")
            .with_file(path.to_path_buf())
            .with_element(&meta.html())
            .with_suggestion("Remove user-scalable=no and allow maximum-scale of at least 2");
            if let Some(line) = find_line(source, "viewport") {
                diagnostic = diagnostic.with_line(line);
            }
            diagnostics.push(diagnostic);
        }
    }
}

fn check_lang(document: &Html, source: &str, path: &Path, diagnostics: &mut Vec<Diagnostic>) {
    let root = document.root_element();
    let has_lang = root
        .value()
        .attr("lang")
        .map(|lang| !lang.trim().is_empty())
        .unwrap_or(false);

    if !has_lang {
        let mut diagnostic = Diagnostic::new(
            "metadata-missing-lang",
            Severity::Error,
            "<html> has no lang attribute. Screen readers need it to pick a pronunciation voice.",
        )
        .with_wcag("3.1.1")
        .with_file(path.to_path_buf())
        .with_suggestion("Add lang=\"en\" (or the document's language) to the <html> element");
        if let Some(line) = find_line(source, "<html") {
            diagnostic = diagnostic.with_line(line);
        }
        diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Diagnostic> {
        let document = Html::parse_document(html);
        MetadataRule.check(&document, html, Path::new("test.html"))
    }

    #[test]
    fn test_complete_metadata_is_clean() {
        let diagnostics = run(concat!(
            "<html lang='en'><head>",
            "<title>Docs</title>",
            "<meta name='viewport' content='width=device-width, initial-scale=1'>",
            "</head><body><p>x</p></body></html>",
        ));
        assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    }

    #[test]
    fn test_missing_title_is_error() {
        let diagnostics = run("<html lang='en'><body><p>x</p></body></html>");
        assert!(diagnostics.iter().any(|d| d.rule_id == "metadata-missing-title"));
    }

    #[test]
    fn test_empty_title_is_error() {
        let diagnostics =
            run("<html lang='en'><head><title>  </title></head><body></body></html>");
        assert!(diagnostics.iter().any(|d| d.rule_id == "metadata-missing-title"));
    }

    #[test]
    fn test_user_scalable_no_is_warning() {
        let diagnostics = run(concat!(
            "<html lang='en'><head><title>T</title>",
            "<meta name='viewport' content='width=device-width, user-scalable=no'>",
            "</head><body></body></html>",
        ));
        assert!(diagnostics.iter().any(|d| d.rule_id == "metadata-viewport-zoom"));
    }

    #[test]
    fn test_small_maximum_scale_is_warning() {
        let diagnostics = run(concat!(
            "<html lang='en'><head><title>T</title>",
            "<meta name='viewport' content='initial-scale=1, maximum-scale=1.0'>",
            "</head><body></body></html>",
        ));
        assert!(diagnostics.iter().any(|d| d.rule_id == "metadata-viewport-zoom"));
    }

    #[test]
    fn test_missing_lang_is_error() {
        let diagnostics = run("<html><head><title>T</title></head><body></body></html>");
        assert!(diagnostics.iter().any(|d| d.rule_id == "metadata-missing-lang"));
    }
}
