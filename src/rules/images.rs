// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule - WCAG 1.1.1 Non-text Content
//!
//! Every `<img>` must carry an `alt` attribute. Empty `alt=""` marks a
//! decorative image and is valid; alt text that is just a filename is not.

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::path::Path;

/// Image file extensions that betray a filename used as alt text
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp"];

/// Image alternative-text rule
pub struct ImageRule;

impl Rule for ImageRule {
    fn id(&self) -> &str {
        "images"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for proper alt text (WCAG 1.1.1)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let selector = Selector::parse("img").expect("valid selector");
        let mut diagnostics = Vec::new();

        for element in document.select(&selector) {
            let src = element.value().attr("src").unwrap_or("");
            let element_html = element.html();

            match element.value().attr("alt") {
                None => {
                    let mut diagnostic = Diagnostic::new(
                        "images-missing-alt",
                        Severity::Error,
                        "Image is missing an alt attribute. Every <img> must have one.",
                    )
                    .with_wcag("1.1.1")
                    .with_file(path.to_path_buf())
                    .with_element(&element_html)
                    .with_suggestion(
                        "Add alt=\"description\" for informative images or alt=\"\" for decorative images",
                    );
                    let located = if src.is_empty() {
                        find_line(source, "<img")
                    } else {
                        find_line(source, src).or_else(|| find_line(source, "<img"))
                    };
                    if let Some(line) = located {
                        diagnostic = diagnostic.with_line(line);
                    }
                    diagnostics.push(diagnostic);
                }
                Some(alt) => {
                    let alt_lower = alt.trim().to_lowercase();
                    if IMAGE_EXTENSIONS.iter().any(|ext| alt_lower.ends_with(ext)) {
                        let mut diagnostic = Diagnostic::new(
                            "images-filename-alt",
                            Severity::Warning,
                            &format!(
                                "Image alt text appears to be a filename: \"{}\". Use a descriptive alternative.",
                                alt
                            ),
                        )
                        .with_wcag("1.1.1")
                        .with_file(path.to_path_buf())
                        .with_element(&element_html)
                        .with_suggestion("Replace with a meaningful description of the image content");
                        if let Some(line) = find_line(source, alt) {
                            diagnostic = diagnostic.with_line(line);
                        }
                        diagnostics.push(diagnostic);
                    }
                }
            }
        }

        diagnostics
    }
}
