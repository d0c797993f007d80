// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text rule - WCAG 2.4.4 Link Purpose (In Context)
//!
//! Link purpose must be determinable from the link text. Generic phrases
//! like "click here" and links with no accessible name at all defeat
//! screen reader link lists.

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::path::Path;

/// Link texts that carry no purpose on their own
const GENERIC_LINK_TEXTS: &[&str] = &["click here", "here", "read more", "more", "link"];

/// Link purpose rule
pub struct LinkRule;

impl Rule for LinkRule {
    fn id(&self) -> &str {
        "links"
    }

    fn description(&self) -> &str {
        "Checks that link text conveys link purpose (WCAG 2.4.4)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let selector = Selector::parse("a[href]").expect("valid selector");
        let mut diagnostics = Vec::new();

        for element in document.select(&selector) {
            let text: String = element.text().collect();
            let text = text.trim();
            let href = element.value().attr("href").unwrap_or("");

            if text.is_empty() {
                if element.value().attr("aria-label").is_none() {
                    let mut diagnostic = Diagnostic::new(
                        "links-empty-text",
                        Severity::Error,
                        &format!(
                            "Link to \"{}\" has no text and no aria-label. It is unnamed for assistive technology.",
                            href
                        ),
                    )
                    .with_wcag("2.4.4")
                    .with_file(path.to_path_buf())
                    .with_element(&element.html())
                    .with_suggestion("Add link text or an aria-label describing the destination");
                    if let Some(line) = find_line(source, href) {
                        diagnostic = diagnostic.with_line(line);
                    }
                    diagnostics.push(diagnostic);
                }
            } else if GENERIC_LINK_TEXTS.contains(&text.to_lowercase().as_str()) {
                let mut diagnostic = Diagnostic::new(
                    "links-generic-text",
                    Severity::Warning,
                    &format!(
                        "Link text \"{}\" does not describe the link destination.",
                        text
                    ),
                )
                .with_wcag("2.4.4")
                .with_file(path.to_path_buf())
                .with_element(&element.html())
                .with_suggestion("Rewrite the link text to name its destination, e.g. \"download the annual report\"");
                if let Some(line) = find_line(source, href) {
                    diagnostic = diagnostic.with_line(line);
                }
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}
