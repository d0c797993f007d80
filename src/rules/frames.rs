// SPDX-License-Identifier: PMPL-1.0-or-later
//! Frame title rule - WCAG 4.1.2 Name, Role, Value
//!
//! Every `<iframe>` and `<frame>` needs a title attribute; without one a
//! screen reader announces only "frame".

use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::path::Path;

/// Frame title rule
pub struct FrameRule;

impl Rule for FrameRule {
    fn id(&self) -> &str {
        "frames"
    }

    fn description(&self) -> &str {
        "Checks that frames carry a title attribute (WCAG 4.1.2)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let selector = Selector::parse("iframe, frame").expect("valid selector");
        let mut diagnostics = Vec::new();

        for element in document.select(&selector) {
            let has_title = element
                .value()
                .attr("title")
                .map(|t| !t.trim().is_empty())
                .unwrap_or(false);
            if has_title {
                continue;
            }

            let name = element.value().name().to_string();
            let mut diagnostic = Diagnostic::new(
                "frames-missing-title",
                Severity::Error,
                &format!(
                    "<{}> has no title attribute. Screen readers cannot describe an untitled frame.",
                    name
                ),
            )
            .with_wcag("4.1.2")
            .with_file(path.to_path_buf())
            .with_element(&element.html())
            .with_suggestion("Add a title attribute describing the frame's content");
            if let Some(line) = find_line(source, &format!("<{}", name)) {
                diagnostic = diagnostic.with_line(line);
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}
