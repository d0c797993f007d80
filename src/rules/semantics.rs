// SPDX-License-Identifier: PMPL-1.0-or-later
//! Semantic markup rule - WCAG 1.3.1 Info and Relationships
//!
//! Flags `<div>`/`<span>` elements pressed into structural or interactive
//! service without a role: click handlers on generic elements, or id/class
//! names that betray a structural purpose (nav, header, button, ...).
//! Disabled entirely by the `semantic_exclude` setting.

use crate::config::Config;
use crate::diagnostics::{Diagnostic, Severity};
use crate::rules::{find_line, Rule};
use scraper::{Html, Selector};
use std::path::Path;

/// id/class fragments that suggest the element plays a structural role
const STRUCTURAL_HINTS: &[&str] = &[
    "nav", "menu", "header", "footer", "sidebar", "button", "main", "banner",
];

/// Generic-element semantics rule
pub struct SemanticsRule;

impl Rule for SemanticsRule {
    fn id(&self) -> &str {
        "semantics"
    }

    fn description(&self) -> &str {
        "Suggests semantic HTML or roles for structural div/span usage (WCAG 1.3.1)"
    }

    fn enabled(&self, config: &Config) -> bool {
        !config.semantic_exclude
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let selector = Selector::parse("div, span").expect("valid selector");
        let mut diagnostics = Vec::new();

        for element in document.select(&selector) {
            let value = element.value();
            if value.attr("role").is_some() {
                continue;
            }

            let interactive = value.attr("onclick").is_some();
            let hint = structural_hint(value.attr("id"), value.attr("class"));

            if !interactive && hint.is_none() {
                continue;
            }

            let message = if interactive {
                format!(
                    "<{}> has a click handler but no role. Generic elements are invisible to assistive technology.",
                    value.name()
                )
            } else {
                format!(
                    "<{}> is named \"{}\" but carries no role. Use a semantic element or declare the role.",
                    value.name(),
                    hint.unwrap_or_default()
                )
            };

            let mut diagnostic = Diagnostic::new("semantics-missing-role", Severity::Hint, &message)
                .with_wcag("1.3.1")
                .with_file(path.to_path_buf())
                .with_suggestion(
                    "Replace with a semantic element (<nav>, <header>, <button>, ...) or add an explicit role attribute",
                );
            if let Some(needle) = value.attr("id").or(value.attr("class")) {
                if let Some(line) = find_line(source, needle) {
                    diagnostic = diagnostic.with_line(line);
                }
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}

/// First structural fragment found in the element's id or class, if any
fn structural_hint<'a>(id: Option<&'a str>, class: Option<&'a str>) -> Option<&'a str> {
    for name in [id, class].into_iter().flatten() {
        let lowered = name.to_lowercase();
        for hint in STRUCTURAL_HINTS {
            if lowered.contains(hint) {
                return Some(name);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Diagnostic> {
        let document = Html::parse_document(html);
        SemanticsRule.check(&document, html, Path::new("test.html"))
    }

    #[test]
    fn test_plain_div_is_clean() {
        let diagnostics = run("<body><div class='wrapper'><p>text</p></div></body>");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_clickable_div_is_hinted() {
        let diagnostics = run("<body><div onclick='go()'>Open</div></body>");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, "semantics-missing-role");
        assert_eq!(diagnostics[0].severity, Severity::Hint);
    }

    #[test]
    fn test_structural_class_is_hinted() {
        let diagnostics = run("<body><div class='site-header'>top</div></body>");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_role_silences_hint() {
        let diagnostics = run("<body><div class='site-nav' role='navigation'>links</div></body>");
        assert!(diagnostics.is_empty());
    }
}
