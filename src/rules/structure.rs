// SPDX-License-Identifier: PMPL-1.0-or-later
//! Structural landmark rule - WCAG 1.3.1 Info and Relationships and
//! 1.3.2 Meaningful Sequence
//!
//! Consumes the landmark detectors and order checks to flag documents
//! missing a primary content region or presenting navigation/content in a
//! confusing order for assistive technology. Severity and messaging policy
//! live here; the detectors only answer what was found and in what order.

use crate::diagnostics::{Diagnostic, Severity};
use crate::landmarks::{
    detect_main_content, detect_navigation_content, is_main_first, is_nav_before_main,
};
use crate::rules::{find_line, Rule};
use scraper::{ElementRef, Html};
use std::path::Path;

/// Landmark presence and ordering rule
pub struct StructureRule;

impl Rule for StructureRule {
    fn id(&self) -> &str {
        "structure"
    }

    fn description(&self) -> &str {
        "Checks landmark presence and navigation/content ordering (WCAG 1.3.1, 1.3.2)"
    }

    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let main = detect_main_content(document);
        let nav = detect_navigation_content(document);

        if main.is_none() {
            diagnostics.push(
                Diagnostic::new(
                    "structure-no-main",
                    Severity::Warning,
                    "No primary content landmark detected. Screen reader users rely on a main region to skip to content.",
                )
                .with_wcag("1.3.1")
                .with_file(path.to_path_buf())
                .with_suggestion("Wrap the primary content in <main> or mark it with role=\"main\""),
            );
        }

        if let (Some(main), Some(nav)) = (main, nav) {
            if !is_nav_before_main(document, main, nav) {
                let mut diagnostic = Diagnostic::new(
                    "structure-nav-after-main",
                    Severity::Info,
                    "Navigation appears after the main content in document order. Navigation should precede main content.",
                )
                .with_wcag("1.3.2")
                .with_file(path.to_path_buf())
                .with_element(&element_label(nav))
                .with_suggestion("Move the navigation region before the main content region");
                if let Some(line) = find_line(source, "<nav") {
                    diagnostic = diagnostic.with_line(line);
                }
                diagnostics.push(diagnostic);
            }
        }

        if !is_main_first(document, main, nav.is_some()) {
            let mut diagnostic = Diagnostic::new(
                "structure-main-not-first",
                Severity::Warning,
                "Main content is not the first region of the body. Content buried behind other regions is harder to reach.",
            )
            .with_wcag("1.3.2")
            .with_file(path.to_path_buf())
            .with_suggestion(
                "Place the main content first in <body>, optionally after the navigation region",
            );
            if let Some(main) = main {
                diagnostic = diagnostic.with_element(&element_label(main));
            }
            if let Some(line) = find_line(source, "<main") {
                diagnostic = diagnostic.with_line(line);
            }
            diagnostics.push(diagnostic);
        }

        diagnostics
    }
}

/// Short display label for an element: tag plus id or class when present
fn element_label(element: ElementRef<'_>) -> String {
    let value = element.value();
    if let Some(id) = value.attr("id") {
        format!("<{} id=\"{}\">", value.name(), id)
    } else if let Some(class) = value.attr("class") {
        format!("<{} class=\"{}\">", value.name(), class)
    } else {
        format!("<{}>", value.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Diagnostic> {
        let document = Html::parse_document(html);
        StructureRule.check(&document, html, Path::new("test.html"))
    }

    #[test]
    fn test_well_structured_page_is_clean() {
        let diagnostics = run(concat!(
            "<html><body>",
            "<nav><a href='/a'>aa</a><a href='/b'>bb</a><a href='/c'>cc</a></nav>",
            "<main><h1>Title</h1><p>Content</p></main>",
            "</body></html>",
        ));
        assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    }

    #[test]
    fn test_ambiguous_main_flags_no_main() {
        let diagnostics = run("<html><body><main>a</main><main>b</main></body></html>");
        assert!(diagnostics.iter().any(|d| d.rule_id == "structure-no-main"));
    }

    #[test]
    fn test_nav_after_main_flagged() {
        let diagnostics = run(concat!(
            "<html><body>",
            "<main><p>Content</p></main>",
            "<nav><a href='/a'>aa</a></nav>",
            "</body></html>",
        ));
        assert!(diagnostics.iter().any(|d| d.rule_id == "structure-nav-after-main"));
    }

    #[test]
    fn test_main_not_first_flagged() {
        let diagnostics = run(concat!(
            "<html><body>",
            "<header>h</header><aside>side</aside>",
            "<main><p>Content</p></main>",
            "</body></html>",
        ));
        let flagged: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.rule_id == "structure-main-not-first")
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].severity, Severity::Warning);
    }

    #[test]
    fn test_heuristic_main_counts_as_detected() {
        // No explicit main, but the largest body child is adopted as the
        // content landmark, so structure-no-main stays silent
        let diagnostics = run(concat!(
            "<html><body>",
            "<div><h1>Article</h1><p>Plenty of article text in this block.</p></div>",
            "</body></html>",
        ));
        assert!(!diagnostics.iter().any(|d| d.rule_id == "structure-no-main"));
    }
}
