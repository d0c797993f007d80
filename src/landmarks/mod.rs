// SPDX-License-Identifier: PMPL-1.0-or-later
//! Landmark detection for structural accessibility checking.
//!
//! Locates a document's primary content region and primary navigation
//! region even when no authoritative landmark element exists, and verifies
//! that the regions appear in an accessibility-correct structural order:
//!
//! - **Detection**: explicit `<main>`/`role="main"` and
//!   `<nav>`/`role="navigation"` landmarks when unambiguous; heuristic
//!   fallbacks otherwise (largest body child for content, breadth-first
//!   link-cluster scan for navigation).
//! - **Order checks**: "is navigation before content?" and "does content
//!   appear first among the body's children?"
//!
//! This module never parses HTML (a parsed [`scraper::Html`] is supplied),
//! never mutates the tree, and never produces diagnostics — absence of a
//! landmark is an ordinary `None`, interpreted by the rule engine.

mod checks;
mod detect;
mod order;
mod queue;

pub use checks::{is_main_first, is_nav_before_main};
pub use detect::{detect_main_content, detect_navigation_content};
pub use order::{compare_element_order, ElementOrder};
pub use queue::TraversalQueue;

use scraper::{ElementRef, Html, Selector};

/// Find the document body, if any
pub(crate) fn body_element(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").expect("valid selector");
    document.select(&selector).next()
}

/// Direct element children of a node, in document order
pub(crate) fn element_children<'a>(
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Length of an element's text content with all whitespace removed
pub(crate) fn stripped_text_len(element: ElementRef<'_>) -> usize {
    element
        .text()
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .count()
}
