// SPDX-License-Identifier: PMPL-1.0-or-later
//! Main-content and navigation-content detectors.
//!
//! Both detectors follow the same shape: honor a single explicit landmark,
//! abstain when explicit landmarks are ambiguous (two or more), and fall
//! back to a heuristic only when no explicit landmark exists. Candidate
//! sets are materialized in one upfront pass so each call operates on a
//! single consistent snapshot of the tree.

use super::queue::TraversalQueue;
use super::{body_element, element_children, stripped_text_len};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Minimum number of hyperlink children for a block to qualify as a
/// navigation cluster
const NAV_LINK_THRESHOLD: usize = 3;

/// Detect the primary content landmark of a document.
///
/// Exactly one explicit landmark (`<main>` or `role="main"`) is returned
/// as-is. Two or more explicit landmarks make the document ambiguous and
/// yield `None` rather than a guess. With no explicit landmark, the
/// largest direct child of `<body>` by serialized-markup length is chosen,
/// ties broken by document order.
pub fn detect_main_content(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse(r#"main, [role="main"]"#).expect("valid selector");
    let explicit: Vec<ElementRef<'_>> = document.select(&selector).collect();

    match explicit.len() {
        1 => return Some(explicit[0]),
        0 => {}
        n => {
            debug!("Found {} explicit main landmarks, abstaining", n);
            return None;
        }
    }

    // No explicit landmark: take the largest top-level section
    let body = body_element(document)?;
    let mut children: Vec<ElementRef<'_>> = element_children(body).collect();
    if children.is_empty() {
        return None;
    }
    children.sort_by(|a, b| b.html().len().cmp(&a.html().len()));
    Some(children[0])
}

/// Detect the primary navigation landmark of a document.
///
/// Exactly one explicit landmark (`<nav>` or `role="navigation"`) is
/// returned as-is; two or more yield `None`. With no explicit landmark, a
/// breadth-first scan over the body looks for the shallowest block whose
/// direct children include at least three hyperlinks and whose text is
/// mostly link text. BFS rather than DFS so a shallow navigation bar wins
/// over a deep unrelated list of links.
pub fn detect_navigation_content(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse(r#"nav, [role="navigation"]"#).expect("valid selector");
    let explicit: Vec<ElementRef<'_>> = document.select(&selector).collect();

    match explicit.len() {
        1 => return Some(explicit[0]),
        0 => {}
        n => {
            debug!("Found {} explicit navigation landmarks, abstaining", n);
            return None;
        }
    }

    let body = body_element(document)?;
    let mut queue = TraversalQueue::new();
    for child in element_children(body) {
        if child.value().name() != "script" {
            queue.push(child);
        }
    }

    while let Some(element) = queue.pop() {
        let mut link_count = 0;
        let mut link_text_len = 0;

        for child in element_children(element) {
            queue.push(child);
            if child.value().attr("href").is_some() {
                link_count += 1;
                link_text_len += stripped_text_len(child);
            }
        }

        // Three links in close succession mark a navigation cluster; the
        // text-length comparison rules out prose that merely contains links.
        if link_count >= NAV_LINK_THRESHOLD && stripped_text_len(element) <= link_text_len {
            return Some(element);
        }
    }

    None
}
