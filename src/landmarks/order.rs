// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document-order comparison between two elements.

use super::element_children;
use scraper::ElementRef;

/// Which of two elements occurs first in a pre-order walk from a root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementOrder {
    /// The first target was encountered first
    First,
    /// The second target was encountered first
    Second,
    /// Neither target was found under the root
    Undecided,
}

/// Determine which of `first` and `second` appears earlier in document
/// order, searching the subtree rooted at `root`.
///
/// Performs a pre-order depth-first walk: the root is examined before its
/// children, children in document order. The first target encountered
/// decides the result; once a child subtree yields a decision, later
/// siblings are not explored. A target that is not a descendant of `root`
/// can never be found, so callers must pass a common ancestor of both
/// targets (conventionally the document body) or the result is
/// [`ElementOrder::Undecided`].
pub fn compare_element_order(
    root: ElementRef<'_>,
    first: ElementRef<'_>,
    second: ElementRef<'_>,
) -> ElementOrder {
    if root == first {
        return ElementOrder::First;
    }
    if root == second {
        return ElementOrder::Second;
    }

    for child in element_children(root) {
        match compare_element_order(child, first, second) {
            ElementOrder::Undecided => continue,
            decided => return decided,
        }
    }

    ElementOrder::Undecided
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn select_one<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().expect("element present")
    }

    #[test]
    fn test_sibling_order() {
        let document = Html::parse_document(
            "<body><div id='x'>x</div><div id='y'>y</div></body>",
        );
        let body = select_one(&document, "body");
        let x = select_one(&document, "#x");
        let y = select_one(&document, "#y");

        assert_eq!(compare_element_order(body, x, y), ElementOrder::First);
        assert_eq!(compare_element_order(body, y, x), ElementOrder::Second);
    }

    #[test]
    fn test_nested_before_later_sibling() {
        let document = Html::parse_document(
            "<body><div><span id='inner'>deep</span></div><p id='after'>after</p></body>",
        );
        let body = select_one(&document, "body");
        let inner = select_one(&document, "#inner");
        let after = select_one(&document, "#after");

        assert_eq!(compare_element_order(body, inner, after), ElementOrder::First);
        assert_eq!(compare_element_order(body, after, inner), ElementOrder::Second);
    }

    #[test]
    fn test_target_outside_root() {
        let document = Html::parse_document(
            "<body><div id='root'><p id='x'>x</p></div><p id='z'>z</p></body>",
        );
        let root = select_one(&document, "#root");
        let x = select_one(&document, "#x");
        let z = select_one(&document, "#z");

        // z is not under #root, so only x can be found
        assert_eq!(compare_element_order(root, x, z), ElementOrder::First);
        assert_eq!(compare_element_order(root, z, x), ElementOrder::Second);
    }

    #[test]
    fn test_neither_target_found() {
        let document = Html::parse_document(
            "<body><div id='root'>empty</div><p id='x'>x</p><p id='y'>y</p></body>",
        );
        let root = select_one(&document, "#root");
        let x = select_one(&document, "#x");
        let y = select_one(&document, "#y");

        assert_eq!(compare_element_order(root, x, y), ElementOrder::Undecided);
    }

    #[test]
    fn test_root_is_a_target() {
        let document = Html::parse_document("<body><div id='a'><p id='b'>b</p></div></body>");
        let a = select_one(&document, "#a");
        let b = select_one(&document, "#b");

        assert_eq!(compare_element_order(a, a, b), ElementOrder::First);
        assert_eq!(compare_element_order(a, b, a), ElementOrder::Second);
    }
}
