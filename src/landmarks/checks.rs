// SPDX-License-Identifier: PMPL-1.0-or-later
//! Order-invariant predicates over detected landmarks.

use super::order::{compare_element_order, ElementOrder};
use super::{body_element, element_children};
use scraper::{ElementRef, Html};

/// Whether the navigation landmark is encountered before the content
/// landmark in document order, searching from the body. Returns `false`
/// when the document has no body.
pub fn is_nav_before_main(
    document: &Html,
    main: ElementRef<'_>,
    nav: ElementRef<'_>,
) -> bool {
    match body_element(document) {
        Some(body) => compare_element_order(body, nav, main) == ElementOrder::First,
        None => false,
    }
}

/// Whether the content landmark appears first among the body's direct
/// children. One preceding sibling is tolerated when `nav_exists` is true,
/// allowing a navigation bar ahead of the content.
///
/// Returns `true` when `main` is absent, the body is missing, or `main` is
/// not a direct child of the body: with nothing to evaluate the check must
/// not trigger a diagnostic.
pub fn is_main_first(document: &Html, main: Option<ElementRef<'_>>, nav_exists: bool) -> bool {
    let Some(main) = main else {
        return true;
    };
    let Some(body) = body_element(document) else {
        return true;
    };

    match element_children(body).position(|child| child == main) {
        Some(index) => index == 0 || (nav_exists && index <= 1),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn select_one<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().expect("element present")
    }

    #[test]
    fn test_nav_before_main() {
        let document = Html::parse_document(concat!(
            "<body>",
            "<header>h</header>",
            "<nav id='n'><a href='/a'>aa</a><a href='/b'>bb</a><a href='/c'>cc</a></nav>",
            "<main id='m'>content</main>",
            "<footer>f</footer>",
            "</body>",
        ));
        let main = select_one(&document, "#m");
        let nav = select_one(&document, "#n");

        assert!(is_nav_before_main(&document, main, nav));
        // header pushes main to index 2, past the one sibling allowed for nav
        assert!(!is_main_first(&document, Some(main), true));
    }

    #[test]
    fn test_nav_after_main() {
        let document = Html::parse_document(
            "<body><main id='m'>content</main><nav id='n'>links</nav></body>",
        );
        let main = select_one(&document, "#m");
        let nav = select_one(&document, "#n");

        assert!(!is_nav_before_main(&document, main, nav));
    }

    #[test]
    fn test_main_first_at_index_zero() {
        let document = Html::parse_document("<body><main id='m'>content</main></body>");
        let main = select_one(&document, "#m");

        assert!(is_main_first(&document, Some(main), false));
    }

    #[test]
    fn test_main_second_with_nav() {
        let document = Html::parse_document(
            "<body><nav id='n'>links</nav><main id='m'>content</main></body>",
        );
        let main = select_one(&document, "#m");

        assert!(is_main_first(&document, Some(main), true));
        assert!(!is_main_first(&document, Some(main), false));
    }

    #[test]
    fn test_main_third_without_nav() {
        let document = Html::parse_document(
            "<body><header>h</header><aside>side</aside><main id='m'>content</main></body>",
        );
        let main = select_one(&document, "#m");

        assert!(!is_main_first(&document, Some(main), false));
    }

    #[test]
    fn test_absent_main_does_not_flag() {
        let document = Html::parse_document("<body><p>text</p></body>");
        assert!(is_main_first(&document, None, false));
        assert!(is_main_first(&document, None, true));
    }

    #[test]
    fn test_nested_main_does_not_flag() {
        // main detected deeper in the tree is not a direct body child;
        // the sibling-index check abstains
        let document = Html::parse_document(
            "<body><div><main id='m'>content</main></div></body>",
        );
        let main = select_one(&document, "#m");
        assert!(is_main_first(&document, Some(main), false));
    }
}
