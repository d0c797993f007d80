// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules run against a parsed document.
//!
//! Each rule module focuses on a group of related WCAG criteria:
//!
//! - **structure** (1.3.1/1.3.2): landmark presence and ordering
//! - **images** (1.1.1): image alternative text
//! - **links** (2.4.4): link purpose from link text
//! - **forms** (3.3.2): input labelling
//! - **semantics** (1.3.1): div/span structural misuse
//! - **metadata** (2.4.2/1.4.4/3.1.1): title, viewport, language
//! - **focus** (2.4.3): tabindex ordering
//! - **frames** (4.1.2): frame titles
//!
//! The document is parsed once per file by the caller; rules never
//! re-parse.

pub mod focus;
pub mod forms;
pub mod frames;
pub mod images;
pub mod links;
pub mod metadata;
pub mod semantics;
pub mod structure;

use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticSet};
use scraper::Html;
use std::path::Path;

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Stable rule identifier (prefix of its diagnostic ids)
    fn id(&self) -> &str;

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    /// Whether the rule is enabled under the given configuration
    fn enabled(&self, _config: &Config) -> bool {
        true
    }

    /// Check a parsed document and return diagnostics
    fn check(&self, document: &Html, source: &str, path: &Path) -> Vec<Diagnostic>;
}

/// All rules, in the order they run
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(structure::StructureRule),
        Box::new(images::ImageRule),
        Box::new(links::LinkRule),
        Box::new(forms::FormRule),
        Box::new(semantics::SemanticsRule),
        Box::new(metadata::MetadataRule),
        Box::new(focus::FocusRule),
        Box::new(frames::FrameRule),
    ]
}

/// Run every enabled rule against a document, capping the result at the
/// configured problem limit.
pub fn check_document(
    document: &Html,
    source: &str,
    path: &Path,
    config: &Config,
) -> DiagnosticSet {
    let mut set = DiagnosticSet::new();

    for rule in all_rules() {
        if !rule.enabled(config) {
            continue;
        }
        for diagnostic in rule.check(document, source, path) {
            if set.len() >= config.max_problems {
                return set;
            }
            set.push(diagnostic);
        }
    }

    set
}

/// Best-effort line location of a textual needle in the source,
/// case-insensitive, 1-indexed. Diagnostics omit the line when the
/// construct cannot be located.
pub(crate) fn find_line(source: &str, needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    source
        .lines()
        .position(|line| line.to_lowercase().contains(&needle))
        .map(|idx| idx + 1)
}
