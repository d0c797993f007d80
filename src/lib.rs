// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ylint - Structural Accessibility Linter for Static HTML
//!
//! Parses HTML files into a read-only tree, runs a set of accessibility
//! rules over each document, and reports diagnostics in text, JSON, or
//! SARIF form. Its distinguishing subsystem is landmark detection:
//! locating a document's primary content and primary navigation regions
//! even when no authoritative landmark element exists, and verifying that
//! the regions appear in an accessibility-correct structural order.
//!
//! ## Rules
//!
//! - **Structure** (1.3.1/1.3.2): landmark presence and ordering
//! - **Images** (1.1.1): image alternative text
//! - **Links** (2.4.4): link purpose from link text
//! - **Forms** (3.3.2): input labelling
//! - **Semantics** (1.3.1): div/span structural misuse
//! - **Metadata** (2.4.2/1.4.4/3.1.1): title, viewport zoom, language
//! - **Focus** (2.4.3): positive tabindex
//! - **Frames** (4.1.2): frame titles

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod landmarks;
pub mod report;
pub mod rules;
pub mod scanner;
