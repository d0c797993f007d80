// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running accessibility rules across a project.
//!
//! Walks directory trees, identifies HTML files, parses each one once,
//! and feeds the parsed document to the rule engine.

use crate::config::Config;
use crate::diagnostics::DiagnosticSet;
use crate::error::Result;
use crate::rules;
use scraper::Html;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Scan a single HTML file
pub fn scan_file(path: &Path, config: &Config) -> Result<DiagnosticSet> {
    let content = std::fs::read_to_string(path)?;
    let document = Html::parse_document(&content);
    Ok(rules::check_document(&document, &content, path, config))
}

/// Scan a directory tree for accessibility issues
pub fn scan_directory(dir: &Path, config: &Config) -> Result<DiagnosticSet> {
    let mut all_diagnostics = DiagnosticSet::new();
    let mut files_scanned = 0;

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() {
                return !config.exclude.iter().any(|ex| ex == name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SCANNABLE_EXTENSIONS.contains(&ext) {
            continue;
        }

        match scan_file(path, config) {
            Ok(diagnostics) => {
                all_diagnostics.extend(diagnostics.diagnostics);
                files_scanned += 1;
            }
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
            }
        }
    }

    info!(
        "Scanned {} files, found {} issues",
        files_scanned,
        all_diagnostics.len()
    );

    Ok(all_diagnostics)
}
