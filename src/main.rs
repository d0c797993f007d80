// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ylint CLI - Structural Accessibility Linter for Static HTML

use a11ylint::config::{self, Config};
use a11ylint::landmarks::{
    detect_main_content, detect_navigation_content, is_main_first, is_nav_before_main,
};
use a11ylint::report::{generate_report, OutputFormat};
use a11ylint::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use scraper::{ElementRef, Html};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Structural accessibility linter for static HTML
#[derive(Parser)]
#[command(name = "a11ylint")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all accessibility checks on a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum diagnostics per document
        #[arg(long)]
        max_problems: Option<usize>,

        /// Disable the semantic-markup rule
        #[arg(long)]
        skip_semantic: bool,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze a single file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum diagnostics per document
        #[arg(long)]
        max_problems: Option<usize>,

        /// Disable the semantic-markup rule
        #[arg(long)]
        skip_semantic: bool,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Show what the landmark detectors find in a file
    Landmarks {
        /// File to inspect
        file: PathBuf,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write a default configuration file
    Init {
        /// Config file path
        #[arg(long)]
        path: Option<PathBuf>,

        /// Write TOML instead of YAML
        #[arg(long)]
        toml: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11ylint=debug")
    } else {
        EnvFilter::new("a11ylint=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_effective_config(
    path: Option<&Path>,
    max_problems: Option<usize>,
    skip_semantic: bool,
) -> anyhow::Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config::default_config_path);
    let mut config = config::load_config(&path)?;
    if let Some(max) = max_problems {
        config.max_problems = max;
    }
    if skip_semantic {
        config.semantic_exclude = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { dir, format, output, config, max_problems, skip_semantic, verbose } => {
            init_logging(verbose);
            let config = load_effective_config(config.as_deref(), max_problems, skip_semantic)?;
            let diagnostics = scanner::scan_directory(&dir, &config)?;
            let report = generate_report(&diagnostics, format.into());
            write_output(&report, output.as_deref())?;

            if diagnostics.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Analyze { file, format, config, max_problems, skip_semantic, verbose } => {
            init_logging(verbose);
            let config = load_effective_config(config.as_deref(), max_problems, skip_semantic)?;
            let diagnostics = scanner::scan_file(&file, &config)?;
            let report = generate_report(&diagnostics, format.into());
            println!("{}", report);

            if diagnostics.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Landmarks { file, verbose } => {
            init_logging(verbose);
            let content = std::fs::read_to_string(&file)?;
            let document = Html::parse_document(&content);

            let main = detect_main_content(&document);
            let nav = detect_navigation_content(&document);

            println!("main: {}", describe(main));
            println!("nav:  {}", describe(nav));

            if let (Some(main), Some(nav)) = (main, nav) {
                println!("nav-before-main: {}", is_nav_before_main(&document, main, nav));
            }
            println!("main-first: {}", is_main_first(&document, main, nav.is_some()));
        }

        Commands::Init { path, toml } => {
            let path = path.unwrap_or_else(|| {
                if toml {
                    PathBuf::from("a11ylint.toml")
                } else {
                    config::default_config_path()
                }
            });
            config::write_default_config(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

/// Short description of a detected landmark for the landmarks subcommand
fn describe(element: Option<ElementRef<'_>>) -> String {
    match element {
        Some(el) => {
            let value = el.value();
            if let Some(id) = value.attr("id") {
                format!("<{} id=\"{}\">", value.name(), id)
            } else if let Some(class) = value.attr("class") {
                format!("<{} class=\"{}\">", value.name(), class)
            } else {
                format!("<{}>", value.name())
            }
        }
        None => "none".to_string(),
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
