//! Export highlighted text from a JSON document fixture
//!
//! Reads a document in the `MemoryDocument` JSON format and prints every
//! highlight as JSON. With `--highlight`, stamps the first occurrence of
//! the given text instead and writes the updated document back. With
//! `--locate`, prints the regions enclosing the text, honouring the
//! configured locate mode.
//!
//! Usage:
//!   cargo run --bin export_highlights -- document.json
//!   cargo run --bin export_highlights -- document.json --highlight "quick brown"
//!   cargo run --bin export_highlights -- document.json --config '{"tolerance": 1.0}'
//!   cargo run --bin export_highlights -- document.json --locate fox --config '{"locate_mode": "all"}'
//!   cargo run --bin export_highlights -- document.json --highlight fox --output out.json

use pdf_highlights::memory::MemoryDocument;
use pdf_highlights::{Highlighter, ReconcileConfig, Result};
use std::path::{Path, PathBuf};

struct ExportConfig {
    document: Option<PathBuf>,
    output: Option<PathBuf>,
    highlight: Option<String>,
    locate: Option<String>,
    config_json: Option<String>,
    verbose: bool,
}

impl ExportConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self {
            document: None,
            output: None,
            highlight: None,
            locate: None,
            config_json: None,
            verbose: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--highlight" => {
                    i += 1;
                    config.highlight = args.get(i).cloned();
                },
                "--locate" => {
                    i += 1;
                    config.locate = args.get(i).cloned();
                },
                "--config" => {
                    i += 1;
                    config.config_json = args.get(i).cloned();
                },
                "--output" | "-o" => {
                    i += 1;
                    config.output = args.get(i).map(PathBuf::from);
                },
                "--verbose" | "-v" => {
                    config.verbose = true;
                },
                other => {
                    if config.document.is_none() {
                        config.document = Some(PathBuf::from(other));
                    }
                },
            }
            i += 1;
        }

        config
    }
}

fn run(config: &ExportConfig, document: &Path) -> Result<()> {
    let reconcile = match &config.config_json {
        Some(json) => ReconcileConfig::from_json(json)?,
        None => ReconcileConfig::default(),
    };
    let highlighter = Highlighter::with_config(reconcile)?;
    let mut doc = MemoryDocument::open(document)?;

    if config.verbose {
        eprintln!("Loaded {} ({} pages)", document.display(), doc.pages.len());
    }

    if let Some(target) = &config.locate {
        let regions = highlighter.locate_text(&doc, target)?;
        if config.verbose {
            eprintln!("Found {} regions", regions.len());
        }
        println!("{}", serde_json::to_string_pretty(&regions)?);
        return Ok(());
    }

    match &config.highlight {
        Some(target) => {
            let added = highlighter.highlight_text(&mut doc, target)?;
            if added {
                let output = config.output.as_deref().unwrap_or(document);
                doc.save(output)?;
                if config.verbose {
                    eprintln!("Wrote {}", output.display());
                }
            }
            println!("{}", serde_json::json!({ "highlighted": added }));
        },
        None => {
            let records = highlighter.extract_highlights(&doc)?;
            if config.verbose {
                eprintln!("Found {} highlights", records.len());
            }
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
        },
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let config = ExportConfig::from_args();
    let Some(document) = config.document.clone() else {
        eprintln!("Usage: export_highlights <document.json> [--highlight TEXT | --locate TEXT] [--config JSON] [--output PATH] [--verbose]");
        std::process::exit(2);
    };

    if let Err(e) = run(&config, &document) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
