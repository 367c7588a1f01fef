use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use rollfinder::pipeline::DocumentFailure;
use rollfinder::{
    load_names, parse_names, summarize, AnalysisOutcome, Config, Document, NameListFormat,
    Pipeline, ProgressEvent, ProgressReporter, ResultTable, SummaryView,
};

use crate::cli::NamesSource;
use crate::render;

/// Exit code when names or documents are missing.
pub const EXIT_EMPTY_INPUTS: i32 = 2;

pub struct AnalyzeArgs<'a> {
    pub names: &'a NamesSource,
    pub documents: &'a [PathBuf],
    pub output: Option<&'a Path>,
    pub summary_json: Option<&'a Path>,
    pub workers: Option<usize>,
    pub no_ocr: bool,
}

/// Logs pipeline progress through `tracing`.
struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Started { documents, names } => {
                info!(documents, names, "Analysis started")
            }
            ProgressEvent::DocumentStarted { label } => info!(document = %label, "Reading"),
            ProgressEvent::DocumentFinished {
                label,
                matched,
                ocr_pages,
            } => info!(document = %label, matched, ocr_pages, "Done"),
            ProgressEvent::DocumentFailed { label, error } => {
                warn!(document = %label, %error, "Failed")
            }
            ProgressEvent::Finished { records } => info!(records, "Analysis finished"),
        }
    }
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    generated_at: DateTime<Utc>,
    total_names: usize,
    documents: usize,
    found: usize,
    not_found: usize,
    found_percent: f64,
    not_found_percent: f64,
    per_document: &'a [rollfinder::report::DocumentCount],
    failed_documents: Vec<&'a str>,
}

pub fn run(args: &AnalyzeArgs<'_>, mut config: Config) -> Result<(), i32> {
    if let Some(workers) = args.workers {
        config.worker_count = workers;
    }
    if args.no_ocr {
        config.ocr.enabled = false;
    }

    let names = read_names(args.names)?;
    let documents = read_documents(args.documents)?;

    for document in &documents {
        println!("Loaded {} ({} bytes)", document.label, document.bytes.len());
    }

    let pipeline = Pipeline::from_config(&config);
    let outcome = pipeline.run(&names, &documents, &LogProgress);

    let empty = ResultTable::default();
    let table = match &outcome {
        AnalysisOutcome::EmptyInputs(reason) => {
            eprintln!("Warning: {reason}. Nothing to analyze.");
            return Err(EXIT_EMPTY_INPUTS);
        }
        AnalysisOutcome::NoMatches { .. } => {
            println!("None of the names were found in the documents.");
            &empty
        }
        AnalysisOutcome::Matched { table, .. } => {
            let summary = summarize(table, names.len());
            println!();
            print!("{}", render::table(table));
            println!();
            print!("{}", render::bar_chart(&summary));
            println!();
            print!("{}", render::pie_chart(&summary));
            table
        }
    };

    report_failures(outcome.failures());

    if let Some(path) = args.output {
        write_file(path, &table.to_csv())?;
        println!("Results written to {}", path.display());
    }

    if let Some(path) = args.summary_json {
        let summary = summarize(table, names.len());
        let json = summary_json(&summary, names.len(), documents.len(), outcome.failures())?;
        write_file(path, &json)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}

fn read_names(source: &NamesSource) -> Result<Vec<String>, i32> {
    let loaded = if let Some(path) = &source.names_csv {
        load_names(path, NameListFormat::Table)
    } else if let Some(path) = &source.names {
        load_names(path, NameListFormat::Lines)
    } else {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            eprintln!("Error: failed to read names from stdin: {e}");
            1
        })?;
        parse_names(&text, NameListFormat::Lines)
    };

    loaded.map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

fn read_documents(paths: &[PathBuf]) -> Result<Vec<Document>, i32> {
    paths
        .iter()
        .map(|path| {
            Document::from_path(path).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })
        })
        .collect()
}

fn report_failures(failures: &[DocumentFailure]) {
    for failure in failures {
        eprintln!(
            "Warning: skipped {}: {}",
            failure.document, failure.error
        );
    }
}

fn summary_json(
    summary: &SummaryView,
    total_names: usize,
    documents: usize,
    failures: &[DocumentFailure],
) -> Result<String, i32> {
    let export = SummaryExport {
        generated_at: Utc::now(),
        total_names,
        documents,
        found: summary.found,
        not_found: summary.not_found,
        found_percent: summary.found_percent(),
        not_found_percent: summary.not_found_percent(),
        per_document: &summary.per_document,
        failed_documents: failures.iter().map(|f| f.document.as_str()).collect(),
    };

    serde_json::to_string_pretty(&export).map_err(|e| {
        eprintln!("Error: failed to encode summary: {e}");
        1
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), i32> {
    std::fs::write(path, contents).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", path.display());
        1
    })
}
