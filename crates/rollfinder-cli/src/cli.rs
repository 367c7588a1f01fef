use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Find which student names appear in which PDF documents.
#[derive(Debug, Parser)]
#[command(name = "rollfinder", about, version)]
pub struct Cli {
    /// Path to a JSON config file. Default: the user config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the PDFs for every name in the list
    Analyze {
        #[command(flatten)]
        names: NamesSource,

        /// PDF documents to search
        #[arg(value_name = "PDF")]
        documents: Vec<PathBuf>,

        /// Write the result table as CSV to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the summary (per-document counts, found/not found) as JSON
        #[arg(long, value_name = "FILE")]
        summary_json: Option<PathBuf>,

        /// Worker threads. 0 means one per CPU. Overrides the config file
        #[arg(long, value_name = "N")]
        workers: Option<usize>,

        /// Disable the OCR fallback for pages without a text layer
        #[arg(long)]
        no_ocr: bool,
    },
}

/// Where the list of names comes from. Exactly one is required.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct NamesSource {
    /// Comma-separated table without header; names in the first column
    #[arg(long, value_name = "FILE")]
    pub names_csv: Option<PathBuf>,

    /// Plain text, one name per line
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Read names from stdin, one per line
    #[arg(long)]
    pub names_stdin: bool,
}
