use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollfinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte stream is not a PDF lopdf can open. The document contributes
    /// no text; the run carries on with the remaining documents.
    #[error("Failed to open PDF: {0}")]
    DocumentOpen(String),

    #[error("Failed to render page: {0}")]
    Render(String),

    #[error("OCR failed: {0}")]
    OcrFailed(String),

    #[error("Worker failed: {0}")]
    Worker(String),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read name list '{path}': {source}")]
    ReadNames {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed name table at line {line}: {reason}")]
    Csv { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, RollfinderError>;
