pub mod config;
pub mod error;
pub mod matcher;
pub mod names;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod text;
pub mod worker;

pub use config::{load_config, load_config_or_default, Config, OcrConfig};
pub use error::{ConfigError, InputError, ProcessError, Result, RollfinderError};
pub use matcher::{NameMatcher, TargetName};
pub use names::{load_names, parse_names, NameListFormat};
pub use pipeline::{AnalysisOutcome, EmptyInput, Pipeline, ProgressEvent, ProgressReporter};
pub use processor::{Document, PdfTextExtractor, TextExtractor};
pub use report::{summarize, ResultTable, SummaryView};
