pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod runner;

pub use config::PipelineConfig;
pub use context::{AnalysisOutcome, RunContext};
pub use error::{DocumentFailure, EmptyInput};
pub use progress::{NoopProgress, ProgressEvent, ProgressReporter};
pub use runner::Pipeline;
