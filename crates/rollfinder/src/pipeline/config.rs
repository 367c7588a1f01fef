use crate::config::{Config, OcrConfig};

pub struct PipelineConfig {
    /// Resolved; always at least 1.
    pub worker_count: usize,
    pub ocr: OcrConfig,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            worker_count: config.effective_worker_count().max(1),
            ocr: config.ocr.clone(),
        }
    }
}
