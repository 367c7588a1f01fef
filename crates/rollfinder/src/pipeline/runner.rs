use std::sync::Arc;

use tracing::{info, info_span, warn};

use crate::config::Config;
use crate::matcher::{prepare_targets, NameMatcher};
use crate::processor::{Document, PdfTextExtractor, TextExtractor};
use crate::worker::DocumentPool;

use super::config::PipelineConfig;
use super::context::{AnalysisOutcome, RunContext};
use super::error::EmptyInput;
use super::progress::{ProgressEvent, ProgressReporter};

/// One analysis: every target name against every document.
pub struct Pipeline {
    matcher: NameMatcher,
    pool: DocumentPool,
}

impl Pipeline {
    /// Production constructor, extracting with lopdf and the configured OCR
    /// fallback.
    pub fn from_config(config: &Config) -> Self {
        let pipeline_config = PipelineConfig::from_config(config);
        let extractor = PdfTextExtractor::from_config(&pipeline_config.ocr);
        Self::new(Arc::new(extractor), pipeline_config.worker_count)
    }

    /// Inject a specific extractor.
    pub fn new(extractor: Arc<dyn TextExtractor>, worker_count: usize) -> Self {
        Self {
            matcher: NameMatcher::new(extractor),
            pool: DocumentPool::new(worker_count),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.pool.worker_count()
    }

    /// Runs the analysis. Never fails as a whole: documents that cannot be
    /// opened end up in the outcome's failure list, and missing inputs halt
    /// the run before any document is touched.
    pub fn run<S: AsRef<str>>(
        &self,
        target_names: &[S],
        documents: &[Document],
        progress: &dyn ProgressReporter,
    ) -> AnalysisOutcome {
        if documents.is_empty() {
            warn!("No documents supplied, nothing to analyze");
            return AnalysisOutcome::EmptyInputs(EmptyInput::NoDocuments);
        }
        if target_names.iter().all(|name| name.as_ref().trim().is_empty()) {
            warn!("No target names supplied, nothing to analyze");
            return AnalysisOutcome::EmptyInputs(EmptyInput::NoNames);
        }

        let mut ctx = RunContext::new(prepare_targets(target_names));
        // Blank entries stay in the target list but are never searched for.
        let names = ctx
            .targets
            .iter()
            .filter(|target| !target.normalized().is_empty())
            .count();

        let _span = info_span!(
            "pipeline",
            documents = documents.len(),
            names,
            workers = self.pool.worker_count(),
        )
        .entered();

        progress.report(ProgressEvent::Started {
            documents: documents.len(),
            names,
        });

        let results = self
            .pool
            .run(&self.matcher, documents, &ctx.targets, progress);

        for (document, result) in documents.iter().zip(results) {
            match result {
                Ok(matches) => ctx.add_matches(matches),
                Err(e) => {
                    warn!(document = %document.label, error = %e, "Skipping document");
                    ctx.add_failure(&document.label, e.to_string());
                }
            }
        }

        let outcome = ctx.into_outcome();
        let records = outcome.table().map_or(0, |table| table.len());

        info!(
            records,
            failures = outcome.failures().len(),
            "Analysis finished"
        );
        progress.report(ProgressEvent::Finished { records });

        outcome
    }
}
