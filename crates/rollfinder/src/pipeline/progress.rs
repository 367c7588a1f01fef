/// Events emitted while an analysis runs. With more than one worker, the
/// per-document events of different documents interleave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started {
        documents: usize,
        /// Target names left after dropping blank ones.
        names: usize,
    },
    DocumentStarted {
        label: String,
    },
    DocumentFinished {
        label: String,
        matched: usize,
        ocr_pages: usize,
    },
    DocumentFailed {
        label: String,
        error: String,
    },
    Finished {
        records: usize,
    },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}
