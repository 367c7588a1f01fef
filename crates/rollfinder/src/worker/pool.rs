use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info};
use tracing::Span;

use crate::error::ProcessError;
use crate::matcher::{DocumentMatches, NameMatcher, TargetName};
use crate::pipeline::progress::{ProgressEvent, ProgressReporter};
use crate::processor::Document;

type DocumentResult = Result<DocumentMatches, ProcessError>;

/// Fans per-document extraction and matching out over a fixed number of
/// scoped worker threads. Results come back in document order whatever order
/// the workers finish in.
pub struct DocumentPool {
    worker_count: usize,
}

impl DocumentPool {
    /// A `worker_count` of 0 is treated as 1.
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn run(
        &self,
        matcher: &NameMatcher,
        documents: &[Document],
        targets: &[TargetName],
        progress: &dyn ProgressReporter,
    ) -> Vec<DocumentResult> {
        let parent = Span::current();
        let workers = self.worker_count.min(documents.len());

        if workers <= 1 {
            return documents
                .iter()
                .map(|document| match_one(&parent, matcher, document, targets, progress))
                .collect();
        }

        let (job_sender, job_receiver) = bounded::<usize>(workers * 2);
        let (result_sender, result_receiver) = bounded::<(usize, DocumentResult)>(workers * 2);
        let mut results: Vec<Option<DocumentResult>> = documents.iter().map(|_| None).collect();

        info!("Starting {} workers for {} documents", workers, documents.len());

        thread::scope(|scope| {
            for worker_id in 0..workers {
                let job_rx = job_receiver.clone();
                let result_tx = result_sender.clone();
                let parent = &parent;

                scope.spawn(move || {
                    run_worker(
                        worker_id, job_rx, result_tx, parent, matcher, documents, targets,
                        progress,
                    );
                });
            }

            // Workers hold the remaining handles; the result channel closes
            // once the last of them exits.
            drop(job_receiver);
            drop(result_sender);

            scope.spawn(move || {
                for index in 0..documents.len() {
                    if job_sender.send(index).is_err() {
                        break;
                    }
                }
            });

            for (index, result) in result_receiver.iter() {
                results[index] = Some(result);
            }
        });

        results
            .into_iter()
            .zip(documents)
            .map(|(result, document)| {
                result.unwrap_or_else(|| {
                    Err(ProcessError::Worker(format!(
                        "no result for '{}'",
                        document.label
                    )))
                })
            })
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn run_worker(
    worker_id: usize,
    job_receiver: Receiver<usize>,
    result_sender: Sender<(usize, DocumentResult)>,
    parent: &Span,
    matcher: &NameMatcher,
    documents: &[Document],
    targets: &[TargetName],
    progress: &dyn ProgressReporter,
) {
    debug!("Worker {} started", worker_id);

    for index in job_receiver.iter() {
        let result = match_one(parent, matcher, &documents[index], targets, progress);
        if result_sender.send((index, result)).is_err() {
            debug!("Worker {} result channel closed", worker_id);
            break;
        }
    }

    debug!("Worker {} stopped", worker_id);
}

fn match_one(
    parent: &Span,
    matcher: &NameMatcher,
    document: &Document,
    targets: &[TargetName],
    progress: &dyn ProgressReporter,
) -> DocumentResult {
    let _span = tracing::info_span!(parent: parent, "process_document", document = %document.label)
        .entered();

    progress.report(ProgressEvent::DocumentStarted {
        label: document.label.clone(),
    });

    let result = matcher.match_document(document, targets);

    match &result {
        Ok(matches) => progress.report(ProgressEvent::DocumentFinished {
            label: document.label.clone(),
            matched: matches.names.len(),
            ocr_pages: matches.ocr_pages,
        }),
        Err(e) => progress.report(ProgressEvent::DocumentFailed {
            label: document.label.clone(),
            error: e.to_string(),
        }),
    }

    result
}
