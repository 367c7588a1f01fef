//! Shared test utilities for rollfinder integration tests.
//!
//! - `PdfBuilder` writes small real PDFs with lopdf
//! - `TestHarness` keeps those PDFs and name lists in a temp directory
//! - `FakeRecognizer` stands in for the OCR engines

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
