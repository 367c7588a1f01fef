//! Temp-directory harness for running analyses over files on disk.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rollfinder::Document;

use super::builders::PdfBuilder;

pub struct TestHarness {
    temp_dir: TempDir,
    documents: Vec<PathBuf>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            documents: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes a built PDF and remembers it as an input document.
    pub fn add_pdf(&mut self, name: &str, builder: PdfBuilder) -> PathBuf {
        self.add_document(name, &builder.build())
    }

    /// Writes raw bytes and remembers them as an input document.
    pub fn add_document(&mut self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.write_file(name, bytes);
        self.documents.push(path.clone());
        path
    }

    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn document_paths(&self) -> &[PathBuf] {
        &self.documents
    }

    /// Reads every added document back, labelled by file name.
    pub fn load_documents(&self) -> Vec<Document> {
        self.documents
            .iter()
            .map(|path| Document::from_path(path).expect("Failed to read test document"))
            .collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
