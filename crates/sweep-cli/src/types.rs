//! Result types for the convert batch.

use std::path::PathBuf;

/// Outcome of processing one input file.
#[derive(Debug)]
pub struct FileSummary {
    pub input: PathBuf,
    /// Output path; `None` when the file failed before output naming.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    /// Whether the output bytes were written (false on dry runs).
    pub written: bool,
    pub error: Option<String>,
}

impl FileSummary {
    pub fn failed(input: PathBuf, error: impl ToString) -> Self {
        Self {
            input,
            output: None,
            rows: 0,
            columns: 0,
            written: false,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of a whole `convert` invocation.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub files: Vec<FileSummary>,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }
}
