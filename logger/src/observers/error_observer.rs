use std::{
    cell::RefCell,
    io::{self, Stderr, Write},
    path::{Path, PathBuf},
};

use crate::{LogObserver, Severity};

use super::append_or_report;

/// Appends errors to a file.
///
/// When the file cannot be opened a diagnostic is written to `diagnostics`
/// (standard error by default) and the error is dropped.
pub struct ErrorObserver<W = Stderr> {
    path: PathBuf,
    diagnostics: RefCell<W>,
}

impl ErrorObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_diagnostics(path, io::stderr())
    }
}

impl<W: Write> ErrorObserver<W> {
    pub fn with_diagnostics(path: impl Into<PathBuf>, diagnostics: W) -> Self {
        ErrorObserver {
            path: path.into(),
            diagnostics: RefCell::new(diagnostics),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<W: Write> LogObserver for ErrorObserver<W> {
    fn on_error(&self, message: &str) {
        append_or_report(&self.path, &Severity::Error.line(message), &self.diagnostics);
    }
}
