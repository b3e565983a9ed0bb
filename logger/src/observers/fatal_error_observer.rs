use std::{
    cell::RefCell,
    io::{self, Stderr, Write},
    path::{Path, PathBuf},
};

use crate::{LogObserver, Severity};

use super::{append_or_report, write_console};

/// Reports fatal errors on the console, then appends them to a file.
///
/// The console line is always written, whether or not the file can be opened.
pub struct FatalErrorObserver<W = Stderr> {
    path: PathBuf,
    console: RefCell<W>,
}

impl FatalErrorObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_console(path, io::stderr())
    }
}

impl<W: Write> FatalErrorObserver<W> {
    pub fn with_console(path: impl Into<PathBuf>, console: W) -> Self {
        FatalErrorObserver {
            path: path.into(),
            console: RefCell::new(console),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<W: Write> LogObserver for FatalErrorObserver<W> {
    fn on_fatal_error(&self, message: &str) {
        let line = Severity::FatalError.line(message);
        write_console(&self.console, &line);
        append_or_report(&self.path, &line, &self.console);
    }
}
