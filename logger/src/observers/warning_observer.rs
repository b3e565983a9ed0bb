use std::{
    cell::RefCell,
    io::{self, Stdout, Write},
};

use crate::{LogObserver, Severity};

use super::write_console;

/// Prints warnings on the console.
pub struct WarningObserver<W = Stdout> {
    out: RefCell<W>,
}

impl WarningObserver {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for WarningObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WarningObserver<W> {
    pub fn with_writer(out: W) -> Self {
        WarningObserver {
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> LogObserver for WarningObserver<W> {
    fn on_warning(&self, message: &str) {
        write_console(&self.out, &Severity::Warning.line(message));
    }
}
