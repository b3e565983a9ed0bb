mod error_observer;
mod fatal_error_observer;
mod warning_observer;

pub use error_observer::ErrorObserver;
pub use fatal_error_observer::FatalErrorObserver;
pub use warning_observer::WarningObserver;

use std::{cell::RefCell, io::Write, path::Path};

use log::{error, trace, warn};

use crate::sink::{append_line, SinkError};

fn write_console<W: Write>(console: &RefCell<W>, line: &str) {
    let mut console = console.borrow_mut();
    if let Err(err) = writeln!(console, "{line}").and_then(|_| console.flush()) {
        warn!("Console write failed: {err}");
    }
}

/// Appends `line` to `path`, reporting an unopenable file on `diagnostics`.
fn append_or_report<W: Write>(path: &Path, line: &str, diagnostics: &RefCell<W>) {
    match append_line(path, line) {
        Ok(()) => trace!("Appended to {}", path.display()),
        Err(err @ SinkError::Open { .. }) => write_console(diagnostics, &err.to_string()),
        Err(err @ SinkError::Write { .. }) => error!("{err}"),
    }
}
