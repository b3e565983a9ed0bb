use strum::{Display, EnumIter};

mod logger;
pub mod observers;
pub mod sink;

pub use logger::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Severity {
    #[strum(to_string = "Warning")]
    Warning,
    #[strum(to_string = "Error")]
    Error,
    #[strum(to_string = "Fatal Error")]
    FatalError,
}

impl Severity {
    /// Line written by the observers for this severity, without terminator.
    pub fn line(&self, message: &str) -> String {
        format!("{self}: {message}")
    }
}

/// Receiver of [`Logger`] notifications.
///
/// Every handler is a no-op unless overridden, so an observer only implements
/// the severities it cares about.
pub trait LogObserver {
    fn on_warning(&self, _message: &str) {}

    fn on_error(&self, _message: &str) {}

    fn on_fatal_error(&self, _message: &str) {}

    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => self.on_warning(message),
            Severity::Error => self.on_error(message),
            Severity::FatalError => self.on_fatal_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use strum::IntoEnumIterator;

    use crate::{LogObserver, Severity};

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl LogObserver for Recorder {
        fn on_warning(&self, message: &str) {
            self.calls.borrow_mut().push(format!("warning:{message}"));
        }

        fn on_fatal_error(&self, message: &str) {
            self.calls.borrow_mut().push(format!("fatal:{message}"));
        }
    }

    struct Silent;

    impl LogObserver for Silent {}

    #[test]
    fn test_severity_line() {
        assert_eq!("Warning: hello", Severity::Warning.line("hello"));
        assert_eq!("Error: boom", Severity::Error.line("boom"));
        assert_eq!("Fatal Error: die", Severity::FatalError.line("die"));
    }

    #[test]
    fn test_notify_should_route_to_matching_handler() {
        // Given
        let recorder = Recorder::default();

        // When
        for severity in Severity::iter() {
            recorder.notify(severity, "m");
        }

        // Then
        assert_eq!(
            vec!["warning:m".to_string(), "fatal:m".to_string()],
            *recorder.calls.borrow(),
            "Handlers left unimplemented should do nothing"
        );
    }

    #[test]
    fn test_default_handlers_are_noop() {
        let silent = Silent;
        for severity in Severity::iter() {
            silent.notify(severity, "ignored");
        }
    }
}
