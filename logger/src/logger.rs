use std::rc::{Rc, Weak};

use common::subject_observer::{Observers, Subject};
use log::debug;

use crate::{LogObserver, Severity};

/// Subject dispatching warnings, errors and fatal errors to its observers.
///
/// The logger only keeps weak references: callers own their observers and
/// must keep them alive for as long as they expect notifications. Entries
/// whose observer was dropped are skipped silently.
///
/// Notifying takes `&self` while registration takes `&mut self`, so an
/// observer cannot (de)register itself during a notification. Wrapping the
/// logger in a `RefCell` to work around this panics on the re-entrant borrow
/// and is not supported.
#[derive(Default)]
pub struct Logger {
    observers: Observers<dyn LogObserver>,
}

impl Subject<dyn LogObserver> for Logger {
    fn register_observer(&mut self, observer: Weak<dyn LogObserver>) {
        self.observers.push(observer);
    }

    fn unregister_observer(&mut self, observer: &Weak<dyn LogObserver>) {
        self.observers.remove(observer);
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer<O>(&mut self, observer: &Rc<O>)
    where
        O: LogObserver + 'static,
    {
        let observer = Rc::downgrade(observer) as Weak<dyn LogObserver>;
        self.register_observer(observer);
    }

    pub fn remove_observer<O>(&mut self, observer: &Rc<O>)
    where
        O: LogObserver + 'static,
    {
        let observer = Rc::downgrade(observer) as Weak<dyn LogObserver>;
        self.unregister_observer(&observer);
    }

    /// Number of registered entries, including the ones no longer alive.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn warning(&self, message: &str) {
        self.notify_observers(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.notify_observers(Severity::Error, message);
    }

    pub fn fatal_error(&self, message: &str) {
        self.notify_observers(Severity::FatalError, message);
    }

    pub fn notify_observers(&self, severity: Severity, message: &str) {
        debug!(
            "Notifying {} observer entries of {severity}",
            self.observers.len()
        );
        for observer in self.observers.live() {
            observer.notify(severity, message);
        }
    }
}
