use std::rc::{Rc, Weak};

use log::trace;

/// A source of notifications holding non-owning references to its observers.
pub trait Subject<O: ?Sized> {
    fn register_observer(&mut self, observer: Weak<O>);
    fn unregister_observer(&mut self, observer: &Weak<O>);
}

/// Ordered collection of weak observer references.
///
/// Entries are kept in registration order and may repeat. An entry whose
/// observer has been dropped stays in place and is skipped by [`Observers::live`].
pub struct Observers<O: ?Sized> {
    entries: Vec<Weak<O>>,
}

impl<O: ?Sized> Default for Observers<O> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
        }
    }
}

impl<O: ?Sized> Observers<O> {
    pub fn push(&mut self, observer: Weak<O>) {
        self.entries.push(observer);
        trace!("Observer registered, {} entries", self.entries.len());
    }

    /// Removes every entry pointing to the same allocation as `observer`.
    pub fn remove(&mut self, observer: &Weak<O>) {
        let before = self.entries.len();
        self.entries.retain(|obs| !Weak::ptr_eq(obs, observer));
        trace!(
            "Observer unregistered, {} of {before} entries removed",
            before - self.entries.len()
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Weak<O>] {
        &self.entries
    }

    /// Upgrades each entry in order, skipping the ones that are no longer alive.
    pub fn live(&self) -> impl Iterator<Item = Rc<O>> + '_ {
        self.entries.iter().filter_map(Weak::upgrade)
    }
}
