//! In-memory entity manager
//!
//! Keeps the latest snapshot of every persisted enclosure and counts calls.
//! Nothing ever reaches the disk.

use std::cell::{Cell, RefCell};

use crate::domain::entities::Enclosure;
use crate::domain::ports::{EntityManager, PersistResult};
use crate::domain::value_objects::EnclosureId;

#[derive(Debug, Default)]
pub struct InMemoryEntityManager {
    snapshots: RefCell<Vec<Enclosure>>,
    persist_calls: Cell<usize>,
    flush_calls: Cell<usize>,
}

impl InMemoryEntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot of every persisted enclosure, in first-persist order
    pub fn snapshots(&self) -> Vec<Enclosure> {
        self.snapshots.borrow().clone()
    }

    pub fn get(&self, id: EnclosureId) -> Option<Enclosure> {
        self.snapshots.borrow().iter().find(|e| e.id() == id).cloned()
    }

    pub fn persist_calls(&self) -> usize {
        self.persist_calls.get()
    }

    pub fn flush_calls(&self) -> usize {
        self.flush_calls.get()
    }
}

impl EntityManager for InMemoryEntityManager {
    fn persist(&self, enclosure: &Enclosure) -> PersistResult<()> {
        self.persist_calls.set(self.persist_calls.get() + 1);

        let mut snapshots = self.snapshots.borrow_mut();
        match snapshots.iter_mut().find(|e| e.id() == enclosure.id()) {
            Some(existing) => *existing = enclosure.clone(),
            None => snapshots.push(enclosure.clone()),
        }
        Ok(())
    }

    fn flush(&self) -> PersistResult<()> {
        self.flush_calls.set(self.flush_calls.get() + 1);
        Ok(())
    }
}
