//! EntityManager port - where finished enclosures are handed over
//!
//! `persist` stages a snapshot of an enclosure; `flush` makes everything
//! staged durable. Persisting the same enclosure again replaces its staged
//! snapshot.

use std::path::PathBuf;

use crate::domain::entities::Enclosure;

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

pub trait EntityManager {
    /// Stage a snapshot of the enclosure as it is right now
    fn persist(&self, enclosure: &Enclosure) -> PersistResult<()>;

    /// Write every staged snapshot
    fn flush(&self) -> PersistResult<()>;
}

impl<T: EntityManager + ?Sized> EntityManager for &T {
    fn persist(&self, enclosure: &Enclosure) -> PersistResult<()> {
        (**self).persist(enclosure)
    }

    fn flush(&self) -> PersistResult<()> {
        (**self).flush()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PersistError {
    #[error("Failed to access enclosure store: {message}")]
    Io { message: String },

    #[error("Failed to serialize enclosure store: {message}")]
    Serialization { message: String },

    #[error("Failed to lock enclosure store {path}: {message}")]
    Lock { path: PathBuf, message: String },

    #[error(
        "enclosure store corrupted: {path}\n  → Fix: Delete the store and rebuild it\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records the dinosaur count of every persisted snapshot
    #[derive(Default)]
    struct RecordingManager {
        persisted: RefCell<Vec<usize>>,
        flushes: RefCell<usize>,
    }

    impl EntityManager for RecordingManager {
        fn persist(&self, enclosure: &Enclosure) -> PersistResult<()> {
            self.persisted.borrow_mut().push(enclosure.dinosaurs().len());
            Ok(())
        }

        fn flush(&self) -> PersistResult<()> {
            *self.flushes.borrow_mut() += 1;
            Ok(())
        }
    }

    fn persist_and_flush(manager: impl EntityManager, enclosure: &Enclosure) {
        manager.persist(enclosure).unwrap();
        manager.flush().unwrap();
    }

    #[test]
    fn reference_forwards_to_manager() {
        let manager = RecordingManager::default();
        persist_and_flush(&manager, &Enclosure::new());

        assert_eq!(*manager.persisted.borrow(), vec![0]);
        assert_eq!(*manager.flushes.borrow(), 1);
    }

    #[test]
    fn corrupted_error_mentions_path() {
        let err = PersistError::Corrupted {
            path: PathBuf::from("store.toml"),
            message: "bad toml".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("store.toml"));
        assert!(text.contains("bad toml"));
    }
}
