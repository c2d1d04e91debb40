//! TOML Enclosure Store
//!
//! Persists enclosures to a single TOML file (`dinopark-store.toml` by
//! default). `persist` only stages a snapshot; `flush` merges every staged
//! snapshot into the file while holding an exclusive lock on a sibling
//! `.lock` file.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::entities::{AdmissionError, Dinosaur, Enclosure, Security};
use crate::domain::ports::{EntityManager, PersistError, PersistResult};
use crate::domain::value_objects::{Diet, EnclosureId};

const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSecurity {
    name: String,
    is_active: bool,
    enclosure: EnclosureId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlDinosaur {
    genus: String,
    diet: Diet,
    length: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlEnclosure {
    id: EnclosureId,
    persisted_at: DateTime<Utc>,
    #[serde(default)]
    securities: Vec<TomlSecurity>,
    #[serde(default)]
    dinosaurs: Vec<TomlDinosaur>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlStore {
    version: u32,
    #[serde(default)]
    enclosures: Vec<TomlEnclosure>,
}

impl Default for TomlStore {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            enclosures: Vec::new(),
        }
    }
}

pub struct TomlEnclosureStore {
    path: PathBuf,
    staged: RefCell<BTreeMap<EnclosureId, TomlEnclosure>>,
}

impl TomlEnclosureStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            staged: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of snapshots waiting for the next `flush`
    pub fn staged_count(&self) -> usize {
        self.staged.borrow().len()
    }

    /// Restore every stored enclosure.
    ///
    /// Records go back through the admission rules; a record that breaks
    /// them is reported as corruption.
    pub fn load_all(&self) -> PersistResult<Vec<Enclosure>> {
        let store = self.load_from_disk()?;

        store
            .enclosures
            .into_iter()
            .map(|record| {
                let id = record.id;
                from_toml(record).map_err(|e| PersistError::Corrupted {
                    path: self.path.clone(),
                    message: format!("enclosure {id}: {e}"),
                })
            })
            .collect()
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> PersistResult<TomlStore> {
        if !self.path.exists() {
            return Ok(TomlStore::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PersistError::Io {
            message: e.to_string(),
        })?;

        let store: TomlStore = toml::from_str(&content).map_err(|e| PersistError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if store.version != STORE_VERSION {
            return Err(PersistError::Corrupted {
                path: self.path.clone(),
                message: format!(
                    "unsupported store version {} (expected {STORE_VERSION})",
                    store.version
                ),
            });
        }

        Ok(store)
    }

    fn save_to_disk(&self, store: &TomlStore) -> PersistResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::Io {
                message: e.to_string(),
            })?;
        }

        let content =
            toml::to_string_pretty(store).map_err(|e| PersistError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| PersistError::Io {
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn merge_staged(&self) -> PersistResult<usize> {
        let mut store = self.load_from_disk()?;
        let staged = std::mem::take(&mut *self.staged.borrow_mut());
        let count = staged.len();

        for (id, record) in staged {
            match store.enclosures.iter_mut().find(|e| e.id == id) {
                Some(existing) => *existing = record,
                None => store.enclosures.push(record),
            }
        }

        self.save_to_disk(&store)?;
        Ok(count)
    }
}

impl EntityManager for TomlEnclosureStore {
    fn persist(&self, enclosure: &Enclosure) -> PersistResult<()> {
        debug!(
            enclosure = %enclosure.id(),
            store = %self.path.display(),
            "staging enclosure"
        );
        self.staged
            .borrow_mut()
            .insert(enclosure.id(), to_toml(enclosure, Utc::now()));
        Ok(())
    }

    fn flush(&self) -> PersistResult<()> {
        if self.staged.borrow().is_empty() {
            debug!(store = %self.path.display(), "nothing staged, skipping flush");
            return Ok(());
        }

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::Io {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| PersistError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;
        lock_file.lock_exclusive().map_err(|e| PersistError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;

        let result = self.merge_staged();

        let _ = lock_file.unlock();

        let count = result?;
        info!(count, store = %self.path.display(), "flushed enclosures");
        Ok(())
    }
}

fn to_toml(enclosure: &Enclosure, persisted_at: DateTime<Utc>) -> TomlEnclosure {
    TomlEnclosure {
        id: enclosure.id(),
        persisted_at,
        securities: enclosure
            .securities()
            .iter()
            .map(|s| TomlSecurity {
                name: s.name().to_string(),
                is_active: s.is_active(),
                enclosure: s.enclosure(),
            })
            .collect(),
        dinosaurs: enclosure
            .dinosaurs()
            .iter()
            .map(|d| TomlDinosaur {
                genus: d.genus().to_string(),
                diet: d.diet(),
                length: d.length(),
            })
            .collect(),
    }
}

fn from_toml(record: TomlEnclosure) -> Result<Enclosure, AdmissionError> {
    Enclosure::restore(
        record.id,
        record
            .securities
            .into_iter()
            .map(|s| Security::new(s.name, s.is_active, s.enclosure)),
        record
            .dinosaurs
            .into_iter()
            .map(|d| Dinosaur::new(d.genus, d.diet.is_carnivorous()).with_length(d.length)),
    )
}
