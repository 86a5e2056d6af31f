//! User reading overrides.
//!
//! When the user corrects a reading, the host can record the choice here so
//! the same run resolves to the corrected reading on later conversions. Two
//! backends sit behind one enum:
//!
//! - `InMemory`: thread-safe map, used in tests and ephemeral sessions;
//! - `Redb`: persistent single-table store for overrides that must survive
//!   restarts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use redb::ReadableTable;

use crate::provider::ReadingProvider;

/// Thread-safe in-memory override store.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOverrides {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the reading the user chose for a run, replacing any previous
    /// choice.
    pub fn set(&self, run: &str, reading: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(run.to_string(), reading.to_string());
        }
    }

    pub fn get(&self, run: &str) -> Option<String> {
        self.inner.read().ok()?.get(run).cloned()
    }

    /// Drop the override for a run. Returns true if one existed.
    pub fn remove(&self, run: &str) -> bool {
        self.inner
            .write()
            .map(|mut map| map.remove(run).is_some())
            .unwrap_or(false)
    }

    /// Snapshot of the current overrides.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.inner.read().map(|map| map.clone()).unwrap_or_default()
    }

    /// Replace the entire contents atomically, e.g. when loading host state.
    pub fn replace_with(&self, data: HashMap<String, String>) {
        if let Ok(mut map) = self.inner.write() {
            *map = data;
        }
    }
}

/// Backend selector for the override store.
pub enum UserDict {
    InMemory(InMemoryOverrides),
    Redb(RedbOverrides),
}

impl UserDict {
    pub fn new_in_memory() -> Self {
        UserDict::InMemory(InMemoryOverrides::new())
    }

    /// Open (or create) a persistent store at `path`.
    pub fn new_redb<P: AsRef<std::path::Path>>(path: P) -> Result<Self, redb::Error> {
        Ok(UserDict::Redb(RedbOverrides::new(path)?))
    }

    /// Record a user-chosen reading for a run.
    pub fn set(&self, run: &str, reading: &str) {
        match self {
            UserDict::InMemory(m) => m.set(run, reading),
            UserDict::Redb(r) => {
                if let Err(e) = r.set(run, reading) {
                    tracing::warn!(run, error = %e, "failed to persist reading override");
                }
            }
        }
    }

    /// The recorded override for a run, if any.
    pub fn get(&self, run: &str) -> Option<String> {
        match self {
            UserDict::InMemory(m) => m.get(run),
            UserDict::Redb(r) => r.get(run).unwrap_or(None),
        }
    }

    /// Drop the override for a run. Returns true if one existed.
    pub fn remove(&self, run: &str) -> bool {
        match self {
            UserDict::InMemory(m) => m.remove(run),
            UserDict::Redb(r) => r.remove(run).unwrap_or(false),
        }
    }

    /// Snapshot of all overrides, regardless of backend.
    pub fn snapshot(&self) -> HashMap<String, String> {
        match self {
            UserDict::InMemory(m) => m.snapshot(),
            UserDict::Redb(r) => r.snapshot().unwrap_or_default(),
        }
    }

    /// Copy every override from `other` into this store. Later writes win, so
    /// the merged-in store takes precedence for shared runs.
    pub fn merge_from(&self, other: &UserDict) {
        for (run, reading) in other.snapshot() {
            self.set(&run, &reading);
        }
    }
}

impl ReadingProvider for UserDict {
    fn reading(&self, run: &str) -> Option<String> {
        self.get(run)
    }
}

/// Redb-backed override store: one table mapping run text to chosen reading.
pub struct RedbOverrides {
    db: redb::Database,
    #[allow(dead_code)]
    path: std::path::PathBuf,
}

impl RedbOverrides {
    const TABLE: redb::TableDefinition<'static, &'static str, &'static str> =
        redb::TableDefinition::new("reading_overrides");

    /// Create or open the database at `path`.
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Result<Self, redb::Error> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let db = redb::Database::create(path.as_ref())?;
        Ok(Self {
            db,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn set(&self, run: &str, reading: &str) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::TABLE)?;
            table.insert(run, reading)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get(&self, run: &str) -> Result<Option<String>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        // A fresh database has no table yet; that reads as "no override".
        let table = match read_txn.open_table(Self::TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(table.get(run)?.map(|guard| guard.value().to_string()))
    }

    pub fn remove(&self, run: &str) -> Result<bool, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(Self::TABLE)?;
            let removed = table.remove(run)?.is_some();
            removed
        };
        write_txn.commit()?;
        Ok(removed)
    }

    pub fn snapshot(&self) -> Result<HashMap<String, String>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(Self::TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        let mut out = HashMap::new();
        for item in table.iter()? {
            let (k, v) = item?;
            out.insert(k.value().to_string(), v.value().to_string());
        }
        Ok(out)
    }
}
