//! Best-score record
//!
//! A single integer, read once at startup and written only on a new record.
//! Persisted to LocalStorage on the web and to a small JSON file natively.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Storage key for the persisted best score
pub const STORAGE_KEY: &str = "snakeHighScore";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored high score is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Backend for the persisted best score
pub trait HighScoreStore {
    fn load(&self) -> Result<u64, StoreError>;
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Process-lifetime store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: u64,
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u64, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.value = score;
        Ok(())
    }
}

/// JSON file holding `{ "snakeHighScore": n }`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u64, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let map: BTreeMap<String, u64> = serde_json::from_str(&json)?;
        Ok(map.get(STORAGE_KEY).copied().unwrap_or(0))
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        let map = BTreeMap::from([(STORAGE_KEY.to_string(), score)]);
        let json = serde_json::to_string(&map)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Browser LocalStorage (value stored as a decimal string)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> Result<u64, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(value)) => Ok(serde_json::from_str(&value)?),
            Ok(None) => Ok(0),
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(STORAGE_KEY, &score.to_string())
            .map_err(|_| StoreError::Unavailable)
    }
}

/// The best score plus the store it persists to.
///
/// A failed write drops back to in-memory tracking for the rest of the
/// process instead of interrupting play.
pub struct HighScore {
    best: u64,
    store: Box<dyn HighScoreStore>,
    persistent: bool,
}

impl HighScore {
    pub fn load(store: Box<dyn HighScoreStore>) -> Self {
        let best = match store.load() {
            Ok(best) => {
                log::info!("Loaded high score: {}", best);
                best
            }
            Err(e) => {
                log::warn!("Could not read high score ({}), starting from 0", e);
                0
            }
        };
        Self {
            best,
            store,
            persistent: true,
        }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::default()))
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Record a finished run. Returns true on a new record.
    pub fn commit(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;

        if self.persistent {
            match self.store.save(score) {
                Ok(()) => log::info!("New high score saved: {}", score),
                Err(e) => {
                    log::warn!("Could not save high score ({}), keeping it in memory", e);
                    self.persistent = false;
                }
            }
        }
        true
    }
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore")
            .field("best", &self.best)
            .field("persistent", &self.persistent)
            .finish()
    }
}
