use anyhow::{anyhow, Result};
use media_browse_models::MediaRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Persistence adapter for the watchlist: one JSON-array file in the
/// data directory. The store is the only writer of this slot.
#[derive(Clone)]
pub struct WatchlistStorage {
    path: PathBuf,
}

impl WatchlistStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted watchlist. Fails soft: a missing, unreadable
    /// or corrupt file yields an empty list. A corrupt file is deleted
    /// so the next save starts from a clean slot.
    pub fn load(&self) -> Vec<MediaRecord> {
        if !self.path.exists() {
            debug!("No watchlist file at {:?}", self.path);
            return Vec::new();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<MediaRecord>>(&content) {
                Ok(items) => {
                    info!("Loaded watchlist ({} items)", items.len());
                    items
                }
                Err(e) => {
                    warn!(
                        "Watchlist corruption detected: {}. Discarding stored list.",
                        e
                    );
                    if let Err(rm_err) = std::fs::remove_file(&self.path) {
                        warn!("Failed to delete corrupted watchlist file: {}", rm_err);
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to read watchlist file: {}", e);
                Vec::new()
            }
        }
    }

    /// Write the full list back (write-through, no buffering).
    pub fn save(&self, items: &[MediaRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| anyhow!("Failed to serialize watchlist: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| anyhow!("Failed to write watchlist: {}", e))?;
        debug!("Watchlist saved ({} items)", items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> MediaRecord {
        serde_json::from_value(serde_json::json!({"id": id, "title": title})).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("watchlist.json"));

        let items = vec![record(550, "Fight Club"), record(603, "The Matrix")];
        storage.save(&items).unwrap();
        assert_eq!(storage.load(), items);
    }

    #[test]
    fn test_corrupt_file_loads_empty_and_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "not-json").unwrap();

        let storage = WatchlistStorage::new(&path);
        assert!(storage.load().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = WatchlistStorage::new(dir.path().join("data").join("watchlist.json"));
        storage.save(&[record(550, "Fight Club")]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }
}
