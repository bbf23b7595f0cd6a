//! Flat-file favorites store.
//!
//! Persists the set of favorite station ids as a JSON array of strings.
//! The file is loaded once at startup and rewritten wholesale on every
//! mutation; `Station::id` is the only join key with fetched data.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors from the favorites store.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// Reading or writing the favorites file failed
    #[error("favorites file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The favorites file exists but is not a JSON string array
    #[error("favorites file is corrupt: {message}")]
    Corrupt { message: String },
}

/// Persistent set of favorite station ids.
///
/// Ids keep their insertion order; duplicates are rejected at `add`.
#[derive(Debug)]
pub struct FavoriteStore {
    path: PathBuf,
    ids: Vec<String>,
}

impl FavoriteStore {
    /// Load the store from `path`. A missing file yields an empty store;
    /// it will be created on the first mutation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FavoritesError> {
        let path = path.into();
        let ids = match fs::read_to_string(&path) {
            Ok(body) => serde_json::from_str(&body).map_err(|e| FavoritesError::Corrupt {
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, ids })
    }

    /// Add a station id. Returns `true` if the set changed (and was
    /// rewritten); adding a present id is a no-op. On a write error the
    /// store is left unchanged.
    pub fn add(&mut self, id: &str) -> Result<bool, FavoritesError> {
        if self.contains(id) {
            return Ok(false);
        }
        let mut next = self.ids.clone();
        next.push(id.to_string());
        Self::persist(&self.path, &next)?;
        self.ids = next;
        Ok(true)
    }

    /// Remove a station id. Returns `true` if the set changed (and was
    /// rewritten); removing an absent id is a no-op. On a write error
    /// the store is left unchanged.
    pub fn remove(&mut self, id: &str) -> Result<bool, FavoritesError> {
        let next: Vec<String> = self
            .ids
            .iter()
            .filter(|known| *known != id)
            .cloned()
            .collect();
        if next.len() == self.ids.len() {
            return Ok(false);
        }
        Self::persist(&self.path, &next)?;
        self.ids = next;
        Ok(true)
    }

    /// Is this id a favorite?
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// All favorite ids, in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole file with `ids`. Runs before the in-memory set
    /// is updated, so a failed write leaves the store unchanged.
    fn persist(path: &Path, ids: &[String]) -> Result<(), FavoritesError> {
        let body = serde_json::to_string(ids).map_err(|e| FavoritesError::Corrupt {
            message: e.to_string(),
        })?;
        fs::write(path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FavoriteStore {
        FavoriteStore::load(dir.path().join("favorites.json")).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn add_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.add("75019004").unwrap());
        assert!(store.add("69003002").unwrap());

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.ids(), ["75019004", "69003002"]);
        assert!(reloaded.contains("69003002"));
    }

    #[test]
    fn duplicate_add_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.add("X1").unwrap());
        assert!(!store.add("X1").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("X1").unwrap();
        store.add("X2").unwrap();

        assert!(store.remove("X1").unwrap());
        assert!(!store.remove("X1").unwrap());

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.ids(), ["X2"]);
    }

    #[test]
    fn failed_write_leaves_the_set_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("store");
        fs::create_dir(&sub).unwrap();
        let path = sub.join("favorites.json");
        fs::write(&path, r#"["X1"]"#).unwrap();

        let mut store = FavoriteStore::load(&path).unwrap();
        // Next write has nowhere to land.
        fs::remove_dir_all(&sub).unwrap();

        assert!(store.remove("X1").is_err());
        assert!(store.contains("X1"));

        assert!(store.add("X2").is_err());
        assert!(!store.contains("X2"));
        assert_eq!(store.ids(), ["X1"]);
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{ not an array }").unwrap();

        let result = FavoriteStore::load(&path);
        assert!(matches!(result, Err(FavoritesError::Corrupt { .. })));
    }
}
