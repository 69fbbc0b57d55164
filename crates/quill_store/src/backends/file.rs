use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quill_core::{KeyValueStore, Result};
use serde_json::Value;
use tracing::debug;

/// Durable backend: one `<key>.json` file per key under a data directory.
///
/// Per-key files keep writers to different keys independent; a write to an
/// existing key replaces the whole file, so same-key writes are
/// last-write-wins.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        let bytes = match fs::read(self.key_path(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save_raw(&self, key: &str, value: Value) -> Result<()> {
        let payload = serde_json::to_vec_pretty(&value)?;
        fs::write(self.key_path(key), payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::StoreExt;

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.save("articles", &vec!["a".to_string()]).unwrap();
        }

        let store = JsonFileStore::open(dir.path()).unwrap();
        let articles: Vec<String> = store.load_or("articles", vec![]);
        assert_eq!(articles, vec!["a".to_string()]);
    }

    #[test]
    fn empty_store_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let trash: Vec<String> = store.load_or("trash", vec![]);
        assert!(trash.is_empty());
    }

    #[test]
    fn corrupt_payload_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("prefs.json"), b"{not json").unwrap();

        let prefs: Vec<String> = store.load_or("prefs", vec!["default".to_string()]);
        assert_eq!(prefs, vec!["default".to_string()]);
    }

    #[test]
    fn keys_live_in_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save("articles", &1u32).unwrap();
        store.save("trash", &2u32).unwrap();

        assert!(dir.path().join("articles.json").exists());
        assert!(dir.path().join("trash.json").exists());
        assert_eq!(store.load_or("articles", 0u32), 1);
    }
}
