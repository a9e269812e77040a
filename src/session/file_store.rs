//! File-backed token store.
//!
//! One file per key under the platform data directory. Writes go to a temp
//! file under an exclusive lock and land with an atomic rename, so a
//! half-written token can never be read back.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use fs2::FileExt;

use super::{StoreError, TokenStore};

pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `<platform data dir>/vitrine/session`.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitrine")
            .join("session")
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        let value = fs::read_to_string(path).ok()?;
        let value = value.trim_end_matches('\n');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let io = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io)?;
        let tmp = path.with_extension("tmp");
        let mut file = File::create(&tmp).map_err(io)?;
        FileExt::lock_exclusive(&file).map_err(io)?;
        file.write_all(value.as_bytes()).map_err(io)?;
        file.sync_all().map_err(io)?;
        FileExt::unlock(&file).map_err(io)?;
        fs::rename(&tmp, &path).map_err(io)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        store.set("token", "QpwL5tke4Pnpja7X4").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("QpwL5tke4Pnpja7X4"));
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        store.set("token", "old").unwrap();
        store.set("token", "new").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        store.set("token", "value").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token"), None);
        store.remove("token").unwrap();
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        assert!(store.set("", "value").is_err());
        assert!(store.set("../escape", "value").is_err());
        assert!(store.set("a/b", "value").is_err());
    }

    #[test]
    fn test_unreadable_value_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());

        // A directory where the value file should be makes the read fail.
        fs::create_dir_all(dir.path().join("token")).unwrap();
        assert_eq!(store.get("token"), None);
    }
}
