//! Durable secret slot for the local-key wallet
//!
//! A single named slot in a JSON key-value file, read at startup and written
//! when the user imports a key.
//!
//! SECURITY NOTE:
//! - The slot holds raw secret material; the file should live on a volume with
//!   appropriate permissions
//! - Secret text is handed out as `SecretString` and never logged
//! - Unreadable or corrupt content is treated as an empty slot, never an error

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Fixed name of the one slot this store manages.
pub const SECRET_SLOT: &str = "wallet-secret";

/// Payload stored under [`SECRET_SLOT`].
#[derive(Serialize, Deserialize)]
struct StoredSecret {
    secret: String,
    imported_at: DateTime<Utc>,
}

/// File-backed key-value store with a single secret slot.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    /// Open a store at the given path. The file is not created until the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored secret, if any.
    ///
    /// A missing file, unreadable JSON, or an absent slot all read as `None`.
    pub fn read(&self) -> Option<SecretString> {
        let raw = std::fs::read_to_string(&self.path).ok()?;

        let slots: HashMap<String, StoredSecret> = match serde_json::from_str(&raw) {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Secret store unreadable, treating as empty"
                );
                return None;
            }
        };

        slots
            .get(SECRET_SLOT)
            .map(|entry| SecretString::from(entry.secret.clone()))
    }

    /// Write the secret into the slot, replacing any previous value.
    pub fn write(&self, secret: &SecretString) -> Result<()> {
        let mut slots = HashMap::new();
        slots.insert(
            SECRET_SLOT.to_string(),
            StoredSecret {
                secret: secret.expose_secret().to_string(),
                imported_at: Utc::now(),
            },
        );

        let raw = serde_json::to_string(&slots)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    /// Drop the slot. Affects the next adapter construction, not a live one.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!(
                "Failed to clear {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> SecretStore {
        SecretStore::open(dir.path().join("slot.json"))
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store
            .write(&SecretString::from("[1,2,3]".to_string()))
            .unwrap();

        let read = store.read().unwrap();
        assert_eq!(read.expose_secret(), "[1,2,3]");
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.read().is_none());
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store
            .write(&SecretString::from("secret".to_string()))
            .unwrap();
        store.clear().unwrap();
        assert!(store.read().is_none());

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_write_replaces_previous() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.write(&SecretString::from("old".to_string())).unwrap();
        store.write(&SecretString::from("new".to_string())).unwrap();
        assert_eq!(store.read().unwrap().expose_secret(), "new");
    }
}
