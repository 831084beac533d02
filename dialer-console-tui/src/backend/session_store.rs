//! Disk-backed session store
//!
//! One JSON file for the session record and one for the UI preferences,
//! both under the user config directory. Clearing the session only removes
//! the session file, so preferences survive a logout.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use dialer_console_core::error::{CoreError, CoreResult};
use dialer_console_core::traits::SessionStore;
use dialer_console_core::types::{StoredSession, UiPrefs};

const SESSION_FILE: &str = "session.json";
const PREFS_FILE: &str = "prefs.json";

/// One-file-per-record JSON store under the user config directory.
pub struct JsonSessionStore {
    session_path: PathBuf,
    prefs_path: PathBuf,
}

impl JsonSessionStore {
    pub fn new() -> Self {
        Self::in_dir(&super::config_dir())
    }

    fn in_dir(dir: &Path) -> Self {
        Self {
            session_path: dir.join(SESSION_FILE),
            prefs_path: dir.join(PREFS_FILE),
        }
    }

    async fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(value)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(path, raw)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl Default for JsonSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> CoreResult<Option<StoredSession>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.session_path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        let stored = serde_json::from_str(&raw)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        Ok(Some(stored))
    }

    async fn save(&self, session: &StoredSession) -> CoreResult<()> {
        self.write_json(&self.session_path, session).await
    }

    async fn clear(&self) -> CoreResult<()> {
        match fs::remove_file(&self.session_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::StorageError(e.to_string())),
        }
    }

    async fn load_prefs(&self) -> CoreResult<UiPrefs> {
        if !self.prefs_path.exists() {
            return Ok(UiPrefs::default());
        }
        let raw = fs::read_to_string(&self.prefs_path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    async fn save_prefs(&self, prefs: &UiPrefs) -> CoreResult<()> {
        self.write_json(&self.prefs_path, prefs).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialer_console_core::types::SessionUser;

    fn temp_store(tag: &str) -> (JsonSessionStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "dialer-console-store-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (JsonSessionStore::in_dir(&dir), dir)
    }

    fn stored_session() -> StoredSession {
        StoredSession {
            authenticated: true,
            token: "Bearer jwt.abc".to_string(),
            user: SessionUser {
                name: Some("Admin".to_string()),
                email: Some("admin@clay.in".to_string()),
                aucode: Some("AU100".to_string()),
            },
            role: "admin".to_string(),
        }
    }

    #[test]
    fn load_without_a_file_is_none() {
        let (store, dir) = temp_store("empty");
        let loaded = tokio_test::block_on(store.load()).unwrap();
        assert!(loaded.is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn save_then_load_round_trips() {
        let (store, dir) = temp_store("roundtrip");
        tokio_test::block_on(store.save(&stored_session())).unwrap();
        let loaded = tokio_test::block_on(store.load()).unwrap().unwrap();
        assert!(loaded.authenticated);
        assert_eq!(loaded.token, "Bearer jwt.abc");
        assert_eq!(loaded.user.email.as_deref(), Some("admin@clay.in"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn clear_removes_the_session_but_keeps_prefs() {
        let (store, dir) = temp_store("clear");
        tokio_test::block_on(store.save(&stored_session())).unwrap();
        tokio_test::block_on(store.save_prefs(&UiPrefs { sidebar_open: false })).unwrap();

        tokio_test::block_on(store.clear()).unwrap();

        assert!(tokio_test::block_on(store.load()).unwrap().is_none());
        let prefs = tokio_test::block_on(store.load_prefs()).unwrap();
        assert!(!prefs.sidebar_open);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn clear_with_nothing_stored_is_fine() {
        let (store, dir) = temp_store("clear-empty");
        tokio_test::block_on(store.clear()).unwrap();
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn prefs_default_to_an_open_sidebar() {
        let (store, dir) = temp_store("prefs-default");
        let prefs = tokio_test::block_on(store.load_prefs()).unwrap();
        assert!(prefs.sidebar_open);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn a_corrupt_session_file_is_a_serialization_error() {
        let (store, dir) = temp_store("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSION_FILE), "{not json").unwrap();
        let err = tokio_test::block_on(store.load()).unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
        let _ = std::fs::remove_dir_all(dir);
    }
}
