//! Session storage abstraction Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{StoredSession, UiPrefs};

/// Durable session storage Trait
///
/// Holds the one session record (auth flag, bearer token, cached user) plus
/// the UI preferences persisted next to it. Survives restarts; cleared on
/// logout and on authentication expiry.
///
/// Platform implementations:
/// - TUI: `JsonSessionStore` (JSON file under the user config directory)
/// - Tests: `MockSessionStore` (in-memory, with error injection)
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session record.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - a record exists (it may still be unauthenticated)
    /// * `Ok(None)` - nothing persisted
    async fn load(&self) -> CoreResult<Option<StoredSession>>;

    /// Persists the session record, replacing any previous one.
    async fn save(&self, session: &StoredSession) -> CoreResult<()>;

    /// Removes the session record. Preferences are kept.
    async fn clear(&self) -> CoreResult<()>;

    /// Loads the UI preferences, defaulting when none are persisted.
    async fn load_prefs(&self) -> CoreResult<UiPrefs>;

    /// Persists the UI preferences.
    async fn save_prefs(&self, prefs: &UiPrefs) -> CoreResult<()>;
}
