//! Single authority over the current session
//!
//! Every session read and write in the system goes through this manager. The
//! current session is cached in memory so the auth guard never touches disk;
//! each transition bumps a monotonic epoch broadcast over a
//! `tokio::sync::watch` channel, so observers that only poll occasionally
//! still see every login and logout.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::error::CoreResult;
use crate::traits::SessionStore;
use crate::types::{Session, StoredSession};

/// Monotonic counter bumped on every session transition.
pub type SessionEpoch = u64;

/// Owns the cached session and its change notifications
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
    epoch: watch::Sender<SessionEpoch>,
}

impl SessionManager {
    /// Creates a manager with no session cached.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (epoch, _) = watch::channel(0);
        Self {
            store,
            current: RwLock::new(None),
            epoch,
        }
    }

    /// The cached session. Never touches storage.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Whether a session is cached.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Change notifications: the receiver observes a new epoch after every
    /// login, logout and restore. The epoch only ever grows, so a reader that
    /// wakes up late still detects that transitions happened.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionEpoch> {
        self.epoch.subscribe()
    }

    /// Persists and caches a fresh session, then notifies observers.
    ///
    /// Concurrent establish/purge is last-writer-wins; the only concurrent
    /// writer in practice is a logout racing a login.
    pub async fn establish(&self, session: Session) -> CoreResult<()> {
        self.store
            .save(&StoredSession::from_session(&session))
            .await?;
        *self.current.write().await = Some(session);
        self.bump();
        Ok(())
    }

    /// Drops the session from memory and storage.
    ///
    /// The cached session is dropped even when clearing the store fails, so
    /// the UI always falls back to the login screen; the storage error is
    /// still reported.
    pub async fn purge(&self) -> CoreResult<()> {
        let had_session = self.current.write().await.take().is_some();
        if had_session {
            self.bump();
        }
        self.store.clear().await
    }

    /// Loads the persisted session at startup.
    ///
    /// Unauthenticated records and blank tokens are treated as no session;
    /// the record is left in place for diagnosis.
    pub async fn restore(&self) -> CoreResult<Option<Session>> {
        let Some(stored) = self.store.load().await? else {
            return Ok(None);
        };
        let Some(session) = stored.into_session() else {
            log::debug!("Ignoring stored session without auth flag or token");
            return Ok(None);
        };
        log::info!("Restored session for {}", session.display_name());
        *self.current.write().await = Some(session.clone());
        self.bump();
        Ok(Some(session))
    }

    fn bump(&self) {
        self.epoch.send_modify(|epoch| *epoch += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockSessionStore, test_session, test_stored_session};

    fn manager() -> (SessionManager, Arc<MockSessionStore>) {
        let store = Arc::new(MockSessionStore::new());
        (SessionManager::new(store.clone()), store)
    }

    #[tokio::test]
    async fn starts_without_session() {
        let (mgr, _) = manager();
        assert!(mgr.current().await.is_none());
        assert!(!mgr.is_authenticated().await);
        assert_eq!(*mgr.subscribe().borrow(), 0);
    }

    #[tokio::test]
    async fn establish_caches_persists_and_notifies() {
        let (mgr, store) = manager();
        let rx = mgr.subscribe();

        mgr.establish(test_session()).await.unwrap();

        assert!(mgr.is_authenticated().await);
        let stored = store.stored().await.unwrap();
        assert!(stored.authenticated);
        assert!(!stored.token.is_empty());
        assert_eq!(*rx.borrow(), 1);
    }

    #[tokio::test]
    async fn purge_clears_cache_store_and_notifies() {
        let (mgr, store) = manager();
        mgr.establish(test_session()).await.unwrap();
        let rx = mgr.subscribe();

        mgr.purge().await.unwrap();

        assert!(mgr.current().await.is_none());
        assert!(store.stored().await.is_none());
        assert_eq!(*rx.borrow(), 2);
    }

    #[tokio::test]
    async fn purge_without_session_does_not_notify() {
        let (mgr, _) = manager();
        let rx = mgr.subscribe();
        mgr.purge().await.unwrap();
        assert_eq!(*rx.borrow(), 0);
    }

    #[tokio::test]
    async fn purge_drops_cache_even_when_store_fails() {
        let (mgr, store) = manager();
        mgr.establish(test_session()).await.unwrap();
        store.set_clear_error(Some("disk full".to_string())).await;

        let result = mgr.purge().await;

        assert!(result.is_err());
        assert!(mgr.current().await.is_none(), "cache must drop regardless");
    }

    #[tokio::test]
    async fn restore_picks_up_persisted_session() {
        let (mgr, store) = manager();
        store.save(&test_stored_session()).await.unwrap();

        let restored = mgr.restore().await.unwrap();

        assert!(restored.is_some());
        assert!(mgr.is_authenticated().await);
    }

    #[tokio::test]
    async fn restore_ignores_unauthenticated_record() {
        let (mgr, store) = manager();
        let mut record = test_stored_session();
        record.authenticated = false;
        store.save(&record).await.unwrap();

        let restored = mgr.restore().await.unwrap();

        assert!(restored.is_none());
        assert!(!mgr.is_authenticated().await);
    }

    #[tokio::test]
    async fn restore_with_empty_store_is_none() {
        let (mgr, _) = manager();
        assert!(mgr.restore().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn epochs_are_monotonic_across_transitions() {
        let (mgr, _) = manager();
        let rx = mgr.subscribe();

        mgr.establish(test_session()).await.unwrap();
        mgr.purge().await.unwrap();
        mgr.establish(test_session()).await.unwrap();

        assert_eq!(*rx.borrow(), 3);
    }

    #[tokio::test]
    async fn subscriber_sees_change_flag() {
        let (mgr, _) = manager();
        let mut rx = mgr.subscribe();
        assert!(!rx.has_changed().unwrap());

        mgr.establish(test_session()).await.unwrap();

        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();
        assert!(!rx.has_changed().unwrap());
    }
}
