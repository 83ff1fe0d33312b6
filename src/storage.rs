use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tower_sessions::Session;

/// StorageError
///
/// Failure reported by a session slot backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session backend error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

// 1. SessionStorage Contract
/// SessionStorage
///
/// A client-scoped string key/value slot, the server-side stand-in for browser
/// local storage. Handlers never touch a backend directly; they go through
/// `SessionContext`, which owns one of these.
///
/// The cookie-backed implementation (`CookieSessionStorage`) is used by the
/// running service and the in-memory one (`MemoryStorage`) by tests.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites whatever the slot held under `key`.
    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// 2. The Real Implementation (tower-sessions)
/// CookieSessionStorage
///
/// Wraps the per-request `tower_sessions::Session`. The session id travels in
/// the `vms_session` cookie; values live in the session layer's store.
#[derive(Clone, Debug)]
pub struct CookieSessionStorage {
    session: Session,
}

impl CookieSessionStorage {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionStorage for CookieSessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.session.insert(key, value).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.session.remove_value(key).await?;
        Ok(())
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MemoryStorage
///
/// A plain map behind a mutex. Clones share the same slot, so a test can keep
/// a handle and inspect what a `SessionContext` wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    /// When true, every operation fails with `StorageError::Unavailable`.
    pub should_fail: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.should_fail {
            return Err(StorageError::Unavailable(
                "Mock Storage Error: Simulation requested".to_string(),
            ));
        }
        self.items
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.items()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// StorageState
///
/// Shared handle to whichever slot backend serves the current request.
pub type StorageState = Arc<dyn SessionStorage>;
