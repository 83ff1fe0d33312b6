//! Session slot access.
//!
//! `SessionContext` is the only way handlers read or write client-scoped
//! state. It owns a `SessionStorage` backend and layers JSON encoding on top.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer, cookie::SameSite};

use crate::{
    config::AppConfig,
    error::ApiError,
    models::{Role, SessionRecord},
    storage::{CookieSessionStorage, SessionStorage, StorageError, StorageState},
};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "vms_session";

/// Slot keys.
pub mod keys {
    /// The signed-in identity.
    pub const USER: &str = "user";
    /// The chatbot transcript.
    pub const CHAT: &str = "chat";
    /// Check-in status.
    pub const VISIT: &str = "visit";
}

#[derive(Clone)]
pub struct SessionContext {
    storage: StorageState,
}

impl SessionContext {
    pub fn new(storage: StorageState) -> Self {
        Self { storage }
    }

    pub fn from_storage<S: SessionStorage + 'static>(storage: S) -> Self {
        Self::new(Arc::new(storage))
    }

    /// Replaces the stored session record.
    pub async fn set_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        self.store(keys::USER, record).await
    }

    /// The stored record, or `None` when anonymous.
    pub async fn get_session(&self) -> Result<Option<SessionRecord>, StorageError> {
        self.load(keys::USER).await
    }

    pub async fn clear_session(&self) -> Result<(), StorageError> {
        self.storage.remove_item(keys::USER).await
    }

    pub async fn role(&self) -> Result<Role, StorageError> {
        Ok(Role::from(self.get_session().await?.as_ref()))
    }

    /// Reads and decodes a slot value. A value that no longer decodes is
    /// treated as absent.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get_item(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding undecodable session value");
                Ok(None)
            }
        }
    }

    pub async fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Unavailable(format!("encode {key}: {e}")))?;
        self.storage.set_item(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).await
    }
}

/// SessionContext Extractor
///
/// Builds the context from the `Session` that `SessionManagerLayer` puts in
/// the request extensions. A missing layer is a wiring bug and surfaces as 500.
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| {
                ApiError::Storage(StorageError::Unavailable(
                    "session layer not installed".to_string(),
                ))
            })?;

        Ok(SessionContext::from_storage(CookieSessionStorage::new(session)))
    }
}

/// create_session_layer
///
/// In-memory store: slots survive for the life of the process only. There is
/// no expiry, so every session that ever wrote a value (an anonymous chat
/// included) stays in the store until restart.
pub fn create_session_layer(config: &AppConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
