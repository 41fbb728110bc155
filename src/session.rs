// src/session.rs - Persisted session flags: bearer token, theme and sidebar state

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::{StorageArc, StorageProvider};

pub const TOKEN_KEY: &str = "auth_token";
pub const THEME_KEY: &str = "ui.theme";
pub const SIDEBAR_KEY: &str = "ui.sidebar_collapsed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state shared by the API client and the UI.
///
/// The token is cached in memory so request interceptors can read it
/// synchronously; every write goes through to the backing store.
#[derive(Clone)]
pub struct SessionStore {
    storage: StorageArc,
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new(storage: StorageArc) -> Self {
        Self {
            storage,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Reads the persisted token into the in-memory cache
    pub async fn load(&self) -> Result<()> {
        let stored = self
            .read_string(TOKEN_KEY)
            .await?
            .filter(|token| !token.trim().is_empty());
        *self.token.write() = stored;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub async fn set_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(Error::validation("token", "Token must not be empty"));
        }

        self.storage.set(TOKEN_KEY, token.as_bytes()).await?;
        *self.token.write() = Some(token);
        Ok(())
    }

    /// Forgets the token. The cache is cleared even if the store fails.
    pub async fn clear_token(&self) -> Result<()> {
        self.token.write().take();
        self.storage.delete(TOKEN_KEY).await
    }

    pub async fn theme(&self) -> Theme {
        match self.read_string(THEME_KEY).await {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme preference");
                Theme::default()
            }
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str().as_bytes()).await
    }

    pub async fn sidebar_collapsed(&self) -> bool {
        match self.read_string(SIDEBAR_KEY).await {
            Ok(Some(value)) => value == "true",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read sidebar preference");
                false
            }
        }
    }

    pub async fn set_sidebar_collapsed(&self, collapsed: bool) -> Result<()> {
        let value = if collapsed { "true" } else { "false" };
        self.storage.set(SIDEBAR_KEY, value.as_bytes()).await
    }

    async fn read_string(&self, key: &str) -> Result<Option<String>> {
        let bytes = self.storage.get(key).await?;
        Ok(bytes.map(|b| String::from_utf8_lossy(&b).into_owned()))
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    fn store() -> (SessionStore, StorageArc) {
        let storage: StorageArc = Arc::new(MemoryStorage::new());
        (SessionStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn token_is_persisted_and_cached() {
        let (session, storage) = store();
        assert!(!session.is_authenticated());

        session.set_token("  abc  ").await.unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(
            storage.get(TOKEN_KEY).await.unwrap().as_deref(),
            Some(&b"abc"[..])
        );

        // A fresh store over the same backing storage picks it up on load
        let reopened = SessionStore::new(storage.clone());
        assert!(reopened.token().is_none());
        reopened.load().await.unwrap();
        assert_eq!(reopened.token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn clear_token_removes_both_copies() {
        let (session, storage) = store();
        session.set_token("abc").await.unwrap();

        session.clear_token().await.unwrap();
        assert!(session.token().is_none());
        assert!(storage.get(TOKEN_KEY).await.unwrap().is_none());

        // Clearing twice is fine
        session.clear_token().await.unwrap();
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let (session, _) = store();
        let err = session.set_token("   ").await.unwrap_err();
        assert!(matches!(
            err.kind,
            crate::error::ErrorKind::Validation { .. }
        ));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn ui_preferences_round_trip() {
        let (session, _) = store();
        assert_eq!(session.theme().await, Theme::Light);
        assert!(!session.sidebar_collapsed().await);

        session.set_theme(Theme::Dark).await.unwrap();
        session.set_sidebar_collapsed(true).await.unwrap();

        assert_eq!(session.theme().await, Theme::Dark);
        assert!(session.sidebar_collapsed().await);
    }

    #[test]
    fn theme_parsing() {
        assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
