//! Session store
//!
//! Holds the authenticated user and the token pair, and persists the tokens
//! to a small JSON file under the platform data directory so a restart can
//! resume the session. Only the tokens are written to disk; the user record
//! lives in memory and is repopulated on the next login.
//!
//! The store is a cheap-to-clone handle (`Arc<Mutex<_>>`) shared between
//! the UI thread and the request worker threads, so a token refreshed
//! mid-flight is visible to every subsequent request.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::app::types::User;

/// File name of the persisted token pair
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Default)]
struct SessionData {
    user: Option<User>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// On-disk shape: tokens only, never the user record
#[derive(Debug, Serialize, Deserialize)]
struct PersistedTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// Shared handle to the session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionData>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store without persistence, for tests and headless use
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionData::default())),
            path: None,
        }
    }

    /// Load persisted tokens from `path`. A missing or unreadable file
    /// yields an empty session; startup never fails on session state.
    pub fn load(path: PathBuf) -> Self {
        let mut data = SessionData::default();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<PersistedTokens>(&contents) {
                Ok(tokens) => {
                    data.access_token = tokens.access_token;
                    data.refresh_token = tokens.refresh_token;
                    if data.access_token.is_some() {
                        tracing::debug!(path = %path.display(), "restored session tokens");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt session file");
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read session file");
            }
        }
        Self {
            inner: Arc::new(Mutex::new(data)),
            path: Some(path),
        }
    }

    /// Default session file location under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("modalytics").join(SESSION_FILE))
    }

    /// Whether an access token is held. Matches the original frontend,
    /// where "logged in" means "access token present" even before the
    /// user record is known.
    pub fn is_logged_in(&self) -> bool {
        self.lock().access_token.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.lock().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.lock().refresh_token.clone()
    }

    /// Replace the whole session after login/registration
    pub fn set_authenticated(&self, user: User, access: String, refresh: String) {
        let mut data = self.lock();
        data.user = Some(user);
        data.access_token = Some(access);
        data.refresh_token = Some(refresh);
        self.persist(&data);
    }

    /// Swap in a freshly refreshed access token
    pub fn set_access_token(&self, access: String) {
        let mut data = self.lock();
        data.access_token = Some(access);
        self.persist(&data);
    }

    /// Logout: wipe memory and remove the persisted tokens
    pub fn clear(&self) {
        let mut data = self.lock();
        *data = SessionData::default();
        if let Some(ref path) = self.path {
            if let Err(e) = std::fs::remove_file(path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "could not remove session file");
                }
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionData> {
        // A poisoned lock only happens if a holder panicked; the session
        // data is still consistent for our single-field updates.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, data: &SessionData) {
        let Some(ref path) = self.path else {
            return;
        };
        let tokens = PersistedTokens {
            access_token: data.access_token.clone(),
            refresh_token: data.refresh_token.clone(),
        };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&tokens)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)
        };
        if let Err(e) = write() {
            tracing::warn!(path = %path.display(), error = %e, "could not persist session tokens");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    #[test]
    fn test_empty_session() {
        let store = SessionStore::in_memory();
        assert!(!store.is_logged_in());
        assert!(store.user().is_none());
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_set_authenticated() {
        let store = SessionStore::in_memory();
        store.set_authenticated(test_user(), "acc".to_string(), "ref".to_string());
        assert!(store.is_logged_in());
        assert_eq!(store.access_token().as_deref(), Some("acc"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref"));
        assert_eq!(store.user().unwrap().username, "ana");
    }

    #[test]
    fn test_persists_tokens_but_not_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::load(path.clone());
        store.set_authenticated(test_user(), "acc".to_string(), "ref".to_string());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("acc"));
        assert!(contents.contains("ref"));
        assert!(!contents.contains("ana"));
    }

    #[test]
    fn test_reload_restores_tokens_without_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        {
            let store = SessionStore::load(path.clone());
            store.set_authenticated(test_user(), "acc".to_string(), "ref".to_string());
        }
        let reloaded = SessionStore::load(path);
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.access_token().as_deref(), Some("acc"));
        assert!(reloaded.user().is_none());
    }

    #[test]
    fn test_set_access_token_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::load(path.clone());
        store.set_authenticated(test_user(), "old".to_string(), "ref".to_string());
        store.set_access_token("new".to_string());

        let reloaded = SessionStore::load(path);
        assert_eq!(reloaded.access_token().as_deref(), Some("new"));
        assert_eq!(reloaded.refresh_token().as_deref(), Some("ref"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::load(path.clone());
        store.set_authenticated(test_user(), "acc".to_string(), "ref".to_string());
        assert!(path.exists());

        store.clear();
        assert!(!store.is_logged_in());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_yields_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::load(path);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_clone_shares_state() {
        let store = SessionStore::in_memory();
        let handle = store.clone();
        store.set_access_token("acc".to_string());
        assert!(handle.is_logged_in());
        handle.clear();
        assert!(!store.is_logged_in());
    }
}
