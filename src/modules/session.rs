use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tracing::{debug, warn};

use crate::models::UserId;

/// What a logged in client keeps between runs.
#[derive(Clone)]
pub struct Credentials {
    pub token: Secret<String>,
    pub user_id: Option<UserId>,
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Credentials>;
    fn save(&self, credentials: &Credentials);
    fn clear(&self);
}

#[derive(Default)]
pub struct MemorySessionStore(Mutex<Option<Credentials>>);

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Credentials> {
        self.0.lock().ok()?.clone()
    }

    fn save(&self, credentials: &Credentials) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(credentials.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = None;
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredentials {
    token: String,
    user_id: Option<UserId>,
}

/// Keeps the credentials in a json file, so a session survives restarts.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Credentials> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredCredentials>(&raw) {
            Ok(stored) if !stored.token.trim().is_empty() => Some(Credentials {
                token: Secret::new(stored.token),
                user_id: stored.user_id,
            }),
            Ok(_) => None,
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&self, credentials: &Credentials) {
        let stored = StoredCredentials {
            token: credentials.token.expose_secret().to_owned(),
            user_id: credentials.user_id,
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create session directory: {e}");
                return;
            }
        }
        let res = serde_json::to_string(&stored)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(&self.path, json).map_err(anyhow::Error::from));
        if let Err(e) = res {
            warn!("Failed to persist session: {e}");
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("Failed to remove session file: {e}");
            }
        }
    }
}

/// Auth context shared by the api client and the stores.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    pub fn login(&self, token: Secret<String>, user_id: Option<UserId>) {
        debug!("Storing session for user {user_id:?}");
        self.store.save(&Credentials { token, user_id });
    }

    pub fn logout(&self) {
        debug!("Clearing session");
        self.store.clear();
    }

    pub fn token(&self) -> Option<Secret<String>> {
        self.store.load().map(|c| c.token)
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.store.load().and_then(|c| c.user_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }
}
