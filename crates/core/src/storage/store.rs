use std::sync::Mutex;

use crate::models::session::{Session, StoredIdentity};

use super::backend::SessionBackend;

/// Storage key for the serialized identity object.
const KEY_IDENTITY: &str = "user";
/// Storage key for the raw bearer credential.
const KEY_TOKEN: &str = "token";

/// Single source of truth for "is the user logged in".
///
/// Holds the authenticated identity and bearer credential, synchronizes
/// every mutation to durable storage, and restores the previous session
/// at construction. Shared behind an `Arc` with everything that issues
/// authenticated requests.
pub struct SessionStore {
    session: Mutex<Session>,
    backend: Box<dyn SessionBackend>,
}

impl SessionStore {
    /// Create a store backed by `backend`, restoring any persisted
    /// session. Restore is best-effort: a missing entry or corrupt
    /// identity JSON yields the logged-out state, never an error.
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        let username = backend
            .read(KEY_IDENTITY)
            .and_then(|raw| serde_json::from_str::<StoredIdentity>(&raw).ok())
            .map(|identity| identity.username);
        let token = backend.read(KEY_TOKEN);

        Self {
            session: Mutex::new(Session { username, token }),
            backend,
        }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Current bearer credential, if any. Read by the gateway on every call.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .clone()
    }

    /// `true` iff a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Unconditionally replace the stored identity and credential (no
    /// merge), then persist both. An absent or empty argument stores
    /// `None` for that field — the operation is authoritative and never
    /// rejects its input.
    pub fn login(&self, username: Option<String>, token: Option<String>) {
        let username = username.filter(|u| !u.is_empty());
        let token = token.filter(|t| !t.is_empty());

        {
            let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
            session.username = username.clone();
            session.token = token.clone();
        }

        self.persist_identity(username.as_deref());
        self.persist_token(token.as_deref());
    }

    /// Clear both fields and remove them from durable storage.
    /// Calling it on an already-empty session is a no-op.
    pub fn logout(&self) {
        {
            let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
            session.username = None;
            session.token = None;
        }

        self.persist_identity(None);
        self.persist_token(None);
    }

    /// Persistence is best-effort: a failed write leaves the in-memory
    /// session authoritative for this process and logs a warning.
    fn persist_identity(&self, username: Option<&str>) {
        let result = match username {
            Some(username) => {
                let identity = StoredIdentity {
                    username: username.to_string(),
                };
                match serde_json::to_string(&identity) {
                    Ok(json) => self.backend.write(KEY_IDENTITY, &json),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to serialize session identity");
                        return;
                    }
                }
            }
            None => self.backend.remove(KEY_IDENTITY),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist session identity");
        }
    }

    fn persist_token(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.backend.write(KEY_TOKEN, token),
            None => self.backend.remove(KEY_TOKEN),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist session credential");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.session();
        f.debug_struct("SessionStore")
            .field("username", &session.username)
            .field("authenticated", &session.is_authenticated())
            .finish()
    }
}
