use serde::{Deserialize, Serialize};

/// The client's cached belief about which user is authenticated
/// and with what credential.
///
/// Invariant: the user is considered authenticated iff `token` is `Some`.
/// `username` is only meaningful alongside a token — the pairing is not
/// independently validated against the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Session {
    /// `true` iff a credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// The identity object as persisted to durable storage.
/// Stored as JSON under its own entry, separate from the raw credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub username: String,
}
