use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A registered account. The secret is only ever held as a bcrypt hash.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, secret_hash: String) -> Self {
        Self {
            username: username.into(),
            secret_hash,
            created_at: Utc::now(),
        }
    }
}

/// A username that has been verified by the credential or session store.
///
/// There is no public constructor: an `Identity` is handed out by
/// `CredentialStore::register`, `CredentialStore::authenticate` and
/// `SessionStore::resolve`, so every session and task list is keyed by a
/// username that actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn username(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
