//! Login sessions keyed by token.
//!
//! ```text
//! issue() ──→ [Active] ──(now > expires_at)──→ [Expired]
//!                │                                 │
//!                │ invalidate()                    │ resolve() / sweep()
//!                ▼                                 ▼
//!            [Removed]                         [Removed]
//! ```
//!
//! Expiry is passive: `resolve` checks the deadline on every call, so an expired
//! session never authenticates whether or not a sweep has run yet.

use chrono::{DateTime, Duration, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use log::{debug, info, warn};

use crate::auth::generate_session_token;
use crate::error::AppError;
use crate::models::{Identity, Session};

pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Starts a new session for `identity`, valid for the store's TTL.
    pub fn issue(&self, identity: &Identity) -> Result<Session, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Fails only when `now + ttl` does not fit in a timestamp.
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<Session, AppError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::InternalServerError("session expiry out of range".into())
        })?;

        loop {
            let token = generate_session_token();
            if let Entry::Vacant(slot) = self.sessions.entry(token.clone()) {
                let session = Session {
                    token,
                    username: identity.username().to_owned(),
                    expires_at,
                };
                slot.insert(session.clone());
                info!("issued session for {}", identity);
                return Ok(session);
            }
            warn!("session token collision, regenerating");
        }
    }

    /// Maps a token back to the identity that logged in with it.
    pub fn resolve(&self, token: &str) -> Result<Identity, AppError> {
        self.resolve_at(token, Utc::now())
    }

    pub fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AppError> {
        // Copy out of the map so the shard guard is gone before any removal below.
        let found = self
            .sessions
            .get(token)
            .map(|session| (session.username.clone(), session.is_expired_at(now)));

        match found {
            None => Err(AppError::Unauthorized("invalid session token".into())),
            Some((username, false)) => Ok(Identity::new(username)),
            Some((username, true)) => {
                self.sessions
                    .remove_if(token, |_, session| session.is_expired_at(now));
                debug!("rejected expired session for {}", username);
                Err(AppError::Unauthorized("session expired".into()))
            }
        }
    }

    /// Ends the one session identified by `token`. Returns whether it existed.
    pub fn invalidate(&self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some((_, session)) => {
                info!("invalidated session for {}", session.username);
                true
            }
            None => false,
        }
    }

    /// Drops every expired session and returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired_at(now));
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
