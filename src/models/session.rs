use chrono::{DateTime, Utc};

/// A login session, keyed by its token in the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque random token sent to the client in the `session_token` cookie.
    pub token: String,
    /// Owner of the session.
    pub username: String,
    /// Absolute instant after which the session no longer authenticates.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// A session is still valid at exactly `expires_at` and expired strictly after it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = Session {
            token: "t".to_string(),
            username: "alice".to_string(),
            expires_at: now,
        };

        assert!(!session.is_expired_at(now - Duration::seconds(1)));
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::milliseconds(1)));
    }
}
