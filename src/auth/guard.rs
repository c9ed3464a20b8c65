use crate::error::AppError;
use crate::models::Identity;
use crate::store::SessionStore;

/// A request's verified session: who the caller is and which token proved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub identity: Identity,
    pub token: String,
}

/// Turns an inbound session token into an [`AuthenticatedSession`].
///
/// Holds nothing but a borrow of the session store; it never writes to any store
/// other than the lazy purge `SessionStore::resolve` performs on expired tokens.
#[derive(Clone, Copy)]
pub struct AuthGuard<'a> {
    sessions: &'a SessionStore,
}

impl<'a> AuthGuard<'a> {
    pub fn new(sessions: &'a SessionStore) -> Self {
        Self { sessions }
    }

    pub fn authorize(&self, token: Option<&str>) -> Result<AuthenticatedSession, AppError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("session token missing".into()))?;

        let identity = self.sessions.resolve(token)?;
        Ok(AuthenticatedSession {
            identity,
            token: token.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MIN_BCRYPT_COST;
    use crate::store::CredentialStore;
    use chrono::{Duration, Utc};

    #[test]
    fn test_authorize_valid_token() {
        let credentials = CredentialStore::new(MIN_BCRYPT_COST);
        let sessions = SessionStore::new(Duration::hours(5));
        let alice = credentials.register("alice", "pw1").unwrap();
        let session = sessions.issue(&alice).unwrap();

        let verified = AuthGuard::new(&sessions)
            .authorize(Some(session.token.as_str()))
            .unwrap();

        assert_eq!(verified.identity, alice);
        assert_eq!(verified.token, session.token);
    }

    #[test]
    fn test_authorize_rejects_missing_unknown_and_expired() {
        let sessions = SessionStore::new(Duration::hours(5));
        let guard = AuthGuard::new(&sessions);

        assert_eq!(
            guard.authorize(None),
            Err(AppError::Unauthorized("session token missing".into()))
        );
        assert_eq!(
            guard.authorize(Some("")),
            Err(AppError::Unauthorized("session token missing".into()))
        );
        assert!(matches!(
            guard.authorize(Some("forged")),
            Err(AppError::Unauthorized(_))
        ));

        let stale = sessions
            .issue_at(&Identity::new("alice"), Utc::now() - Duration::hours(6))
            .unwrap();
        assert!(matches!(
            guard.authorize(Some(stale.token.as_str())),
            Err(AppError::Unauthorized(_))
        ));
    }
}
