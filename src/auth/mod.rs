pub mod extractors;
pub mod guard;
pub mod middleware;
pub mod password;
pub mod token;

use actix_web::cookie::{time::OffsetDateTime, Cookie};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::Session;

// Re-export necessary items
pub use guard::{AuthGuard, AuthenticatedSession};
pub use middleware::AuthMiddleware;
pub use password::{
    hash_password, verify_password, MAX_BCRYPT_COST, MAX_PASSWORD_BYTES, MIN_BCRYPT_COST,
};
pub use token::generate_session_token;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Payload for both `/user/register` and `/user/login`.
///
/// Absent fields deserialize as empty strings and are then rejected by validation,
/// so a body like `{}` is an "empty fields" error rather than a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username or Password empty"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Username or Password empty"))]
    pub password: String,
}

/// Builds the `session_token` cookie for a freshly issued session.
pub fn session_cookie(session: &Session) -> Result<Cookie<'static>, AppError> {
    let expires = OffsetDateTime::from_unix_timestamp(session.expires_at.timestamp())
        .map_err(|e| AppError::InternalServerError(format!("Invalid session expiry: {}", e)))?;

    Ok(Cookie::build(SESSION_COOKIE, session.token.clone())
        .path("/")
        .http_only(true)
        .expires(expires)
        .finish())
}

/// A cookie that tells the browser to drop its `session_token`.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_credentials_validation() {
        let valid = Credentials {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let missing_password: Credentials = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        let err = AppError::from(missing_password.validate().unwrap_err());
        assert_eq!(err, AppError::InvalidInput("Username or Password empty".into()));

        let empty_username = Credentials {
            username: "".to_string(),
            password: "pw1".to_string(),
        };
        assert!(empty_username.validate().is_err());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let session = Session {
            token: "tok".to_string(),
            username: "alice".to_string(),
            expires_at: Utc.with_ymd_and_hms(2030, 1, 1, 5, 0, 0).unwrap(),
        };

        let cookie = session_cookie(&session).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(
            cookie.expires_datetime().map(|t| t.unix_timestamp()),
            Some(session.expires_at.timestamp())
        );

        let removal = removal_cookie();
        assert_eq!(removal.name(), SESSION_COOKIE);
        assert_eq!(removal.value(), "");
    }
}
