use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::AuthenticatedSession;
use crate::error::AppError;

/// Hands the session verified by `AuthMiddleware` to a handler as a typed argument.
///
/// Fails with `Unauthorized` when the middleware did not run for this route.
impl FromRequest for AuthenticatedSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedSession>().cloned() {
            Some(session) => ready(Ok(session)),
            None => {
                let err = AppError::Unauthorized(
                    "no verified session on request; is AuthMiddleware applied?".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
