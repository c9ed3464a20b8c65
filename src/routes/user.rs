use crate::{
    auth::{removal_cookie, session_cookie, AuthenticatedSession, Credentials},
    error::AppError,
    routes::SuccessResponse,
    store::AppState,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// ## Responses:
/// - `200 OK`: `{username, message: "Register Success"}`.
/// - `400 Bad Request`: empty username/password, a password over 72 bytes, or an
///   undecodable body.
/// - `409 Conflict`: the username is taken.
pub async fn register(
    state: web::Data<AppState>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let identity = state
        .credentials
        .register(&credentials.username, &credentials.password)?;

    Ok(HttpResponse::Ok().json(SuccessResponse::new(&identity, "Register Success")))
}

/// Login user
///
/// Verifies the credentials, starts a new session and returns its token in the
/// `session_token` cookie. Every login creates a separate session.
///
/// ## Responses:
/// - `200 OK`: `{username, message: "Login Success"}` plus the cookie.
/// - `400 Bad Request`: empty username/password, or an undecodable body.
/// - `401 Unauthorized`: unknown user or wrong password.
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let identity = state
        .credentials
        .authenticate(&credentials.username, &credentials.password)?;
    let session = state.sessions.issue(&identity)?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&session)?)
        .json(SuccessResponse::new(&identity, "Login Success")))
}

/// Logout user
///
/// Ends only the session presented with this request; the user's other sessions
/// stay valid.
pub async fn logout(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<impl Responder, AppError> {
    state.sessions.invalidate(&session.token);

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(SuccessResponse::new(&session.identity, "Logout Success")))
}
