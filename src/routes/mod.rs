pub mod todo;
pub mod user;

use actix_web::{web, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::AuthMiddleware;
use crate::error::AppError;
use crate::models::Identity;

/// Body of every successful user and todo mutation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub username: String,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(identity: &Identity, message: impl Into<String>) -> Self {
        Self {
            username: identity.username().to_owned(),
            message: message.into(),
        }
    }
}

/// Session checks sit on the individual routes, so a wrong method is answered
/// with 405 before any cookie is looked at.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(
                web::resource("/register")
                    .route(web::post().to(user::register))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/login")
                    .route(web::post().to(user::login))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/logout")
                    .route(web::get().to(user::logout).wrap(AuthMiddleware))
                    .default_service(web::to(method_not_allowed)),
            ),
    )
    .service(
        web::scope("/todo")
            .service(
                web::resource("/create")
                    .route(web::post().to(todo::create).wrap(AuthMiddleware))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/read")
                    .route(web::post().to(todo::read).wrap(AuthMiddleware))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/reset")
                    .route(web::get().to(todo::reset))
                    .route(web::post().to(todo::reset))
                    .default_service(web::to(method_not_allowed)),
            ),
    );
}

/// Maps JSON body failures to `AppError::DecodeError` instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("undecodable body on {}: {}", req.path(), err);
        AppError::from(err).into()
    })
}

async fn method_not_allowed(req: HttpRequest) -> Result<&'static str, AppError> {
    log::debug!("{} not allowed on {}", req.method(), req.path());
    Err(AppError::MethodNotAllowed("Method is not allowed!".into()))
}
