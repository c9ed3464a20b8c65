use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::debug;

use crate::auth::{AuthGuard, SESSION_COOKIE};
use crate::error::AppError;
use crate::store::AppState;

/// Rejects requests without a live `session_token` cookie.
///
/// On success the [`AuthenticatedSession`](crate::auth::AuthenticatedSession) is stored
/// in the request extensions for the extractor to pick up. Rejections are answered
/// here with the JSON error body, so the wrapped service never runs.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_owned());

        let verdict = match req.app_data::<web::Data<AppState>>() {
            Some(state) => AuthGuard::new(&state.sessions).authorize(token.as_deref()),
            None => Err(AppError::InternalServerError(
                "application state is not configured".into(),
            )),
        };

        match verdict {
            Ok(session) => {
                req.extensions_mut().insert(session);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(app_err) => {
                debug!("rejected {} {}: {}", req.method(), req.path(), app_err);
                let res = req.error_response(app_err).map_into_right_body();
                Box::pin(ready(Ok(res)))
            }
        }
    }
}
