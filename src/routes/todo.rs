use crate::{
    auth::{AuthGuard, AuthenticatedSession, SESSION_COOKIE},
    error::AppError,
    models::TaskInput,
    routes::SuccessResponse,
    store::AppState,
};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::debug;

/// Adds a task to the end of the caller's list.
///
/// ## Request Body:
/// `{"task": "...", "done": false}`; `description` is accepted in place of `task`.
///
/// ## Responses:
/// - `200 OK`: `{username, message: "Task <task> added!"}`.
/// - `400 Bad Request`: undecodable body.
/// - `401 Unauthorized`: missing, unknown or expired session.
pub async fn create(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = state.tasks.add(&session.identity, task_data.into_inner());

    Ok(HttpResponse::Ok().json(SuccessResponse::new(
        &session.identity,
        format!("Task {} added!", task.description),
    )))
}

/// Returns the caller's tasks in the order they were added.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task`.
/// - `401 Unauthorized`: missing, unknown or expired session.
/// - `404 Not Found`: the list is empty.
pub async fn read(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.list(&session.identity)?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Clears the caller's list when the request carries a live session cookie.
///
/// Needs no authentication and always answers 200; without a valid session there is
/// nothing to clear and the body is empty.
pub async fn reset(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_owned());

    match AuthGuard::new(&state.sessions).authorize(token.as_deref()) {
        Ok(session) => {
            state.tasks.clear(&session.identity);
            HttpResponse::Ok().json(SuccessResponse::new(
                &session.identity,
                "Clear ToDo Success",
            ))
        }
        Err(err) => {
            debug!("reset without a usable session: {}", err);
            HttpResponse::Ok().finish()
        }
    }
}
