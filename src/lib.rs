#![doc = "The `todoforge` library crate."]
#![doc = ""]
#![doc = "Credential, session and per-user task stores, the cookie-session auth layer,"]
#![doc = "route configuration and error handling for the todoforge service."]
#![doc = "The binary (`main.rs`) only reads configuration and runs the server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::error::AppError;
pub use crate::store::AppState;
