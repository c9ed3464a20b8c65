//! In-memory state shared by all workers.
//!
//! Every store owns its map and only exposes whole operations; callers never see
//! a lock or the underlying `DashMap`.

pub mod credentials;
pub mod sessions;
pub mod tasks;

pub use credentials::CredentialStore;
pub use sessions::SessionStore;
pub use tasks::TaskStore;

use crate::config::Config;

/// The three stores bundled for `actix_web::web::Data`.
pub struct AppState {
    pub credentials: CredentialStore,
    pub sessions: SessionStore,
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            credentials: CredentialStore::new(config.bcrypt_cost),
            sessions: SessionStore::new(config.session_ttl()),
            tasks: TaskStore::new(),
        }
    }
}
