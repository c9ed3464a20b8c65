pub mod session;
pub mod task;
pub mod user;

pub use session::Session;
pub use task::{Task, TaskInput};
pub use user::{Identity, User};
