mod auth;
mod task;

pub use auth::{health, handle_register, handle_login};
pub use task::{create_task, list_tasks, complete_task, delete_task};
