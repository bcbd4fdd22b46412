mod health;
mod process_project;
mod project_status;

pub use health::health_handler;
pub use process_project::{process_project_handler, USER_ID_HEADER};
pub use project_status::project_status_handler;
