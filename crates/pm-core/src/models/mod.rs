pub mod project;
pub mod project_id;
pub mod project_status;
