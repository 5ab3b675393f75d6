pub mod project_state;
pub mod subscription_id;
