pub mod error;
pub mod models;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::project_id::ProjectId;
pub use models::project_status::ProjectStatus;
pub use state::project_state::{Listener, ProjectState, Snapshot};
pub use state::subscription_id::SubscriptionId;
pub use validation::field_descriptor::FieldDescriptor;
pub use validation::field_value::FieldValue;
pub use validation::validate::validate;
