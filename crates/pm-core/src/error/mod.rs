use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project id: {value} {location}")]
    InvalidProjectId {
        value: String,
        location: ErrorLocation,
        #[source]
        source: uuid::Error,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
