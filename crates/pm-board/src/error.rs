use crate::FieldId;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// A form field failed validation. The user only ever sees one generic
    /// message; the field is kept for logs.
    #[error("Invalid input in field '{field}' {location}")]
    InvalidInput {
        field: FieldId,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn invalid_input(field: FieldId) -> Self {
        BoardError::InvalidInput {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, BoardError>;
