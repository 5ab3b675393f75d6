//! Project board widget: an input form feeding a project store, and list
//! views that redraw whenever the store changes.
//!
//! The host platform is reached only through the traits in [`surface`].

pub mod board;
pub mod error;
pub mod list_kind;
pub mod list_view;
pub mod project_input;
pub mod surface;


pub use board::ProjectBoard;
pub use error::{BoardError, Result as BoardResult};
pub use list_kind::ListKind;
pub use list_view::ListView;
pub use project_input::{ProjectInput, UserInput};
pub use surface::alert::Alert;
pub use surface::form_fields::{FieldId, FormFields};
pub use surface::list_surface::ListSurface;
pub use surface::memory::{MemoryFields, MemoryListSurface, RecordingAlert};

/// The only message shown to the user when a submission is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input, please try again!";
