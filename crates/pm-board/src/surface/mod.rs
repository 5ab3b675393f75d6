//! Seams between the widget and the platform that displays it.

pub mod alert;
pub mod form_fields;
pub mod list_surface;
pub mod memory;
