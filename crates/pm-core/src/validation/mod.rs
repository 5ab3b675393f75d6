pub mod field_descriptor;
pub mod field_value;
pub mod validate;
