use std::fmt;

/// The three inputs of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    Description,
    People,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Title, FieldId::Description, FieldId::People];

    /// Lookup key of the input inside the form
    pub fn key(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw text access to the form inputs.
pub trait FormFields {
    fn value(&self, field: FieldId) -> String;

    fn set_value(&mut self, field: FieldId, value: &str);

    fn clear(&mut self, field: FieldId) {
        self.set_value(field, "");
    }
}
