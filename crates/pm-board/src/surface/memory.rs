//! Surfaces that keep everything in memory. Used by hosts that render
//! on their own schedule, and by tests.

use crate::{Alert, FieldId, FormFields, ListSurface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryListSurface {
    pub element_id: String,
    pub list_id: String,
    pub heading: String,
    pub items: Vec<String>,
    /// Number of times the item list has been replaced
    pub render_count: usize,
}

impl MemoryListSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text rendering: the heading followed by one bullet per item.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.heading);
        for item in &self.items {
            out.push_str(&format!("  - {}\n", item));
        }
        out
    }
}

impl ListSurface for MemoryListSurface {
    fn set_identity(&mut self, element_id: &str, list_id: &str) {
        self.element_id = element_id.to_string();
        self.list_id = list_id.to_string();
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    fn replace_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.render_count += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFields {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl MemoryFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(title: &str, description: &str, people: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            people: people.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.value(*field).is_empty())
    }

    fn slot(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Title => &mut self.title,
            FieldId::Description => &mut self.description,
            FieldId::People => &mut self.people,
        }
    }
}

impl FormFields for MemoryFields {
    fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Title => self.title.clone(),
            FieldId::Description => self.description.clone(),
            FieldId::People => self.people.clone(),
        }
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        *self.slot(field) = value.to_string();
    }
}

/// Records alert messages instead of showing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAlert {
    pub messages: Vec<String>,
}

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Alert for RecordingAlert {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
