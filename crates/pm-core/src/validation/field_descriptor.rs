use crate::FieldValue;

/// Constraints for one field, built per validation call.
///
/// Bounds are inclusive. For text values they apply to the length in
/// characters, for numbers to the value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub value: FieldValue,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldDescriptor {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// The quantity bounds are compared against.
    pub(crate) fn measure(&self) -> f64 {
        match &self.value {
            FieldValue::Text(text) => text.chars().count() as f64,
            FieldValue::Number(number) => *number,
        }
    }

    pub fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}
