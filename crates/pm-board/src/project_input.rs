//! Input form: gathers the three fields, validates them and hands valid
//! entries to the store.

use crate::{Alert, BoardError, BoardResult, FieldId, FormFields, INVALID_INPUT_MESSAGE};

use pm_config::FormRules;
use pm_core::{FieldDescriptor, FieldValue, ProjectId, ProjectState, validate};

use log::info;

/// Validated form contents
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub title: String,
    pub description: String,
    pub team_size: u32,
}

pub struct ProjectInput<F: FormFields, A: Alert> {
    fields: F,
    alert: A,
    rules: FormRules,
}

impl<F: FormFields, A: Alert> ProjectInput<F, A> {
    pub fn new(fields: F, alert: A, rules: FormRules) -> Self {
        Self {
            fields,
            alert,
            rules,
        }
    }

    /// Handle a form submission.
    ///
    /// All-or-nothing: on invalid input the user is alerted and neither the
    /// store nor the fields are touched. On success the project is added and
    /// the fields are cleared.
    pub fn submit(&mut self, state: &mut ProjectState) -> BoardResult<ProjectId> {
        let input = match self.gather_user_input() {
            Ok(input) => input,
            Err(e) => {
                info!("Submission rejected: {}", e);
                self.alert.alert(INVALID_INPUT_MESSAGE);
                return Err(e);
            }
        };

        let id = state.add_project(input.title, input.description, input.team_size);
        info!("Project {} created ({} total)", id, state.len());

        self.clear_inputs();

        Ok(id)
    }

    /// Read and validate the three fields without side effects.
    pub fn gather_user_input(&self) -> BoardResult<UserInput> {
        let title = self.fields.value(FieldId::Title);
        let description = self.fields.value(FieldId::Description);
        let people = FieldValue::coerce_number(&self.fields.value(FieldId::People));

        if !validate(&FieldDescriptor::text(title.as_str()).required()) {
            return Err(BoardError::invalid_input(FieldId::Title));
        }

        let description_rule = FieldDescriptor::text(description.as_str())
            .required()
            .min(self.rules.description_min_length as f64);
        if !validate(&description_rule) {
            return Err(BoardError::invalid_input(FieldId::Description));
        }

        let people_rule = FieldDescriptor::new(people.clone())
            .required()
            .min(f64::from(self.rules.team_size_min))
            .max(f64::from(self.rules.team_size_max));
        if !validate(&people_rule) {
            return Err(BoardError::invalid_input(FieldId::People));
        }

        let team_size = people
            .as_number()
            .and_then(whole_team_size)
            .ok_or_else(|| BoardError::invalid_input(FieldId::People))?;

        Ok(UserInput {
            title,
            description,
            team_size,
        })
    }

    fn clear_inputs(&mut self) {
        for field in FieldId::ALL {
            self.fields.clear(field);
        }
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }
}

/// Team sizes are whole numbers; `2.5` people passes the range check but is rejected here.
fn whole_team_size(value: f64) -> Option<u32> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}
