//! Wires the form and the two list views to one project store.

use crate::{Alert, BoardResult, FormFields, ListKind, ListSurface, ListView, ProjectInput};

use pm_config::FormRules;
use pm_core::{ProjectId, ProjectState};

use std::cell::RefCell;
use std::rc::Rc;

pub struct ProjectBoard<F: FormFields, A: Alert, S: ListSurface> {
    state: ProjectState,
    input: ProjectInput<F, A>,
    active: Rc<RefCell<ListView<S>>>,
    finished: Rc<RefCell<ListView<S>>>,
}

impl<F, A, S> ProjectBoard<F, A, S>
where
    F: FormFields,
    A: Alert,
    S: ListSurface + 'static,
{
    /// Build the form and attach the active and finished lists, in that order.
    pub fn new(
        fields: F,
        alert: A,
        active_surface: S,
        finished_surface: S,
        rules: FormRules,
    ) -> Self {
        let mut state = ProjectState::new();
        let input = ProjectInput::new(fields, alert, rules);
        let active = ListView::new(ListKind::Active, active_surface).attach(&mut state);
        let finished = ListView::new(ListKind::Finished, finished_surface).attach(&mut state);

        Self {
            state,
            input,
            active,
            finished,
        }
    }

    pub fn submit(&mut self) -> BoardResult<ProjectId> {
        self.input.submit(&mut self.state)
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    pub fn input(&self) -> &ProjectInput<F, A> {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput<F, A> {
        &mut self.input
    }

    /// Shared handle to one list view. A borrow held across `submit` makes
    /// that view skip the redraw; the store still records the project.
    pub fn list(&self, kind: ListKind) -> Rc<RefCell<ListView<S>>> {
        match kind {
            ListKind::Active => Rc::clone(&self.active),
            ListKind::Finished => Rc::clone(&self.finished),
        }
    }
}
