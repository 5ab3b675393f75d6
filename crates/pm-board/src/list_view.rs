//! Rendering subscriber: redraws its whole list on every store change.

use crate::{ListKind, ListSurface};

use pm_core::{Project, ProjectState, Snapshot, SubscriptionId};

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};

pub struct ListView<S: ListSurface> {
    kind: ListKind,
    surface: S,
    assigned_projects: Vec<Project>,
    subscription: Option<SubscriptionId>,
}

impl<S: ListSurface + 'static> ListView<S> {
    /// Create the view and draw its static content (identifiers and heading).
    /// The item list stays empty until the view is attached and the store changes.
    pub fn new(kind: ListKind, mut surface: S) -> Self {
        surface.set_identity(&kind.element_id(), &kind.list_id());
        surface.set_heading(&kind.heading());

        Self {
            kind,
            surface,
            assigned_projects: Vec::new(),
            subscription: None,
        }
    }

    /// Register the view with the store.
    ///
    /// The listener holds a shared handle to the view, so the view lives as
    /// long as it stays subscribed.
    pub fn attach(self, state: &mut ProjectState) -> Rc<RefCell<Self>> {
        let view = Rc::new(RefCell::new(self));

        let listener_view = Rc::clone(&view);
        let id = state.add_listener(move |snapshot| match listener_view.try_borrow_mut() {
            Ok(mut view) => view.assign(snapshot),
            Err(e) => error!("List view still borrowed, skipping redraw: {}", e),
        });

        {
            let mut attached = view.borrow_mut();
            debug!("{} list attached as {}", attached.kind, id);
            attached.subscription = Some(id);
        }

        view
    }

    /// Stop receiving updates. Returns false if the view was not attached.
    pub fn detach(&mut self, state: &mut ProjectState) -> bool {
        match self.subscription.take() {
            Some(id) => state.remove_listener(id),
            None => false,
        }
    }

    fn assign(&mut self, projects: Snapshot) {
        self.assigned_projects = projects;
        self.render_projects();
    }

    fn render_projects(&mut self) {
        let items = self
            .assigned_projects
            .iter()
            .map(|project| project.title.clone())
            .collect();

        self.surface.replace_items(items);
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn assigned_projects(&self) -> &[Project] {
        &self.assigned_projects
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
