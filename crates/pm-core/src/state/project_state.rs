//! In-memory project store with synchronous change notification.
//!
//! The store is constructed explicitly and handed to whichever components
//! need it. Every successful `add_project` calls each listener, in
//! registration order, with its own copy of the full project list.

use crate::{Project, ProjectId, ProjectStatus, SubscriptionId};

use log::{debug, trace};

/// Owned copy of the project list at the moment of notification
pub type Snapshot = Vec<Project>;

/// Callback invoked with a snapshot after every addition
pub type Listener = Box<dyn FnMut(Snapshot)>;

#[derive(Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The same closure may be registered more than once.
    pub fn add_listener<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Snapshot) + 'static,
    {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));

        debug!("Listener registered: {} ({} total)", id, self.listeners.len());
        id
    }

    /// Remove a listener. Returns false if the handle was not registered.
    pub fn remove_listener(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        let removed = self.listeners.len() != before;

        if removed {
            debug!("Listener removed: {} ({} left)", id, self.listeners.len());
        }
        removed
    }

    /// Append a new active project and notify every listener.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        team_size: u32,
    ) -> ProjectId {
        let project = Project::new(title.into(), description.into(), team_size);
        let id = project.id;

        debug!(
            "Project added: {} '{}' (team size {})",
            id, project.title, project.team_size
        );
        self.projects.push(project);

        for (subscription, listener) in self.listeners.iter_mut() {
            trace!("Notifying {} with {} projects", subscription, self.projects.len());
            listener(self.projects.clone());
        }

        id
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn snapshot(&self) -> Snapshot {
        self.projects.clone()
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .collect()
    }

    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectState")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .field("next_subscription", &self.next_subscription)
            .finish()
    }
}
