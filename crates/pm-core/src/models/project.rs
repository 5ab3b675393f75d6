//! Project entity - a single tracked entry on the board.

use crate::{ProjectId, ProjectStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project entered through the input form.
/// Records are never edited once created; the store only appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned to the project
    pub team_size: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new active project with a fresh identifier
    pub fn new(title: String, description: String, team_size: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title,
            description,
            team_size,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }
}
