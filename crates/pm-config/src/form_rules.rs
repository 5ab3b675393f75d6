use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Form constraints
pub const MAX_DESCRIPTION_MIN_LENGTH: usize = 10000;
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;

pub const MIN_TEAM_SIZE: u32 = 1;
pub const MAX_TEAM_SIZE: u32 = 1000;
pub const DEFAULT_TEAM_SIZE_MIN: u32 = 1;
pub const DEFAULT_TEAM_SIZE_MAX: u32 = 5;

/// Limits applied to the project input form.
///
/// The title is always required and has no length limit. The description
/// and team size are required and bounded by these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Minimum description length in characters
    pub description_min_length: usize,
    /// Smallest accepted team size (inclusive)
    pub team_size_min: u32,
    /// Largest accepted team size (inclusive)
    pub team_size_max: u32,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            team_size_min: DEFAULT_TEAM_SIZE_MIN,
            team_size_max: DEFAULT_TEAM_SIZE_MAX,
        }
    }
}

impl FormRules {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.description_min_length > MAX_DESCRIPTION_MIN_LENGTH {
            return Err(ConfigError::form(format!(
                "form.description_min_length must be 0-{}, got {}",
                MAX_DESCRIPTION_MIN_LENGTH, self.description_min_length
            )));
        }

        if self.team_size_min < MIN_TEAM_SIZE || self.team_size_min > MAX_TEAM_SIZE {
            return Err(ConfigError::form(format!(
                "form.team_size_min must be {}-{}, got {}",
                MIN_TEAM_SIZE, MAX_TEAM_SIZE, self.team_size_min
            )));
        }

        if self.team_size_max < MIN_TEAM_SIZE || self.team_size_max > MAX_TEAM_SIZE {
            return Err(ConfigError::form(format!(
                "form.team_size_max must be {}-{}, got {}",
                MIN_TEAM_SIZE, MAX_TEAM_SIZE, self.team_size_max
            )));
        }

        if self.team_size_min > self.team_size_max {
            return Err(ConfigError::form(format!(
                "form.team_size_min ({}) must not exceed form.team_size_max ({})",
                self.team_size_min, self.team_size_max
            )));
        }

        Ok(())
    }
}
