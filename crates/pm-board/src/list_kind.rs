use std::fmt;

/// Which of the two project lists a view represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Identifier of the list's container element, e.g. `active-projects`
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Identifier of the item list inside the container, e.g. `active-projects-list`
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
