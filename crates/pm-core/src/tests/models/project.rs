use crate::{Project, ProjectStatus};

#[test]
fn test_project_new() {
    let project = Project::new("Build API".to_string(), "Short".to_string(), 3);

    assert_eq!(project.title, "Build API");
    assert_eq!(project.description, "Short");
    assert_eq!(project.team_size, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
    assert!(!project.is_finished());
}

#[test]
fn test_project_ids_differ() {
    let first = Project::new("A".to_string(), "First one".to_string(), 1);
    let second = Project::new("A".to_string(), "First one".to_string(), 1);

    assert_ne!(first.id, second.id);
}

#[test]
fn test_project_is_finished() {
    let mut project = Project::new("Test".to_string(), "Testing".to_string(), 2);

    project.status = ProjectStatus::Finished;
    assert!(project.is_finished());
    assert!(!project.is_active());
}

#[test]
fn test_project_serializes_status_as_snake_case() {
    let project = Project::new("Test".to_string(), "Testing".to_string(), 2);

    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["status"], "active");
    assert_eq!(json["team_size"], 2);
    assert_eq!(json["id"], project.id.to_string());
}
