use crate::ProjectId;

use std::str::FromStr;

#[test]
fn test_project_id_display_round_trips_through_from_str() {
    let id = ProjectId::new();

    let parsed = ProjectId::from_str(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_project_id_from_str_rejects_garbage() {
    let result = ProjectId::from_str("0.123456789");

    assert!(result.is_err());
}
