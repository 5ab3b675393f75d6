use crate::handlers::{OutputFormat, add_project, validate_value};

use pm_board::{INVALID_INPUT_MESSAGE, MemoryFields};
use pm_config::FormRules;

use googletest::prelude::*;

fn run_add(fields: MemoryFields, format: OutputFormat) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = add_project(&mut out, &mut err, FormRules::default(), fields, format).unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn given_valid_fields_when_add_then_both_lists_printed() {
    let (ok, out, err) = run_add(
        MemoryFields::with_values("Build API", "Short", "3"),
        OutputFormat::default(),
    );

    assert_that!(ok, eq(true));
    assert_that!(
        out,
        eq("ACTIVE PROJECTS\n  - Build API\nFINISHED PROJECTS\n  - Build API\n")
    );
    assert_that!(err, eq(""));
}

#[test]
fn given_valid_fields_when_add_with_json_then_snapshot_printed() {
    let (ok, out, _) = run_add(
        MemoryFields::with_values("Build API", "Short", "3"),
        OutputFormat {
            json: true,
            pretty: false,
        },
    );

    assert_that!(ok, eq(true));
    let projects: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_that!(projects[0]["title"].as_str(), some(eq("Build API")));
    assert_that!(projects[0]["team_size"].as_u64(), some(eq(3)));
    assert_that!(projects[0]["status"].as_str(), some(eq("active")));
}

#[test]
fn given_invalid_people_when_add_then_alert_on_err_and_nothing_printed() {
    let (ok, out, err) = run_add(
        MemoryFields::with_values("Build API", "Short", "6"),
        OutputFormat::default(),
    );

    assert_that!(ok, eq(false));
    assert_that!(out, eq(""));
    assert_that!(err, eq(&format!("{}\n", INVALID_INPUT_MESSAGE)));
}

#[test]
fn given_numeric_value_in_range_when_validate_then_valid() {
    let mut out = Vec::new();

    let valid = validate_value(&mut out, "3", true, Some(1.0), Some(5.0), true).unwrap();

    assert_that!(valid, eq(true));
    assert_that!(String::from_utf8(out).unwrap(), eq("valid\n"));
}

#[test]
fn given_short_text_when_validate_with_min_then_invalid() {
    let mut out = Vec::new();

    let valid = validate_value(&mut out, "abcd", true, Some(5.0), None, false).unwrap();

    assert_that!(valid, eq(false));
    assert_that!(String::from_utf8(out).unwrap(), eq("invalid\n"));
}
