use crate::{Cli, Commands};

use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_parses_as_session_default() {
    let cli = Cli::try_parse_from(["pm"]).unwrap();

    assert!(cli.command.is_none());
}

#[test]
fn test_add_parses_fields() {
    let cli = Cli::try_parse_from([
        "pm",
        "add",
        "--title",
        "Build API",
        "--description",
        "Short",
        "--people",
        "3",
        "--json",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Add {
            title: "Build API".to_string(),
            description: "Short".to_string(),
            people: "3".to_string(),
            json: true,
            pretty: false,
        })
    );
}

#[test]
fn test_validate_accepts_negative_bounds() {
    let cli = Cli::try_parse_from(["pm", "validate", "-2", "--numeric", "--min", "-3"]).unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Validate {
            value: "-2".to_string(),
            required: false,
            min: Some(-3.0),
            max: None,
            numeric: true,
        })
    );
}

#[test]
fn test_add_requires_title() {
    let result = Cli::try_parse_from(["pm", "add", "--description", "Short", "--people", "3"]);

    assert!(result.is_err());
}

#[test]
fn test_json_is_rejected_outside_add() {
    assert!(Cli::try_parse_from(["pm", "session", "--json"]).is_err());
    assert!(Cli::try_parse_from(["pm", "validate", "abcd", "--json"]).is_err());
    assert!(Cli::try_parse_from(["pm", "--json"]).is_err());
}

#[test]
fn test_pretty_requires_json() {
    let result = Cli::try_parse_from([
        "pm",
        "add",
        "--title",
        "Build API",
        "--description",
        "Short",
        "--people",
        "3",
        "--pretty",
    ]);

    assert!(result.is_err());
}
