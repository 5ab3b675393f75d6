//! One-shot command handlers. Each returns whether the command succeeded;
//! output goes to the writers it is given.

use crate::error::Result as CliResult;

use pm_board::{ListKind, MemoryFields, MemoryListSurface, ProjectBoard, RecordingAlert};
use pm_config::FormRules;
use pm_core::{FieldDescriptor, FieldValue, Project, validate};

use std::io::Write;

/// Options shared by commands that print projects
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormat {
    pub json: bool,
    pub pretty: bool,
}

/// Submit one project into a fresh board and print both lists.
pub fn add_project<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    rules: FormRules,
    fields: MemoryFields,
    format: OutputFormat,
) -> CliResult<bool> {
    let mut board = ProjectBoard::new(
        fields,
        RecordingAlert::new(),
        MemoryListSurface::new(),
        MemoryListSurface::new(),
        rules,
    );

    if board.submit().is_err() {
        for message in &board.input().alert().messages {
            writeln!(err, "{}", message)?;
        }
        return Ok(false);
    }

    if format.json {
        write_json(out, board.state().projects(), format.pretty)?;
    } else {
        for kind in [ListKind::Active, ListKind::Finished] {
            let list = board.list(kind);
            write!(out, "{}", list.borrow().surface().render())?;
        }
    }

    Ok(true)
}

/// Run the validator on one value and print `valid` or `invalid`.
pub fn validate_value<O: Write>(
    out: &mut O,
    value: &str,
    required: bool,
    min: Option<f64>,
    max: Option<f64>,
    numeric: bool,
) -> CliResult<bool> {
    let value = if numeric {
        FieldValue::coerce_number(value)
    } else {
        FieldValue::from(value)
    };

    let descriptor = FieldDescriptor {
        value,
        required,
        min,
        max,
    };
    let valid = validate(&descriptor);

    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}

fn write_json<O: Write>(out: &mut O, projects: &[Project], pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(projects)?
    } else {
        serde_json::to_string(projects)?
    };

    writeln!(out, "{}", json)?;
    Ok(())
}
