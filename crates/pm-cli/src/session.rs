//! Interactive session: prompts for the three form fields and submits them,
//! while both list views redraw onto the same output.

use crate::error::Result as CliResult;
use crate::terminal::{WriterAlert, WriterListSurface};

use pm_board::{FieldId, FormFields, MemoryFields, ProjectBoard};
use pm_config::FormRules;
use pm_core::Project;

use std::borrow::Cow;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use log::{debug, info, warn};

const QUIT_COMMAND: &str = ":q";

/// What happened during a session
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub projects: Vec<Project>,
}

enum Entry {
    Keep,
    Value(String),
    Quit,
}

/// Run the session until end of input or `:q`.
///
/// An empty answer keeps the field's current value, so after a rejected
/// submission only the offending field needs retyping.
pub fn run_session<R, W>(
    mut reader: R,
    out: Rc<RefCell<W>>,
    rules: FormRules,
) -> CliResult<SessionSummary>
where
    R: BufRead,
    W: Write + 'static,
{
    let mut board = ProjectBoard::new(
        MemoryFields::new(),
        WriterAlert::new(Rc::clone(&out)),
        WriterListSurface::new(Rc::clone(&out)),
        WriterListSurface::new(Rc::clone(&out)),
        rules,
    );
    let mut summary = SessionSummary::default();

    writeln!(
        out.borrow_mut(),
        "Enter projects ('{}' to quit). An empty answer keeps the current value.",
        QUIT_COMMAND
    )?;
    info!("Session started");

    'session: loop {
        for field in FieldId::ALL {
            let current = board.input().fields().value(field);
            prompt(&out, field, &current)?;

            match read_entry(&mut reader)? {
                Entry::Quit => break 'session,
                Entry::Keep => {}
                Entry::Value(value) => board.input_mut().fields_mut().set_value(field, &value),
            }
        }

        match board.submit() {
            Ok(id) => {
                debug!("Session accepted {}", id);
                summary.accepted += 1;
            }
            Err(_) => summary.rejected += 1,
        }
    }

    summary.projects = board.state().snapshot();
    writeln!(
        out.borrow_mut(),
        "\n{} accepted, {} rejected",
        summary.accepted, summary.rejected
    )?;
    info!(
        "Session ended: {} accepted, {} rejected",
        summary.accepted, summary.rejected
    );

    Ok(summary)
}

fn prompt<W: Write>(out: &Rc<RefCell<W>>, field: FieldId, current: &str) -> CliResult<()> {
    let mut out = out.borrow_mut();
    if current.is_empty() {
        write!(out, "{}: ", field.key())?;
    } else {
        write!(out, "{} [{}]: ", field.key(), current)?;
    }
    out.flush()?;
    Ok(())
}

fn read_entry<R: BufRead>(reader: &mut R) -> CliResult<Entry> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(Entry::Quit);
    }

    let line = String::from_utf8_lossy(&bytes);
    if matches!(line, Cow::Owned(_)) {
        warn!("Input line was not valid UTF-8; invalid bytes replaced");
    }

    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim() == QUIT_COMMAND {
        return Ok(Entry::Quit);
    }
    if line.is_empty() {
        return Ok(Entry::Keep);
    }

    Ok(Entry::Value(line.to_string()))
}
