//! Surfaces that draw straight onto a shared writer (stdout in the binary).

use pm_board::{Alert, ListSurface};

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::error;

/// Prints the whole list every time it is replaced.
pub struct WriterListSurface<W: Write> {
    out: Rc<RefCell<W>>,
    list_id: String,
    heading: String,
}

impl<W: Write> WriterListSurface<W> {
    pub fn new(out: Rc<RefCell<W>>) -> Self {
        Self {
            out,
            list_id: String::new(),
            heading: String::new(),
        }
    }

    fn write_list(&self, items: &[String]) -> std::io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out)?;
        writeln!(out, "{}", self.heading)?;
        if items.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for item in items {
            writeln!(out, "  - {}", item)?;
        }
        out.flush()
    }
}

impl<W: Write> ListSurface for WriterListSurface<W> {
    fn set_identity(&mut self, _element_id: &str, list_id: &str) {
        self.list_id = list_id.to_string();
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    fn replace_items(&mut self, items: Vec<String>) {
        if let Err(e) = self.write_list(&items) {
            error!("Failed to render {}: {}", self.list_id, e);
        }
    }
}

/// Writes the alert message on its own line.
pub struct WriterAlert<W: Write> {
    out: Rc<RefCell<W>>,
}

impl<W: Write> WriterAlert<W> {
    pub fn new(out: Rc<RefCell<W>>) -> Self {
        Self { out }
    }
}

impl<W: Write> Alert for WriterAlert<W> {
    fn alert(&mut self, message: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "! {}", message).and_then(|_| out.flush()) {
            error!("Failed to show alert: {}", e);
        }
    }
}
