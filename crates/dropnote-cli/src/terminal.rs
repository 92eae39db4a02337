//! Terminal front end: notices go to stderr so stdout stays parseable.

use dropnote_core::{Frontend, Notice};

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalFrontend;

impl Frontend for TerminalFrontend {
    fn notify(&self, notice: Notice) {
        eprintln!("{notice}");
    }
}
