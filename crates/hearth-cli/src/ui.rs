//! What the terminal allows: colored table cells and a width to clip rows to.
//!
//! Captured once in `main` after the flags are resolved; the table renderer
//! reads it through [`table_options`].

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// `COLUMNS` values narrower than this are ignored.
const MIN_TERM_WIDTH: usize = 40;

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Terminal {
    color: bool,
    width: Option<usize>,
}

impl Terminal {
    fn detect(flags: &GlobalFlags) -> Self {
        let columns = std::env::var("COLUMNS").ok();
        Self::from_env(
            flags,
            std::io::stdout().is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
            columns.as_deref(),
        )
    }

    fn from_env(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let tables = flags.format == OutputFormat::Table;
        let color = match flags.color {
            ColorMode::Always => tables,
            ColorMode::Never => false,
            ColorMode::Auto => tables && is_tty && !no_color && !flags.quiet,
        };
        let width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self { color, width }
    }
}

pub fn init(flags: &GlobalFlags) {
    let terminal = Terminal::detect(flags);
    tracing::debug!(color = terminal.color, width = ?terminal.width, "terminal detected");
    let _ = TERMINAL.set(terminal);
}

/// Options for rendering tables; plain and unclipped before [`init`] runs.
#[must_use]
pub fn table_options() -> TableOptions {
    let terminal = TERMINAL.get().copied().unwrap_or_default();
    TableOptions {
        max_width: terminal.width,
        color: terminal.color,
    }
}
