use crate::cursor::{Checkpoint, Cursor};
use std::fmt;
use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};
use thiserror::Error;

/// A positioned match failure.
///
/// Carries an owned copy of the cursor's source label, a formatted message,
/// and a snapshot of the scan state at the failure point. Rendering is
/// purely presentational and safe to repeat.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct ParseError {
    pub source_name: String,
    pub message: String,
    pub position: Checkpoint,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}: {}",
            self.source_name,
            self.position.row,
            self.position.col,
            self.position.tab_col,
            self.message
        )
    }
}

impl ParseError {
    /// Build an error at the cursor's current position.
    pub fn new(cursor: &Cursor, message: impl Into<String>) -> Self {
        ParseError {
            source_name: cursor.label().to_string(),
            message: message.into(),
            position: cursor.save(),
        }
    }

    /// Write the rendered error with the `name:row:col-tab:` prefix in bold.
    pub fn write_colored(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(
            out,
            "{}:{}:{}-{}:",
            self.source_name, self.position.row, self.position.col, self.position.tab_col
        )?;
        out.reset()?;
        writeln!(out, " {}", self.message)
    }

    /// Print the rendered error to stderr, bold when stderr is a terminal.
    pub fn eprint(&self) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = self.write_colored(&mut stderr);
    }
}

/// Top-level error for the parse entry points.
///
/// Match failures pass through unchanged; only the file entry point adds
/// the `Io` case for a reader that could not be drained into the buffer.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read {name}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}
