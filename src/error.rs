//! Error types for dialog invocations.

use std::io;

use thiserror::Error;

/// Errors surfaced while driving the external dialog program.
///
/// User dismissal is never an error; it comes back as data (`None`, `false`
/// or a cancel outcome) from the dialog methods themselves.
#[derive(Error, Debug)]
pub enum ZenityError {
    /// The dialog program could not be started at all.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to a running dialog process failed.
    #[error("dialog process i/o failed: {source}")]
    Stream {
        #[source]
        source: io::Error,
    },

    /// A dialog exited with a code outside the documented contract.
    #[error("dialog exited with unexpected code {code}")]
    UnexpectedExit { code: i32 },

    /// Output that must parse into a typed value did not.
    #[error("could not parse {what} from dialog output {raw:?}")]
    MalformedOutput { what: &'static str, raw: String },

    /// A progress update was sent after the dialog went away.
    #[error("progress dialog is no longer accepting updates")]
    ProgressClosed,
}

impl ZenityError {
    /// Create a launch error for the given program.
    pub fn launch(program: impl Into<String>, source: io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }

    /// Create a stream error from a pipe failure.
    pub fn stream(source: io::Error) -> Self {
        Self::Stream { source }
    }

    /// Create a parse error for output that should have been typed.
    pub fn malformed(what: &'static str, raw: impl Into<String>) -> Self {
        Self::MalformedOutput {
            what,
            raw: raw.into(),
        }
    }
}

/// Result type for dialog operations.
pub type ZenityResult<T> = Result<T, ZenityError>;
