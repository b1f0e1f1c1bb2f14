//! Typed async bindings to the `zenity` command-line dialog tool.
//!
//! zendialog builds the argument list for each dialog kind, spawns zenity
//! as a subprocess and turns its stdout/exit-code contract back into typed
//! results. The interesting part is the forms dialog: zenity reports Cancel
//! and any `--extra-button` click with the same exit code and conflates the
//! button label with field output, so the submit/cancel/extra decision is
//! reconstructed from the captured reply (see [`outcome::resolve_forms`]).
//!
//! ```no_run
//! use zendialog::{FormField, FormsOutcome, Zenity};
//!
//! async fn sign_in() {
//!     let zenity = Zenity::new();
//!     let fields = [FormField::entry("Username"), FormField::password("Password")];
//!     match zenity.forms(&fields, &Default::default()).await {
//!         FormsOutcome::Submitted { values } => println!("welcome, {}", values[0]),
//!         FormsOutcome::Cancelled => {}
//!         FormsOutcome::ExtraAction => println!("help requested"),
//!     }
//! }
//! ```

pub mod args;
pub mod client;
pub mod error;
pub mod fields;
pub mod launcher;
pub mod options;
pub mod outcome;
pub mod presets;
pub mod progress;

pub use client::{Zenity, DEFAULT_PROGRAM};
pub use error::{ZenityError, ZenityResult};
pub use fields::FormField;
pub use options::{
    CalendarOptions, ColorSelectionOptions, CommonOptions, EntryOptions, FileSelectionOptions,
    FormsOptions, ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions,
    ScaleOptions, TextInfoOptions, DEFAULT_SEPARATOR,
};
pub use outcome::{FormsOutcome, RawReply};
pub use progress::{ProgressHandle, ProgressOutcome};
