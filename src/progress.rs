//! Live control of a running `--progress` dialog.
//!
//! zenity reads its progress feed from stdin: a bare number moves the bar,
//! a line starting with `#` replaces the text, and closing the feed ends
//! the dialog. With `--auto-close` the dialog also leaves on reaching 100.

use tokio::io::AsyncWriteExt;

use crate::error::{ZenityError, ZenityResult};
use crate::launcher::StreamedDialog;

/// How a progress dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// Ran to completion (or auto-closed at 100).
    Completed,
    /// The user cancelled or the dialog died early.
    Cancelled,
}

/// Handle onto a running progress dialog.
///
/// Dropping the handle without calling [`finish`](Self::finish) closes the
/// feed and abandons the process; call `finish` to learn how it ended.
#[derive(Debug)]
pub struct ProgressHandle {
    dialog: StreamedDialog,
}

impl ProgressHandle {
    pub(crate) fn new(dialog: StreamedDialog) -> Self {
        Self { dialog }
    }

    /// Moves the bar to `percent`.
    pub async fn update(&mut self, percent: u8) -> ZenityResult<()> {
        self.write_line(&format!("{percent}\n")).await
    }

    /// Replaces the dialog text.
    pub async fn message(&mut self, text: &str) -> ZenityResult<()> {
        self.write_line(&format!("# {text}\n")).await
    }

    /// Moves the bar and replaces the text in one call.
    pub async fn update_with_message(&mut self, percent: u8, text: &str) -> ZenityResult<()> {
        self.update(percent).await?;
        self.message(text).await
    }

    /// Closes the feed and waits for the dialog to go away.
    pub async fn finish(mut self) -> ZenityResult<ProgressOutcome> {
        // Dropping stdin signals end of feed.
        self.dialog.stdin.take();
        let output = self
            .dialog
            .child
            .wait_with_output()
            .await
            .map_err(ZenityError::stream)?;
        if output.status.success() {
            Ok(ProgressOutcome::Completed)
        } else {
            Ok(ProgressOutcome::Cancelled)
        }
    }

    async fn write_line(&mut self, line: &str) -> ZenityResult<()> {
        let Some(stdin) = self.dialog.stdin.as_mut() else {
            return Err(ZenityError::ProgressClosed);
        };
        match stdin.write_all(line.as_bytes()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                Err(ZenityError::ProgressClosed)
            }
            Err(e) => Err(ZenityError::stream(e)),
        }
    }
}
