//! Subprocess seam between dialog methods and the operating system.
//!
//! Everything that actually spawns lives behind [`DialogLauncher`] so the
//! argument builders and outcome resolvers stay pure and the client can be
//! exercised against a scripted launcher in tests.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tracing::debug;

use crate::error::{ZenityError, ZenityResult};
use crate::outcome::RawReply;

/// Environment overrides applied to every dialog invocation.
///
/// zenity 4 crashes inside GSettings on macOS when no schema is compiled;
/// forcing the in-memory backend sidesteps that. Harmless on other
/// platforms. Overrides are merged over the inherited environment and play
/// no part in outcome decisions.
pub fn gtk_workaround_env() -> Vec<(String, String)> {
    vec![
        ("GSETTINGS_BACKEND".to_string(), "memory".to_string()),
        ("GSETTINGS_SCHEMA_DIR".to_string(), "/dev/null".to_string()),
        ("G_MESSAGES_DEBUG".to_string(), String::new()),
    ]
}

/// One dialog invocation, fully described.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    /// Body written to the child's stdin before closing it (text viewers).
    pub stdin_payload: Option<String>,
}

/// A live streaming dialog: the input feed plus the process to await.
#[derive(Debug)]
pub struct StreamedDialog {
    pub stdin: Option<ChildStdin>,
    pub child: Child,
}

/// Spawning seam for dialog processes.
#[async_trait]
pub trait DialogLauncher: Send + Sync {
    /// Runs the dialog to completion and captures exit code plus trimmed
    /// stdout. stderr is discarded; GTK logs freely there.
    async fn capture(&self, req: LaunchRequest) -> ZenityResult<RawReply>;

    /// Spawns the dialog and hands back the live process for feeding.
    async fn stream(&self, req: LaunchRequest) -> ZenityResult<StreamedDialog>;
}

/// Launcher over real processes via tokio.
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher;

#[async_trait]
impl DialogLauncher for SystemLauncher {
    async fn capture(&self, req: LaunchRequest) -> ZenityResult<RawReply> {
        let mut child = spawn(&req)?;
        if let Some(payload) = &req.stdin_payload {
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(payload.as_bytes())
                    .await
                    .map_err(ZenityError::stream)?;
            }
        }
        let output = child
            .wait_with_output()
            .await
            .map_err(ZenityError::stream)?;
        let reply = RawReply {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        };
        debug!(
            program = %req.program,
            exit_code = reply.exit_code,
            "dialog finished"
        );
        Ok(reply)
    }

    async fn stream(&self, req: LaunchRequest) -> ZenityResult<StreamedDialog> {
        let mut child = spawn(&req)?;
        let stdin = child.stdin.take();
        Ok(StreamedDialog { stdin, child })
    }
}

fn spawn(req: &LaunchRequest) -> ZenityResult<Child> {
    let mut command = Command::new(&req.program);
    command.args(&req.args);
    for (key, value) in &req.env {
        command.env(key, value);
    }
    command.stdin(std::process::Stdio::piped());
    command.stdout(std::process::Stdio::piped());
    command.stderr(std::process::Stdio::null());
    debug!(program = %req.program, args = ?req.args, "launching dialog");
    command
        .spawn()
        .map_err(|e| ZenityError::launch(&req.program, e))
}

/// Scripted launcher for unit tests: records every request and plays back
/// queued replies.
#[cfg(test)]
pub(crate) struct RecordingLauncher {
    pub requests: std::sync::Mutex<Vec<LaunchRequest>>,
    replies: std::sync::Mutex<std::collections::VecDeque<ZenityResult<RawReply>>>,
}

#[cfg(test)]
impl RecordingLauncher {
    pub fn new() -> Self {
        Self {
            requests: std::sync::Mutex::new(Vec::new()),
            replies: std::sync::Mutex::new(std::collections::VecDeque::new()),
        }
    }

    pub fn reply_with(self, exit_code: i32, stdout: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Ok(RawReply::new(exit_code, stdout)));
        self
    }

    pub fn fail_next(self) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Err(ZenityError::launch(
                "zenity",
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing binary"),
            )));
        self
    }

    pub fn last_request(&self) -> LaunchRequest {
        self.requests
            .lock()
            .expect("requests lock")
            .last()
            .cloned()
            .expect("at least one request")
    }
}

#[cfg(test)]
#[async_trait]
impl DialogLauncher for RecordingLauncher {
    async fn capture(&self, req: LaunchRequest) -> ZenityResult<RawReply> {
        self.requests.lock().expect("requests lock").push(req);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok(RawReply::new(0, "")))
    }

    async fn stream(&self, req: LaunchRequest) -> ZenityResult<StreamedDialog> {
        self.requests.lock().expect("requests lock").push(req);
        Err(ZenityError::stream(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "recording launcher does not stream",
        )))
    }
}
