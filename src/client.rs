//! The dialog client: one async method per dialog kind.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::args;
use crate::error::{ZenityError, ZenityResult};
use crate::fields::FormField;
use crate::launcher::{gtk_workaround_env, DialogLauncher, LaunchRequest, SystemLauncher};
use crate::options::{
    CalendarOptions, ColorSelectionOptions, EntryOptions, FileSelectionOptions, FormsOptions,
    ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions, ScaleOptions,
    TextInfoOptions, DEFAULT_SEPARATOR,
};
use crate::outcome::{
    resolve_confirmation, resolve_forms, resolve_selection, FormsOutcome, RawReply, EXIT_OK,
};
use crate::progress::ProgressHandle;

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "zenity";

/// Client for the external dialog tool.
///
/// Construction is infallible and cheap; nothing is spawned until a dialog
/// method runs. Use [`version`](Self::version) to probe availability.
#[derive(Clone)]
pub struct Zenity {
    program: String,
    launcher: Arc<dyn DialogLauncher>,
}

impl Default for Zenity {
    fn default() -> Self {
        Self::new()
    }
}

impl Zenity {
    /// Client over the `zenity` binary on PATH.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Client over a specific binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self::with_launcher(program, Arc::new(SystemLauncher))
    }

    /// Client over a custom launcher.
    pub fn with_launcher(program: impl Into<String>, launcher: Arc<dyn DialogLauncher>) -> Self {
        Self {
            program: program.into(),
            launcher,
        }
    }

    /// Probes the dialog binary, returning its version string.
    ///
    /// The one call that distinguishes "not installed" from "user said no":
    /// a missing binary surfaces as [`ZenityError::Launch`] here.
    pub async fn version(&self) -> ZenityResult<String> {
        let reply = self.capture(vec!["--version".to_string()]).await?;
        match reply.exit_code {
            EXIT_OK => Ok(reply.stdout),
            code => Err(ZenityError::UnexpectedExit { code }),
        }
    }

    /// Shows an informational message. `true` when acknowledged with OK.
    pub async fn info(&self, text: &str, options: &MessageOptions) -> ZenityResult<bool> {
        let reply = self.capture(args::info(text, options)).await?;
        resolve_confirmation(&reply)
    }

    /// Shows a warning message. `true` when acknowledged with OK.
    pub async fn warning(&self, text: &str, options: &MessageOptions) -> ZenityResult<bool> {
        let reply = self.capture(args::warning(text, options)).await?;
        resolve_confirmation(&reply)
    }

    /// Shows an error message. `true` when acknowledged with OK.
    pub async fn error(&self, text: &str, options: &MessageOptions) -> ZenityResult<bool> {
        let reply = self.capture(args::error(text, options)).await?;
        resolve_confirmation(&reply)
    }

    /// Asks a yes/no question. Dismissal counts as no.
    pub async fn question(&self, text: &str, options: &QuestionOptions) -> ZenityResult<bool> {
        let reply = self.capture(args::question(text, options)).await?;
        resolve_confirmation(&reply)
    }

    /// Prompts for one line of text.
    pub async fn entry(&self, text: &str, options: &EntryOptions) -> ZenityResult<Option<String>> {
        let reply = self.capture(args::entry(text, options)).await?;
        resolve_selection(&reply)
    }

    /// Prompts for a password.
    ///
    /// With [`PasswordOptions::username`] set, zenity prints
    /// `user|password` as one string; it is returned verbatim.
    pub async fn password(&self, options: &PasswordOptions) -> ZenityResult<Option<String>> {
        let reply = self.capture(args::password(options)).await?;
        resolve_selection(&reply)
    }

    /// Prompts for a number on a slider.
    ///
    /// With `--print-partial` zenity prints every intermediate value; the
    /// last line is the slider's final position.
    pub async fn scale(&self, text: &str, options: &ScaleOptions) -> ZenityResult<Option<i32>> {
        let reply = self.capture(args::scale(text, options)).await?;
        let Some(raw) = resolve_selection(&reply)? else {
            return Ok(None);
        };
        let line = raw.lines().last().unwrap_or("");
        match line.trim().parse::<i32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(ZenityError::malformed("scale value", raw)),
        }
    }

    /// Prompts for a date, returned as zenity formats it.
    pub async fn calendar(
        &self,
        text: &str,
        options: &CalendarOptions,
    ) -> ZenityResult<Option<String>> {
        let reply = self.capture(args::calendar(text, options)).await?;
        resolve_selection(&reply)
    }

    /// Shows a list (or checklist/radiolist) and returns the selected value.
    pub async fn list(
        &self,
        text: &str,
        columns: &[&str],
        rows: &[&[&str]],
        options: &ListOptions,
    ) -> ZenityResult<Option<String>> {
        let reply = self.capture(args::list(text, columns, rows, options)).await?;
        resolve_selection(&reply)
    }

    /// Shows a multi-selection list and returns every selected value.
    pub async fn list_multiple(
        &self,
        text: &str,
        columns: &[&str],
        rows: &[&[&str]],
        options: &ListOptions,
    ) -> ZenityResult<Option<Vec<String>>> {
        let reply = self
            .capture(args::list_multiple(text, columns, rows, options))
            .await?;
        let separator = options.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        Ok(resolve_selection(&reply)?.map(|raw| split_owned(&raw, separator)))
    }

    /// Opens a file (or directory/save) picker for a single path.
    pub async fn file_selection(
        &self,
        options: &FileSelectionOptions,
    ) -> ZenityResult<Option<PathBuf>> {
        let reply = self.capture(args::file_selection(options)).await?;
        Ok(resolve_selection(&reply)?.map(PathBuf::from))
    }

    /// Opens a file picker allowing multiple paths.
    pub async fn file_selection_multiple(
        &self,
        options: &FileSelectionOptions,
    ) -> ZenityResult<Option<Vec<PathBuf>>> {
        let reply = self.capture(args::file_selection_multiple(options)).await?;
        let separator = options.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        Ok(resolve_selection(&reply)?
            .map(|raw| raw.split(separator).map(PathBuf::from).collect()))
    }

    /// Opens the color picker. `#RRGGBB` initial colors are converted to
    /// the 16-bit `rgb()` form zenity expects.
    pub async fn color_selection(
        &self,
        options: &ColorSelectionOptions,
    ) -> ZenityResult<Option<String>> {
        let reply = self.capture(args::color_selection(options)).await?;
        resolve_selection(&reply)
    }

    /// Shows a text viewer. Without a filename the body is piped through
    /// stdin. OK returns the (possibly edited) text.
    pub async fn text_info(
        &self,
        body: Option<&str>,
        options: &TextInfoOptions,
    ) -> ZenityResult<Option<String>> {
        let payload = match (&options.filename, body) {
            (None, Some(body)) => Some(body.to_string()),
            _ => None,
        };
        let req = self.request(args::text_info(options), payload);
        let reply = self.launcher.capture(req).await?;
        resolve_selection(&reply)
    }

    /// Shows a multi-field form and resolves the three-way outcome.
    ///
    /// This call is total: dismissal, extra-button clicks and even launch
    /// failures all land in [`FormsOutcome`], so callers branch on exactly
    /// one enum.
    pub async fn forms(&self, fields: &[FormField], options: &FormsOptions) -> FormsOutcome {
        let separator = options.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        let req = self.request(args::forms(fields, options), None);
        match self.launcher.capture(req).await {
            Ok(reply) => {
                resolve_forms(&reply, separator, options.common.extra_button.as_deref())
            }
            Err(e) => {
                warn!(error = %e, "forms dialog failed to run, treating as cancel");
                FormsOutcome::Cancelled
            }
        }
    }

    /// Opens a progress dialog and returns the live feed handle.
    pub async fn progress(
        &self,
        text: &str,
        options: &ProgressOptions,
    ) -> ZenityResult<ProgressHandle> {
        let req = self.request(args::progress(text, options), None);
        let dialog = self.launcher.stream(req).await?;
        Ok(ProgressHandle::new(dialog))
    }

    async fn capture(&self, args: Vec<String>) -> ZenityResult<RawReply> {
        self.launcher.capture(self.request(args, None)).await
    }

    fn request(&self, args: Vec<String>, stdin_payload: Option<String>) -> LaunchRequest {
        LaunchRequest {
            program: self.program.clone(),
            args,
            env: gtk_workaround_env(),
            stdin_payload,
        }
    }
}

fn split_owned(raw: &str, separator: &str) -> Vec<String> {
    raw.split(separator).map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Zenity;
    use crate::error::ZenityError;
    use crate::fields::FormField;
    use crate::launcher::RecordingLauncher;
    use crate::options::{
        CommonOptions, EntryOptions, FormsOptions, ListOptions, PasswordOptions, ScaleOptions,
        TextInfoOptions,
    };
    use crate::outcome::FormsOutcome;

    fn client(launcher: RecordingLauncher) -> (Zenity, Arc<RecordingLauncher>) {
        let launcher = Arc::new(launcher);
        (Zenity::with_launcher("zenity", launcher.clone()), launcher)
    }

    fn sign_in_fields() -> Vec<FormField> {
        vec![FormField::entry("User"), FormField::password("Pass")]
    }

    #[tokio::test]
    async fn forms_launch_failure_is_cancelled() {
        let (zenity, _) = client(RecordingLauncher::new().fail_next());
        let outcome = zenity
            .forms(&sign_in_fields(), &FormsOptions::default())
            .await;
        assert_eq!(outcome, FormsOutcome::Cancelled);
    }

    #[tokio::test]
    async fn forms_resolves_extra_button_from_the_configured_label() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(1, "Help"));
        let options = FormsOptions {
            common: CommonOptions {
                extra_button: Some("Help".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let outcome = zenity.forms(&sign_in_fields(), &options).await;
        assert_eq!(outcome, FormsOutcome::ExtraAction);
        let req = launcher.last_request();
        assert!(req.args.contains(&"--extra-button=Help".to_string()));
    }

    #[tokio::test]
    async fn forms_splits_on_the_configured_separator() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(0, "alice;s3cret"));
        let options = FormsOptions {
            separator: Some(";".to_string()),
            ..Default::default()
        };
        let outcome = zenity.forms(&sign_in_fields(), &options).await;
        assert_eq!(
            outcome.values().expect("submit"),
            ["alice".to_string(), "s3cret".to_string()]
        );
        let req = launcher.last_request();
        assert!(req.args.contains(&"--separator=;".to_string()));
    }

    #[tokio::test]
    async fn every_request_carries_the_gtk_workaround() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(0, "hi"));
        zenity
            .entry("Name?", &EntryOptions::default())
            .await
            .expect("entry");
        let req = launcher.last_request();
        assert!(req
            .env
            .contains(&("GSETTINGS_BACKEND".to_string(), "memory".to_string())));
        assert!(req
            .env
            .contains(&("GSETTINGS_SCHEMA_DIR".to_string(), "/dev/null".to_string())));
    }

    #[tokio::test]
    async fn simple_dialog_launch_failure_surfaces() {
        let (zenity, _) = client(RecordingLauncher::new().fail_next());
        let err = zenity
            .entry("Name?", &EntryOptions::default())
            .await
            .expect_err("launch error");
        assert!(matches!(err, ZenityError::Launch { .. }));
    }

    #[tokio::test]
    async fn text_info_pipes_the_body_when_no_filename_is_set() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(0, "edited"));
        let content = zenity
            .text_info(Some("license text"), &TextInfoOptions::default())
            .await
            .expect("text info");
        assert_eq!(content, Some("edited".to_string()));
        let req = launcher.last_request();
        assert_eq!(req.stdin_payload.as_deref(), Some("license text"));
    }

    #[tokio::test]
    async fn text_info_with_filename_does_not_pipe_stdin() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(0, ""));
        let options = TextInfoOptions {
            filename: Some("/etc/hostname".to_string()),
            ..Default::default()
        };
        zenity
            .text_info(Some("ignored"), &options)
            .await
            .expect("text info");
        let req = launcher.last_request();
        assert!(req.stdin_payload.is_none());
        assert!(req.args.contains(&"--filename=/etc/hostname".to_string()));
    }

    #[tokio::test]
    async fn scale_takes_the_last_printed_line() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(0, "10\n30\n55"));
        let options = ScaleOptions {
            print_partial: true,
            ..Default::default()
        };
        let value = zenity.scale("Volume", &options).await.expect("scale");
        assert_eq!(value, Some(55));
    }

    #[tokio::test]
    async fn scale_rejects_non_numeric_output() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(0, "loud"));
        let err = zenity
            .scale("Volume", &ScaleOptions::default())
            .await
            .expect_err("malformed");
        assert!(matches!(err, ZenityError::MalformedOutput { .. }));
    }

    #[tokio::test]
    async fn list_multiple_splits_the_selection() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(0, "Build|Test"));
        let rows: &[&[&str]] = &[&["Build"], &["Test"], &["Deploy"]];
        let picked = zenity
            .list_multiple("Tasks", &["Task"], rows, &ListOptions::default())
            .await
            .expect("list");
        assert_eq!(
            picked,
            Some(vec!["Build".to_string(), "Test".to_string()])
        );
    }

    #[tokio::test]
    async fn password_with_username_returns_the_joined_string() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(0, "root|hunter2"));
        let options = PasswordOptions {
            username: true,
            ..Default::default()
        };
        let secret = zenity.password(&options).await.expect("password");
        assert_eq!(secret, Some("root|hunter2".to_string()));
    }

    #[tokio::test]
    async fn version_reports_the_probe_string() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(0, "4.0.1"));
        let version = zenity.version().await.expect("version");
        assert_eq!(version, "4.0.1");
        assert_eq!(launcher.last_request().args, vec!["--version".to_string()]);
    }
}
