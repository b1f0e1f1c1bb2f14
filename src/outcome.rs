//! Classification of captured dialog replies.
//!
//! zenity folds three distinct user actions into two exit codes: OK is 0,
//! while Cancel, Esc, window close and any `--extra-button` click all exit
//! with 1. The extra button additionally prints its own label to stdout, and
//! zenity has been observed emitting joined field values alongside exit code
//! 1 as well. The resolvers here recover the logical outcome from exit code
//! plus trimmed stdout alone; they run no I/O and keep no state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ZenityError, ZenityResult};

/// Exit code for an affirmative close (OK, submit).
pub const EXIT_OK: i32 = 0;
/// Exit code for Cancel, Esc, window close and extra buttons.
pub const EXIT_DISMISSED: i32 = 1;
/// Exit code when zenity's own `--timeout` expires.
pub const EXIT_TIMEOUT: i32 = 5;

/// What a finished dialog process left behind.
///
/// `stdout` is whitespace-trimmed. A process killed by a signal carries
/// `exit_code == -1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub exit_code: i32,
    pub stdout: String,
}

impl RawReply {
    pub fn new(exit_code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
        }
    }
}

/// The three things a forms dialog can logically report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FormsOutcome {
    /// The form was submitted; one value per field, in field order.
    Submitted { values: Vec<String> },
    /// The form was dismissed without data.
    Cancelled,
    /// The configured extra button was clicked; no field values exist.
    ExtraAction,
}

impl FormsOutcome {
    /// Field values if the form was submitted.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            FormsOutcome::Submitted { values } => Some(values),
            _ => None,
        }
    }
}

/// Resolves a captured forms reply into its logical outcome.
///
/// Rules are checked in order; the first match wins:
/// 1. exit 0 is a submit, stdout split on `separator` (empty stdout is one
///    empty field, never zero fields);
/// 2. exit 1 with stdout exactly equal to the configured extra-button label
///    is the extra button, even when the label contains the separator;
/// 3. exit 1 with stdout that contains the separator, or with no extra
///    button configured at all, is still a submit;
/// 4. anything else is a cancel.
///
/// Rule 3 is a heuristic over observed zenity behavior rather than a
/// documented guarantee; the reply it cannot classify (exit 1, non-empty,
/// separator-free, not the extra label) is logged and treated as a cancel.
pub fn resolve_forms(
    reply: &RawReply,
    separator: &str,
    extra_button: Option<&str>,
) -> FormsOutcome {
    if reply.exit_code == EXIT_OK {
        return FormsOutcome::Submitted {
            values: split_values(&reply.stdout, separator),
        };
    }

    if reply.exit_code == EXIT_DISMISSED && !reply.stdout.is_empty() {
        if let Some(label) = extra_button {
            if reply.stdout == label {
                return FormsOutcome::ExtraAction;
            }
        }
        if reply.stdout.contains(separator) || extra_button.is_none() {
            return FormsOutcome::Submitted {
                values: split_values(&reply.stdout, separator),
            };
        }
        warn!(
            exit_code = reply.exit_code,
            stdout = %reply.stdout,
            "ambiguous forms reply, treating as cancel"
        );
        return FormsOutcome::Cancelled;
    }

    FormsOutcome::Cancelled
}

/// Maps a non-forms capture reply onto the selection contract.
///
/// Exit 0 carries the chosen value, exit 1 is a dismissal and exit 5 is
/// zenity's own `--timeout` firing. Any other code is out of contract and
/// surfaces as an error instead of a silent cancel.
pub fn resolve_selection(reply: &RawReply) -> ZenityResult<Option<String>> {
    match reply.exit_code {
        EXIT_OK => Ok(Some(reply.stdout.clone())),
        EXIT_DISMISSED | EXIT_TIMEOUT => Ok(None),
        code => Err(ZenityError::UnexpectedExit { code }),
    }
}

/// Maps a reply onto a yes/no contract: exit 0 affirms, 1 and 5 decline.
pub fn resolve_confirmation(reply: &RawReply) -> ZenityResult<bool> {
    match reply.exit_code {
        EXIT_OK => Ok(true),
        EXIT_DISMISSED | EXIT_TIMEOUT => Ok(false),
        code => Err(ZenityError::UnexpectedExit { code }),
    }
}

fn split_values(stdout: &str, separator: &str) -> Vec<String> {
    stdout.split(separator).map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        resolve_confirmation, resolve_forms, resolve_selection, FormsOutcome, RawReply,
    };
    use crate::error::ZenityError;

    fn submitted(values: &[&str]) -> FormsOutcome {
        FormsOutcome::Submitted {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn exit_zero_splits_values_in_field_order() {
        let reply = RawReply::new(0, "alice|s3cret|admin");
        let outcome = resolve_forms(&reply, "|", Some("Help"));
        assert_eq!(outcome, submitted(&["alice", "s3cret", "admin"]));
    }

    #[test]
    fn exit_zero_empty_stdout_is_one_empty_field() {
        let reply = RawReply::new(0, "");
        let outcome = resolve_forms(&reply, "|", None);
        assert_eq!(outcome, submitted(&[""]));
    }

    #[test]
    fn exit_one_empty_stdout_is_cancel() {
        let reply = RawReply::new(1, "");
        assert_eq!(resolve_forms(&reply, "|", Some("Help")), FormsOutcome::Cancelled);
    }

    #[test]
    fn exit_one_matching_extra_label_is_extra_action() {
        let reply = RawReply::new(1, "Help");
        assert_eq!(
            resolve_forms(&reply, "|", Some("Help")),
            FormsOutcome::ExtraAction
        );
    }

    #[test]
    fn extra_label_wins_even_when_it_contains_the_separator() {
        let reply = RawReply::new(1, "More|Options");
        assert_eq!(
            resolve_forms(&reply, "|", Some("More|Options")),
            FormsOutcome::ExtraAction
        );
    }

    #[test]
    fn exit_one_with_separator_is_still_a_submit() {
        let reply = RawReply::new(1, "alice|s3cret");
        let outcome = resolve_forms(&reply, "|", Some("Help"));
        assert_eq!(outcome, submitted(&["alice", "s3cret"]));
    }

    #[test]
    fn exit_one_without_extra_button_is_a_single_value_submit() {
        let reply = RawReply::new(1, "Help");
        assert_eq!(resolve_forms(&reply, "|", None), submitted(&["Help"]));
    }

    #[test]
    fn exit_one_unclassifiable_output_is_cancel() {
        let reply = RawReply::new(1, "garbage");
        assert_eq!(
            resolve_forms(&reply, "|", Some("Help")),
            FormsOutcome::Cancelled
        );
    }

    #[test]
    fn other_exit_codes_are_cancel_for_forms() {
        for code in [5, -1, 2, 255] {
            let reply = RawReply::new(code, "alice|s3cret");
            assert_eq!(
                resolve_forms(&reply, "|", Some("Help")),
                FormsOutcome::Cancelled,
                "exit code {code}"
            );
        }
    }

    #[test]
    fn multi_char_separator_splits_correctly() {
        let reply = RawReply::new(0, "a||b||c");
        assert_eq!(resolve_forms(&reply, "||", None), submitted(&["a", "b", "c"]));
    }

    #[test]
    fn submitted_values_rejoin_to_the_original_stdout() {
        for (code, stdout, sep) in [
            (0, "alice|s3cret|admin", "|"),
            (0, "|trailing|", "|"),
            (1, "a||b", "||"),
            (0, "", "|"),
        ] {
            let reply = RawReply::new(code, stdout);
            let outcome = resolve_forms(&reply, sep, None);
            let values = outcome.values().expect("submit");
            assert_eq!(values.join(sep), stdout);
        }
    }

    #[test]
    fn resolving_the_same_reply_twice_is_identical() {
        let reply = RawReply::new(1, "alice|s3cret");
        let first = resolve_forms(&reply, "|", Some("Help"));
        let second = resolve_forms(&reply, "|", Some("Help"));
        assert_eq!(first, second);
    }

    #[test]
    fn selection_maps_the_documented_codes() {
        let ok = RawReply::new(0, "picked");
        assert_eq!(
            resolve_selection(&ok).expect("ok"),
            Some("picked".to_string())
        );
        assert_eq!(resolve_selection(&RawReply::new(1, "")).expect("cancel"), None);
        assert_eq!(resolve_selection(&RawReply::new(5, "")).expect("timeout"), None);
    }

    #[test]
    fn selection_rejects_out_of_contract_codes() {
        let err = resolve_selection(&RawReply::new(2, "")).expect_err("bad code");
        assert!(matches!(err, ZenityError::UnexpectedExit { code: 2 }));
    }

    #[test]
    fn confirmation_maps_the_documented_codes() {
        assert!(resolve_confirmation(&RawReply::new(0, "")).expect("yes"));
        assert!(!resolve_confirmation(&RawReply::new(1, "")).expect("no"));
        assert!(!resolve_confirmation(&RawReply::new(5, "")).expect("timeout"));
        assert!(resolve_confirmation(&RawReply::new(3, "")).is_err());
    }
}
