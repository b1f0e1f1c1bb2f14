//! Per-dialog option records.
//!
//! Plain data. Every kind embeds [`CommonOptions`]; unset fields simply emit
//! no flag. Field names follow the zenity flags they render to.

use serde::{Deserialize, Serialize};

/// Output separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Options shared by every dialog kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonOptions {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Dialog auto-dismiss in seconds (zenity exits with code 5).
    pub timeout: Option<u32>,
    pub ok_label: Option<String>,
    pub cancel_label: Option<String>,
    /// Label for a third button. Clicks print the label and exit with 1.
    pub extra_button: Option<String>,
    pub modal_hint: bool,
    /// Parent window handle to attach to.
    pub attach_parent: Option<u32>,
}

/// Options for info, warning and error dialogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOptions {
    pub common: CommonOptions,
    pub no_wrap: bool,
    pub no_markup: bool,
    pub ellipsize: bool,
    pub icon_name: Option<String>,
}

/// Options for question dialogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOptions {
    pub common: CommonOptions,
    /// Focus Cancel instead of OK.
    pub default_cancel: bool,
    pub no_wrap: bool,
    pub no_markup: bool,
    pub ellipsize: bool,
}

/// Options for single-line text entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    pub common: CommonOptions,
    /// Pre-filled entry text.
    pub entry_text: Option<String>,
    pub hide_text: bool,
}

/// Options for the password prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub common: CommonOptions,
    /// Also ask for a username; output becomes `user|password`.
    pub username: bool,
}

/// Options for the scale (slider) dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOptions {
    pub common: CommonOptions,
    pub value: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub step: Option<i32>,
    /// Print every intermediate value while sliding.
    pub print_partial: bool,
    pub hide_value: bool,
}

/// Options for the calendar dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub common: CommonOptions,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    /// strftime format for the printed date.
    pub date_format: Option<String>,
}

/// Options for list dialogs. Multi-selection is a separate client method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub common: CommonOptions,
    pub checklist: bool,
    pub radiolist: bool,
    pub imagelist: bool,
    pub editable: bool,
    pub separator: Option<String>,
    /// Column to print on selection (1-based).
    pub print_column: Option<u32>,
    pub hide_column: Option<u32>,
    pub hide_header: bool,
}

/// Options for the color picker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSelectionOptions {
    pub common: CommonOptions,
    /// Initial color; `#RRGGBB` is converted to zenity's 16-bit rgb() form.
    pub color: Option<String>,
    pub show_palette: bool,
}

/// Options for file and directory pickers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionOptions {
    pub common: CommonOptions,
    pub directory: bool,
    pub save: bool,
    /// Initially selected path.
    pub filename: Option<String>,
    pub confirm_overwrite: bool,
    pub separator: Option<String>,
}

/// Options for the editable text viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInfoOptions {
    pub common: CommonOptions,
    /// File to display. Without it the body is piped through stdin.
    pub filename: Option<String>,
    pub editable: bool,
    pub html: bool,
    pub url: Option<String>,
    pub font: Option<String>,
    /// Consent checkbox text; OK stays disabled until it is ticked.
    pub checkbox: Option<String>,
    pub auto_scroll: bool,
}

/// Options for multi-field forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsOptions {
    pub common: CommonOptions,
    /// Dialog text above the fields.
    pub text: Option<String>,
    /// Output separator between field values. Defaults to `|`.
    pub separator: Option<String>,
    pub forms_date_format: Option<String>,
    pub show_header: bool,
}

/// Options for the progress dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    pub common: CommonOptions,
    /// Initial percentage.
    pub percentage: Option<u32>,
    pub pulsate: bool,
    /// Close the dialog when the feed reaches 100.
    pub auto_close: bool,
    /// Kill the parent process if Cancel is clicked.
    pub auto_kill: bool,
    pub no_cancel: bool,
    pub time_remaining: bool,
}
