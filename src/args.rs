//! Command-line argument construction for every dialog kind.
//!
//! Pure string assembly, one function per dialog kind. Token order is part
//! of the contract the tests pin down: the kind flag always comes first and
//! positional data (list cells, form field flags) always comes last, but the
//! slot of the common options in between varies per kind.

use crate::fields::FormField;
use crate::options::{
    CalendarOptions, ColorSelectionOptions, CommonOptions, EntryOptions, FileSelectionOptions,
    FormsOptions, ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions,
    ScaleOptions, TextInfoOptions, DEFAULT_SEPARATOR,
};

/// `--info` dialog arguments.
pub fn info(text: &str, options: &MessageOptions) -> Vec<String> {
    message("--info", text, options)
}

/// `--warning` dialog arguments.
pub fn warning(text: &str, options: &MessageOptions) -> Vec<String> {
    message("--warning", text, options)
}

/// `--error` dialog arguments.
pub fn error(text: &str, options: &MessageOptions) -> Vec<String> {
    message("--error", text, options)
}

fn message(kind: &'static str, text: &str, options: &MessageOptions) -> Vec<String> {
    let mut args = vec![kind.to_string(), format!("--text={text}")];
    append_common(&mut args, &options.common);
    if options.no_wrap {
        args.push("--no-wrap".to_string());
    }
    if options.no_markup {
        args.push("--no-markup".to_string());
    }
    if options.ellipsize {
        args.push("--ellipsize".to_string());
    }
    if let Some(icon) = &options.icon_name {
        args.push(format!("--icon-name={icon}"));
    }
    args
}

/// `--question` dialog arguments.
pub fn question(text: &str, options: &QuestionOptions) -> Vec<String> {
    let mut args = vec!["--question".to_string(), format!("--text={text}")];
    append_common(&mut args, &options.common);
    if options.default_cancel {
        args.push("--default-cancel".to_string());
    }
    if options.no_wrap {
        args.push("--no-wrap".to_string());
    }
    if options.no_markup {
        args.push("--no-markup".to_string());
    }
    if options.ellipsize {
        args.push("--ellipsize".to_string());
    }
    args
}

/// `--entry` dialog arguments.
pub fn entry(text: &str, options: &EntryOptions) -> Vec<String> {
    let mut args = vec!["--entry".to_string()];
    if !text.is_empty() {
        args.push(format!("--text={text}"));
    }
    if let Some(prefill) = &options.entry_text {
        args.push(format!("--entry-text={prefill}"));
    }
    if options.hide_text {
        args.push("--hide-text".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// `--password` dialog arguments.
pub fn password(options: &PasswordOptions) -> Vec<String> {
    let mut args = vec!["--password".to_string()];
    if options.username {
        args.push("--username".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// `--scale` dialog arguments.
pub fn scale(text: &str, options: &ScaleOptions) -> Vec<String> {
    let mut args = vec!["--scale".to_string()];
    if !text.is_empty() {
        args.push(format!("--text={text}"));
    }
    if let Some(value) = options.value {
        args.push(format!("--value={value}"));
    }
    if let Some(min) = options.min_value {
        args.push(format!("--min-value={min}"));
    }
    if let Some(max) = options.max_value {
        args.push(format!("--max-value={max}"));
    }
    if let Some(step) = options.step {
        args.push(format!("--step={step}"));
    }
    if options.print_partial {
        args.push("--print-partial".to_string());
    }
    if options.hide_value {
        args.push("--hide-value".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// `--calendar` dialog arguments.
pub fn calendar(text: &str, options: &CalendarOptions) -> Vec<String> {
    let mut args = vec!["--calendar".to_string()];
    if !text.is_empty() {
        args.push(format!("--text={text}"));
    }
    if let Some(day) = options.day {
        args.push(format!("--day={day}"));
    }
    if let Some(month) = options.month {
        args.push(format!("--month={month}"));
    }
    if let Some(year) = options.year {
        args.push(format!("--year={year}"));
    }
    if let Some(format) = &options.date_format {
        args.push(format!("--date-format={format}"));
    }
    append_common(&mut args, &options.common);
    args
}

/// `--list` dialog arguments for a single selection.
pub fn list(text: &str, columns: &[&str], rows: &[&[&str]], options: &ListOptions) -> Vec<String> {
    list_args(text, columns, rows, options, false)
}

/// `--list` dialog arguments for a multi selection.
///
/// Always renders `--separator` (falling back to the default) so the joined
/// output splits unambiguously.
pub fn list_multiple(
    text: &str,
    columns: &[&str],
    rows: &[&[&str]],
    options: &ListOptions,
) -> Vec<String> {
    list_args(text, columns, rows, options, true)
}

fn list_args(
    text: &str,
    columns: &[&str],
    rows: &[&[&str]],
    options: &ListOptions,
    multiple: bool,
) -> Vec<String> {
    let mut args = vec!["--list".to_string()];
    if !text.is_empty() {
        args.push(format!("--text={text}"));
    }
    if options.checklist {
        args.push("--checklist".to_string());
    }
    if options.radiolist {
        args.push("--radiolist".to_string());
    }
    if options.imagelist {
        args.push("--imagelist".to_string());
    }
    if multiple {
        args.push("--multiple".to_string());
    }
    if options.editable {
        args.push("--editable".to_string());
    }
    if multiple {
        let separator = options.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        args.push(format!("--separator={separator}"));
    } else if let Some(separator) = &options.separator {
        args.push(format!("--separator={separator}"));
    }
    if let Some(column) = options.print_column {
        args.push(format!("--print-column={column}"));
    }
    if let Some(column) = options.hide_column {
        args.push(format!("--hide-column={column}"));
    }
    if options.hide_header {
        args.push("--hide-header".to_string());
    }
    append_common(&mut args, &options.common);
    for column in columns {
        args.push(format!("--column={column}"));
    }
    for row in rows {
        for cell in *row {
            args.push(cell.to_string());
        }
    }
    args
}

/// `--file-selection` dialog arguments for a single path.
pub fn file_selection(options: &FileSelectionOptions) -> Vec<String> {
    file_selection_args(options, false)
}

/// `--file-selection` dialog arguments for multiple paths.
pub fn file_selection_multiple(options: &FileSelectionOptions) -> Vec<String> {
    file_selection_args(options, true)
}

fn file_selection_args(options: &FileSelectionOptions, multiple: bool) -> Vec<String> {
    let mut args = vec!["--file-selection".to_string()];
    if multiple {
        args.push("--multiple".to_string());
    }
    if options.directory {
        args.push("--directory".to_string());
    }
    if options.save {
        args.push("--save".to_string());
    }
    if let Some(filename) = &options.filename {
        args.push(format!("--filename={filename}"));
    }
    if options.confirm_overwrite {
        args.push("--confirm-overwrite".to_string());
    }
    if multiple {
        let separator = options.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        args.push(format!("--separator={separator}"));
    } else if let Some(separator) = &options.separator {
        args.push(format!("--separator={separator}"));
    }
    append_common(&mut args, &options.common);
    args
}

/// `--color-selection` dialog arguments.
pub fn color_selection(options: &ColorSelectionOptions) -> Vec<String> {
    let mut args = vec!["--color-selection".to_string()];
    if let Some(color) = &options.color {
        args.push(format!("--color={}", hex_to_gdk_rgb(color)));
    }
    if options.show_palette {
        args.push("--show-palette".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// `--text-info` dialog arguments.
pub fn text_info(options: &TextInfoOptions) -> Vec<String> {
    let mut args = vec!["--text-info".to_string()];
    if let Some(filename) = &options.filename {
        args.push(format!("--filename={filename}"));
    }
    if options.editable {
        args.push("--editable".to_string());
    }
    if options.html {
        args.push("--html".to_string());
    }
    if let Some(url) = &options.url {
        args.push(format!("--url={url}"));
    }
    if let Some(font) = &options.font {
        args.push(format!("--font={font}"));
    }
    if let Some(checkbox) = &options.checkbox {
        args.push(format!("--checkbox={checkbox}"));
    }
    if options.auto_scroll {
        args.push("--auto-scroll".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// `--forms` dialog arguments. Field flags come last, in field order.
pub fn forms(fields: &[FormField], options: &FormsOptions) -> Vec<String> {
    let mut args = vec!["--forms".to_string()];
    if let Some(text) = &options.text {
        args.push(format!("--text={text}"));
    }
    if let Some(separator) = &options.separator {
        args.push(format!("--separator={separator}"));
    }
    if let Some(format) = &options.forms_date_format {
        args.push(format!("--forms-date-format={format}"));
    }
    if options.show_header {
        args.push("--show-header".to_string());
    }
    append_common(&mut args, &options.common);
    for field in fields {
        append_form_field(&mut args, field);
    }
    args
}

fn append_form_field(args: &mut Vec<String>, field: &FormField) {
    match field {
        FormField::Entry { label } => args.push(format!("--add-entry={label}")),
        FormField::Password { label } => args.push(format!("--add-password={label}")),
        FormField::Multiline { label } => args.push(format!("--add-multiline-entry={label}")),
        FormField::Calendar { label } => args.push(format!("--add-calendar={label}")),
        FormField::List {
            label,
            header,
            values,
            column_values,
        } => {
            match header {
                Some(header) => args.push(format!("--add-list={label}:{header}")),
                None => args.push(format!("--add-list={label}")),
            }
            if !values.is_empty() {
                args.push(format!("--list-values={}", values.join("|")));
            }
            if !column_values.is_empty() {
                args.push(format!("--column-values={}", column_values.join("|")));
            }
        }
        FormField::Combo { label, values } => {
            args.push(format!("--add-combo={label}"));
            if !values.is_empty() {
                args.push(format!("--combo-values={}", values.join("|")));
            }
        }
    }
}

/// `--progress` dialog arguments.
pub fn progress(text: &str, options: &ProgressOptions) -> Vec<String> {
    let mut args = vec!["--progress".to_string()];
    if !text.is_empty() {
        args.push(format!("--text={text}"));
    }
    if let Some(percentage) = options.percentage {
        args.push(format!("--percentage={percentage}"));
    }
    if options.auto_close {
        args.push("--auto-close".to_string());
    }
    if options.auto_kill {
        args.push("--auto-kill".to_string());
    }
    if options.pulsate {
        args.push("--pulsate".to_string());
    }
    if options.no_cancel {
        args.push("--no-cancel".to_string());
    }
    if options.time_remaining {
        args.push("--time-remaining".to_string());
    }
    append_common(&mut args, &options.common);
    args
}

/// Converts `#RRGGBB` to zenity's `rgb(r,g,b)` form with 16-bit channels.
///
/// zenity expects channel values in 0..=65535, so each 8-bit channel is
/// scaled by 257. Anything that does not parse as six hex digits is passed
/// through unchanged for zenity to interpret.
pub fn hex_to_gdk_rgb(color: &str) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    if hex.len() != 6 || !hex.is_ascii() {
        return color.to_string();
    }
    let channel = |range| u32::from_str_radix(&hex[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("rgb({},{},{})", r * 257, g * 257, b * 257),
        _ => color.to_string(),
    }
}

fn append_common(args: &mut Vec<String>, common: &CommonOptions) {
    if let Some(title) = &common.title {
        args.push(format!("--title={title}"));
    }
    if let Some(width) = common.width {
        args.push(format!("--width={width}"));
    }
    if let Some(height) = common.height {
        args.push(format!("--height={height}"));
    }
    if let Some(timeout) = common.timeout {
        args.push(format!("--timeout={timeout}"));
    }
    if let Some(label) = &common.ok_label {
        args.push(format!("--ok-label={label}"));
    }
    if let Some(label) = &common.cancel_label {
        args.push(format!("--cancel-label={label}"));
    }
    if let Some(label) = &common.extra_button {
        args.push(format!("--extra-button={label}"));
    }
    if common.modal_hint {
        args.push("--modal".to_string());
    }
    if let Some(parent) = common.attach_parent {
        args.push(format!("--attach={parent}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{
        entry, file_selection_multiple, forms, hex_to_gdk_rgb, info, list, list_multiple,
        password, progress, question, scale, text_info,
    };
    use crate::fields::FormField;
    use crate::options::{
        CommonOptions, EntryOptions, FileSelectionOptions, FormsOptions, ListOptions,
        MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions, ScaleOptions,
        TextInfoOptions,
    };

    fn common_with_title(title: &str) -> CommonOptions {
        CommonOptions {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn info_renders_common_before_message_flags() {
        let options = MessageOptions {
            common: common_with_title("Note"),
            no_wrap: true,
            icon_name: Some("dialog-information".to_string()),
            ..Default::default()
        };
        assert_eq!(
            info("Saved.", &options),
            vec![
                "--info",
                "--text=Saved.",
                "--title=Note",
                "--no-wrap",
                "--icon-name=dialog-information",
            ]
        );
    }

    #[test]
    fn entry_renders_common_after_entry_flags() {
        let options = EntryOptions {
            common: common_with_title("Name"),
            entry_text: Some("guest".to_string()),
            hide_text: true,
        };
        assert_eq!(
            entry("Who are you?", &options),
            vec![
                "--entry",
                "--text=Who are you?",
                "--entry-text=guest",
                "--hide-text",
                "--title=Name",
            ]
        );
    }

    #[test]
    fn empty_text_emits_no_text_flag() {
        let args = entry("", &EntryOptions::default());
        assert_eq!(args, vec!["--entry"]);
    }

    #[test]
    fn question_orders_default_cancel_first() {
        let options = QuestionOptions {
            default_cancel: true,
            ellipsize: true,
            ..Default::default()
        };
        assert_eq!(
            question("Proceed?", &options),
            vec!["--question", "--text=Proceed?", "--default-cancel", "--ellipsize"]
        );
    }

    #[test]
    fn password_with_username_flag() {
        let options = PasswordOptions {
            username: true,
            ..Default::default()
        };
        assert_eq!(password(&options), vec!["--password", "--username"]);
    }

    #[test]
    fn scale_renders_every_bound() {
        let options = ScaleOptions {
            value: Some(50),
            min_value: Some(0),
            max_value: Some(100),
            step: Some(5),
            print_partial: true,
            ..Default::default()
        };
        assert_eq!(
            scale("Volume", &options),
            vec![
                "--scale",
                "--text=Volume",
                "--value=50",
                "--min-value=0",
                "--max-value=100",
                "--step=5",
                "--print-partial",
            ]
        );
    }

    #[test]
    fn list_flattens_columns_then_row_cells() {
        let options = ListOptions {
            checklist: true,
            ..Default::default()
        };
        let rows: &[&[&str]] = &[&["TRUE", "Build"], &["FALSE", "Deploy"]];
        assert_eq!(
            list("Pick tasks", &["Done", "Task"], rows, &options),
            vec![
                "--list",
                "--text=Pick tasks",
                "--checklist",
                "--column=Done",
                "--column=Task",
                "TRUE",
                "Build",
                "FALSE",
                "Deploy",
            ]
        );
    }

    #[test]
    fn list_multiple_always_renders_a_separator() {
        let rows: &[&[&str]] = &[&["a"]];
        let args = list_multiple("", &["Col"], rows, &ListOptions::default());
        assert_eq!(args, vec!["--list", "--multiple", "--separator=|", "--column=Col", "a"]);
    }

    #[test]
    fn file_selection_multiple_orders_multiple_first() {
        let options = FileSelectionOptions {
            filename: Some("/tmp/start".to_string()),
            separator: Some(":".to_string()),
            ..Default::default()
        };
        assert_eq!(
            file_selection_multiple(&options),
            vec![
                "--file-selection",
                "--multiple",
                "--filename=/tmp/start",
                "--separator=:",
            ]
        );
    }

    #[test]
    fn text_info_renders_viewer_flags() {
        let options = TextInfoOptions {
            editable: true,
            checkbox: Some("I agree".to_string()),
            ..Default::default()
        };
        assert_eq!(
            text_info(&options),
            vec!["--text-info", "--editable", "--checkbox=I agree"]
        );
    }

    #[test]
    fn forms_renders_fields_last_in_field_order() {
        let options = FormsOptions {
            common: common_with_title("Sign in"),
            text: Some("Credentials".to_string()),
            separator: Some(";".to_string()),
            ..Default::default()
        };
        let fields = [
            FormField::entry("User"),
            FormField::password("Pass"),
            FormField::combo("Role", ["Admin", "Guest"]),
        ];
        assert_eq!(
            forms(&fields, &options),
            vec![
                "--forms",
                "--text=Credentials",
                "--separator=;",
                "--title=Sign in",
                "--add-entry=User",
                "--add-password=Pass",
                "--add-combo=Role",
                "--combo-values=Admin|Guest",
            ]
        );
    }

    #[test]
    fn forms_list_field_renders_header_and_values() {
        let field = FormField::List {
            label: "Branch".to_string(),
            header: Some("Name".to_string()),
            values: vec!["main".to_string(), "dev".to_string()],
            column_values: Vec::new(),
        };
        let args = forms(&[field], &FormsOptions::default());
        assert_eq!(
            args,
            vec!["--forms", "--add-list=Branch:Name", "--list-values=main|dev"]
        );
    }

    #[test]
    fn progress_renders_feed_flags() {
        let options = ProgressOptions {
            percentage: Some(0),
            auto_close: true,
            no_cancel: true,
            ..Default::default()
        };
        assert_eq!(
            progress("Copying", &options),
            vec![
                "--progress",
                "--text=Copying",
                "--percentage=0",
                "--auto-close",
                "--no-cancel",
            ]
        );
    }

    #[test]
    fn hex_color_scales_channels_to_16_bit() {
        assert_eq!(hex_to_gdk_rgb("#FF5733"), "rgb(65535,22359,13107)");
        assert_eq!(hex_to_gdk_rgb("#000000"), "rgb(0,0,0)");
        assert_eq!(hex_to_gdk_rgb("#ffffff"), "rgb(65535,65535,65535)");
    }

    #[test]
    fn non_hex_colors_pass_through_unchanged() {
        for raw in ["red", "rgb(1,2,3)", "#12345", "#1234567", "#gghhii", "#ab\u{e9}é"] {
            assert_eq!(hex_to_gdk_rgb(raw), raw);
        }
    }
}
