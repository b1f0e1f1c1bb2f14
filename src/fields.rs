//! Form field descriptions for the forms dialog.

use serde::{Deserialize, Serialize};

/// One field in a forms dialog, in display order.
///
/// zenity prints one value per field on submit, joined by the forms
/// separator, so the field order here is also the value order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormField {
    /// Single-line text entry.
    Entry { label: String },
    /// Masked text entry.
    Password { label: String },
    /// Multi-line text entry.
    Multiline { label: String },
    /// Date picker; prints per the forms date format.
    Calendar { label: String },
    /// Single-column list selection.
    List {
        label: String,
        /// Optional column header, rendered as `label:header`.
        header: Option<String>,
        values: Vec<String>,
        /// Per-column cell values for multi-column lists.
        column_values: Vec<String>,
    },
    /// Drop-down selection.
    Combo { label: String, values: Vec<String> },
}

impl FormField {
    pub fn entry(label: impl Into<String>) -> Self {
        Self::Entry {
            label: label.into(),
        }
    }

    pub fn password(label: impl Into<String>) -> Self {
        Self::Password {
            label: label.into(),
        }
    }

    pub fn multiline(label: impl Into<String>) -> Self {
        Self::Multiline {
            label: label.into(),
        }
    }

    pub fn calendar(label: impl Into<String>) -> Self {
        Self::Calendar {
            label: label.into(),
        }
    }

    pub fn list(
        label: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::List {
            label: label.into(),
            header: None,
            values: values.into_iter().map(Into::into).collect(),
            column_values: Vec::new(),
        }
    }

    pub fn combo(
        label: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Combo {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The label shown next to the field.
    pub fn label(&self) -> &str {
        match self {
            Self::Entry { label }
            | Self::Password { label }
            | Self::Multiline { label }
            | Self::Calendar { label }
            | Self::List { label, .. }
            | Self::Combo { label, .. } => label,
        }
    }
}
