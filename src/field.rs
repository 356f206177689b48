//! Field definitions for user-built forms.
//!
//! A [`FieldSchema`] describes one user-defined input slot in an authored
//! app: a stable identity, a kind, a mutable display label, and
//! kind-dependent extras. Fields are plain value records; all editing goes
//! through [`FormSchema`](crate::form::FormSchema) operations.

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a field.
///
/// Assigned once at creation by the owning form and never reused, even
/// after the field is deleted. Identity survives renames and reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// The kind of input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    ShortText,
    /// Multi-line text input.
    Paragraph,
    /// Select-one dropdown with authored options.
    Dropdown,
    /// Select-one radio group with authored options.
    SingleChoice,
    /// Select-many checkbox group with authored options.
    MultiChoice,
}

impl FieldKind {
    /// Whether this kind carries an `options` list.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldKind::Dropdown | FieldKind::SingleChoice | FieldKind::MultiChoice
        )
    }

    /// Human-readable name for display.
    pub fn title(&self) -> &'static str {
        match self {
            FieldKind::ShortText => "Short Text",
            FieldKind::Paragraph => "Paragraph",
            FieldKind::Dropdown => "Dropdown",
            FieldKind::SingleChoice => "Single Choice",
            FieldKind::MultiChoice => "Multiple Choice",
        }
    }

    /// Parse a field kind from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "short_text" | "text" => Some(Self::ShortText),
            "paragraph" => Some(Self::Paragraph),
            "dropdown" => Some(Self::Dropdown),
            "single_choice" | "radio" => Some(Self::SingleChoice),
            "multi_choice" | "checkbox" => Some(Self::MultiChoice),
            _ => None,
        }
    }
}

/// One user-defined input slot in an authored app's form.
///
/// Invariant: `options` is `Some` iff `kind.has_options()`. The
/// constructor establishes it and form operations preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Stable identity, immutable for the field's lifetime.
    pub id: FieldId,

    /// Input kind, fixed at creation.
    pub kind: FieldKind,

    /// Display name; also drives placeholder token derivation.
    pub label: String,

    /// Hint text shown inside empty short-text inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_hint: Option<String>,

    /// Pre-filled value used when no value is entered at run time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Ordered choice options; present only for choice kinds.
    /// May contain empty strings while authoring is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldSchema {
    /// Create a field with kind-appropriate defaults.
    ///
    /// Choice kinds are seeded with a single empty option so the editor
    /// has a row to start from.
    pub fn new(id: FieldId, kind: FieldKind) -> Self {
        let options = if kind.has_options() {
            Some(vec![String::new()])
        } else {
            None
        };

        Self {
            id,
            kind,
            label: String::new(),
            placeholder_hint: None,
            default_value: None,
            options,
        }
    }
}

/// A partial update to a field.
///
/// Unset members leave the corresponding field member unchanged. Identity
/// (`id`) and `kind` cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    /// New display label.
    pub label: Option<String>,
    /// New hint text.
    pub placeholder_hint: Option<String>,
    /// New default value.
    pub default_value: Option<String>,
    /// Replacement options list; ignored for kinds without options.
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    /// Patch that only changes the label.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the default value.
    pub fn default_value(value: impl Into<String>) -> Self {
        Self {
            default_value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the placeholder hint.
    pub fn placeholder_hint(hint: impl Into<String>) -> Self {
        Self {
            placeholder_hint: Some(hint.into()),
            ..Default::default()
        }
    }
}
