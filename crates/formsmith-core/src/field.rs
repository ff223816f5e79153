#![forbid(unsafe_code)]

//! Field kinds and descriptors.
//!
//! A [`FieldDescriptor`] is one form-field blueprint placed on the canvas:
//! a closed [`FieldKind`], display metadata, an opaque validation bag, and
//! a dense zero-based rank mirroring its position in the collection.
//! Descriptors are created and renumbered only by the collection store;
//! nothing in this module enforces ordering on its own.

use crate::id::FieldId;

/// Seeded option rows for freshly created select/multiselect fields.
const DEFAULT_OPTIONS: [(&str, &str); 2] = [("option1", "Option 1"), ("option2", "Option 2")];

/// The closed set of field blueprints a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Password,
    Number,
    Integer,
    Boolean,
    Select,
    Multiselect,
    Date,
    Time,
    Datetime,
    Url,
    Tel,
    Color,
    Range,
    File,
}

impl FieldKind {
    /// All kinds, in palette order.
    #[must_use]
    pub const fn all() -> [Self; 17] {
        [
            Self::Text,
            Self::Textarea,
            Self::Email,
            Self::Password,
            Self::Number,
            Self::Integer,
            Self::Boolean,
            Self::Select,
            Self::Multiselect,
            Self::Date,
            Self::Time,
            Self::Datetime,
            Self::Url,
            Self::Tel,
            Self::Color,
            Self::Range,
            Self::File,
        ]
    }

    /// Lowercase wire name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Color => "color",
            Self::Range => "range",
            Self::File => "file",
        }
    }

    /// Parse a wire name back into a kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.name() == name)
    }

    /// Whether descriptors of this kind carry an options list.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Multiselect)
    }

    /// Default display label: the wire name with its first letter
    /// uppercased, suffixed `" Field"`.
    #[must_use]
    pub fn default_label(self) -> String {
        let name = self.name();
        let mut label = String::with_capacity(name.len() + 6);
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
        label.push_str(" Field");
        label
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One `{value, label}` row of a select/multiselect field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Caption shown to the user.
    pub label: String,
}

impl SelectOption {
    /// Create an option row.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Constraint hints attached to a field.
///
/// The engine stores these verbatim and never interprets them; which rules
/// make sense for a given kind is a collaborator concern.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
    pub custom_message: Option<String>,
}

/// One form-field blueprint placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    /// Stable identity, unique for the lifetime of the collection and
    /// never reused after removal.
    pub id: FieldId,
    /// Which blueprint this field is.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: FieldKind,
    /// Machine-oriented identifier. Uniqueness is best-effort only.
    pub name: String,
    /// Human-readable caption.
    pub label: String,
    /// Optional display hint, opaque to the engine.
    pub placeholder: Option<String>,
    /// Optional display hint, opaque to the engine.
    pub description: Option<String>,
    /// Whether the field must be filled in. Defaults to false at creation.
    pub required: bool,
    /// Opaque constraint bag.
    pub validation: Option<ValidationRules>,
    /// Present iff [`FieldKind::has_options`].
    pub options: Option<Vec<SelectOption>>,
    /// Dense zero-based rank; always equals the descriptor's position in
    /// the canonical sequence.
    pub order: usize,
}

impl FieldDescriptor {
    /// Build a descriptor with creation-time defaults for `kind`.
    ///
    /// The name is `{wire_name}_{counter}` from the monotonic id, the
    /// label is [`FieldKind::default_label`], and select/multiselect
    /// kinds are seeded with two placeholder options. `order` starts at
    /// 0; the owning store renumbers on insertion.
    #[must_use]
    pub fn with_defaults(id: FieldId, kind: FieldKind) -> Self {
        let options = kind.has_options().then(|| {
            DEFAULT_OPTIONS
                .iter()
                .map(|&(value, label)| SelectOption::new(value, label))
                .collect()
        });
        Self {
            id,
            kind,
            name: format!("{}_{}", kind.name(), id.value()),
            label: kind.default_label(),
            placeholder: None,
            description: None,
            required: false,
            validation: None,
            options,
            order: 0,
        }
    }
}
