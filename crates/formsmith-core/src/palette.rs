#![forbid(unsafe_code)]

//! Palette catalog: the fixed menu of field blueprints a user can drag
//! onto the canvas.
//!
//! The engine owns the catalog data (kind, display label, one-line
//! description); icons and card chrome are the presentation layer's
//! business.

use crate::field::FieldKind;

/// One palette row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Blueprint this row instantiates.
    pub kind: FieldKind,
    /// Display name shown in the palette.
    pub label: &'static str,
    /// One-line description of what the field does.
    pub description: &'static str,
}

// Indexed by discriminant; order matches `FieldKind::all`.
const CATALOG: [PaletteEntry; 17] = [
    PaletteEntry {
        kind: FieldKind::Text,
        label: "Text Input",
        description: "Single line text input field",
    },
    PaletteEntry {
        kind: FieldKind::Textarea,
        label: "Text Area",
        description: "Multi-line text input field",
    },
    PaletteEntry {
        kind: FieldKind::Email,
        label: "Email",
        description: "Email address input with validation",
    },
    PaletteEntry {
        kind: FieldKind::Password,
        label: "Password",
        description: "Password input field",
    },
    PaletteEntry {
        kind: FieldKind::Number,
        label: "Number",
        description: "Numeric input field",
    },
    PaletteEntry {
        kind: FieldKind::Integer,
        label: "Integer",
        description: "Integer number input",
    },
    PaletteEntry {
        kind: FieldKind::Boolean,
        label: "Checkbox",
        description: "Boolean checkbox input",
    },
    PaletteEntry {
        kind: FieldKind::Select,
        label: "Select",
        description: "Single select dropdown",
    },
    PaletteEntry {
        kind: FieldKind::Multiselect,
        label: "Multi Select",
        description: "Multiple selection dropdown",
    },
    PaletteEntry {
        kind: FieldKind::Date,
        label: "Date",
        description: "Date picker input",
    },
    PaletteEntry {
        kind: FieldKind::Time,
        label: "Time",
        description: "Time picker input",
    },
    PaletteEntry {
        kind: FieldKind::Datetime,
        label: "Date Time",
        description: "Date and time picker",
    },
    PaletteEntry {
        kind: FieldKind::Url,
        label: "URL",
        description: "URL input with validation",
    },
    PaletteEntry {
        kind: FieldKind::Tel,
        label: "Phone",
        description: "Phone number input",
    },
    PaletteEntry {
        kind: FieldKind::Color,
        label: "Color",
        description: "Color picker input",
    },
    PaletteEntry {
        kind: FieldKind::Range,
        label: "Range",
        description: "Range slider input",
    },
    PaletteEntry {
        kind: FieldKind::File,
        label: "File",
        description: "File upload input",
    },
];

/// The full palette in display order.
#[must_use]
pub const fn entries() -> &'static [PaletteEntry; 17] {
    &CATALOG
}

/// The palette row for `kind`.
#[must_use]
pub const fn entry(kind: FieldKind) -> &'static PaletteEntry {
    &CATALOG[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_the_kind_catalog() {
        for (row, kind) in entries().iter().zip(FieldKind::all()) {
            assert_eq!(row.kind, kind);
        }
    }

    #[test]
    fn entry_looks_up_by_kind() {
        for kind in FieldKind::all() {
            assert_eq!(entry(kind).kind, kind);
        }
        assert_eq!(entry(FieldKind::Tel).label, "Phone");
        assert_eq!(entry(FieldKind::Boolean).label, "Checkbox");
    }

    #[test]
    fn every_row_has_label_and_description() {
        for row in entries() {
            assert!(!row.label.is_empty());
            assert!(!row.description.is_empty());
        }
    }
}
