#![forbid(unsafe_code)]

//! Drag vocabulary shared between the presentation layer and the engine.
//!
//! Two drag sources exist and must never be confused: a palette drag
//! carries only a [`FieldKind`], an in-canvas drag carries the dragged
//! field's identity and its index at drag start. [`DragPayload`] keeps
//! the distinction as an explicit tag, so coordinator dispatch is a
//! total match rather than a field-presence check.

use crate::field::FieldKind;
use crate::id::FieldId;

/// What a pointer is carrying while a drag is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "source"))]
pub enum DragPayload {
    /// A brand-new field arriving from the palette.
    #[cfg_attr(feature = "serde", serde(rename = "field-from-palette"))]
    FromPalette {
        /// Blueprint to instantiate on drop.
        kind: FieldKind,
    },
    /// An already-placed field being relocated within the canvas.
    #[cfg_attr(feature = "serde", serde(rename = "field-in-form"))]
    Existing {
        /// Identity of the dragged field.
        id: FieldId,
        /// Index the field had when the drag started.
        index: usize,
    },
}

/// A discrete insertion target for palette drops.
///
/// A canvas holding `n` fields exposes exactly `n + 1` zones: zone 0
/// before the first field, zone `k` after the k-th. The zone index is the
/// insertion index a dropped palette field receives. Zones are distinct
/// from the per-field hover regions used for in-canvas reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropZone(usize);

impl DropZone {
    /// Zone at the given ordinal position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The insertion index this zone assigns to a dropped field.
    #[must_use]
    pub const fn insertion_index(self) -> usize {
        self.0
    }

    /// Enumerate the zones for a canvas holding `field_count` fields.
    pub fn zones(field_count: usize) -> impl Iterator<Item = Self> {
        (0..=field_count).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_with_n_fields_has_n_plus_one_zones() {
        for n in 0..6 {
            let zones: Vec<DropZone> = DropZone::zones(n).collect();
            assert_eq!(zones.len(), n + 1);
            for (ordinal, zone) in zones.iter().enumerate() {
                assert_eq!(zone.insertion_index(), ordinal);
            }
        }
    }

    #[test]
    fn empty_canvas_still_has_the_append_zone() {
        let zones: Vec<DropZone> = DropZone::zones(0).collect();
        assert_eq!(zones, vec![DropZone::new(0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn payload_tags_match_the_wire_vocabulary() {
        let palette = DragPayload::FromPalette {
            kind: FieldKind::Date,
        };
        let json = serde_json::to_value(palette).expect("serialize");
        assert_eq!(json["source"], "field-from-palette");
        assert_eq!(json["kind"], "date");

        let existing = DragPayload::Existing {
            id: FieldId::new(9),
            index: 3,
        };
        let json = serde_json::to_value(existing).expect("serialize");
        assert_eq!(json["source"], "field-in-form");
        let back: DragPayload = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, existing);
    }
}
