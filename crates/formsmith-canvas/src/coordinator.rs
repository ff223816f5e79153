#![forbid(unsafe_code)]

//! Drag-and-drop coordination.
//!
//! [`DragDropCoordinator`] maps in-flight drag gestures onto
//! [`FieldCollectionStore`] operations. Two gesture kinds exist:
//!
//! - **Palette-origin drag**: the payload carries only a [`FieldKind`];
//!   releasing over a [`DropZone`] inserts a brand-new field at that
//!   zone's index.
//! - **In-canvas reorder drag**: the payload carries the dragged field's
//!   id and drag-start index; every hover over another field's region
//!   commits a reorder immediately (live reorder-as-you-drag) and the
//!   coordinator re-bases its notion of the dragged index, so the next
//!   hover computes its delta from the new position rather than the
//!   stale start position.
//!
//! # State machine
//!
//! `Idle` → [`begin`](DragDropCoordinator::begin) → `FromPalette` or
//! `Reordering` → [`drop_on_zone`](DragDropCoordinator::drop_on_zone) /
//! [`release`](DragDropCoordinator::release) /
//! [`cancel`](DragDropCoordinator::cancel) → `Idle`.
//!
//! # Invariants
//!
//! 1. Hovering a reorder drag over its own current position commits
//!    nothing.
//! 2. Drop zones accept palette payloads only; a reorder drag released
//!    on a zone simply ends.
//! 3. Release and cancel never undo committed hover-reorders: the
//!    collection stays exactly as of the last committed hover. This
//!    matches the original behavior and differs from the more common
//!    preview-then-commit-on-drop pattern; replacement UIs should plan
//!    for it.
//! 4. The coordinator holds no descriptor state; it remembers only which
//!    id it is dragging and where that field currently sits.

use formsmith_core::{DragPayload, DropZone, FieldId, FieldKind};

use crate::store::FieldCollectionStore;

/// Where the coordinator is within a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in flight.
    #[default]
    Idle,
    /// A palette blueprint is in flight; nothing is committed until it
    /// lands on a zone.
    FromPalette {
        /// Blueprint to instantiate on drop.
        kind: FieldKind,
    },
    /// An existing field is in flight; hover commits happen live.
    Reordering {
        /// Id of the dragged field.
        id: FieldId,
        /// Index the field had when the drag started.
        origin_index: usize,
        /// Index the field sits at right now, re-based after each commit.
        current_index: usize,
    },
}

impl DragState {
    /// Whether a drag is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Translates drag gestures into store operations.
#[derive(Debug, Clone, Default)]
pub struct DragDropCoordinator {
    state: DragState,
}

impl DragDropCoordinator {
    /// Coordinator in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Id of the field being reordered, if a reorder drag is in flight.
    #[must_use]
    pub const fn dragged_id(&self) -> Option<FieldId> {
        match self.state {
            DragState::Reordering { id, .. } => Some(id),
            DragState::Idle | DragState::FromPalette { .. } => None,
        }
    }

    /// Start a drag from `payload`.
    ///
    /// A `begin` while another drag is active replaces it: only one
    /// pointer exists, so a second start means the previous release
    /// event was lost upstream.
    pub fn begin(&mut self, payload: DragPayload) {
        self.state = match payload {
            DragPayload::FromPalette { kind } => DragState::FromPalette { kind },
            DragPayload::Existing { id, index } => DragState::Reordering {
                id,
                origin_index: index,
                current_index: index,
            },
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(state = ?self.state, "drag begin");
    }

    /// The pointer crossed into the region of the field at `hover_index`.
    ///
    /// For a reorder drag this commits `reorder(current, hover)` on the
    /// store immediately and re-bases the dragged index; the return value
    /// says whether a reorder was committed. Palette drags and idle
    /// pointers ignore field hovers; zones are their only targets.
    pub fn hover_field(&mut self, store: &mut FieldCollectionStore, hover_index: usize) -> bool {
        let DragState::Reordering {
            id,
            origin_index,
            current_index,
        } = self.state
        else {
            return false;
        };
        if store.is_empty() {
            return false;
        }
        // Presentation geometry can hand us an index past the end; clamp
        // so the re-based index matches what the store actually did.
        let hover_index = hover_index.min(store.len() - 1);
        if hover_index == current_index {
            return false;
        }
        store.reorder(current_index, hover_index);
        self.state = DragState::Reordering {
            id,
            origin_index,
            current_index: hover_index,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = id.value(),
            from = current_index,
            to = hover_index,
            "live reorder"
        );
        true
    }

    /// The payload was released over `zone`.
    ///
    /// For a palette drag this inserts the new field at the zone's
    /// insertion index and returns its fresh id. For anything else the
    /// gesture just ends. Either way the coordinator returns to idle.
    pub fn drop_on_zone(
        &mut self,
        store: &mut FieldCollectionStore,
        zone: DropZone,
    ) -> Option<FieldId> {
        match std::mem::take(&mut self.state) {
            DragState::FromPalette { kind } => {
                let id = store.add(kind, Some(zone.insertion_index()));
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    kind = %kind,
                    index = zone.insertion_index(),
                    id = id.value(),
                    "palette drop"
                );
                Some(id)
            }
            DragState::Idle | DragState::Reordering { .. } => None,
        }
    }

    /// The pointer was released away from any zone; the gesture ends.
    ///
    /// Committed hover-reorders stay applied.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// The gesture was cancelled (Escape, focus loss, drop outside the
    /// canvas).
    ///
    /// Identical to [`release`](Self::release): live commits are not
    /// rolled back.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
