#![forbid(unsafe_code)]

//! Canvas state engine for Formsmith.
//!
//! Two components, read by a presentation layer that stays out of this
//! crate:
//!
//! - [`FieldCollectionStore`] owns the ordered field descriptors and the
//!   single selection, with identity and dense-ordering guarantees.
//! - [`DragDropCoordinator`] translates pointer-drag gestures (palette
//!   insert, in-canvas reorder) into store operations.
//!
//! Control flow: the presentation layer fires gestures → the coordinator
//! interprets the payload and target position → the store mutates and
//! bumps its generation → the presentation layer re-renders from
//! [`FieldCollectionStore::fields`] or an owned
//! [`FieldCollectionStore::snapshot`]. The store never calls into the
//! coordinator.
//!
//! Render keys must be the stable [`FieldDescriptor::id`], never the
//! positional index: reordering changes position but not identity.
//!
//! [`FieldDescriptor::id`]: formsmith_core::FieldDescriptor

pub mod coordinator;
pub mod store;

pub use coordinator::{DragDropCoordinator, DragState};
pub use store::{FieldCollectionStore, FieldsSnapshot};
