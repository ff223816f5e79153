#![forbid(unsafe_code)]

//! Domain vocabulary for the Formsmith form builder.
//!
//! Everything the canvas engine and a presentation layer need to talk to
//! each other: the closed set of [`FieldKind`]s, the [`FieldDescriptor`]
//! blueprint, stable [`FieldId`] identity, the tagged [`DragPayload`] a
//! pointer carries mid-gesture, [`DropZone`] insertion targets, and the
//! palette catalog.
//!
//! This crate holds no engine state; the collection itself lives in
//! `formsmith-canvas`.

pub mod event;
pub mod field;
pub mod id;
pub mod palette;

pub use event::{DragPayload, DropZone};
pub use field::{FieldDescriptor, FieldKind, SelectOption, ValidationRules};
pub use id::{FieldId, FieldIdGenerator};
pub use palette::PaletteEntry;
