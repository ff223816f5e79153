#![forbid(unsafe_code)]

//! Ordered field collection with single-selection tracking.
//!
//! [`FieldCollectionStore`] is the only writer of the collection. All
//! mutations run synchronously inside a single gesture dispatch and
//! restore every invariant before returning, so a live drag can issue
//! many mutations and the canvas can safely re-render after each one.
//!
//! # Invariants
//!
//! 1. `order` values are exactly the permutation `0..n` matching vector
//!    position: no gaps, no duplicates.
//! 2. Ids are pairwise distinct across all descriptors ever created by
//!    this store; removal retires an id permanently.
//! 3. The selection is `None` or an id currently in the collection.
//! 4. An out-of-range insertion index clamps to `[0, n]`; out-of-range
//!    reorder indices clamp to the current bounds.
//!
//! Invalid input never fails loudly: operations referencing a missing id
//! are treated as already satisfied and ignored.

use std::sync::Arc;

use formsmith_core::{FieldDescriptor, FieldId, FieldIdGenerator, FieldKind};

/// Owned immutable snapshot of the field sequence.
///
/// Snapshots are decoupled from the store: later mutations never show
/// through. Holders should treat a snapshot as stale once
/// [`FieldCollectionStore::generation`] moves past the value observed at
/// capture time.
pub type FieldsSnapshot = Arc<[FieldDescriptor]>;

/// Ordered collection of field descriptors plus the current selection.
#[derive(Debug, Clone)]
pub struct FieldCollectionStore {
    fields: Vec<FieldDescriptor>,
    selected: Option<FieldId>,
    ids: FieldIdGenerator,
    generation: u64,
}

impl Default for FieldCollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldCollectionStore {
    /// Empty store with a fresh identity space.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(FieldIdGenerator::new())
    }

    /// Empty store drawing identities from `ids`.
    ///
    /// Injecting the generator pins identity values for deterministic
    /// tests and keeps independent stores out of each other's id space.
    #[must_use]
    pub fn with_generator(ids: FieldIdGenerator) -> Self {
        Self {
            fields: Vec::new(),
            selected: None,
            ids,
            generation: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The canonical ordered sequence.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of placed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the canvas is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Owned immutable snapshot of the sequence.
    #[must_use]
    pub fn snapshot(&self) -> FieldsSnapshot {
        self.fields.iter().cloned().collect()
    }

    /// Mutation counter; bumps exactly once per call that changed state.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Currently selected id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    /// Descriptor matching the selection, if any.
    #[must_use]
    pub fn selected_descriptor(&self) -> Option<&FieldDescriptor> {
        let id = self.selected?;
        self.fields.iter().find(|field| field.id == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create a field of `kind` and insert it at `at`, clamped to
    /// `[0, len]`; append when `at` is `None`.
    ///
    /// The new field is seeded with creation defaults (derived name and
    /// label, `required = false`, two placeholder options for select and
    /// multiselect kinds) and becomes the selection. Every kind is
    /// accepted unconditionally; an existing field of the same kind is
    /// never deduplicated.
    pub fn add(&mut self, kind: FieldKind, at: Option<usize>) -> FieldId {
        let id = self.ids.next_id();
        let descriptor = FieldDescriptor::with_defaults(id, kind);
        let index = at.unwrap_or(self.fields.len()).min(self.fields.len());
        self.fields.insert(index, descriptor);
        self.renumber();
        self.selected = Some(id);
        self.bump("add");
        id
    }

    /// Remove the field with `id`, if present.
    ///
    /// Clears the selection when it pointed at the removed field. A
    /// missing id is ignored.
    pub fn remove(&mut self, id: FieldId) {
        let before = self.fields.len();
        self.fields.retain(|field| field.id != id);
        if self.fields.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.renumber();
        self.bump("remove");
    }

    /// Replace the stored descriptor whose id matches `descriptor.id`.
    ///
    /// The replacement is taken verbatim except for `order`, which the
    /// store overwrites with the field's current position so a
    /// caller-supplied rank can never break the dense-ordering
    /// invariant. A missing id is ignored.
    pub fn update(&mut self, descriptor: FieldDescriptor) {
        let Some(position) = self
            .fields
            .iter()
            .position(|field| field.id == descriptor.id)
        else {
            return;
        };
        let mut descriptor = descriptor;
        descriptor.order = position;
        self.fields[position] = descriptor;
        self.bump("update");
    }

    /// Move the field at `from` to `to` in one atomic step.
    ///
    /// Indices are clamped to the current bounds; a clamped no-move, or
    /// an empty collection, leaves the store untouched.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if self.fields.is_empty() {
            return;
        }
        let last = self.fields.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return;
        }
        let moved = self.fields.remove(from);
        self.fields.insert(to, moved);
        self.renumber();
        self.bump("reorder");
    }

    /// Select the field with `id`.
    ///
    /// Ids not present in the collection are ignored and `false` is
    /// returned, so the selection can never dangle.
    pub fn select(&mut self, id: FieldId) -> bool {
        if !self.fields.iter().any(|field| field.id == id) {
            return false;
        }
        if self.selected != Some(id) {
            self.selected = Some(id);
            self.bump("select");
        }
        true
    }

    /// Clear the selection. Idempotent.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.bump("clear_selection");
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Rewrite `order` to match vector position.
    fn renumber(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.order = index;
        }
    }

    fn bump(&mut self, _op: &'static str) {
        self.generation += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            op = _op,
            len = self.fields.len(),
            selected = self.selected.map(FieldId::value),
            generation = self.generation,
            "store mutation"
        );
    }
}
