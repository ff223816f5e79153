#![forbid(unsafe_code)]

//! Field identity.
//!
//! Identities are opaque and strictly increasing for the lifetime of a
//! generator: an id retired by a removal is never handed out again. Each
//! store owns its own generator, so independent stores do not share
//! identity space and tests can pin the starting counter.

/// Opaque stable identity of a placed field.
///
/// Collaborators rendering the collection must key on this, never on the
/// positional index: reordering changes position but not identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldId(u64);

impl FieldId {
    /// Wrap a raw counter value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field_{}", self.0)
    }
}

/// Monotonic source of [`FieldId`]s.
///
/// Every call to [`next_id`](Self::next_id) returns a value strictly
/// greater than all values returned before it, including across removals
/// in the owning collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdGenerator {
    next: u64,
}

impl Default for FieldIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldIdGenerator {
    /// Generator starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_start(1)
    }

    /// Generator starting at an explicit counter value.
    #[must_use]
    pub const fn with_start(start: u64) -> Self {
        Self { next: start }
    }

    /// Hand out the next identity.
    pub fn next_id(&mut self) -> FieldId {
        let id = FieldId(self.next);
        self.next += 1;
        id
    }

    /// The value the next [`next_id`](Self::next_id) call will return.
    #[must_use]
    pub const fn peek(&self) -> u64 {
        self.next
    }
}
