//! Property-based invariant tests for the field collection store.
//!
//! Random operation sequences must preserve the structural invariants:
//!
//! 1. `order` values are exactly `0..n` matching vector position.
//! 2. Ids are pairwise distinct and never resurrected after removal.
//! 3. The selection is `None` or an id present in the collection.
//! 4. `add` with an arbitrary index always lands in bounds and selects
//!    the new field.
//! 5. `reorder` preserves the id multiset.
//! 6. The generation counter never decreases.

use std::collections::HashSet;

use formsmith_canvas::FieldCollectionStore;
use formsmith_core::{FieldDescriptor, FieldId, FieldKind};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add { kind: usize, at: Option<usize> },
    Remove { pick: usize },
    Reorder { from: usize, to: usize },
    Select { pick: usize },
    Clear,
    Update { pick: usize, required: bool },
}

fn op_sequences() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            (0usize..17, proptest::option::of(0usize..12))
                .prop_map(|(kind, at)| Op::Add { kind, at }),
            (0usize..12).prop_map(|pick| Op::Remove { pick }),
            (0usize..12, 0usize..12).prop_map(|(from, to)| Op::Reorder { from, to }),
            (0usize..12).prop_map(|pick| Op::Select { pick }),
            Just(Op::Clear),
            (0usize..12, any::<bool>()).prop_map(|(pick, required)| Op::Update { pick, required }),
        ],
        1..=40,
    )
}

/// Resolve `pick` to an id; every fourth pick deliberately aims at an id
/// the store has never issued, to exercise the silent no-op paths.
fn pick_id(store: &FieldCollectionStore, pick: usize) -> FieldId {
    if store.is_empty() || pick % 4 == 0 {
        FieldId::new(u64::MAX - pick as u64)
    } else {
        store.fields()[pick % store.len()].id
    }
}

fn apply(store: &mut FieldCollectionStore, op: &Op, created: &mut Vec<FieldId>) {
    match *op {
        Op::Add { kind, at } => {
            let kind = FieldKind::all()[kind % 17];
            created.push(store.add(kind, at));
        }
        Op::Remove { pick } => {
            let id = pick_id(store, pick);
            store.remove(id);
        }
        Op::Reorder { from, to } => store.reorder(from, to),
        Op::Select { pick } => {
            let id = pick_id(store, pick);
            store.select(id);
        }
        Op::Clear => store.clear_selection(),
        Op::Update { pick, required } => {
            let id = pick_id(store, pick);
            let mut descriptor = store
                .fields()
                .iter()
                .find(|field| field.id == id)
                .cloned()
                .unwrap_or_else(|| FieldDescriptor::with_defaults(id, FieldKind::Text));
            descriptor.required = required;
            descriptor.order = usize::MAX;
            store.update(descriptor);
        }
    }
}

fn check_dense(store: &FieldCollectionStore) -> Result<(), TestCaseError> {
    for (index, field) in store.fields().iter().enumerate() {
        prop_assert_eq!(field.order, index, "gap or duplicate rank at {}", index);
    }
    Ok(())
}

fn check_ids(
    store: &FieldCollectionStore,
    created: &[FieldId],
) -> Result<(), TestCaseError> {
    let live: Vec<FieldId> = store.fields().iter().map(|field| field.id).collect();
    let distinct: HashSet<FieldId> = live.iter().copied().collect();
    prop_assert_eq!(distinct.len(), live.len(), "duplicate ids in collection");
    for id in &live {
        prop_assert!(created.contains(id), "id {} not issued by this store", id);
    }
    Ok(())
}

fn check_selection(store: &FieldCollectionStore) -> Result<(), TestCaseError> {
    if let Some(selected) = store.selected_id() {
        prop_assert!(
            store.fields().iter().any(|field| field.id == selected),
            "selection dangles: {}",
            selected
        );
        prop_assert_eq!(
            store.selected_descriptor().map(|field| field.id),
            Some(selected)
        );
    } else {
        prop_assert!(store.selected_descriptor().is_none());
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Dense ordering after any operation sequence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dense_order_after_any_sequence(ops in op_sequences()) {
        let mut store = FieldCollectionStore::new();
        let mut created = Vec::new();
        for op in &ops {
            apply(&mut store, op, &mut created);
            check_dense(&store)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Ids pairwise distinct, never resurrected after removal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ids_unique_and_never_resurrected(ops in op_sequences()) {
        let mut store = FieldCollectionStore::new();
        let mut created = Vec::new();
        let mut removed: HashSet<FieldId> = HashSet::new();
        for op in &ops {
            let before: HashSet<FieldId> =
                store.fields().iter().map(|field| field.id).collect();
            apply(&mut store, op, &mut created);
            let after: HashSet<FieldId> =
                store.fields().iter().map(|field| field.id).collect();
            for gone in before.difference(&after) {
                removed.insert(*gone);
            }
            check_ids(&store, &created)?;
            for field in store.fields() {
                prop_assert!(
                    !removed.contains(&field.id),
                    "retired id {} resurfaced",
                    field.id
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Selection is None or a present id
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selection_is_none_or_present(ops in op_sequences()) {
        let mut store = FieldCollectionStore::new();
        let mut created = Vec::new();
        for op in &ops {
            apply(&mut store, op, &mut created);
            check_selection(&store)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Arbitrary add index lands in bounds and selects the new field
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_add_index_lands_in_bounds(
        seed in 0usize..8,
        kind in 0usize..17,
        at in proptest::option::of(0usize..64),
    ) {
        let mut store = FieldCollectionStore::new();
        for _ in 0..seed {
            store.add(FieldKind::Text, None);
        }
        let len_before = store.len();
        let id = store.add(FieldKind::all()[kind], at);
        prop_assert_eq!(store.len(), len_before + 1);
        prop_assert_eq!(store.selected_id(), Some(id));
        let position = store
            .fields()
            .iter()
            .position(|field| field.id == id)
            .expect("new field present");
        match at {
            Some(at) => prop_assert_eq!(position, at.min(len_before)),
            None => prop_assert_eq!(position, len_before),
        }
        check_dense(&store)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reorder preserves the id multiset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorder_preserves_id_multiset(
        seed in 1usize..10,
        from in 0usize..12,
        to in 0usize..12,
    ) {
        let mut store = FieldCollectionStore::new();
        for _ in 0..seed {
            store.add(FieldKind::Text, None);
        }
        let mut before: Vec<FieldId> =
            store.fields().iter().map(|field| field.id).collect();
        store.reorder(from, to);
        let mut after: Vec<FieldId> =
            store.fields().iter().map(|field| field.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
        check_dense(&store)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Generation never decreases
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generation_never_decreases(ops in op_sequences()) {
        let mut store = FieldCollectionStore::new();
        let mut created = Vec::new();
        let mut last = store.generation();
        for op in &ops {
            apply(&mut store, op, &mut created);
            let now = store.generation();
            prop_assert!(now >= last, "generation moved backwards");
            last = now;
        }
    }
}
