mod common;

use std::collections::HashSet;

use viewflow::{compute_diff, DiffList, Diffable};

#[derive(Debug, Clone, PartialEq)]
struct Contact {
    id: u64,
    name: String,
    avatar: String,
}

impl Diffable for Contact {
    fn same_item(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn same_content(&self, other: &Self) -> bool {
        self.name == other.name && self.avatar == other.avatar
    }

    fn view_tag(&self) -> u32 {
        1
    }
}

fn contact(id: u64, name: &str) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        avatar: format!("avatar-{id}"),
    }
}

#[test]
fn plan_partitions_positions_across_categories() {
    common::init_logging();
    let old = vec![contact(1, "ann"), contact(2, "bob"), contact(3, "cho")];
    let new = vec![
        contact(3, "cho"),        // kept, unchanged
        contact(2, "robert"),     // kept, renamed
        contact(4, "dee"),        // added
    ];

    let plan = compute_diff(&old, &new);

    // Every new position without an identity match is an insert.
    assert_eq!(plan.inserts, vec![2]);
    // Every old position without an identity match is a remove.
    assert_eq!(plan.removes, vec![0]);
    // Identity-matched pairs with differing content are updates.
    assert_eq!(plan.updates, vec![(1, 1)]);

    // No new position appears both as an insert and as an update target.
    let inserted: HashSet<usize> = plan.inserts.iter().copied().collect();
    let updated_new: HashSet<usize> = plan.updates.iter().map(|(_, n)| *n).collect();
    assert!(inserted.is_disjoint(&updated_new));

    // No old position appears both as a remove and as an update source.
    let removed: HashSet<usize> = plan.removes.iter().copied().collect();
    let updated_old: HashSet<usize> = plan.updates.iter().map(|(o, _)| *o).collect();
    assert!(removed.is_disjoint(&updated_old));
}

#[test]
fn diffing_a_sequence_against_itself_is_empty() {
    let items = vec![contact(1, "ann"), contact(2, "bob")];
    assert!(compute_diff(&items, &items).is_empty());
}

#[test]
fn pure_reorder_produces_no_operations() {
    let old = vec![contact(1, "ann"), contact(2, "bob"), contact(3, "cho")];
    let new = vec![contact(3, "cho"), contact(1, "ann"), contact(2, "bob")];
    assert!(compute_diff(&old, &new).is_empty());
}

#[test]
fn full_replacement_reports_both_sides() {
    let old = vec![contact(1, "ann")];
    let new = vec![contact(9, "zed")];
    let plan = compute_diff(&old, &new);
    assert_eq!(plan.inserts, vec![0]);
    assert_eq!(plan.removes, vec![0]);
    assert!(plan.updates.is_empty());
    assert_eq!(plan.op_count(), 2);
}

#[test]
fn submit_reconciles_against_the_held_sequence() {
    common::init_logging();
    let list = DiffList::new();

    let plan = list.submit(vec![contact(1, "ann"), contact(2, "bob")]);
    assert_eq!(plan.inserts, vec![0, 1]);

    let plan = list.submit(vec![contact(2, "robert")]);
    assert_eq!(plan.removes, vec![0]);
    assert_eq!(plan.updates, vec![(1, 0)]);

    assert_eq!(list.items(), vec![contact(2, "robert")]);
}

#[test]
fn submissions_from_clones_observe_each_other() {
    let list = DiffList::new();
    let other = list.clone();

    list.submit(vec![contact(1, "ann")]);
    let plan = other.submit(vec![contact(1, "ann"), contact(2, "bob")]);

    assert_eq!(plan.inserts, vec![1]);
    assert_eq!(list.len(), 2);
}
