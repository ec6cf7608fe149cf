use proptest::collection::vec;
use proptest::prelude::*;
use small_roster::{NameRegistry, RosterError};

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,8}[A-Za-z]?"
}

/// 去除重複後的名冊
fn registry_from(names: &[String]) -> NameRegistry {
    let mut registry = NameRegistry::new();
    for n in names {
        let _ = registry.add(n);
    }
    registry
}

proptest! {
    #[test]
    fn add_absent_name_appends(names in vec(name(), 0..12), candidate in name()) {
        let mut registry = registry_from(&names);
        prop_assume!(!registry.contains(&candidate));
        let before = registry.list();

        prop_assert_eq!(registry.add(&candidate).unwrap(), candidate.clone());
        prop_assert!(registry.contains(&candidate));

        let after = registry.list();
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(after.last(), Some(&candidate));
        prop_assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn add_empty_never_mutates(names in vec(name(), 0..12)) {
        let mut registry = registry_from(&names);
        let before = registry.list();

        prop_assert!(matches!(registry.add(""), Err(RosterError::EmptyName)));
        prop_assert_eq!(registry.list(), before);
    }

    #[test]
    fn add_existing_is_duplicate(names in vec(name(), 1..12), pick in any::<prop::sample::Index>()) {
        let mut registry = registry_from(&names);
        let before = registry.list();
        let existing = pick.get(&before).clone();

        let is_duplicate = matches!(registry.add(&existing), Err(RosterError::DuplicateName { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(registry.list(), before);
    }

    #[test]
    fn remove_absent_is_not_found(names in vec(name(), 0..12), candidate in name()) {
        let mut registry = registry_from(&names);
        prop_assume!(!registry.contains(&candidate));
        let before = registry.list();

        let is_not_found = matches!(registry.remove(&candidate), Err(RosterError::NotFound { .. }));
        prop_assert!(is_not_found);
        prop_assert_eq!(registry.list(), before);
    }

    #[test]
    fn remove_present_keeps_relative_order(names in vec(name(), 1..12), pick in any::<prop::sample::Index>()) {
        let mut registry = registry_from(&names);
        let before = registry.list();
        let target = pick.get(&before).clone();

        prop_assert_eq!(registry.remove(&target).unwrap(), target.clone());
        prop_assert!(!registry.contains(&target));

        let expected: Vec<String> = before.into_iter().filter(|n| n != &target).collect();
        prop_assert_eq!(registry.list(), expected);
    }

    #[test]
    fn list_is_stable_without_mutation(names in vec(name(), 0..12)) {
        let registry = registry_from(&names);
        prop_assert_eq!(registry.list(), registry.list());
    }

    #[test]
    fn entries_stay_unique(names in vec(name(), 0..24)) {
        let registry = registry_from(&names);
        let entries = registry.list();
        let mut deduped = entries.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), entries.len());
    }
}

#[test]
fn scenario_trimmed_input_matches_plain_add() {
    let mut trimmed = NameRegistry::new();
    let mut plain = NameRegistry::new();

    trimmed.add("  Ana  ".trim()).unwrap();
    plain.add("Ana").unwrap();

    assert_eq!(trimmed, plain);
}
