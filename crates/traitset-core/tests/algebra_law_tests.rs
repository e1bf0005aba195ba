#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Algebraic laws of composition, checked on generated traits
//!
//! Generated members draw from a small name pool so that collisions are
//! frequent, and from values whose identity is stable across draws.

mod common;

use common::shared_methods;
use proptest::prelude::*;
use traitset_core::{
    compose, equivalent, exclude, rename, resolve, Member, Resolution, Trait, REQUIRED,
};

const NAMES: &[&str] = &["a", "b", "c", "d", "e"];

fn member_strategy() -> impl Strategy<Value = Member> {
    prop_oneof![
        Just(REQUIRED),
        (0i32..3).prop_map(|n| Member::value(n)),
        prop::sample::select(vec!["x", "y"]).prop_map(|s| Member::value(s)),
        (0..shared_methods().len()).prop_map(|i| Member::value(shared_methods()[i].clone())),
    ]
}

fn member_list_strategy() -> impl Strategy<Value = Vec<(&'static str, Member)>> {
    prop::collection::vec((prop::sample::select(NAMES), member_strategy()), 0..5)
}

fn trait_strategy() -> impl Strategy<Value = Trait> {
    member_list_strategy().prop_map(|members| Trait::new(members))
}

proptest! {
    #[test]
    fn prop_compose_is_commutative(a in trait_strategy(), b in trait_strategy()) {
        prop_assert!(a.compose(&b).equivalent_to(&b.compose(&a)));
    }

    #[test]
    fn prop_compose_is_associative(
        a in trait_strategy(),
        b in trait_strategy(),
        c in trait_strategy()
    ) {
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        prop_assert!(left.equivalent_to(&right));
        prop_assert!(left.equivalent_to(&compose([&a, &b, &c])));
    }

    #[test]
    fn prop_compose_is_idempotent(a in trait_strategy()) {
        prop_assert!(a.compose(&a).equivalent_to(&a));
    }

    #[test]
    fn prop_empty_is_identity(a in trait_strategy()) {
        prop_assert!(a.compose(&Trait::empty()).equivalent_to(&a));
        prop_assert!(Trait::empty().compose(&a).equivalent_to(&a));
    }

    #[test]
    fn prop_rename_commutes_with_relabeling(
        members in member_list_strategy(),
        mapping in prop::collection::btree_map(
            prop::sample::select(NAMES),
            prop::sample::select(NAMES),
            0..4,
        ),
        permutation in Just(NAMES.to_vec()).prop_shuffle()
    ) {
        // relabeling changes which member the sorted walk visits first
        let relabel = |name: &str| -> &'static str {
            NAMES
                .iter()
                .position(|n| *n == name)
                .map_or(NAMES[0], |i| permutation[i])
        };

        let t = Trait::new(members.clone());
        let relabeled_t = Trait::new(
            members.into_iter().map(|(name, member)| (relabel(name), member)),
        );
        let relabeled_mapping: Vec<(&str, &str)> = mapping
            .iter()
            .map(|(from, to)| (relabel(*from), relabel(*to)))
            .collect();

        let renamed = t.rename(mapping.clone());
        let renamed_relabeled = relabeled_t.rename(relabeled_mapping);

        prop_assert_eq!(renamed.len(), renamed_relabeled.len());
        for (name, descriptor) in renamed.iter() {
            let counterpart = renamed_relabeled.get(relabel(name));
            prop_assert!(
                counterpart.is_some_and(|c| equivalent(descriptor, c)),
                "{} -> {} differs after relabeling",
                name,
                relabel(name)
            );
        }
    }

    #[test]
    fn prop_resolve_is_exclude_then_rename(
        a in trait_strategy(),
        excluded in prop::collection::btree_set(prop::sample::select(NAMES), 0..3),
        targets in prop::collection::btree_map(
            prop::sample::select(NAMES),
            prop::sample::select(NAMES),
            0..3,
        )
    ) {
        let renames: Vec<(&str, &str)> = targets
            .into_iter()
            .filter(|(from, _)| !excluded.contains(from))
            .collect();
        let resolutions: Vec<(&str, Resolution)> = excluded
            .iter()
            .map(|name| (*name, Resolution::Exclude))
            .chain(renames.iter().map(|(from, to)| (*from, Resolution::from(*to))))
            .collect();

        let expected = rename(renames.clone(), &exclude(excluded.iter(), &a));
        prop_assert!(resolve(resolutions, &a).equivalent_to(&expected));
    }

    #[test]
    fn prop_exclude_yields_required(a in trait_strategy(), name in prop::sample::select(NAMES)) {
        let excluded = a.exclude([name]);
        prop_assert_eq!(excluded.contains(name), a.contains(name));
        if a.contains(name) {
            prop_assert!(excluded.get(name).unwrap().is_required());
        }
    }

    #[test]
    fn prop_complete_traits_always_create(a in trait_strategy()) {
        let outcome = a.create();
        prop_assert_eq!(outcome.is_ok(), a.is_complete());
    }
}
