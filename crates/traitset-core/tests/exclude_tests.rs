#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{prototype_with, single};
use traitset_core::{exclude, Member, Trait, TraitError, Value, REQUIRED};

#[test]
fn test_exclude_then_create_requires_member() {
    let t = single("x", 1);
    let excluded = t.exclude(["x"]);

    assert!(excluded.get("x").unwrap().is_required());
    assert_eq!(
        excluded.create().unwrap_err(),
        TraitError::MissingRequiredMember {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_excluded_member_can_be_resupplied() {
    let t = Trait::new([("x", Member::value(1)), ("y", Member::value(2))]);
    let fixed = t.exclude(["x"]).compose(&single("x", 10));

    let o = fixed.create().unwrap();
    assert_eq!(o.get("x").unwrap(), Value::from(10));
    assert_eq!(o.get("y").unwrap(), Value::from(2));
}

#[test]
fn test_excluded_member_can_be_inherited() {
    let t = single("x", 1).exclude(["x"]);
    let o = t
        .create_with(prototype_with(&[("x", Value::from(5))]))
        .unwrap();
    assert_eq!(o.get("x").unwrap(), Value::from(5));
}

#[test]
fn test_excluding_required_member_keeps_it_required() {
    let t = Trait::new([("x", REQUIRED)]);
    let excluded = exclude(["x"], &t);
    assert!(excluded.equivalent_to(&t));
}

#[test]
fn test_empty_exclusion_is_identity() {
    let t = single("x", 1);
    let none: [&str; 0] = [];
    assert!(t.exclude(none).equivalent_to(&t));
}
