//! Descriptor equivalence
//!
//! Decides whether two sources that agree on a member name agree on the
//! member itself. Placeholders compare by role; real definitions compare by
//! identity of their value or accessor halves plus all three flags.

use crate::model::{MemberDescriptor, PropertyDescriptor, Slot};

/// Whether two member descriptors describe the same member
///
/// Two required placeholders are equivalent, as are two conflict
/// placeholders. A placeholder is never equivalent to a definition.
pub fn equivalent(a: &MemberDescriptor, b: &MemberDescriptor) -> bool {
    match (a, b) {
        (MemberDescriptor::Required, MemberDescriptor::Required) => true,
        (MemberDescriptor::Conflict, MemberDescriptor::Conflict) => true,
        (MemberDescriptor::Defined(x), MemberDescriptor::Defined(y)) => same_property(x, y),
        _ => false,
    }
}

/// Identity comparison of two property definitions
pub fn same_property(a: &PropertyDescriptor, b: &PropertyDescriptor) -> bool {
    same_slot(&a.slot, &b.slot)
        && a.enumerable == b.enumerable
        && a.writable == b.writable
        && a.configurable == b.configurable
}

fn same_slot(a: &Slot, b: &Slot) -> bool {
    match (a, b) {
        (Slot::Value(x), Slot::Value(y)) => x == y,
        (
            Slot::Accessor {
                get: get_a,
                set: set_a,
            },
            Slot::Accessor {
                get: get_b,
                set: set_b,
            },
        ) => {
            let gets = match (get_a, get_b) {
                (Some(x), Some(y)) => x.same(y),
                (None, None) => true,
                _ => false,
            };
            let sets = match (set_a, set_b) {
                (Some(x), Some(y)) => x.same(y),
                (None, None) => true,
                _ => false,
            };
            gets && sets
        }
        _ => false,
    }
}
