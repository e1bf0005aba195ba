//! Symmetric composition

use std::collections::BTreeMap;

use crate::model::{MemberDescriptor, Trait};
use crate::rules::equivalence::equivalent;

enum Merge {
    Take,
    Keep,
    Conflict,
}

/// Compose any number of traits into one
///
/// Every name of every input ends up in the result. A required placeholder
/// yields to any other definition; two definitions that are not equivalent
/// become a conflict placeholder. The result does not depend on argument
/// order or grouping, and `compose([&a, &a])` is equivalent to `a`.
///
/// # Example
///
/// ```
/// use traitset_core::{compose, Member, Trait};
///
/// let a = Trait::new([("x", Member::value(1))]);
/// let b = Trait::new([("x", Member::value(2))]);
/// assert!(compose([&a, &b]).get("x").unwrap().is_conflict());
/// ```
pub fn compose<'a, I>(traits: I) -> Trait
where
    I: IntoIterator<Item = &'a Trait>,
{
    let mut members: BTreeMap<String, MemberDescriptor> = BTreeMap::new();
    let mut inputs = 0usize;

    for t in traits {
        inputs += 1;
        for (name, incoming) in t.iter() {
            let merge = match members.get(name) {
                None => Merge::Take,
                Some(existing) if existing.is_required() => Merge::Take,
                Some(existing) if incoming.is_required() || equivalent(existing, incoming) => {
                    Merge::Keep
                }
                Some(_) => Merge::Conflict,
            };

            match merge {
                Merge::Take => {
                    members.insert(name.to_string(), incoming.clone());
                }
                Merge::Keep => {}
                Merge::Conflict => {
                    members.insert(name.to_string(), MemberDescriptor::Conflict);
                }
            }
        }
    }

    let composed = Trait::from_descriptors(members);
    tracing::debug!(
        op = "compose",
        inputs = inputs,
        trait_len = composed.len(),
        conflict_len = composed.conflict_names().len(),
    );
    composed
}
