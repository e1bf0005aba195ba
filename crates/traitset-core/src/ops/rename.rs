//! Renaming members
//!
//! Each renamed member leaves a required placeholder under its old name so
//! that code written against the old name still demands a definition.
//! Two members renamed onto one name, or a member renamed onto an existing
//! definition, collide into a conflict placeholder.

use std::collections::BTreeMap;

use crate::model::{MemberDescriptor, Trait};

/// Rename members of `t` according to `renames` (old name to new name)
///
/// The outcome for each name depends only on which operations target it,
/// never on the order in which members are visited. Required members are
/// never moved: a requirement has nothing to move.
pub fn rename<I, K, V>(renames: I, t: &Trait) -> Trait
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let renames: BTreeMap<String, String> = renames
        .into_iter()
        .map(|(from, to)| (from.into(), to.into()))
        .collect();

    let mut members: BTreeMap<String, MemberDescriptor> = BTreeMap::new();

    for (name, descriptor) in t.iter() {
        match renames.get(name) {
            Some(alias) if !descriptor.is_required() => {
                // A pending requirement under the alias is satisfied by the
                // incoming definition; anything else collides with it.
                let collides = members
                    .get(alias.as_str())
                    .is_some_and(|existing| !existing.is_required());
                let moved = if collides {
                    MemberDescriptor::Conflict
                } else {
                    descriptor.clone()
                };
                members.insert(alias.clone(), moved);

                members
                    .entry(name.to_string())
                    .or_insert(MemberDescriptor::Required);
            }
            _ => {
                if !members.contains_key(name) {
                    members.insert(name.to_string(), descriptor.clone());
                } else if !descriptor.is_required() {
                    // something was renamed onto this name
                    members.insert(name.to_string(), MemberDescriptor::Conflict);
                }
            }
        }
    }

    let renamed = Trait::from_descriptors(members);
    tracing::debug!(
        op = "rename",
        renames = renames.len(),
        trait_len = renamed.len(),
        required_len = renamed.required_names().len(),
        conflict_len = renamed.conflict_names().len(),
    );
    renamed
}
