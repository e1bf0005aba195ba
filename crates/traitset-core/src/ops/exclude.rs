use std::collections::BTreeSet;

use crate::model::{MemberDescriptor, Trait};

/// Replace the named members with required placeholders
///
/// Names that are absent from `t` are ignored; members already required are
/// copied as they are.
pub fn exclude<I, S>(names: I, t: &Trait) -> Trait
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: BTreeSet<String> = names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    let members = t
        .iter()
        .map(|(name, descriptor)| {
            let descriptor = if names.contains(name) && !descriptor.is_required() {
                MemberDescriptor::Required
            } else {
                descriptor.clone()
            };
            (name.to_string(), descriptor)
        })
        .collect();

    let excluded = Trait::from_descriptors(members);
    tracing::debug!(
        op = "exclude",
        trait_len = excluded.len(),
        required_len = excluded.required_names().len(),
    );
    excluded
}
