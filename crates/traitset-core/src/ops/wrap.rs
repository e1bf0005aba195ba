//! Lifting plain members into a trait

use std::collections::BTreeMap;

use crate::model::{Member, MemberDescriptor, Trait};
use crate::object::Object;

/// Anything that can be lifted into a trait
///
/// A trait lifts to itself. Objects lift their own enumerable members with
/// their exact flags. Hand-written `(name, Member)` collections lift with
/// `Member::Required` turned into a required placeholder.
pub trait IntoTrait {
    fn into_trait(self) -> Trait;
}

impl IntoTrait for Trait {
    fn into_trait(self) -> Trait {
        self
    }
}

impl IntoTrait for &Trait {
    fn into_trait(self) -> Trait {
        self.clone()
    }
}

impl IntoTrait for &Object {
    fn into_trait(self) -> Trait {
        let members = self
            .own_properties()
            .filter(|(_, p)| p.enumerable)
            .map(|(name, p)| (name.to_string(), MemberDescriptor::Defined(p.clone())))
            .collect();
        Trait::from_descriptors(members)
    }
}

impl<I, K> IntoTrait for I
where
    I: IntoIterator<Item = (K, Member)>,
    K: Into<String>,
{
    fn into_trait(self) -> Trait {
        let members: BTreeMap<String, MemberDescriptor> = self
            .into_iter()
            .map(|(name, member)| (name.into(), MemberDescriptor::from(member)))
            .collect();
        Trait::from_descriptors(members)
    }
}

/// Wrap an object, a member list or an existing trait
///
/// # Example
///
/// ```
/// use traitset_core::{wrap, Member, REQUIRED};
///
/// let t = wrap([("greet", Member::value("hi")), ("name", REQUIRED)]);
/// assert!(t.get("name").unwrap().is_required());
/// let same = wrap(t.clone());
/// assert!(same.equivalent_to(&t));
/// ```
pub fn wrap(source: impl IntoTrait) -> Trait {
    let t = source.into_trait();
    tracing::debug!(
        op = "wrap",
        trait_len = t.len(),
        required_len = t.required_names().len(),
    );
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyDescriptor, REQUIRED};

    #[test]
    fn test_required_marker_becomes_placeholder() {
        let t = wrap([("a", REQUIRED), ("b", Member::value(1))]);
        assert!(t.get("a").unwrap().is_required());
        assert!(!t.get("b").unwrap().is_placeholder());
    }

    #[test]
    fn test_wrapping_a_trait_is_identity() {
        let t = wrap([("a", Member::value(1))]);
        let again = wrap(&t);
        assert!(again.equivalent_to(&t));
    }

    #[test]
    fn test_object_flags_are_copied_faithfully() {
        let mut o = Object::bare();
        o.define_property(
            "x",
            PropertyDescriptor::data(1)
                .with_writable(false)
                .with_configurable(false),
        )
        .unwrap();
        o.define_property("hidden", PropertyDescriptor::data(2).with_enumerable(false))
            .unwrap();

        let t = wrap(&o);
        assert_eq!(t.names().collect::<Vec<_>>(), vec!["x"]);
        let x = t.get("x").unwrap().as_property().unwrap();
        assert!(x.enumerable);
        assert!(!x.writable);
        assert!(!x.configurable);
    }

    #[test]
    fn test_inherited_members_are_not_wrapped() {
        let t = wrap(&Object::new());
        assert!(t.is_empty());
    }
}
