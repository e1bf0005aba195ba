use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::descriptor::{Member, MemberDescriptor};
use crate::errors::Result;
use crate::object::Object;
use crate::ops::{self, IntoTrait, Resolution};
use crate::rules::equivalence::equivalent;

/// Trait - an immutable set of named member descriptors
///
/// A trait describes what members a future instance must have. It is never
/// mutated: `compose`, `exclude`, `rename` and `resolve` all return a new
/// trait. Placeholders (`Required`, `Conflict`) are plain data until
/// `create` turns them into errors.
#[derive(Clone, Debug, Default)]
pub struct Trait {
    members: BTreeMap<String, MemberDescriptor>,
}

impl Trait {
    /// The empty trait, identity element of composition
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap hand-written members into a trait
    ///
    /// # Example
    ///
    /// ```
    /// use traitset_core::{Member, Trait, REQUIRED};
    ///
    /// let t = Trait::new([("name", REQUIRED), ("size", Member::value(3))]);
    /// assert_eq!(t.required_names(), vec!["name"]);
    /// ```
    pub fn new<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, Member)>,
        K: Into<String>,
    {
        ops::wrap(members)
    }

    pub(crate) fn from_descriptors(members: BTreeMap<String, MemberDescriptor>) -> Self {
        Self { members }
    }

    pub fn get(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Member names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MemberDescriptor)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Names still waiting for a definition
    pub fn required_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| d.is_required())
            .map(|(name, _)| name)
            .collect()
    }

    /// Names with unresolved competing definitions
    pub fn conflict_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| d.is_conflict())
            .map(|(name, _)| name)
            .collect()
    }

    /// True when no placeholder is left, so `create` cannot fail on any
    /// prototype
    pub fn is_complete(&self) -> bool {
        self.members.values().all(|d| !d.is_placeholder())
    }

    /// Member-wise equivalence: same names, each pair of descriptors
    /// equivalent
    pub fn equivalent_to(&self, other: &Trait) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, d)| other.get(name).is_some_and(|o| equivalent(d, o)))
    }

    /// Compose with another trait
    pub fn compose(&self, other: &Trait) -> Trait {
        ops::compose([self, other])
    }

    /// Replace the listed members with required placeholders
    pub fn exclude<I, S>(&self, names: I) -> Trait
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ops::exclude(names, self)
    }

    /// Rename members, leaving required placeholders under the old names
    pub fn rename<I, K, V>(&self, renames: I) -> Trait
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ops::rename(renames, self)
    }

    /// Exclude then rename, driven by one mapping
    pub fn resolve<I, K, R>(&self, resolutions: I) -> Trait
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Into<Resolution>,
    {
        ops::resolve(resolutions, self)
    }

    /// Instantiate on top of the root object
    ///
    /// # Errors
    ///
    /// * `MissingRequiredMember` - a required member is not inherited
    /// * `UnresolvedConflict` - a conflict placeholder remains
    pub fn create(&self) -> Result<Object> {
        ops::create(None, self)
    }

    /// Instantiate delegating to `prototype`
    ///
    /// # Errors
    ///
    /// * `MissingRequiredMember` - a required member is not provided by `prototype`
    /// * `UnresolvedConflict` - a conflict placeholder remains
    pub fn create_with(&self, prototype: Arc<Object>) -> Result<Object> {
        ops::create(Some(prototype), self)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object Trait]")
    }
}

impl<K: Into<String>> FromIterator<(K, Member)> for Trait {
    fn from_iter<I: IntoIterator<Item = (K, Member)>>(iter: I) -> Self {
        iter.into_trait()
    }
}
