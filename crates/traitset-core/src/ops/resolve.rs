use crate::model::Trait;

use super::{exclude, rename};

/// What to do with one member during `resolve`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Replace the member with a required placeholder
    Exclude,
    /// Move the member to a new name
    Rename(String),
}

impl From<&str> for Resolution {
    /// The empty name excludes
    fn from(name: &str) -> Self {
        Resolution::from(name.to_string())
    }
}

impl From<String> for Resolution {
    /// The empty name excludes
    fn from(name: String) -> Self {
        if name.is_empty() {
            Resolution::Exclude
        } else {
            Resolution::Rename(name)
        }
    }
}

impl<T: Into<Resolution>> From<Option<T>> for Resolution {
    /// `None` excludes
    fn from(target: Option<T>) -> Self {
        target.map_or(Resolution::Exclude, Into::into)
    }
}

/// Exclude, then rename, driven by a single mapping
///
/// Exclusion always runs first: renaming a member onto a name that is being
/// excluded must fill that name, not be wiped by the exclusion.
///
/// # Example
///
/// ```
/// use traitset_core::{Member, Resolution, Trait};
///
/// let t = Trait::new([("a", Member::value(1)), ("b", Member::value(2))]);
/// let r = t.resolve([("a", Resolution::Exclude), ("b", "a".into())]);
/// assert!(r.get("b").unwrap().is_required());
/// assert!(!r.get("a").unwrap().is_placeholder());
/// ```
pub fn resolve<I, K, R>(resolutions: I, t: &Trait) -> Trait
where
    I: IntoIterator<Item = (K, R)>,
    K: Into<String>,
    R: Into<Resolution>,
{
    let mut renames: Vec<(String, String)> = Vec::new();
    let mut exclusions: Vec<String> = Vec::new();

    for (name, resolution) in resolutions {
        match resolution.into() {
            Resolution::Rename(target) if !target.is_empty() => {
                renames.push((name.into(), target));
            }
            _ => exclusions.push(name.into()),
        }
    }

    rename(renames, &exclude(exclusions, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use crate::rules::equivalence::equivalent;

    #[test]
    fn test_falsy_targets_exclude() {
        assert_eq!(Resolution::from(""), Resolution::Exclude);
        assert_eq!(Resolution::from(None::<&str>), Resolution::Exclude);
        assert_eq!(
            Resolution::from(Some("x")),
            Resolution::Rename("x".to_string())
        );
        assert_eq!(Resolution::from(Some("")), Resolution::Exclude);
    }

    #[test]
    fn test_exclude_runs_before_rename() {
        let t = Trait::new([("a", Member::value(1)), ("b", Member::value(2))]);
        let resolved = resolve([("a", None), ("b", Some("a"))], &t);

        assert!(equivalent(resolved.get("a").unwrap(), t.get("b").unwrap()));
        assert!(resolved.get("b").unwrap().is_required());

        let reversed = exclude(["a"], &rename([("b", "a")], &t));
        assert!(reversed.get("a").unwrap().is_required());
        assert!(!resolved.equivalent_to(&reversed));
    }
}
