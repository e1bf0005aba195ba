//! Instantiation
//!
//! `create` is the single validation gate of the algebra: the only operation
//! that can fail, and the place where placeholders finally become errors.

use std::sync::Arc;
use std::time::Instant;

use crate::errors::Result;
use crate::model::Trait;
use crate::object::{builtins, Object};
use crate::rules::validation::verify_members;
use crate::{log_op_end, log_op_error, log_op_start};

/// Build an object delegating to `prototype` (the root object when `None`)
/// with every member of `t` defined on it
///
/// All members are checked before the object is touched, so a failure never
/// yields a partially built instance.
///
/// # Errors
///
/// * `MissingRequiredMember` - a required member is not provided by the prototype chain
/// * `UnresolvedConflict` - a conflict placeholder remains
///
/// # Example
///
/// ```
/// use traitset_core::{create, Member, Trait, Value};
///
/// let t = Trait::new([("size", Member::value(3))]);
/// let o = create(None, &t).unwrap();
/// assert_eq!(o.get("size").unwrap(), Value::from(3));
/// assert_eq!(o.to_string(), "[object Trait]");
/// ```
pub fn create(prototype: Option<Arc<Object>>, t: &Trait) -> Result<Object> {
    let started = Instant::now();
    log_op_start!("create", trait_len = t.len());

    let prototype = prototype.unwrap_or_else(Object::root);
    match instantiate(prototype, t) {
        Ok(object) => {
            log_op_end!(
                "create",
                duration_ms = started.elapsed().as_millis() as u64,
                trait_len = t.len()
            );
            Ok(object)
        }
        Err(err) => {
            log_op_error!(
                "create",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn instantiate(prototype: Arc<Object>, t: &Trait) -> Result<Object> {
    let verified = verify_members(t, &prototype)?;

    let mut object = Object::with_prototype(prototype);
    builtins::install_trait_defaults(&mut object)?;
    for (name, property) in verified {
        object.define_property(name, property.clone())?;
    }

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TraitError;
    use crate::model::{Member, PropertyDescriptor, Value, REQUIRED};

    #[test]
    fn test_members_are_defined_with_their_flags() {
        let t = Trait::new([(
            "x",
            Member::Property(PropertyDescriptor::data(1).with_writable(false)),
        )]);
        let mut o = create(None, &t).unwrap();
        assert_eq!(o.get("x").unwrap(), Value::from(1));
        assert!(matches!(
            o.set("x", 2),
            Err(TraitError::ReadOnlyMember { .. })
        ));
    }

    #[test]
    fn test_required_member_fails_without_prototype_support() {
        let t = Trait::new([("x", REQUIRED)]);
        assert_eq!(
            create(None, &t).unwrap_err(),
            TraitError::MissingRequiredMember {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn test_prototype_is_shared_not_copied() {
        let mut base = Object::new();
        base.define_property("x", PropertyDescriptor::data(1)).unwrap();
        let base = Arc::new(base);

        let t = Trait::new([("x", REQUIRED)]);
        let o = create(Some(base.clone()), &t).unwrap();
        assert!(Arc::ptr_eq(o.prototype().unwrap(), &base));
        assert!(!o.has_own_property("x"));
        assert_eq!(o.get("x").unwrap(), Value::from(1));
    }
}
