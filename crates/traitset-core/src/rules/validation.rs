//! Instantiation gate
//!
//! The only place where placeholders become errors.

use crate::errors::{Result, TraitError};
use crate::model::{MemberDescriptor, PropertyDescriptor, Trait};
use crate::object::Object;

/// Check every member of `t` against `prototype` before anything is defined
///
/// Returns the definitions to install, in member order. A required member
/// inherited from `prototype` counts as satisfied and is skipped.
///
/// # Errors
///
/// * `MissingRequiredMember` - a required member is not found on `prototype`
/// * `UnresolvedConflict` - a conflict placeholder remains
pub fn verify_members<'a>(
    t: &'a Trait,
    prototype: &Object,
) -> Result<Vec<(&'a str, &'a PropertyDescriptor)>> {
    let mut verified = Vec::with_capacity(t.len());

    for (name, descriptor) in t.iter() {
        match descriptor {
            MemberDescriptor::Required => {
                if !prototype.has_property(name) {
                    return Err(TraitError::MissingRequiredMember {
                        name: name.to_string(),
                    });
                }
            }
            MemberDescriptor::Conflict => {
                return Err(TraitError::UnresolvedConflict {
                    name: name.to_string(),
                });
            }
            MemberDescriptor::Defined(property) => verified.push((name, property)),
        }
    }

    Ok(verified)
}
