//! Object runtime
//!
//! The concrete objects produced by `create`. An object owns its properties
//! and holds an optional delegation pointer to a prototype; lookups that miss
//! locally continue along that chain. Getters, setters and methods found on a
//! prototype still run against the object the lookup started from.

pub mod builtins;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{Result, TraitError};
use crate::model::{PropertyDescriptor, Setter, Slot, Value};

pub use builtins::{CONSTRUCTOR, TO_STRING};

/// A materialized object
#[derive(Clone, Default)]
pub struct Object {
    prototype: Option<Arc<Object>>,
    properties: BTreeMap<String, PropertyDescriptor>,
}

enum Assignment {
    Setter(Setter),
    Store,
}

impl Object {
    /// An empty object delegating to the root object
    pub fn new() -> Self {
        Self::with_prototype(Self::root())
    }

    /// An empty object without prototype
    pub fn bare() -> Self {
        Self::default()
    }

    /// An empty object delegating to `prototype`
    pub fn with_prototype(prototype: Arc<Object>) -> Self {
        Self {
            prototype: Some(prototype),
            properties: BTreeMap::new(),
        }
    }

    /// The shared root object carrying the built-in `toString` and
    /// `constructor`
    pub fn root() -> Arc<Object> {
        builtins::root()
    }

    pub fn prototype(&self) -> Option<&Arc<Object>> {
        self.prototype.as_ref()
    }

    pub fn own_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Look a property up on this object, then along the prototype chain
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(property) = object.properties.get(name) {
                return Some(property);
            }
            current = object.prototype.as_deref();
        }
        None
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Own or inherited
    pub fn has_property(&self, name: &str) -> bool {
        self.find_property(name).is_some()
    }

    /// Own enumerable member names
    pub fn keys(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|(_, p)| p.enumerable)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All own member names, enumerable or not
    pub fn own_names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    pub(crate) fn own_properties(&self) -> impl Iterator<Item = (&str, &PropertyDescriptor)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Define or replace an own property
    ///
    /// # Errors
    ///
    /// * `NotConfigurable` - an own property of that name exists and is not configurable
    pub fn define_property(
        &mut self,
        name: impl Into<String>,
        descriptor: PropertyDescriptor,
    ) -> Result<()> {
        let name = name.into();
        if let Some(existing) = self.properties.get(&name) {
            if !existing.configurable {
                return Err(TraitError::NotConfigurable { name });
            }
        }
        self.properties.insert(name, descriptor);
        Ok(())
    }

    /// Remove an own property; returns whether it existed
    ///
    /// # Errors
    ///
    /// * `NotConfigurable` - the property is not configurable
    pub fn delete_property(&mut self, name: &str) -> Result<bool> {
        match self.properties.get(name) {
            None => Ok(false),
            Some(p) if !p.configurable => Err(TraitError::NotConfigurable {
                name: name.to_string(),
            }),
            Some(_) => Ok(self.properties.remove(name).is_some()),
        }
    }

    /// Read a member, running its getter if it is an accessor
    ///
    /// Absent members and accessors without getter read as `Undefined`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the getter raises.
    pub fn get(&self, name: &str) -> Result<Value> {
        match self.find_property(name).map(|p| &p.slot) {
            Some(Slot::Value(value)) => Ok(value.clone()),
            Some(Slot::Accessor {
                get: Some(getter), ..
            }) => getter.call(self),
            Some(Slot::Accessor { get: None, .. }) | None => Ok(Value::Undefined),
        }
    }

    /// Assign a member
    ///
    /// Writing a name that is not an own member creates an own value member,
    /// unless the prototype chain holds an accessor (its setter runs on this
    /// object) or a read-only value.
    ///
    /// # Errors
    ///
    /// * `ReadOnlyMember` - the member is a non-writable value
    /// * `MissingSetter` - the member is an accessor without setter
    /// * Any error raised by the setter
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let assignment = match self.find_property(name) {
            Some(PropertyDescriptor {
                slot: Slot::Accessor { set: Some(setter), .. },
                ..
            }) => Assignment::Setter(setter.clone()),
            Some(PropertyDescriptor {
                slot: Slot::Accessor { set: None, .. },
                ..
            }) => {
                return Err(TraitError::MissingSetter {
                    name: name.to_string(),
                })
            }
            Some(p) if !p.writable => {
                return Err(TraitError::ReadOnlyMember {
                    name: name.to_string(),
                })
            }
            _ => Assignment::Store,
        };

        match assignment {
            Assignment::Setter(setter) => setter.call(self, value),
            Assignment::Store => {
                match self.properties.get_mut(name) {
                    Some(own) => own.slot = Slot::Value(value),
                    None => {
                        self.properties
                            .insert(name.to_string(), PropertyDescriptor::data(value));
                    }
                }
                Ok(())
            }
        }
    }

    /// Call a method member with this object as receiver
    ///
    /// # Errors
    ///
    /// * `MemberNotFound` - no member of that name on the object or its prototypes
    /// * `NotCallable` - the member's value is not a function
    /// * Any error raised by the method or by a getter producing it
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.get(name)? {
            Value::Function(method) => method.call(self, args),
            Value::Undefined if !self.has_property(name) => Err(TraitError::MemberNotFound {
                name: name.to_string(),
            }),
            _ => Err(TraitError::NotCallable {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("properties", &self.properties)
            .field("has_prototype", &self.prototype.is_some())
            .finish()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.call(TO_STRING, &[]) {
            Ok(Value::Object(_)) | Err(_) => f.write_str("[object]"),
            Ok(rendered) => write!(f, "{}", rendered),
        }
    }
}
