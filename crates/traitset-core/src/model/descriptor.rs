use std::fmt;

use super::value::{Getter, Method, Setter, Value};
use crate::errors::Result;
use crate::object::Object;

/// Storage half of a property: a plain value or a getter/setter pair
#[derive(Clone, Debug)]
pub enum Slot {
    Value(Value),
    Accessor {
        get: Option<Getter>,
        set: Option<Setter>,
    },
}

/// Definition of one named member on an object
///
/// The three flags are independent. `writable` only has meaning for value
/// slots; accessor descriptors keep it `false`.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub slot: Slot,
    pub enumerable: bool,
    pub writable: bool,
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// A value member with all flags set, like a property of an object literal
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Value(value.into()),
            enumerable: true,
            writable: true,
            configurable: true,
        }
    }

    /// An accessor member; either half may be absent
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self {
            slot: Slot::Accessor { get, set },
            enumerable: true,
            writable: false,
            configurable: true,
        }
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Ignored for accessors
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable && !self.is_accessor();
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, Slot::Accessor { .. })
    }

    /// The stored value of a value member
    pub fn value(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Value(v) => Some(v),
            Slot::Accessor { .. } => None,
        }
    }

    pub fn getter(&self) -> Option<&Getter> {
        match &self.slot {
            Slot::Accessor { get, .. } => get.as_ref(),
            Slot::Value(_) => None,
        }
    }

    pub fn setter(&self) -> Option<&Setter> {
        match &self.slot {
            Slot::Accessor { set, .. } => set.as_ref(),
            Slot::Value(_) => None,
        }
    }
}

/// A member as it appears inside a trait
///
/// `Required` and `Conflict` are placeholders: they survive any number of
/// compositions and only fail when the trait is instantiated.
#[derive(Clone, Debug)]
pub enum MemberDescriptor {
    Defined(PropertyDescriptor),
    Required,
    Conflict,
}

impl MemberDescriptor {
    pub fn is_required(&self) -> bool {
        matches!(self, MemberDescriptor::Required)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, MemberDescriptor::Conflict)
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, MemberDescriptor::Defined(_))
    }

    pub fn as_property(&self) -> Option<&PropertyDescriptor> {
        match self {
            MemberDescriptor::Defined(p) => Some(p),
            _ => None,
        }
    }
}

/// A member as written by hand before wrapping it into a trait
#[derive(Clone, Debug)]
pub enum Member {
    /// Marks the name as required: some other trait or the instantiation
    /// prototype must supply it
    Required,
    Property(PropertyDescriptor),
}

/// Shorthand for `Member::Required`
pub const REQUIRED: Member = Member::Required;

impl Member {
    pub fn value(value: impl Into<Value>) -> Self {
        Member::Property(PropertyDescriptor::data(value))
    }

    pub fn method<F>(func: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Member::value(Method::new(func))
    }

    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Member::Property(PropertyDescriptor::accessor(get, set))
    }

    /// Read-only accessor
    pub fn getter<F>(func: F) -> Self
    where
        F: Fn(&Object) -> Result<Value> + Send + Sync + 'static,
    {
        Member::accessor(Some(Getter::new(func)), None)
    }
}

impl From<PropertyDescriptor> for Member {
    fn from(descriptor: PropertyDescriptor) -> Self {
        Member::Property(descriptor)
    }
}

impl From<Member> for MemberDescriptor {
    fn from(member: Member) -> Self {
        match member {
            Member::Required => MemberDescriptor::Required,
            Member::Property(p) => MemberDescriptor::Defined(p),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Required => f.write_str("<Trait.required>"),
            Member::Property(p) => match &p.slot {
                Slot::Value(v) => write!(f, "{}", v),
                Slot::Accessor { .. } => f.write_str("[Accessor]"),
            },
        }
    }
}
