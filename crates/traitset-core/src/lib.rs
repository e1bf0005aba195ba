//! traitset core - a trait composition algebra
//!
//! Traits are immutable sets of named members. They combine with automatic,
//! symmetric conflict detection and explicit required members:
//!
//! - `wrap` lifts hand-written members (or an object) into a trait
//! - `compose`, `exclude`, `rename` and `resolve` derive new traits; they
//!   never fail and record conflicts and requirements as data
//! - `create` materializes an object and is the only operation that fails
//!
//! # Example
//!
//! ```
//! use traitset_core::{Member, Trait, TraitError, Value, REQUIRED};
//!
//! let named = Trait::new([("name", REQUIRED)]);
//! let greeter = Trait::new([(
//!     "greet",
//!     Member::method(|this, _| Ok(Value::from(format!("hi {}", this.get("name")?)))),
//! )]);
//!
//! let t = named.compose(&greeter);
//! assert_eq!(
//!     t.create().unwrap_err(),
//!     TraitError::MissingRequiredMember { name: "name".to_string() }
//! );
//!
//! let full = t.compose(&Trait::new([("name", Member::value("ann"))]));
//! let o = full.create().unwrap();
//! assert_eq!(o.call("greet", &[]).unwrap(), Value::from("hi ann"));
//! ```

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod object;
pub mod ops;
pub mod rules;

pub use traitset_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, TraitError};
pub use model::{
    Getter, Member, MemberDescriptor, Method, PropertyDescriptor, Setter, Slot, Trait, Value,
    REQUIRED,
};
pub use object::Object;
pub use ops::{compose, create, exclude, rename, resolve, wrap, IntoTrait, Resolution};
pub use rules::equivalent;
