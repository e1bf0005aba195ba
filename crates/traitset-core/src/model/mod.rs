pub mod descriptor;
pub mod traits;
pub mod value;

pub use descriptor::{Member, MemberDescriptor, PropertyDescriptor, Slot, REQUIRED};
pub use traits::Trait;
pub use value::{Getter, Method, Setter, Value};
