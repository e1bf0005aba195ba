pub mod equivalence;
pub mod validation;

pub use equivalence::{equivalent, same_property};
pub use validation::verify_members;
