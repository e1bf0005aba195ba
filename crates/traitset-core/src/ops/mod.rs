pub mod compose;
pub mod create;
pub mod exclude;
pub mod rename;
pub mod resolve;
pub mod wrap;

pub use compose::compose;
pub use create::create;
pub use exclude::exclude;
pub use rename::rename;
pub use resolve::{resolve, Resolution};
pub use wrap::{wrap, IntoTrait};
