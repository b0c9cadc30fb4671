//! Primitive MINERVA API data types and NewType-patterns.
mod base_url;
mod ids;
mod strings;

pub use base_url::*;
pub use ids::*;
pub use strings::*;
