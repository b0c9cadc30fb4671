//! Representations of data from *MINERVA*.
//!
//! Every struct here is a [crate::schema::Record]: a plain declaration of the
//! fields MINERVA may send, each of them optional or defaulting to empty.
//! Decoding is done generically by [crate::schema].

mod configuration;
mod conversion;
mod file;
mod map;
mod project;
mod session;

pub use configuration::*;
pub(crate) use conversion::*;
pub use file::*;
pub use map::*;
pub use project::*;
pub use session::*;
