//! Raw item metadata: SNBT parsing and injection.

pub mod injector;
pub mod snbt;

pub use injector::SnbtInjector;
pub use snbt::{ComponentPatch, SnbtError};
