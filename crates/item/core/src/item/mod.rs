//! Materialized item model.
//!
//! - [`ItemStack`]: the engine-ready output of materialization
//! - [`ItemMeta`]: named properties (display name, lore)
//! - [`Tag`]/[`DataTags`]: raw state written by metadata injection

mod stack;
mod tag;

pub use stack::{ItemMeta, ItemStack};
pub use tag::{DataTags, Tag};
