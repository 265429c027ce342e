//! Content loaders for reading host data from files.
//!
//! This module provides loaders that convert RON/TOML files into collaborator
//! implementations, host profiles and item descriptors.

pub mod factory;
pub mod host;
pub mod items;
pub mod materials;

pub use factory::ContentFactory;
pub use host::HostProfileLoader;
pub use items::ItemDescriptorLoader;
pub use materials::MaterialLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
