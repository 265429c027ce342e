//! Host profile loader.

use std::path::Path;

use item_core::HostProfile;

use crate::loaders::{LoadResult, read_file};

/// Loader for host profiles from TOML files.
pub struct HostProfileLoader;

impl HostProfileLoader {
    /// Load a host profile from a TOML file.
    ///
    /// Missing keys fall back to [`HostProfile::default`].
    pub fn load(path: &Path) -> LoadResult<HostProfile> {
        let content = read_file(path)?;
        let profile: HostProfile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse host profile TOML: {}", e))?;

        Ok(profile)
    }
}
