//! Content factory for building hosts from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use item_core::{HostProfile, ItemDescriptor};

use crate::catalog::MaterialCatalog;
use crate::host::ReferenceHost;
use crate::loaders::{HostProfileLoader, ItemDescriptorLoader, LoadResult, MaterialLoader};

/// Content factory that loads host data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── host.toml
/// ├── items.toml
/// └── materials.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the host profile from `host.toml`.
    pub fn load_host_profile(&self) -> LoadResult<HostProfile> {
        HostProfileLoader::load(&self.data_dir.join("host.toml"))
    }

    /// Load the material catalog from `materials.ron`.
    pub fn load_materials(&self) -> LoadResult<MaterialCatalog> {
        MaterialLoader::load(&self.data_dir.join("materials.ron"))
    }

    /// Load named item descriptors from `items.toml`.
    pub fn load_items(&self) -> LoadResult<BTreeMap<String, ItemDescriptor>> {
        ItemDescriptorLoader::load(&self.data_dir.join("items.toml"))
    }

    /// Load both files and assemble a host.
    pub fn load_host(&self) -> LoadResult<ReferenceHost> {
        Ok(ReferenceHost::new(
            self.load_host_profile()?,
            self.load_materials()?,
        ))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
