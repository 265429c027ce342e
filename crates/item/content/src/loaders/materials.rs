//! Material catalog loader.

use std::path::Path;

use item_core::MaterialInfo;
use serde::{Deserialize, Serialize};

use crate::catalog::MaterialCatalog;
use crate::loaders::{LoadResult, read_file};

/// Material catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MaterialCatalogRon {
    materials: Vec<MaterialInfo>,
}

/// Loader for material catalogs from RON files.
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load a material catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the catalog
    ///
    /// # Example
    ///
    /// ```ron
    /// (
    ///     materials: [
    ///         (id: "minecraft:stone", max_stack_size: 64, metadata_capable: true),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<MaterialCatalog> {
        let content = read_file(path)?;
        let catalog: MaterialCatalogRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse material catalog RON: {}", e))?;

        if let Some(bad) = catalog.materials.iter().find(|m| m.max_stack_size == 0) {
            anyhow::bail!("Material {} has a max stack size of 0", bad.id);
        }

        Ok(catalog.materials.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::{MaterialId, MaterialOracle};
    use std::io::Write;

    #[test]
    fn loads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(materials: [
                (id: "minecraft:stone", max_stack_size: 64, metadata_capable: true),
                (id: "Custom:Gear", max_stack_size: 8, metadata_capable: true),
            ])"#
        )
        .unwrap();

        let catalog = MaterialLoader::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        let gear = catalog.material(&MaterialId::parse("custom:gear").unwrap()).unwrap();
        assert_eq!(gear.max_stack_size, 8);
    }

    #[test]
    fn rejects_zero_stack_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(materials: [(id: "stone", max_stack_size: 0, metadata_capable: true)])"#
        )
        .unwrap();
        assert!(MaterialLoader::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(MaterialLoader::load(Path::new("/nonexistent/materials.ron")).is_err());
    }
}
