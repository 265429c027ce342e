//! Item descriptor loader.

use std::collections::BTreeMap;
use std::path::Path;

use item_core::ItemDescriptor;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Deserialize)]
struct ItemsFile {
    #[serde(default)]
    items: BTreeMap<String, ItemDescriptor>,
}

/// Loader for named item descriptors from TOML files.
///
/// Each `[items.<key>]` table is one descriptor; keys follow the descriptor's
/// serialized names (`name`, `nbt`, `components`).
pub struct ItemDescriptorLoader;

impl ItemDescriptorLoader {
    /// Load item descriptors keyed by their table name.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, ItemDescriptor>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse item descriptors from TOML text.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, ItemDescriptor>> {
        let file: ItemsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse items TOML: {}", e))?;

        Ok(file.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::{MaterialId, RawPayload};
    use std::io::Write;

    #[test]
    fn reads_renamed_keys_and_normalizes_material() {
        let items = ItemDescriptorLoader::parse(
            r#"
            [items.blade]
            material = "Diamond_Sword"
            amount = 2
            name = "&bBlade"
            lore = ["one", "two"]
            nbt = "{Unbreakable:1b}"
            components = "[unbreakable={}]"
            "#,
        )
        .unwrap();

        let blade = &items["blade"];
        assert_eq!(blade.material(), Some(&MaterialId::minecraft("diamond_sword")));
        assert_eq!(blade.amount(), Some(2));
        assert_eq!(blade.display_name(), Some("&bBlade"));
        assert_eq!(blade.lore().map(<[String]>::len), Some(2));
        assert_eq!(blade.raw_legacy(), Some(&RawPayload::new("{Unbreakable:1b}")));
        assert_eq!(blade.raw_modern(), Some(&RawPayload::new("[unbreakable={}]")));
    }

    #[test]
    fn missing_fields_stay_unset() {
        let items = ItemDescriptorLoader::parse("[items.bare]\nname = \"x\"\n").unwrap();
        let bare = &items["bare"];
        assert_eq!(bare.material(), None);
        assert_eq!(bare.amount(), None);
        assert_eq!(bare.lore(), None);
        assert_eq!(bare.raw_legacy(), None);
        assert_eq!(bare.raw_modern(), None);
        assert!(!bare.is_valid());
        assert_eq!(bare.effective_amount(), 1);
    }

    #[test]
    fn bad_material_key_is_rejected() {
        let err = ItemDescriptorLoader::parse("[items.bad]\nmaterial = \"a:b:c\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid material key"));
        assert!(ItemDescriptorLoader::parse("[items.bad]\nmaterial = \":stone\"\n").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[items.rock]\nmaterial = \"stone\"").unwrap();
        let items = ItemDescriptorLoader::load(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items["rock"].is_valid());
    }
}
