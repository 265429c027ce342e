//! In-memory material registry.

use std::collections::HashMap;

use item_core::{MaterialId, MaterialInfo, MaterialOracle};

/// Built-in subset of vanilla materials: (path, max stack size, carries metadata).
const VANILLA: &[(&str, u32, bool)] = &[
    ("air", 64, false),
    ("cave_air", 64, false),
    ("void_air", 64, false),
    ("stone", 64, true),
    ("dirt", 64, true),
    ("oak_log", 64, true),
    ("diamond", 64, true),
    ("emerald", 64, true),
    ("golden_apple", 64, true),
    ("experience_bottle", 64, true),
    ("player_head", 64, true),
    ("paper", 64, true),
    ("ender_pearl", 16, true),
    ("snowball", 16, true),
    ("egg", 16, true),
    ("oak_sign", 16, true),
    ("written_book", 16, true),
    ("diamond_sword", 1, true),
    ("diamond_pickaxe", 1, true),
    ("bow", 1, true),
    ("shield", 1, true),
    ("potion", 1, true),
    ("cake", 1, true),
    ("totem_of_undying", 1, true),
];

/// Material registry backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct MaterialCatalog {
    materials: HashMap<MaterialId, MaterialInfo>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the built-in vanilla subset.
    pub fn vanilla() -> Self {
        VANILLA
            .iter()
            .map(|&(path, max, meta)| MaterialInfo::new(MaterialId::minecraft(path), max, meta))
            .collect()
    }

    /// Adds or replaces a material, returning the previous entry.
    pub fn insert(&mut self, info: MaterialInfo) -> Option<MaterialInfo> {
        self.materials.insert(info.id.clone(), info)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl FromIterator<MaterialInfo> for MaterialCatalog {
    fn from_iter<T: IntoIterator<Item = MaterialInfo>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for info in iter {
            catalog.insert(info);
        }
        catalog
    }
}

impl MaterialOracle for MaterialCatalog {
    fn material(&self, id: &MaterialId) -> Option<MaterialInfo> {
        self.materials.get(id).cloned()
    }
}
