use crate::descriptor::MaterialId;

/// Registry lookup for materials.
pub trait MaterialOracle: Send + Sync {
    fn material(&self, id: &MaterialId) -> Option<MaterialInfo>;
}

/// Registry data for one material.
///
/// # Stacking
///
/// `max_stack_size` bounds every materialized amount:
/// - Tools/armor: 1
/// - Ender pearls, signs, buckets of snow: 16
/// - Most blocks and resources: 64
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialInfo {
    pub id: MaterialId,
    pub max_stack_size: u32,
    /// Whether items of this material carry metadata (name, lore).
    pub metadata_capable: bool,
}

impl MaterialInfo {
    pub fn new(id: MaterialId, max_stack_size: u32, metadata_capable: bool) -> Self {
        Self {
            id,
            max_stack_size,
            metadata_capable,
        }
    }

    /// Namespaced key used as the prefix of raw metadata strings.
    pub fn registry_key(&self) -> &str {
        self.id.as_str()
    }

    /// Clamps a requested amount to `1..=max_stack_size`.
    pub fn clamp_amount(&self, amount: u32) -> u32 {
        amount.min(self.max_stack_size).max(1)
    }
}
