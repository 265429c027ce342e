use crate::item::ItemStack;

/// Errors raised by a [`MetadataInjector`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The payload is not valid in the host's encoding.
    #[error("malformed metadata for {key}: {reason}")]
    Malformed { key: String, reason: String },
}

impl MetadataError {
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Applies an engine-specific raw metadata string onto an item.
///
/// The full raw string the engine understands is `registry_key + payload`
/// (e.g. `minecraft:stone{CustomModelData:3}`).
pub trait MetadataInjector: Send + Sync {
    fn apply(
        &self,
        item: ItemStack,
        registry_key: &str,
        payload: &str,
    ) -> Result<ItemStack, MetadataError>;
}
