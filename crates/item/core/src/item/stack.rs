use crate::descriptor::MaterialId;
use crate::env::MaterialInfo;
use crate::text::DisplayText;

use super::DataTags;

/// Named, engine-level item properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMeta {
    pub display_name: Option<DisplayText>,
    pub lore: Option<Vec<DisplayText>>,
}

/// A concrete, engine-ready item.
///
/// Materials that carry no metadata (e.g. `air`) hold `meta == None` for the
/// lifetime of the stack; committing metadata onto them is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    material: MaterialId,
    amount: u32,
    meta: Option<ItemMeta>,
    data: DataTags,
}

impl ItemStack {
    /// Creates a single item of `material` in default state.
    pub fn new(material: &MaterialInfo) -> Self {
        Self {
            material: material.id.clone(),
            amount: 1,
            meta: material.metadata_capable.then(ItemMeta::default),
            data: DataTags::new(),
        }
    }

    pub fn material(&self) -> &MaterialId {
        &self.material
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// Returns a copy of the item's metadata, or `None` if the material
    /// carries none.
    pub fn item_meta(&self) -> Option<ItemMeta> {
        self.meta.clone()
    }

    /// Read-only view of the metadata.
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Commits metadata back onto the item. Returns `false` if the material
    /// carries no metadata.
    pub fn set_item_meta(&mut self, meta: ItemMeta) -> bool {
        match self.meta.as_mut() {
            Some(slot) => {
                *slot = meta;
                true
            }
            None => false,
        }
    }

    pub fn data(&self) -> &DataTags {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataTags {
        &mut self.data
    }

    /// Display name as plain text, if set.
    pub fn display_name_plain(&self) -> Option<String> {
        self.meta
            .as_ref()?
            .display_name
            .as_ref()
            .map(DisplayText::plain_text)
    }
}
