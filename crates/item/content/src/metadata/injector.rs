//! Raw metadata injection for both host encodings.

use serde_json::{Map, Number, Value};

use item_core::{
    DisplayText, ItemStack, MaterialId, MetadataEncoding, MetadataError, MetadataInjector,
    RichText, Tag,
};

use super::snbt::{self, ComponentPatch};

const DISPLAY: &str = "display";
const NAME: &str = "Name";
const LORE: &str = "Lore";
const CUSTOM_NAME: &str = "minecraft:custom_name";
const LORE_COMPONENT: &str = "minecraft:lore";

/// Injects SNBT payloads in the encoding of one host variant.
///
/// - Legacy hosts take a compound (`{display:{Name:'...'},...}`); the display
///   name and lore move into the item metadata, other tags are merged into
///   the item data.
/// - Component hosts take a patch (`[minecraft:custom_name='...',!food]`);
///   keys without a namespace get `minecraft:`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnbtInjector {
    encoding: MetadataEncoding,
}

impl SnbtInjector {
    pub fn new(encoding: MetadataEncoding) -> Self {
        Self { encoding }
    }

    pub fn for_protocol(protocol: u32) -> Self {
        Self::new(MetadataEncoding::for_protocol(protocol))
    }

    fn apply_nbt(&self, item: &mut ItemStack, key: &str, payload: &str) -> Result<(), MetadataError> {
        let tag = snbt::parse(payload).map_err(|e| MetadataError::malformed(key, e.to_string()))?;
        let Tag::Compound(mut root) = tag else {
            return Err(MetadataError::malformed(key, "nbt payload must be a compound"));
        };

        let mut display_emptied = false;
        if let Some(Tag::Compound(display)) = root.get_mut(DISPLAY) {
            let name = display.remove(NAME);
            let lore = display.remove(LORE);
            if let Some(name) = name {
                let name = text_from_tag(&name).map_err(|reason| MetadataError::malformed(key, reason))?;
                set_name(item, Some(name));
            }
            if let Some(lore) = lore {
                let lore = lines_from_tag(&lore).map_err(|reason| MetadataError::malformed(key, reason))?;
                set_lore(item, Some(lore));
            }
            display_emptied = display.is_empty();
        }
        if display_emptied {
            root.remove(DISPLAY);
        }

        for (name, value) in root {
            item.data_mut().merge(name, value);
        }
        Ok(())
    }

    fn apply_components(
        &self,
        item: &mut ItemStack,
        key: &str,
        payload: &str,
    ) -> Result<(), MetadataError> {
        let patches =
            snbt::parse_components(payload).map_err(|e| MetadataError::malformed(key, e.to_string()))?;

        for patch in patches {
            match patch {
                ComponentPatch::Set(id, value) => {
                    let id = component_id(key, &id)?;
                    match id.as_str() {
                        CUSTOM_NAME => {
                            let name = text_from_tag(&value)
                                .map_err(|reason| MetadataError::malformed(key, reason))?;
                            set_name(item, Some(name));
                        }
                        LORE_COMPONENT => {
                            let lore = lines_from_tag(&value)
                                .map_err(|reason| MetadataError::malformed(key, reason))?;
                            set_lore(item, Some(lore));
                        }
                        _ => {
                            item.data_mut().insert(id, value);
                        }
                    }
                }
                ComponentPatch::Remove(id) => {
                    let id = component_id(key, &id)?;
                    match id.as_str() {
                        CUSTOM_NAME => set_name(item, None),
                        LORE_COMPONENT => set_lore(item, None),
                        _ => {
                            item.data_mut().remove(&id);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl MetadataInjector for SnbtInjector {
    fn apply(
        &self,
        mut item: ItemStack,
        registry_key: &str,
        payload: &str,
    ) -> Result<ItemStack, MetadataError> {
        if MaterialId::parse(registry_key).is_none() {
            return Err(MetadataError::malformed(registry_key, "invalid registry key"));
        }

        let payload = payload.trim();
        match (self.encoding, payload.chars().next()) {
            (MetadataEncoding::LegacyNbt, Some('{')) => {
                self.apply_nbt(&mut item, registry_key, payload)?
            }
            (MetadataEncoding::Components, Some('[')) => {
                self.apply_components(&mut item, registry_key, payload)?
            }
            (encoding, _) => {
                return Err(MetadataError::malformed(
                    registry_key,
                    format!(
                        "payload is not in \"{}\" syntax ({})",
                        encoding.config_key(),
                        match encoding {
                            MetadataEncoding::LegacyNbt => "expected {...}",
                            MetadataEncoding::Components => "expected [...]",
                        }
                    ),
                ));
            }
        }

        tracing::trace!("Applied {} payload to {}", self.encoding.config_key(), registry_key);
        Ok(item)
    }
}

fn component_id(key: &str, id: &str) -> Result<String, MetadataError> {
    MaterialId::parse(id)
        .map(String::from)
        .ok_or_else(|| MetadataError::malformed(key, format!("invalid component id '{id}'")))
}

fn set_name(item: &mut ItemStack, name: Option<DisplayText>) {
    if let Some(mut meta) = item.item_meta() {
        meta.display_name = name;
        item.set_item_meta(meta);
    }
}

fn set_lore(item: &mut ItemStack, lore: Option<Vec<DisplayText>>) {
    if let Some(mut meta) = item.item_meta() {
        meta.lore = lore;
        item.set_item_meta(meta);
    }
}

/// Reads a text component stored as a JSON string or as an SNBT compound.
fn text_from_tag(tag: &Tag) -> Result<DisplayText, String> {
    let text = match tag {
        Tag::String(json) => RichText::from_json_str(json),
        other => RichText::from_json(&tag_to_json(other)),
    };
    text.map(DisplayText::Rich).map_err(|e| e.to_string())
}

fn lines_from_tag(tag: &Tag) -> Result<Vec<DisplayText>, String> {
    let lines = tag.as_list().ok_or("lore must be a list")?;
    lines.iter().map(text_from_tag).collect()
}

fn tag_to_json(tag: &Tag) -> Value {
    match tag {
        Tag::Byte(v) => match v {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            v => Value::from(*v),
        },
        Tag::Short(v) => Value::from(*v),
        Tag::Int(v) => Value::from(*v),
        Tag::Long(v) => Value::from(*v),
        Tag::Float(v) => Number::from_f64(f64::from(*v)).map_or(Value::Null, Value::Number),
        Tag::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        Tag::String(v) => Value::String(v.clone()),
        Tag::List(items) => Value::Array(items.iter().map(tag_to_json).collect()),
        Tag::Compound(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), tag_to_json(v)))
                .collect::<Map<_, _>>(),
        ),
        Tag::ByteArray(items) => Value::Array(items.iter().map(|v| Value::from(*v)).collect()),
        Tag::IntArray(items) => Value::Array(items.iter().map(|v| Value::from(*v)).collect()),
        Tag::LongArray(items) => Value::Array(items.iter().map(|v| Value::from(*v)).collect()),
    }
}
