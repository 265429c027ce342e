//! Descriptor materialization.
//!
//! [`Materializer::materialize`] is the single translation routine from an
//! [`ItemDescriptor`] to an [`ItemStack`]. Order of application:
//!
//! 1. Base item of the descriptor's material
//! 2. Raw metadata for the host's encoding (baseline state)
//! 3. Amount, clamped to the material's stack size
//! 4. Display name and lore (override whatever the raw payload set)
mod errors;
mod renderer;

pub use errors::MaterializeError;
pub use renderer::TextRenderer;

use crate::descriptor::ItemDescriptor;
use crate::env::{MaterialInfo, MaterializeEnv, MetadataEncoding};
use crate::error::ItemError;
use crate::item::ItemStack;

/// Produces engine items from descriptors for one host.
#[derive(Clone, Copy, Debug)]
pub struct Materializer<'a> {
    env: MaterializeEnv<'a>,
    text: TextRenderer<'a>,
}

impl<'a> Materializer<'a> {
    pub fn new(env: MaterializeEnv<'a>, text: TextRenderer<'a>) -> Self {
        Self { env, text }
    }

    /// Materializes one descriptor into a freshly owned item.
    ///
    /// # Errors
    ///
    /// - [`MaterializeError::InvalidDescriptor`] if no material is set
    /// - [`MaterializeError::UnknownMaterial`] if the registry lacks it
    /// - [`MaterializeError::IncompatibleMetadataEncoding`] for an "nbt"
    ///   payload on a components host
    /// - [`MaterializeError::MalformedMetadataPayload`] from the injector
    pub fn materialize(&self, descriptor: &ItemDescriptor) -> Result<ItemStack, MaterializeError> {
        let id = descriptor
            .material()
            .ok_or(MaterializeError::InvalidDescriptor)?;
        let material = self
            .env
            .materials()
            .material(id)
            .ok_or_else(|| MaterializeError::UnknownMaterial(id.clone()))?;

        let item = ItemStack::new(&material);
        let mut item = self.apply_raw_metadata(item, &material, descriptor)?;

        if let Some(amount) = descriptor.amount().filter(|amount| *amount > 0) {
            let clamped = material.clamp_amount(amount as u32);
            if clamped != amount as u32 {
                tracing::debug!(
                    "Clamped amount of {} from {} to {}",
                    material.id,
                    amount,
                    clamped
                );
            }
            item.set_amount(clamped);
        }

        match item.item_meta() {
            Some(mut meta) => {
                if let Some(name) = descriptor.display_name() {
                    meta.display_name = Some(self.text.render(name));
                }
                if let Some(lore) = descriptor.lore() {
                    meta.lore = Some(self.text.render_lines(lore));
                }
                item.set_item_meta(meta);
            }
            None if descriptor.display_name().is_some() || descriptor.lore().is_some() => {
                tracing::trace!("{} carries no metadata, skipping name and lore", material.id);
            }
            None => {}
        }

        Ok(item)
    }

    /// Materializes every valid descriptor, logging and skipping failures.
    pub fn materialize_all(&self, descriptors: &[ItemDescriptor]) -> Vec<ItemStack> {
        descriptors
            .iter()
            .enumerate()
            .filter_map(|(index, descriptor)| match self.materialize(descriptor) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(
                        "Skipping item #{} ({}): {} [{} {}]",
                        index,
                        descriptor
                            .material()
                            .map_or("<no material>", |id| id.as_str()),
                        err,
                        err.severity().as_str(),
                        err.error_code()
                    );
                    None
                }
            })
            .collect()
    }

    fn apply_raw_metadata(
        &self,
        item: ItemStack,
        material: &MaterialInfo,
        descriptor: &ItemDescriptor,
    ) -> Result<ItemStack, MaterializeError> {
        let protocol = self.env.protocol().protocol_version();
        let payload = match MetadataEncoding::for_protocol(protocol) {
            MetadataEncoding::Components => {
                if descriptor.raw_legacy().is_some() {
                    return Err(MaterializeError::IncompatibleMetadataEncoding { protocol });
                }
                descriptor.raw_modern()
            }
            MetadataEncoding::LegacyNbt => {
                if descriptor.raw_modern().is_some() {
                    tracing::debug!(
                        "Ignoring \"components\" of {} on protocol {}",
                        material.id,
                        protocol
                    );
                }
                descriptor.raw_legacy()
            }
        };

        match payload.filter(|payload| !payload.is_blank()) {
            Some(payload) => {
                tracing::trace!("Injecting {}{}", material.registry_key(), payload.as_str());
                Ok(self
                    .env
                    .injector()
                    .apply(item, material.registry_key(), payload.as_str())?)
            }
            None => Ok(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::descriptor::MaterialId;
    use crate::env::{
        MarkupOracle, MaterialOracle, MetadataError, MetadataInjector, ProtocolOracle,
    };
    use crate::error::ErrorSeverity;
    use crate::item::Tag;
    use crate::text::{DisplayText, RichText};

    struct Registry(HashMap<MaterialId, MaterialInfo>);

    impl Registry {
        fn new() -> Self {
            let mut map = HashMap::new();
            for (path, max, meta) in [("stone", 64, true), ("diamond_sword", 1, true), ("air", 64, false)] {
                let id = MaterialId::minecraft(path);
                map.insert(id.clone(), MaterialInfo::new(id, max, meta));
            }
            Self(map)
        }
    }

    impl MaterialOracle for Registry {
        fn material(&self, id: &MaterialId) -> Option<MaterialInfo> {
            self.0.get(id).cloned()
        }
    }

    struct Protocol(u32);

    impl ProtocolOracle for Protocol {
        fn protocol_version(&self) -> u32 {
            self.0
        }
    }

    /// Records payloads; `!` payloads are rejected, anything else sets a
    /// display name and a marker tag.
    #[derive(Default)]
    struct Injector {
        calls: Mutex<Vec<String>>,
    }

    impl MetadataInjector for Injector {
        fn apply(
            &self,
            mut item: ItemStack,
            registry_key: &str,
            payload: &str,
        ) -> Result<ItemStack, MetadataError> {
            self.calls.lock().unwrap().push(format!("{registry_key}{payload}"));
            if payload.starts_with('!') {
                return Err(MetadataError::malformed(registry_key, "bad payload"));
            }
            item.data_mut().insert("marker", Tag::String(payload.to_string()));
            if let Some(mut meta) = item.item_meta() {
                meta.display_name = Some(DisplayText::Legacy("from payload".into()));
                item.set_item_meta(meta);
            }
            Ok(item)
        }
    }

    /// Treats anything containing `<` as markup; deserializes to `[text]`.
    #[derive(Default)]
    struct Markup {
        seen: Mutex<Vec<String>>,
    }

    impl MarkupOracle for Markup {
        fn is_rich_markup(&self, text: &str) -> bool {
            text.contains('<')
        }

        fn deserialize(&self, text: &str) -> RichText {
            self.seen.lock().unwrap().push(text.to_string());
            RichText::text(format!("[{text}]"))
        }
    }

    fn stone() -> MaterialId {
        MaterialId::minecraft("stone")
    }

    fn run(
        protocol: u32,
        rich: bool,
        descriptor: &ItemDescriptor,
    ) -> Result<ItemStack, MaterializeError> {
        let registry = Registry::new();
        let protocol = Protocol(protocol);
        let injector = Injector::default();
        let markup = Markup::default();
        let env = MaterializeEnv::new(&registry, &protocol, &injector);
        let text = if rich { TextRenderer::Rich(&markup) } else { TextRenderer::Legacy };
        Materializer::new(env, text).materialize(descriptor)
    }

    #[test]
    fn missing_material_is_invalid() {
        let descriptor = ItemDescriptor::builder().display_name("x").build();
        let err = run(766, false, &descriptor).unwrap_err();
        assert_eq!(err, MaterializeError::InvalidDescriptor);
        assert_eq!(err.error_code(), "ITEM_INVALID_DESCRIPTOR");
    }

    #[test]
    fn unknown_material_is_rejected() {
        let descriptor = ItemDescriptor::builder()
            .material(MaterialId::minecraft("unobtainium"))
            .build();
        assert!(matches!(
            run(766, false, &descriptor),
            Err(MaterializeError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn amount_is_kept_below_stack_size() {
        let descriptor = ItemDescriptor::builder().material(stone()).amount(5).build();
        assert_eq!(run(766, false, &descriptor).unwrap().amount(), 5);
    }

    #[test]
    fn amount_is_clamped_to_stack_size() {
        let stack = ItemDescriptor::builder().material(stone()).amount(200).build();
        assert_eq!(run(766, false, &stack).unwrap().amount(), 64);

        let sword = ItemDescriptor::builder()
            .material(MaterialId::minecraft("diamond_sword"))
            .amount(3)
            .build();
        assert_eq!(run(766, false, &sword).unwrap().amount(), 1);
    }

    #[test]
    fn non_positive_amount_leaves_default() {
        for amount in [0, -4] {
            let descriptor = ItemDescriptor::builder().material(stone()).amount(amount).build();
            assert_eq!(run(766, false, &descriptor).unwrap().amount(), 1);
        }
    }

    #[test]
    fn legacy_payload_on_modern_host_fails() {
        for payload in ["{CustomModelData:1}", "  "] {
            let descriptor = ItemDescriptor::builder()
                .material(stone())
                .raw_legacy(payload)
                .build();
            let err = run(766, false, &descriptor).unwrap_err();
            assert_eq!(err, MaterializeError::IncompatibleMetadataEncoding { protocol: 766 });
            assert_eq!(err.severity(), ErrorSeverity::Configuration);
        }
    }

    #[test]
    fn payload_matching_host_is_injected() {
        let modern = ItemDescriptor::builder()
            .material(stone())
            .raw_modern("[a=1]")
            .build();
        let item = run(766, false, &modern).unwrap();
        assert_eq!(item.data().get("marker"), Some(&Tag::String("[a=1]".into())));

        let legacy = ItemDescriptor::builder()
            .material(stone())
            .raw_legacy("{a:1}")
            .build();
        let item = run(765, false, &legacy).unwrap();
        assert_eq!(item.data().get("marker"), Some(&Tag::String("{a:1}".into())));
    }

    #[test]
    fn modern_payload_on_legacy_host_is_ignored() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .raw_modern("[a=1]")
            .build();
        let item = run(765, false, &descriptor).unwrap();
        assert!(item.data().is_empty());
    }

    #[test]
    fn blank_payload_is_not_injected() {
        let registry = Registry::new();
        let protocol = Protocol(766);
        let injector = Injector::default();
        let env = MaterializeEnv::new(&registry, &protocol, &injector);
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .raw_modern(" \t")
            .build();
        Materializer::new(env, TextRenderer::Legacy)
            .materialize(&descriptor)
            .unwrap();
        assert!(injector.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn injector_errors_propagate() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .raw_modern("!broken")
            .build();
        let err = run(766, false, &descriptor).unwrap_err();
        assert!(matches!(err, MaterializeError::MalformedMetadataPayload(_)));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn named_properties_override_payload() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .raw_modern("[a=1]")
            .display_name("&aMine")
            .build();
        let item = run(766, false, &descriptor).unwrap();
        assert_eq!(
            item.meta().unwrap().display_name,
            Some(DisplayText::Legacy("§aMine".into()))
        );
    }

    #[test]
    fn legacy_host_translates_color_codes() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .display_name("&cHello")
            .build();
        let item = run(766, false, &descriptor).unwrap();
        let name = item.meta().unwrap().display_name.clone().unwrap();
        assert_eq!(name, DisplayText::Legacy("§cHello".into()));
        assert_eq!(name.plain_text(), "Hello");
    }

    #[test]
    fn legacy_host_ignores_markup_tags() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .display_name("<red>Hi")
            .build();
        let item = run(766, false, &descriptor).unwrap();
        assert_eq!(
            item.meta().unwrap().display_name,
            Some(DisplayText::Legacy("<red>Hi".into()))
        );
    }

    #[test]
    fn rich_host_deserializes_markup_name() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .display_name("<red>Hi")
            .build();
        let item = run(766, true, &descriptor).unwrap();
        assert_eq!(
            item.meta().unwrap().display_name,
            Some(DisplayText::Rich(RichText::text("[<red>Hi]")))
        );
    }

    #[test]
    fn rich_host_falls_back_for_plain_codes() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .display_name("&cHello")
            .build();
        let item = run(766, true, &descriptor).unwrap();
        assert_eq!(
            item.meta().unwrap().display_name,
            Some(DisplayText::Legacy("§cHello".into()))
        );
    }

    #[test]
    fn lore_dialect_is_decided_for_all_lines() {
        let registry = Registry::new();
        let protocol = Protocol(766);
        let injector = Injector::default();
        let markup = Markup::default();
        let env = MaterializeEnv::new(&registry, &protocol, &injector);
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .lore(["line1", "<i>line2"])
            .build();
        let item = Materializer::new(env, TextRenderer::Rich(&markup))
            .materialize(&descriptor)
            .unwrap();
        assert_eq!(
            item.meta().unwrap().lore,
            Some(vec![
                DisplayText::Rich(RichText::text("[line1]")),
                DisplayText::Rich(RichText::text("[<i>line2]")),
            ])
        );
        assert_eq!(*markup.seen.lock().unwrap(), vec!["line1", "<i>line2"]);
    }

    #[test]
    fn legacy_lore_preserves_order() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .lore(["&1one", "two", "&2three"])
            .build();
        let item = run(765, true, &descriptor).unwrap();
        assert_eq!(
            item.meta().unwrap().lore,
            Some(vec![
                DisplayText::Legacy("§1one".into()),
                DisplayText::Legacy("two".into()),
                DisplayText::Legacy("§2three".into()),
            ])
        );
    }

    #[test]
    fn metadata_less_material_skips_named_properties() {
        let descriptor = ItemDescriptor::builder()
            .material(MaterialId::minecraft("air"))
            .display_name("&cNothing")
            .lore(["gone"])
            .build();
        let item = run(766, false, &descriptor).unwrap();
        assert!(item.meta().is_none());
    }

    #[test]
    fn materialization_is_repeatable() {
        let descriptor = ItemDescriptor::builder()
            .material(stone())
            .amount(12)
            .display_name("&eGold")
            .lore(["a", "b"])
            .raw_modern("[a=1]")
            .build();
        let first = run(766, false, &descriptor).unwrap();
        let second = run(766, false, &descriptor).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn materialize_all_skips_failures() {
        let registry = Registry::new();
        let protocol = Protocol(766);
        let injector = Injector::default();
        let env = MaterializeEnv::new(&registry, &protocol, &injector);
        let descriptors = [
            ItemDescriptor::builder().material(stone()).amount(2).build(),
            ItemDescriptor::default(),
            ItemDescriptor::builder().material(stone()).raw_legacy("{}").build(),
            ItemDescriptor::builder().material(MaterialId::minecraft("diamond_sword")).build(),
        ];
        let items = Materializer::new(env, TextRenderer::Legacy).materialize_all(&descriptors);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount(), 2);
        assert_eq!(items[1].material().path(), "diamond_sword");
    }
}
