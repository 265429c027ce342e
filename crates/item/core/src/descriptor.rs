//! Declarative item descriptors.
//!
//! A descriptor is the engine-agnostic description of an item as it appears in
//! configuration. It is immutable once built and is consumed by
//! [`crate::materialize::Materializer`] to produce an [`crate::ItemStack`].

use std::fmt;

/// Namespace applied to material keys written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespaced registry key identifying a material (`minecraft:diamond_sword`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MaterialId(String);

impl MaterialId {
    /// Parses a material key, adding the default namespace when missing.
    ///
    /// Keys are case-insensitive and stored lowercase. Returns `None` for
    /// empty keys or keys with an empty namespace or path.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        let (namespace, path) = match key.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, key.as_str()),
        };
        if namespace.is_empty() || path.is_empty() || path.contains(':') {
            return None;
        }
        Some(Self(format!("{namespace}:{path}")))
    }

    /// Builds a key in the default namespace.
    pub fn minecraft(path: &str) -> Self {
        Self(format!("{DEFAULT_NAMESPACE}:{}", path.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or(DEFAULT_NAMESPACE, |(ns, _)| ns)
    }

    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, path)| path)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MaterialId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid material key '{value}'"))
    }
}

impl From<MaterialId> for String {
    fn from(value: MaterialId) -> Self {
        value.0
    }
}

/// Raw, engine-specific metadata string ("nbt" or "components" payload).
///
/// Presence and blankness are distinct: a blank payload is present but is
/// never handed to the injector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawPayload(String);

impl RawPayload {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawPayload {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawPayload {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Immutable description of an item to materialize.
///
/// Every field is optional. Only `material` is required for the descriptor to
/// be valid; the rest default independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemDescriptor {
    material: Option<MaterialId>,
    amount: Option<i32>,
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(rename = "nbt"))]
    raw_legacy: Option<RawPayload>,
    #[cfg_attr(feature = "serde", serde(rename = "components"))]
    raw_modern: Option<RawPayload>,
}

impl ItemDescriptor {
    /// Returns a builder for constructing descriptors fluently.
    pub fn builder() -> ItemDescriptorBuilder {
        ItemDescriptorBuilder::default()
    }

    /// Amount to give: the configured amount when positive, otherwise 1.
    pub fn effective_amount(&self) -> u32 {
        match self.amount {
            Some(amount) if amount > 0 => amount as u32,
            _ => 1,
        }
    }

    /// A descriptor is valid iff it names a material.
    pub fn is_valid(&self) -> bool {
        self.material.is_some()
    }

    pub fn material(&self) -> Option<&MaterialId> {
        self.material.as_ref()
    }

    /// The configured amount, as written (may be zero or negative).
    pub fn amount(&self) -> Option<i32> {
        self.amount
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    /// Payload in the pre-component ("nbt") encoding.
    pub fn raw_legacy(&self) -> Option<&RawPayload> {
        self.raw_legacy.as_ref()
    }

    /// Payload in the data-component ("components") encoding.
    pub fn raw_modern(&self) -> Option<&RawPayload> {
        self.raw_modern.as_ref()
    }
}

/// Builder for constructing item descriptors.
#[derive(Default)]
pub struct ItemDescriptorBuilder {
    inner: ItemDescriptor,
}

impl ItemDescriptorBuilder {
    pub fn material(mut self, material: MaterialId) -> Self {
        self.inner.material = Some(material);
        self
    }

    pub fn amount(mut self, amount: i32) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.inner.display_name = Some(name.into());
        self
    }

    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.lore = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn raw_legacy(mut self, payload: impl Into<RawPayload>) -> Self {
        self.inner.raw_legacy = Some(payload.into());
        self
    }

    pub fn raw_modern(mut self, payload: impl Into<RawPayload>) -> Self {
        self.inner.raw_modern = Some(payload.into());
        self
    }

    pub fn build(self) -> ItemDescriptor {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_amount_defaults_to_one() {
        let stone = MaterialId::minecraft("stone");
        for amount in [None, Some(0), Some(-3), Some(i32::MIN)] {
            let mut builder = ItemDescriptor::builder().material(stone.clone());
            if let Some(amount) = amount {
                builder = builder.amount(amount);
            }
            assert_eq!(builder.build().effective_amount(), 1, "amount {amount:?}");
        }
        let five = ItemDescriptor::builder().material(stone).amount(5).build();
        assert_eq!(five.effective_amount(), 5);
    }

    #[test]
    fn validity_requires_material() {
        assert!(!ItemDescriptor::default().is_valid());
        let named = ItemDescriptor::builder().display_name("&cHello").amount(3).build();
        assert!(!named.is_valid());
        let stone = ItemDescriptor::builder().material(MaterialId::minecraft("stone")).build();
        assert!(stone.is_valid());
    }

    #[test]
    fn material_keys_are_normalized() {
        assert_eq!(MaterialId::parse("Diamond_Sword").unwrap().as_str(), "minecraft:diamond_sword");
        assert_eq!(MaterialId::parse("mod:gear").unwrap().namespace(), "mod");
        assert_eq!(MaterialId::parse("mod:gear").unwrap().path(), "gear");
        assert!(MaterialId::parse("").is_none());
        assert!(MaterialId::parse(":stone").is_none());
        assert!(MaterialId::parse("a:b:c").is_none());
    }

    #[test]
    fn blank_payload_is_present_but_blank() {
        let descriptor = ItemDescriptor::builder()
            .material(MaterialId::minecraft("stone"))
            .raw_legacy("   ")
            .build();
        let payload = descriptor.raw_legacy().unwrap();
        assert!(payload.is_blank());
        assert!(descriptor.raw_modern().is_none());
    }
}
