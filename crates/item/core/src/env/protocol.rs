/// Protocol version of the 1.20.5 release, which replaced item NBT with data
/// components. Hosts at or above it only accept the "components" encoding.
pub const MODERN_METADATA_PROTOCOL: u32 = 766;

/// Host protocol/version probe.
pub trait ProtocolOracle: Send + Sync {
    fn protocol_version(&self) -> u32;
}

/// Raw metadata encoding understood by a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetadataEncoding {
    /// Pre-1.20.5 item NBT (`{display:{Name:'...'}}`).
    LegacyNbt,
    /// 1.20.5+ data components (`[minecraft:custom_name='...']`).
    Components,
}

impl MetadataEncoding {
    pub fn for_protocol(protocol: u32) -> Self {
        if protocol >= MODERN_METADATA_PROTOCOL {
            Self::Components
        } else {
            Self::LegacyNbt
        }
    }

    /// Configuration key of the payload for this encoding.
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::LegacyNbt => "nbt",
            Self::Components => "components",
        }
    }
}
