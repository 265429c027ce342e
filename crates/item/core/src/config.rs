use crate::env::MODERN_METADATA_PROTOCOL;

/// Static description of the host an item is materialized for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostProfile {
    /// Protocol version reported by the host.
    pub protocol_version: u32,
    /// Whether the host can render rich markup.
    /// Legacy-only hosts render every text with `&` color codes.
    pub rich_text: bool,
}

impl HostProfile {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PROTOCOL_VERSION: u32 = MODERN_METADATA_PROTOCOL;
    pub const DEFAULT_RICH_TEXT: bool = false;

    pub fn new() -> Self {
        Self {
            protocol_version: Self::DEFAULT_PROTOCOL_VERSION,
            rich_text: Self::DEFAULT_RICH_TEXT,
        }
    }

    pub fn with_protocol(protocol_version: u32) -> Self {
        Self {
            protocol_version,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn rich(mut self, rich_text: bool) -> Self {
        self.rich_text = rich_text;
        self
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::new()
    }
}
