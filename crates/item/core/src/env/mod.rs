//! Traits describing the host engine.
//!
//! Oracles expose the material registry, the protocol probe, and raw metadata
//! injection. The [`MaterializeEnv`] aggregate bundles them so materialization
//! can reach everything it needs without coupling to concrete hosts.
mod markup;
mod materials;
mod metadata;
mod protocol;

pub use markup::MarkupOracle;
pub use materials::{MaterialInfo, MaterialOracle};
pub use metadata::{MetadataError, MetadataInjector};
pub use protocol::{MODERN_METADATA_PROTOCOL, MetadataEncoding, ProtocolOracle};

/// Aggregates the host collaborators required by materialization.
#[derive(Clone, Copy)]
pub struct MaterializeEnv<'a> {
    materials: &'a dyn MaterialOracle,
    protocol: &'a dyn ProtocolOracle,
    injector: &'a dyn MetadataInjector,
}

impl<'a> MaterializeEnv<'a> {
    pub fn new(
        materials: &'a dyn MaterialOracle,
        protocol: &'a dyn ProtocolOracle,
        injector: &'a dyn MetadataInjector,
    ) -> Self {
        Self {
            materials,
            protocol,
            injector,
        }
    }

    pub fn materials(&self) -> &'a dyn MaterialOracle {
        self.materials
    }

    pub fn protocol(&self) -> &'a dyn ProtocolOracle {
        self.protocol
    }

    pub fn injector(&self) -> &'a dyn MetadataInjector {
        self.injector
    }
}

impl core::fmt::Debug for MaterializeEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MaterializeEnv")
            .field("protocol", &self.protocol.protocol_version())
            .finish_non_exhaustive()
    }
}
