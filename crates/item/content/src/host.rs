//! Self-contained host built from the reference collaborators.

use item_core::{
    HostProfile, MaterializeEnv, Materializer, ProtocolOracle, TextRenderer,
};

use crate::catalog::MaterialCatalog;
use crate::markup::MiniMarkup;
use crate::metadata::SnbtInjector;

/// Protocol probe answering a fixed version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticProtocol(pub u32);

impl ProtocolOracle for StaticProtocol {
    fn protocol_version(&self) -> u32 {
        self.0
    }
}

impl From<&HostProfile> for StaticProtocol {
    fn from(profile: &HostProfile) -> Self {
        Self(profile.protocol_version)
    }
}

/// Owns one set of collaborators for a host profile and hands out
/// materializers borrowing them.
#[derive(Clone, Debug)]
pub struct ReferenceHost {
    profile: HostProfile,
    materials: MaterialCatalog,
    protocol: StaticProtocol,
    injector: SnbtInjector,
    markup: MiniMarkup,
}

impl ReferenceHost {
    pub fn new(profile: HostProfile, materials: MaterialCatalog) -> Self {
        Self {
            protocol: StaticProtocol::from(&profile),
            injector: SnbtInjector::for_protocol(profile.protocol_version),
            markup: MiniMarkup::new(),
            profile,
            materials,
        }
    }

    /// Host with the built-in vanilla material subset.
    pub fn vanilla(profile: HostProfile) -> Self {
        Self::new(profile, MaterialCatalog::vanilla())
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    pub fn materializer(&self) -> Materializer<'_> {
        let env = MaterializeEnv::new(&self.materials, &self.protocol, &self.injector);
        Materializer::new(env, TextRenderer::for_host(&self.profile, &self.markup))
    }
}
