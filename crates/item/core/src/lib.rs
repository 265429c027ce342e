//! Item descriptors and their materialization into engine items.
//!
//! `item-core` defines the declarative [`ItemDescriptor`], the engine-side
//! [`ItemStack`] model, and the traits ("oracles") a host implements so that
//! [`Materializer`] can turn one into the other. All decision logic (metadata
//! encoding by protocol, text dialect by host, stack clamping) lives in
//! [`materialize`]; supporting crates depend on the types re-exported here.
pub mod config;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod item;
pub mod materialize;
pub mod text;

pub use config::HostProfile;
pub use descriptor::{ItemDescriptor, ItemDescriptorBuilder, MaterialId, RawPayload};
pub use env::{
    MODERN_METADATA_PROTOCOL, MarkupOracle, MaterialInfo, MaterialOracle, MaterializeEnv,
    MetadataEncoding, MetadataError, MetadataInjector, ProtocolOracle,
};
pub use error::{ErrorSeverity, ItemError};
pub use item::{DataTags, ItemMeta, ItemStack, Tag};
pub use materialize::{MaterializeError, Materializer, TextRenderer};
pub use text::{DisplayText, RichText};
