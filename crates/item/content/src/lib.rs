//! Reference host collaborators and data loaders.
//!
//! This crate implements the oracles `item-core` needs for a concrete host:
//! - Material registry (in-memory catalog, optional RON loading)
//! - Rich markup dialect (tag detection and deserialization)
//! - Raw metadata injection (SNBT for both "nbt" and "components" hosts)
//! - Host profiles (data-driven via TOML)
//!
//! [`ReferenceHost`] bundles them and hands out materializers.

pub mod catalog;
pub mod host;
pub mod markup;
pub mod metadata;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::MaterialCatalog;
pub use host::{ReferenceHost, StaticProtocol};
pub use markup::{MarkupTag, MiniMarkup};
pub use metadata::{ComponentPatch, SnbtError, SnbtInjector};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, HostProfileLoader, ItemDescriptorLoader, MaterialLoader};
