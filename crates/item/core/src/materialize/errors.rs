//! Materialization errors.

use crate::descriptor::MaterialId;
use crate::env::MetadataError;
use crate::error::{ErrorSeverity, ItemError};

/// Errors that abort materialization. No partial item is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaterializeError {
    /// The descriptor names no material.
    #[error("item descriptor has no material")]
    InvalidDescriptor,

    /// The material is not present in the host registry.
    #[error("unknown material '{0}'")]
    UnknownMaterial(MaterialId),

    /// An "nbt" payload was supplied to a host that requires "components".
    #[error(
        "protocol {protocol} uses data components; replace \"nbt\" with \"components\""
    )]
    IncompatibleMetadataEncoding { protocol: u32 },

    /// The injector rejected the raw payload.
    #[error(transparent)]
    MalformedMetadataPayload(#[from] MetadataError),
}

impl ItemError for MaterializeError {
    fn severity(&self) -> ErrorSeverity {
        use MaterializeError::*;
        match self {
            InvalidDescriptor | UnknownMaterial(_) | MalformedMetadataPayload(_) => {
                ErrorSeverity::Validation
            }
            IncompatibleMetadataEncoding { .. } => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        use MaterializeError::*;
        match self {
            InvalidDescriptor => "ITEM_INVALID_DESCRIPTOR",
            UnknownMaterial(_) => "ITEM_UNKNOWN_MATERIAL",
            IncompatibleMetadataEncoding { .. } => "ITEM_INCOMPATIBLE_METADATA_ENCODING",
            MalformedMetadataPayload(_) => "ITEM_MALFORMED_METADATA_PAYLOAD",
        }
    }
}
