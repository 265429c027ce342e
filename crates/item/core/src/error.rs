//! Common error infrastructure for item-core.
//!
//! Domain-specific errors (e.g. [`crate::MaterializeError`]) are defined next
//! to the operations that raise them and classified through [`ItemError`].

/// Severity level of an error, used for logging and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; retrying without changing the input reproduces it.
    ///
    /// Examples: descriptor without material, malformed raw payload
    Validation,

    /// The input is fine but does not fit the host it targets.
    ///
    /// Examples: "nbt" payload on a components host
    Configuration,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
        }
    }

    /// Returns true if fixing this error means matching config to the host.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }
}

/// Common trait for all item-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by what the caller must change, not by impact
pub trait ItemError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
