//! Derivation errors.

use mflags_gate::GateError;

/// Errors that can occur during flag derivation or build planning.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    /// A float ABI is required by the active configuration but absent.
    #[error("no float ABI declared for '{processor}' and the configuration provides no fallback (expected one of: soft, hard)")]
    MissingFloatAbi { processor: String },

    /// A validation gate rejected the settings.
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, DeriveError>;
