//! Gate error types.

use mflags_settings::{CompilerFamily, FloatAbi, SettingsError};

/// Errors produced by the validation gates.
///
/// All variants are fatal to the build invocation: they reflect a static
/// mismatch between declared settings and supported combinations that will
/// not change on retry.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Declared language standard is older than the required minimum.
    #[error("declared language standard '{declared}' is older than the required '{minimum}'")]
    StandardTooLow { declared: String, minimum: String },

    /// Declared language standard is not a recognized label.
    #[error("unrecognized language standard '{declared}'")]
    UnknownStandard { declared: String },

    /// Declared compiler version is below the table minimum for its family.
    #[error("{family} {declared} is too old: version {minimum} or newer is required")]
    CompilerTooOld {
        family: CompilerFamily,
        declared: String,
        minimum: String,
    },

    /// Bare-metal target rejected by the active compatibility policy.
    ///
    /// The message embeds the policy's full allow-list so a rejected
    /// configuration can be corrected without reading the policy source.
    #[error(
        "settings are not valid for os == 'baremetal':\n  compiler: '{compiler}'\n  arch: '{arch}'\n  processor: '{}'\n  float-abi: '{}'\n{expected}",
        processor.as_deref().unwrap_or("<unset>"),
        float_abi.as_ref().map(|a| a.as_str()).unwrap_or("<unset>")
    )]
    InvalidBareMetalTarget {
        compiler: CompilerFamily,
        arch: String,
        processor: Option<String>,
        float_abi: Option<FloatAbi>,
        /// Rendered expectation of the active policy.
        expected: String,
    },

    /// Declared settings could not be interpreted.
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
