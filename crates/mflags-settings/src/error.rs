//! Error types for settings parsing and loading.

use std::path::PathBuf;

/// Errors that can occur while loading or interpreting declared settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing settings files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file not found.
    #[error("settings file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A version string contained a non-numeric component.
    #[error("malformed version string '{input}': component '{component}' is not a number")]
    MalformedVersion {
        /// The full version string as declared.
        input: String,
        /// The offending component.
        component: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
