//! Declared build-settings model for the mflags configuration engine.
//!
//! A build invocation declares who compiles (compiler family + version +
//! language standard) and what it compiles for (operating environment,
//! architecture, optional CPU core, optional float ABI). This crate models
//! that record, parses it from TOML, and exposes the typed pieces the
//! validation gates and the toolchain deriver consume.

pub mod compiler;
pub mod error;
pub mod settings;
pub mod target;
pub mod version;

pub use compiler::{CompilerFamily, CompilerIdentity};
pub use error::{Result, SettingsError};
pub use settings::BuildSettings;
pub use target::{Environment, FloatAbi, TargetProfile};
pub use version::Version;
