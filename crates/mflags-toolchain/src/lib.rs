//! Toolchain flag derivation and build planning.
//!
//! Consumes a validated target profile and produces the concrete flag set
//! an external build driver passes through verbatim: CPU flag, float-ABI
//! flag, linker search path, and optionally the C-runtime specs flags.
//! The [`plan`] entry point composes the gates with derivation into a
//! complete [`BuildPlan`].

pub mod derive;
pub mod error;
pub mod flags;
pub mod package;
pub mod plan;

pub use derive::{derive, DeriveConfig};
pub use error::{DeriveError, Result};
pub use flags::ToolchainFlags;
pub use package::{ArtifactInfo, PackageLayout};
pub use plan::{plan, BuildPlan};
