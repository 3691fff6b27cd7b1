//! Flag derivation for accepted target profiles.

use mflags_settings::{CompilerFamily, FloatAbi, TargetProfile};

use crate::error::{DeriveError, Result};
use crate::flags::ToolchainFlags;
use crate::package::PackageLayout;

/// Explicit derivation defaults.
///
/// The historical recipe revisions disagreed on two behaviors; both are
/// configuration here instead of silent version-dependent defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriveConfig {
    /// Float ABI to assume when the target declares none. `None` makes an
    /// explicit ABI mandatory ([`DeriveError::MissingFloatAbi`]).
    pub float_abi_fallback: Option<FloatAbi>,
    /// Emit `--specs=nano.specs --specs=nosys.specs` link flags. Off by
    /// default; the caller is expected to supply runtime specs itself.
    pub runtime_specs: bool,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            float_abi_fallback: Some(FloatAbi::Soft),
            runtime_specs: false,
        }
    }
}

impl DeriveConfig {
    /// Earlier-revision behavior: explicit ABI required, specs flags
    /// emitted.
    pub fn strict() -> Self {
        Self {
            float_abi_fallback: None,
            runtime_specs: true,
        }
    }
}

/// Derive the flag set for a validated target.
///
/// Invoked only after both gates pass. Bare-metal gcc targets get the CPU
/// flag, the float-ABI flag, and the package's linker-script search path,
/// in that order; every other combination derives to an empty flag set.
/// Idempotent: identical input yields byte-identical output.
pub fn derive(
    family: &CompilerFamily,
    target: &TargetProfile,
    layout: &PackageLayout,
    config: &DeriveConfig,
) -> Result<ToolchainFlags> {
    if !target.is_bare_metal() || *family != CompilerFamily::Gcc {
        return Ok(ToolchainFlags::empty());
    }

    // Later settings revisions carry the core name in the arch field
    // instead of a separate processor entry.
    let cpu = target.processor.as_deref().unwrap_or(&target.arch);

    let abi = target
        .float_abi
        .or(config.float_abi_fallback)
        .ok_or_else(|| DeriveError::MissingFloatAbi {
            processor: cpu.to_string(),
        })?;

    let machine_flags = vec![format!("-mcpu={cpu}"), format!("-mfloat-abi={abi}")];

    let mut link_flags = machine_flags.clone();
    if config.runtime_specs {
        link_flags.push("--specs=nano.specs".to_string());
        link_flags.push("--specs=nosys.specs".to_string());
    }

    Ok(ToolchainFlags {
        compile_flags: machine_flags,
        link_flags,
        linker_search_paths: vec![layout.linker_script_dir()],
    })
}
