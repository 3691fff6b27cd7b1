//! CLI command implementations.

pub mod check;
pub mod derive;
pub mod plan;
pub mod policy;
pub mod template;

use anyhow::{bail, Result};
use mflags_gate::CompatibilityPolicy;
use mflags_settings::FloatAbi;
use mflags_toolchain::DeriveConfig;

/// Resolve a `--policy` flag, defaulting to the most permissive policy.
pub fn resolve_policy(name: Option<&str>) -> Result<CompatibilityPolicy> {
    let Some(name) = name else {
        return Ok(CompatibilityPolicy::default());
    };
    match CompatibilityPolicy::from_name(name) {
        Some(policy) => Ok(policy),
        None => bail!(
            "unknown policy: '{name}'. Use 'mflags policy list' to see available policies."
        ),
    }
}

/// Build a [`DeriveConfig`] from the shared derivation flags.
pub fn derive_config(runtime_specs: bool, require_float_abi: bool) -> DeriveConfig {
    DeriveConfig {
        float_abi_fallback: if require_float_abi {
            None
        } else {
            Some(FloatAbi::Soft)
        },
        runtime_specs,
    }
}
