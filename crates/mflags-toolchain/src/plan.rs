//! End-to-end build planning: gates, then derivation, then the external
//! driver's switches.

use serde::{Deserialize, Serialize};

use mflags_gate::{run_gates, CompatibilityPolicy};
use mflags_settings::{BuildSettings, Environment};

use crate::derive::{derive, DeriveConfig};
use crate::error::Result;
use crate::flags::ToolchainFlags;
use crate::package::{ArtifactInfo, PackageLayout};

/// Everything the external build driver needs for one invocation.
///
/// Fully populated or not produced at all; a gate or derivation failure
/// yields no partial plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildPlan {
    /// Derived flags, passed through verbatim.
    pub flags: ToolchainFlags,
    /// Build the hosted test configuration with the address sanitizer.
    pub enable_sanitizer: bool,
    /// Run the test binary after building.
    pub run_tests: bool,
    /// Published artifact name and linker-script path, emitted for every
    /// successful run regardless of target.
    pub artifact: ArtifactInfo,
}

/// Validate declared settings and derive the complete build plan.
///
/// The sanitizer is enabled for hosted non-Windows builds only — a
/// Windows host degenerates to toolchain defaults. Tests run only for
/// hosted builds without the skip-tests flag; a bare-metal test binary
/// has nothing to run on.
pub fn plan(
    settings: &BuildSettings,
    policy: CompatibilityPolicy,
    config: &DeriveConfig,
    layout: &PackageLayout,
) -> Result<BuildPlan> {
    let compiler = run_gates(settings, policy)?;
    let target = settings.target_profile();

    let flags = derive(&compiler.family, &target, layout, config)?;

    let enable_sanitizer =
        target.environment.is_hosted() && target.environment != Environment::Windows;
    let run_tests = !settings.skip_tests() && !target.is_bare_metal();

    Ok(BuildPlan {
        flags,
        enable_sanitizer,
        run_tests,
        artifact: layout.artifact_info(),
    })
}
