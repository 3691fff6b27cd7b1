//! Bare-metal validator and gate composition.

use mflags_settings::{BuildSettings, CompilerFamily, CompilerIdentity, TargetProfile};

use crate::compiler_gate::check_compiler;
use crate::error::{GateError, Result};
use crate::policy::CompatibilityPolicy;

/// Decides whether a bare-metal target is buildable.
///
/// The decision itself lives entirely in the injected
/// [`CompatibilityPolicy`]; swapping the allow-list never touches this
/// type's control flow.
#[derive(Debug, Clone, Copy)]
pub struct BareMetalValidator {
    policy: CompatibilityPolicy,
}

impl BareMetalValidator {
    pub fn new(policy: CompatibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CompatibilityPolicy {
        self.policy
    }

    /// Whether the pair is buildable under the active policy.
    ///
    /// Only meaningful for bare-metal targets; callers gate on the
    /// environment first (see [`BareMetalValidator::check`]).
    pub fn is_buildable(&self, family: &CompilerFamily, target: &TargetProfile) -> bool {
        self.policy.allows(family, target)
    }

    /// Validate a target, passing hosted targets through untouched.
    pub fn check(&self, family: &CompilerFamily, target: &TargetProfile) -> Result<()> {
        if !target.is_bare_metal() {
            return Ok(());
        }
        if self.is_buildable(family, target) {
            return Ok(());
        }
        Err(GateError::InvalidBareMetalTarget {
            compiler: family.clone(),
            arch: target.arch.clone(),
            processor: target.processor.clone(),
            float_abi: target.float_abi,
            expected: self.policy.expectation(),
        })
    }
}

/// Run both gates over declared settings.
///
/// Order: compiler gate first, then the bare-metal validator. Returns the
/// parsed compiler identity so callers do not re-parse the version.
pub fn run_gates(
    settings: &BuildSettings,
    policy: CompatibilityPolicy,
) -> Result<CompilerIdentity> {
    let compiler = settings.compiler_identity()?;
    check_compiler(settings.compiler.std.as_deref(), &compiler)?;

    let target = settings.target_profile();
    BareMetalValidator::new(policy).check(&compiler.family, &target)?;
    Ok(compiler)
}
