//! Bare-metal compatibility policies.
//!
//! A policy is the single predicate deciding whether a (compiler family,
//! target) pair is buildable for bare-metal. The three variants are the
//! successive allow-lists the supported toolchains have shipped with,
//! strictest first; callers select one explicitly — nothing here depends
//! on load order or ambient state.

use serde::{Deserialize, Serialize};

use mflags_settings::{CompilerFamily, TargetProfile};

/// Cortex-M cores accepted by the strict policy.
pub const CORTEX_M_PROCESSORS: &[&str] = &[
    "cortex-m0",
    "cortex-m0plus",
    "cortex-m1",
    "cortex-m3",
    "cortex-m4",
    "cortex-m4f",
    "cortex-m7",
    "cortex-m23",
    "cortex-m55",
    "cortex-m35p",
    "cortex-m33",
];

/// Float ABIs accepted for bare-metal builds.
pub const FLOAT_ABIS: &[&str] = &["soft", "hard"];

/// The single architecture string the strict policy accepts.
const STRICT_ARCH: &str = "thumbv7em";

/// Thumb architecture families accepted by [`CompatibilityPolicy::ThumbFamily`].
const THUMB_FAMILY_ARCHES: &[&str] = &["thumbv6", "thumbv7", "thumbv8"];

/// Predicate over (compiler family, target) deciding bare-metal buildability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompatibilityPolicy {
    /// gcc, arch exactly "thumbv7em", processor from the Cortex-M
    /// allow-list, and an explicit float ABI.
    Strict,
    /// gcc and any thumbv6/thumbv7/thumbv8 architecture; processor and
    /// float ABI are not checked.
    ThumbFamily,
    /// gcc and any architecture string containing "cortex-". The default.
    #[default]
    CortexPrefix,
}

impl CompatibilityPolicy {
    /// All policies, strictest first.
    pub fn all() -> &'static [CompatibilityPolicy] {
        &[
            CompatibilityPolicy::Strict,
            CompatibilityPolicy::ThumbFamily,
            CompatibilityPolicy::CortexPrefix,
        ]
    }

    /// CLI/settings spelling of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            CompatibilityPolicy::Strict => "strict",
            CompatibilityPolicy::ThumbFamily => "thumb-family",
            CompatibilityPolicy::CortexPrefix => "cortex-prefix",
        }
    }

    /// Resolve a policy from its CLI spelling.
    pub fn from_name(name: &str) -> Option<CompatibilityPolicy> {
        CompatibilityPolicy::all()
            .iter()
            .copied()
            .find(|p| p.name() == name)
    }

    /// One-line summary for listings.
    pub fn summary(&self) -> &'static str {
        match self {
            CompatibilityPolicy::Strict => {
                "gcc + thumbv7em + enumerated Cortex-M core + explicit float ABI"
            }
            CompatibilityPolicy::ThumbFamily => "gcc + thumbv6/thumbv7/thumbv8 architecture",
            CompatibilityPolicy::CortexPrefix => "gcc + any 'cortex-' architecture",
        }
    }

    /// Whether the pair is buildable for bare-metal under this policy.
    pub fn allows(&self, family: &CompilerFamily, target: &TargetProfile) -> bool {
        if *family != CompilerFamily::Gcc {
            return false;
        }
        match self {
            CompatibilityPolicy::Strict => {
                let valid_processor = target
                    .processor
                    .as_deref()
                    .is_some_and(|p| CORTEX_M_PROCESSORS.contains(&p));
                target.arch == STRICT_ARCH && valid_processor && target.float_abi.is_some()
            }
            CompatibilityPolicy::ThumbFamily => {
                THUMB_FAMILY_ARCHES.contains(&target.arch.as_str())
            }
            CompatibilityPolicy::CortexPrefix => target.arch.contains("cortex-"),
        }
    }

    /// Render what this policy requires, allow-lists included, for use in
    /// rejection messages.
    pub fn expectation(&self) -> String {
        match self {
            CompatibilityPolicy::Strict => format!(
                "policy 'strict' requires:\n  compiler: 'gcc'\n  arch: '{STRICT_ARCH}'\n  processor: one of {CORTEX_M_PROCESSORS:?}\n  float-abi: one of {FLOAT_ABIS:?}"
            ),
            CompatibilityPolicy::ThumbFamily => format!(
                "policy 'thumb-family' requires:\n  compiler: 'gcc'\n  arch: one of {THUMB_FAMILY_ARCHES:?}"
            ),
            CompatibilityPolicy::CortexPrefix => "policy 'cortex-prefix' requires:\n  compiler: 'gcc'\n  arch: containing 'cortex-'"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mflags_settings::{Environment, FloatAbi};

    fn bare_metal(arch: &str, processor: Option<&str>, abi: Option<FloatAbi>) -> TargetProfile {
        TargetProfile {
            environment: Environment::BareMetal,
            arch: arch.into(),
            processor: processor.map(String::from),
            float_abi: abi,
        }
    }

    #[test]
    fn strict_accepts_full_thumbv7em_profile() {
        let target = bare_metal("thumbv7em", Some("cortex-m4"), Some(FloatAbi::Soft));
        assert!(CompatibilityPolicy::Strict.allows(&CompilerFamily::Gcc, &target));
    }

    #[test]
    fn strict_rejects_cortex_arch_string() {
        // The core name in the arch field is only admitted by cortex-prefix.
        let target = bare_metal("cortex-m4", None, None);
        assert!(!CompatibilityPolicy::Strict.allows(&CompilerFamily::Gcc, &target));
        assert!(CompatibilityPolicy::CortexPrefix.allows(&CompilerFamily::Gcc, &target));
    }

    #[test]
    fn strict_rejects_unlisted_processor() {
        let target = bare_metal("thumbv7em", Some("cortex-a53"), Some(FloatAbi::Hard));
        assert!(!CompatibilityPolicy::Strict.allows(&CompilerFamily::Gcc, &target));
    }

    #[test]
    fn strict_rejects_missing_processor_or_abi() {
        let no_processor = bare_metal("thumbv7em", None, Some(FloatAbi::Soft));
        assert!(!CompatibilityPolicy::Strict.allows(&CompilerFamily::Gcc, &no_processor));

        let no_abi = bare_metal("thumbv7em", Some("cortex-m4"), None);
        assert!(!CompatibilityPolicy::Strict.allows(&CompilerFamily::Gcc, &no_abi));
    }

    #[test]
    fn thumb_family_checks_arch_only() {
        for arch in ["thumbv6", "thumbv7", "thumbv8"] {
            let target = bare_metal(arch, None, None);
            assert!(CompatibilityPolicy::ThumbFamily.allows(&CompilerFamily::Gcc, &target));
        }
        let target = bare_metal("thumbv7em", None, None);
        assert!(!CompatibilityPolicy::ThumbFamily.allows(&CompilerFamily::Gcc, &target));
    }

    #[test]
    fn cortex_prefix_is_a_substring_match() {
        for arch in ["cortex-m0plus", "cortex-m55", "arm-cortex-m7"] {
            let target = bare_metal(arch, None, None);
            assert!(CompatibilityPolicy::CortexPrefix.allows(&CompilerFamily::Gcc, &target));
        }
        let target = bare_metal("thumbv7em", None, None);
        assert!(!CompatibilityPolicy::CortexPrefix.allows(&CompilerFamily::Gcc, &target));
    }

    #[test]
    fn every_policy_requires_gcc() {
        let target = bare_metal("cortex-m4", Some("cortex-m4"), Some(FloatAbi::Soft));
        for policy in CompatibilityPolicy::all() {
            assert!(!policy.allows(&CompilerFamily::Clang, &target));
            assert!(!policy.allows(&CompilerFamily::Other("icc".into()), &target));
        }
    }

    #[test]
    fn default_policy_is_most_permissive() {
        assert_eq!(
            CompatibilityPolicy::default(),
            CompatibilityPolicy::CortexPrefix
        );
    }

    #[test]
    fn names_round_trip() {
        for policy in CompatibilityPolicy::all() {
            assert_eq!(CompatibilityPolicy::from_name(policy.name()), Some(*policy));
        }
        assert!(CompatibilityPolicy::from_name("lenient").is_none());
    }

    #[test]
    fn expectations_embed_allow_lists() {
        let text = CompatibilityPolicy::Strict.expectation();
        assert!(text.contains("cortex-m0plus"));
        assert!(text.contains("soft"));
        assert!(CompatibilityPolicy::ThumbFamily
            .expectation()
            .contains("thumbv8"));
    }
}
