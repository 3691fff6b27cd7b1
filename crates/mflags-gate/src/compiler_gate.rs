//! Compiler gate: language-standard floor and minimum-version table.

use mflags_settings::{CompilerIdentity, Version};

use crate::error::{GateError, Result};

/// Minimum language standard required by the supported library.
pub const MIN_STANDARD: &str = "20";

/// Minimum compiler version per family. Families absent from this table
/// are accepted with no minimum enforced.
///
/// Static configuration data; never mutated at runtime.
const MINIMUM_VERSIONS: &[(&str, &str)] = &[
    ("gcc", "11"),
    ("clang", "14"),
    ("apple-clang", "14.0.0"),
];

/// Recognized language-standard labels, oldest first. Year-style labels
/// ("98") predate the two-digit ones, so ordering is by position here,
/// not by numeric value.
const STANDARD_ORDER: &[&str] = &["98", "03", "11", "14", "17", "20", "23", "26"];

/// Look up the minimum required version for a compiler family.
pub fn minimum_version_for(family: &str) -> Option<Version> {
    MINIMUM_VERSIONS
        .iter()
        .find(|(name, _)| *name == family)
        .and_then(|(_, version)| version.parse().ok())
}

/// Rank of a standard label in [`STANDARD_ORDER`]. A "gnu" prefix
/// ("gnu20") is tolerated and stripped.
fn standard_rank(label: &str) -> Option<usize> {
    let label = label.strip_prefix("gnu").unwrap_or(label);
    STANDARD_ORDER.iter().position(|s| *s == label)
}

/// Check a declared standard against [`MIN_STANDARD`].
///
/// The check is opportunistic: `None` skips silently. A declared but
/// unrecognized label is rejected.
fn check_standard(declared: Option<&str>) -> Result<()> {
    let Some(declared) = declared else {
        return Ok(());
    };
    let rank = standard_rank(declared).ok_or_else(|| GateError::UnknownStandard {
        declared: declared.to_string(),
    })?;
    // MIN_STANDARD is a member of STANDARD_ORDER
    let minimum = standard_rank(MIN_STANDARD).unwrap_or(usize::MAX);
    if rank < minimum {
        return Err(GateError::StandardTooLow {
            declared: declared.to_string(),
            minimum: MIN_STANDARD.to_string(),
        });
    }
    Ok(())
}

/// Run the compiler gate over a declared standard and compiler identity.
///
/// Pure validation: no side effects. A failure must abort the invocation
/// before any derivation step.
pub fn check_compiler(declared_standard: Option<&str>, compiler: &CompilerIdentity) -> Result<()> {
    check_standard(declared_standard)?;

    if let Some(minimum) = minimum_version_for(compiler.family.as_str()) {
        if compiler.version.lazy_lt(&minimum) {
            return Err(GateError::CompilerTooOld {
                family: compiler.family.clone(),
                declared: compiler.version.to_string(),
                minimum: minimum.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mflags_settings::CompilerFamily;

    fn identity(family: CompilerFamily, version: &str) -> CompilerIdentity {
        CompilerIdentity {
            family,
            version: version.parse().unwrap(),
        }
    }

    #[test]
    fn old_gcc_is_rejected() {
        let err = check_compiler(None, &identity(CompilerFamily::Gcc, "10.0.0")).unwrap_err();
        match err {
            GateError::CompilerTooOld {
                family,
                declared,
                minimum,
            } => {
                assert_eq!(family, CompilerFamily::Gcc);
                assert_eq!(declared, "10.0.0");
                assert_eq!(minimum, "11");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn new_enough_gcc_passes() {
        check_compiler(None, &identity(CompilerFamily::Gcc, "11.0.0")).unwrap();
        check_compiler(None, &identity(CompilerFamily::Gcc, "12.1")).unwrap();
    }

    #[test]
    fn gcc_11_equal_prefix_passes() {
        // Minimum "11" truncates the declared version to one component.
        check_compiler(None, &identity(CompilerFamily::Gcc, "11")).unwrap();
    }

    #[test]
    fn unlisted_family_passes_any_version() {
        let icc = CompilerFamily::Other("icc".to_string());
        check_compiler(None, &identity(icc, "1.0.0")).unwrap();
    }

    #[test]
    fn clang_minimum_is_14() {
        assert!(check_compiler(None, &identity(CompilerFamily::Clang, "13.0.1")).is_err());
        check_compiler(None, &identity(CompilerFamily::Clang, "14.0.0")).unwrap();
    }

    #[test]
    fn apple_clang_minimum_is_14() {
        assert!(check_compiler(None, &identity(CompilerFamily::AppleClang, "13.1")).is_err());
        check_compiler(None, &identity(CompilerFamily::AppleClang, "14.0.0")).unwrap();
    }

    #[test]
    fn absent_standard_is_skipped() {
        check_compiler(None, &identity(CompilerFamily::Gcc, "11.2.0")).unwrap();
    }

    #[test]
    fn low_standard_is_rejected() {
        let err =
            check_compiler(Some("17"), &identity(CompilerFamily::Gcc, "11.2.0")).unwrap_err();
        assert!(matches!(err, GateError::StandardTooLow { .. }));
    }

    #[test]
    fn year_style_standard_orders_before_two_digit() {
        // "98" is older than "20" despite the larger number.
        let err =
            check_compiler(Some("98"), &identity(CompilerFamily::Gcc, "11.2.0")).unwrap_err();
        assert!(matches!(err, GateError::StandardTooLow { .. }));
    }

    #[test]
    fn standard_20_and_newer_pass() {
        for std in ["20", "23", "26", "gnu20", "gnu23"] {
            check_compiler(Some(std), &identity(CompilerFamily::Gcc, "11.2.0")).unwrap();
        }
    }

    #[test]
    fn unknown_standard_is_rejected() {
        let err =
            check_compiler(Some("latest"), &identity(CompilerFamily::Gcc, "11.2.0")).unwrap_err();
        assert!(matches!(err, GateError::UnknownStandard { .. }));
    }

    #[test]
    fn standard_check_runs_before_version_check() {
        // Both would fail; the standard failure wins.
        let err =
            check_compiler(Some("14"), &identity(CompilerFamily::Gcc, "9.0.0")).unwrap_err();
        assert!(matches!(err, GateError::StandardTooLow { .. }));
    }

    #[test]
    fn minimum_table_lookup() {
        assert_eq!(minimum_version_for("gcc").unwrap().to_string(), "11");
        assert_eq!(
            minimum_version_for("apple-clang").unwrap().to_string(),
            "14.0.0"
        );
        assert!(minimum_version_for("msvc").is_none());
    }
}
