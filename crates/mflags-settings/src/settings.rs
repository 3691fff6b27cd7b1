//! The declared build-settings record and its TOML I/O.
//!
//! Settings files are flat TOML records with `[compiler]`, `[target]`, and
//! an optional `[build]` section. This module provides functions to load,
//! parse, serialize, and template these files, plus typed accessors for
//! the pieces the gates and the deriver consume.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compiler::{CompilerFamily, CompilerIdentity};
use crate::error::{Result, SettingsError};
use crate::target::{Environment, FloatAbi, TargetProfile};

/// Compiler section of the settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompilerSettings {
    /// Compiler family (e.g. "gcc", "clang", "apple-clang").
    pub family: CompilerFamily,
    /// Dotted version string as declared (parsed lazily).
    pub version: String,
    /// Declared language standard (e.g. "20"). Optional; when absent the
    /// standard check is skipped.
    #[serde(default)]
    pub std: Option<String>,
}

/// Target section of the settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetSettings {
    /// Operating environment ("baremetal" is the no-OS sentinel).
    pub os: Environment,
    /// Architecture string.
    pub arch: String,
    /// CPU core within the architecture.
    #[serde(default)]
    pub processor: Option<String>,
    /// Floating-point ABI.
    #[serde(default)]
    pub float_abi: Option<FloatAbi>,
}

/// Build options section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildOptions {
    /// Skip running the test binary after a hosted build.
    #[serde(default)]
    pub skip_tests: bool,
}

/// The full declared build-settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildSettings {
    pub compiler: CompilerSettings,
    pub target: TargetSettings,
    #[serde(default)]
    pub build: BuildOptions,
}

impl BuildSettings {
    /// Parse the declared compiler version and return the typed identity.
    pub fn compiler_identity(&self) -> Result<CompilerIdentity> {
        Ok(CompilerIdentity {
            family: self.compiler.family.clone(),
            version: self.compiler.version.parse()?,
        })
    }

    /// The declared target as a [`TargetProfile`].
    pub fn target_profile(&self) -> TargetProfile {
        TargetProfile {
            environment: self.target.os,
            arch: self.target.arch.clone(),
            processor: self.target.processor.clone(),
            float_abi: self.target.float_abi,
        }
    }

    pub fn skip_tests(&self) -> bool {
        self.build.skip_tests
    }
}

/// Load settings from a TOML file.
pub fn load_settings_toml(path: &Path) -> Result<BuildSettings> {
    if !path.exists() {
        return Err(SettingsError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_settings_toml(&content)
}

/// Parse settings from a TOML string.
pub fn parse_settings_toml(toml_str: &str) -> Result<BuildSettings> {
    let settings: BuildSettings = toml::from_str(toml_str)?;
    Ok(settings)
}

/// Serialize settings to pretty TOML.
pub fn settings_to_toml(settings: &BuildSettings) -> Result<String> {
    let toml_str = toml::to_string_pretty(settings)?;
    Ok(toml_str)
}

/// Generate a starter settings file.
///
/// `bare_metal` seeds a gcc/cortex-m4 record in the spelling the default
/// compatibility policy accepts; otherwise a hosted Linux record.
pub fn generate_template(bare_metal: bool) -> Result<String> {
    let settings = if bare_metal {
        BuildSettings {
            compiler: CompilerSettings {
                family: CompilerFamily::Gcc,
                version: "11.2.0".into(),
                std: Some("20".into()),
            },
            target: TargetSettings {
                os: Environment::BareMetal,
                arch: "cortex-m4".into(),
                processor: None,
                float_abi: Some(FloatAbi::Soft),
            },
            build: BuildOptions::default(),
        }
    } else {
        BuildSettings {
            compiler: CompilerSettings {
                family: CompilerFamily::Gcc,
                version: "11.2.0".into(),
                std: Some("20".into()),
            },
            target: TargetSettings {
                os: Environment::Linux,
                arch: "x86_64".into(),
                processor: None,
                float_abi: None,
            },
            build: BuildOptions::default(),
        }
    };
    settings_to_toml(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
[compiler]
family = "gcc"
version = "11.2.0"
std = "20"

[target]
os = "baremetal"
arch = "thumbv7em"
processor = "cortex-m4"
float-abi = "soft"

[build]
skip-tests = false
"#
    }

    #[test]
    fn parse_full_record() {
        let settings = parse_settings_toml(sample_toml()).unwrap();
        assert_eq!(settings.compiler.family, CompilerFamily::Gcc);
        assert_eq!(settings.compiler.std.as_deref(), Some("20"));
        assert_eq!(settings.target.os, Environment::BareMetal);
        assert_eq!(settings.target.processor.as_deref(), Some("cortex-m4"));
        assert_eq!(settings.target.float_abi, Some(FloatAbi::Soft));
        assert!(!settings.skip_tests());
    }

    #[test]
    fn parse_minimal_record() {
        let toml_str = r#"
[compiler]
family = "clang"
version = "14"

[target]
os = "linux"
arch = "x86_64"
"#;
        let settings = parse_settings_toml(toml_str).unwrap();
        assert!(settings.compiler.std.is_none());
        assert!(settings.target.processor.is_none());
        assert!(settings.target.float_abi.is_none());
        assert!(!settings.skip_tests());
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_settings_toml("not toml [[[").is_err());
    }

    #[test]
    fn parse_missing_section_returns_error() {
        assert!(parse_settings_toml("[compiler]\nfamily = \"gcc\"\nversion = \"11\"").is_err());
    }

    #[test]
    fn round_trip() {
        let original = parse_settings_toml(sample_toml()).unwrap();
        let toml_str = settings_to_toml(&original).unwrap();
        let parsed = parse_settings_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn compiler_identity_parses_version() {
        let settings = parse_settings_toml(sample_toml()).unwrap();
        let id = settings.compiler_identity().unwrap();
        assert_eq!(id.version.components(), &[11, 2, 0]);
    }

    #[test]
    fn compiler_identity_rejects_malformed_version() {
        let mut settings = parse_settings_toml(sample_toml()).unwrap();
        settings.compiler.version = "11.x".into();
        let err = settings.compiler_identity().unwrap_err();
        assert!(matches!(err, SettingsError::MalformedVersion { .. }));
    }

    #[test]
    fn target_profile_accessor() {
        let settings = parse_settings_toml(sample_toml()).unwrap();
        let target = settings.target_profile();
        assert!(target.is_bare_metal());
        assert_eq!(target.arch, "thumbv7em");
    }

    #[test]
    fn templates_are_valid() {
        for bare_metal in [true, false] {
            let toml_str = generate_template(bare_metal).unwrap();
            let settings = parse_settings_toml(&toml_str).unwrap();
            assert_eq!(settings.target_profile().is_bare_metal(), bare_metal);
            settings.compiler_identity().unwrap();
        }
    }

    #[test]
    fn load_not_found() {
        let result = load_settings_toml(Path::new("/nonexistent/settings.toml"));
        assert!(matches!(
            result.unwrap_err(),
            SettingsError::NotFound { .. }
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, sample_toml()).unwrap();

        let settings = load_settings_toml(&path).unwrap();
        assert_eq!(settings.target.arch, "thumbv7em");
    }
}
