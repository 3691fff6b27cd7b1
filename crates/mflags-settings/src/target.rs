//! Target profile: operating environment, architecture, CPU core, float ABI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The target operating environment.
///
/// `baremetal` is the sentinel spelling used by declared settings for a
/// build with no host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// No operating system; the binary runs directly on hardware.
    #[serde(rename = "baremetal")]
    BareMetal,
    Linux,
    Windows,
    #[serde(rename = "macos")]
    MacOS,
}

impl Environment {
    pub fn is_bare_metal(&self) -> bool {
        matches!(self, Environment::BareMetal)
    }

    /// Hosted environments have an OS to run test binaries under.
    pub fn is_hosted(&self) -> bool {
        !self.is_bare_metal()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::BareMetal => "baremetal",
            Environment::Linux => "linux",
            Environment::Windows => "windows",
            Environment::MacOS => "macos",
        };
        f.write_str(name)
    }
}

/// Calling-convention choice for floating-point arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatAbi {
    /// Software emulation; no FPU registers in the calling convention.
    Soft,
    /// Hardware FPU registers.
    Hard,
}

impl FloatAbi {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatAbi::Soft => "soft",
            FloatAbi::Hard => "hard",
        }
    }
}

impl fmt::Display for FloatAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The target as declared by the build settings.
///
/// `processor` and `float_abi` are only meaningful when `environment` is
/// bare-metal; hosted builds ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProfile {
    /// Operating environment.
    pub environment: Environment,
    /// Instruction-set architecture string (e.g. "thumbv7em", "cortex-m4").
    pub arch: String,
    /// Specific CPU core within the architecture (e.g. "cortex-m4f").
    pub processor: Option<String>,
    /// Floating-point ABI.
    pub float_abi: Option<FloatAbi>,
}

impl TargetProfile {
    pub fn is_bare_metal(&self) -> bool {
        self.environment.is_bare_metal()
    }
}

impl fmt::Display for TargetProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.environment, self.arch)?;
        if let Some(processor) = &self.processor {
            write!(f, "/{processor}")?;
        }
        if let Some(abi) = &self.float_abi {
            write!(f, "/{abi}")?;
        }
        Ok(())
    }
}
