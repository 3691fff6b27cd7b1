//! Compiler identity: family plus declared version.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// The compiler family declared in the build settings.
///
/// Families the minimum-version table knows about get their own variant;
/// everything else is carried verbatim in [`CompilerFamily::Other`] so the
/// gate can apply its permissive default (no minimum enforced) instead of
/// rejecting at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompilerFamily {
    Gcc,
    Clang,
    AppleClang,
    /// A family with no entry in the minimum-version table.
    Other(String),
}

impl CompilerFamily {
    /// The canonical settings spelling of this family.
    pub fn as_str(&self) -> &str {
        match self {
            CompilerFamily::Gcc => "gcc",
            CompilerFamily::Clang => "clang",
            CompilerFamily::AppleClang => "apple-clang",
            CompilerFamily::Other(name) => name,
        }
    }
}

impl From<String> for CompilerFamily {
    fn from(s: String) -> Self {
        match s.as_str() {
            "gcc" => CompilerFamily::Gcc,
            "clang" => CompilerFamily::Clang,
            "apple-clang" => CompilerFamily::AppleClang,
            _ => CompilerFamily::Other(s),
        }
    }
}

impl From<CompilerFamily> for String {
    fn from(f: CompilerFamily) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiler as declared by the build settings: family plus version.
///
/// Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerIdentity {
    pub family: CompilerFamily,
    pub version: Version,
}

impl fmt::Display for CompilerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.version)
    }
}
