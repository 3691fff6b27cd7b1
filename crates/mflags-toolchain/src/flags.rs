//! The derived flag set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Compiler/linker flags and search paths for one build invocation.
///
/// Derived, never hand-edited. Emission order is stable and part of the
/// contract — CPU flag, then float-ABI flag, then specs flags — because
/// downstream tooling may string-match on the flag list even though the
/// toolchains themselves are order-insensitive here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolchainFlags {
    /// Flags for compile invocations.
    pub compile_flags: Vec<String>,
    /// Flags for the link invocation.
    pub link_flags: Vec<String>,
    /// Directories to add to the linker search path.
    pub linker_search_paths: Vec<PathBuf>,
}

impl ToolchainFlags {
    /// Flag set for targets that need no architecture-specific flags.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.compile_flags.is_empty()
            && self.link_flags.is_empty()
            && self.linker_search_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert!(ToolchainFlags::empty().is_empty());
    }

    #[test]
    fn populated_is_not_empty() {
        let flags = ToolchainFlags {
            compile_flags: vec!["-mcpu=cortex-m4".into()],
            ..Default::default()
        };
        assert!(!flags.is_empty());
    }
}
