//! Installed package layout and published artifact info.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the package root holding linker scripts.
pub const LINKER_SCRIPT_DIR: &str = "linker_scripts";

/// Where the supported library is installed and what it is published as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageLayout {
    /// Published artifact name (the library the derived flags build against).
    pub name: String,
    /// Installed package root.
    pub root: PathBuf,
}

impl PackageLayout {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// The linker-script directory, fixed relative to the root.
    pub fn linker_script_dir(&self) -> PathBuf {
        self.root.join(LINKER_SCRIPT_DIR)
    }

    /// Artifact info published for every successful run, regardless of
    /// target.
    pub fn artifact_info(&self) -> ArtifactInfo {
        ArtifactInfo {
            name: self.name.clone(),
            linker_script_dir: self.linker_script_dir(),
        }
    }
}

/// Published name and linker-script path consumed by the packaging step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactInfo {
    pub name: String,
    pub linker_script_dir: PathBuf,
}

impl ArtifactInfo {
    pub fn linker_script_dir(&self) -> &Path {
        &self.linker_script_dir
    }
}
