//! Dotted version strings with truncated-prefix comparison.
//!
//! Compiler version gating deliberately does not use full semver. Two
//! versions are compared only over their overlapping prefix: the longer
//! one is truncated to the shorter one's length first. Under this rule
//! "1.2" and "1.2.9" have equal prefixes, so neither is less than the
//! other. Downstream version minimums are declared with this rule in
//! mind; do not replace it with a strict semver ordering.

use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;

/// A parsed dotted version: an ordered sequence of non-negative integers.
///
/// Immutable once parsed. Parsing fails on any non-numeric component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// The parsed integer components, in order.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Truncated-prefix strict-less comparison.
    ///
    /// Both versions are cut down to the shorter length, then compared
    /// lexicographically. `"1.2".lazy_lt("1.2.9")` is false.
    pub fn lazy_lt(&self, other: &Version) -> bool {
        let min_len = self.components.len().min(other.components.len());
        self.components[..min_len] < other.components[..min_len]
    }
}

impl FromStr for Version {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = Vec::new();
        for part in s.split('.') {
            let value = part
                .parse::<u64>()
                .map_err(|_| SettingsError::MalformedVersion {
                    input: s.to_string(),
                    component: part.to_string(),
                })?;
            components.push(value);
        }
        Ok(Version { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parse both strings and compare with [`Version::lazy_lt`].
pub fn less_than(v1: &str, v2: &str) -> Result<bool, SettingsError> {
    let v1: Version = v1.parse()?;
    let v2: Version = v2.parse()?;
    Ok(v1.lazy_lt(&v2))
}
