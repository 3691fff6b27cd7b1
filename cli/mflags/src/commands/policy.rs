//! `mflags policy` — compatibility policy listing and description.

use anyhow::{bail, Result};

use mflags_gate::CompatibilityPolicy;

/// List all compatibility policies, strictest first.
pub fn list() -> Result<()> {
    println!("Compatibility policies:");
    println!();
    for policy in CompatibilityPolicy::all() {
        let marker = if *policy == CompatibilityPolicy::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<15} {}{marker}", policy.name(), policy.summary());
    }
    println!();
    println!("Use 'mflags policy describe <name>' for the full allow-lists.");
    Ok(())
}

/// Describe a specific policy in detail.
pub fn describe(name: &str) -> Result<()> {
    let policy = match CompatibilityPolicy::from_name(name) {
        Some(p) => p,
        None => bail!("unknown policy: '{name}'. Use 'mflags policy list' to see available policies."),
    };

    println!("=== Policy: {} ===", policy.name());
    println!("{}", policy.summary());
    println!();
    println!("{}", policy.expectation());
    if policy == CompatibilityPolicy::default() {
        println!();
        println!("This is the default policy.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_runs() {
        list().unwrap();
    }

    #[test]
    fn describe_known_policy() {
        for policy in CompatibilityPolicy::all() {
            describe(policy.name()).unwrap();
        }
    }

    #[test]
    fn describe_unknown_policy() {
        assert!(describe("nonexistent").is_err());
    }
}
