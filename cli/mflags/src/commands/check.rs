//! `mflags check` — run the validation gates over a settings file.

use std::path::Path;

use anyhow::Result;

use mflags_gate::{run_gates, CompatibilityPolicy};
use mflags_settings::settings::load_settings_toml;

/// Validate a settings file; prints a verdict on success and propagates
/// the gate error otherwise.
pub fn run(settings_path: &Path, policy: CompatibilityPolicy) -> Result<()> {
    let settings = load_settings_toml(settings_path)?;
    let compiler = run_gates(&settings, policy)?;

    println!("OK: {}", settings_path.display());
    println!("  compiler: {compiler}");
    if let Some(std) = &settings.compiler.std {
        println!("  std:      {std}");
    }
    println!("  target:   {}", settings.target_profile());
    println!("  policy:   {}", policy.name());
    Ok(())
}
