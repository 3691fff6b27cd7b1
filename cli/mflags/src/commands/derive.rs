//! `mflags derive` — print the derived toolchain flags.

use std::path::Path;

use anyhow::{bail, Result};

use mflags_gate::{run_gates, CompatibilityPolicy};
use mflags_settings::settings::load_settings_toml;
use mflags_toolchain::{DeriveConfig, PackageLayout, ToolchainFlags};

/// Validate a settings file and print the derived flag set.
pub fn run(
    settings_path: &Path,
    policy: CompatibilityPolicy,
    config: &DeriveConfig,
    layout: &PackageLayout,
    format: Option<&str>,
) -> Result<()> {
    let settings = load_settings_toml(settings_path)?;
    let compiler = run_gates(&settings, policy)?;
    let target = settings.target_profile();
    let flags = mflags_toolchain::derive(&compiler.family, &target, layout, config)?;

    match format {
        Some("json") => println!("{}", serde_json::to_string_pretty(&flags)?),
        Some("human") | None => print_human(&flags),
        Some(other) => bail!("unknown format: '{other}' (expected 'human' or 'json')"),
    }
    Ok(())
}

fn print_human(flags: &ToolchainFlags) {
    if flags.is_empty() {
        println!("No architecture-specific flags (hosted target).");
        return;
    }

    println!("Compile flags:");
    for flag in &flags.compile_flags {
        println!("  {flag}");
    }
    println!("Link flags:");
    for flag in &flags.link_flags {
        println!("  {flag}");
    }
    println!("Linker search paths:");
    for path in &flags.linker_search_paths {
        println!("  {}", path.display());
    }
}
