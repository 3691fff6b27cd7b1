//! `mflags plan` — print the full build plan.

use std::path::Path;

use anyhow::{bail, Result};

use mflags_gate::CompatibilityPolicy;
use mflags_settings::settings::load_settings_toml;
use mflags_toolchain::{BuildPlan, DeriveConfig, PackageLayout};

/// Validate a settings file and print the complete build plan.
pub fn run(
    settings_path: &Path,
    policy: CompatibilityPolicy,
    config: &DeriveConfig,
    layout: &PackageLayout,
    format: Option<&str>,
) -> Result<()> {
    let settings = load_settings_toml(settings_path)?;
    let plan = mflags_toolchain::plan(&settings, policy, config, layout)?;

    match format {
        Some("json") => println!("{}", serde_json::to_string_pretty(&plan)?),
        Some("human") | None => print_human(&plan),
        Some(other) => bail!("unknown format: '{other}' (expected 'human' or 'json')"),
    }
    Ok(())
}

fn print_human(plan: &BuildPlan) {
    println!("=== Build plan ===");
    println!();

    println!("--- Toolchain flags ---");
    if plan.flags.is_empty() {
        println!("  none (hosted target)");
    } else {
        for flag in &plan.flags.compile_flags {
            println!("  compile: {flag}");
        }
        for flag in &plan.flags.link_flags {
            println!("  link:    {flag}");
        }
        for path in &plan.flags.linker_search_paths {
            println!("  search:  {}", path.display());
        }
    }
    println!();

    println!("--- Driver switches ---");
    println!(
        "  sanitizer: {}",
        if plan.enable_sanitizer { "on" } else { "off" }
    );
    println!(
        "  run tests: {}",
        if plan.run_tests { "yes" } else { "no" }
    );
    println!();

    println!("--- Artifact ---");
    println!("  name:           {}", plan.artifact.name);
    println!(
        "  linker scripts: {}",
        plan.artifact.linker_script_dir().display()
    );
}
