//! `mflags template` — emit a starter settings file.

use std::path::Path;

use anyhow::Result;

use mflags_settings::settings::generate_template;

/// Print or write a starter settings file.
pub fn run(bare_metal: bool, output: Option<&Path>) -> Result<()> {
    let toml_str = generate_template(bare_metal)?;
    match output {
        Some(path) => {
            std::fs::write(path, &toml_str)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{toml_str}"),
    }
    Ok(())
}
