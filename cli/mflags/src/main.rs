//! mflags CLI — build-configuration gating and toolchain-flag derivation
//! for bare-metal ARM Cortex-M builds.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mflags_toolchain::PackageLayout;

#[derive(Parser)]
#[command(
    name = "mflags",
    version,
    about = "Validate build configurations and derive ARM Cortex-M toolchain flags"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the validation gates over a settings file
    Check {
        /// Settings TOML file
        settings: PathBuf,
        /// Compatibility policy (strict, thumb-family, cortex-prefix)
        #[arg(long)]
        policy: Option<String>,
    },
    /// Validate and print the derived toolchain flags
    Derive {
        /// Settings TOML file
        settings: PathBuf,
        /// Compatibility policy (strict, thumb-family, cortex-prefix)
        #[arg(long)]
        policy: Option<String>,
        /// Installed package root (linker scripts live under it)
        #[arg(long, default_value = ".")]
        package_root: PathBuf,
        /// Published artifact name
        #[arg(long, default_value = "armcortex")]
        package_name: String,
        /// Emit --specs=nano.specs/--specs=nosys.specs link flags
        #[arg(long)]
        runtime_specs: bool,
        /// Fail when the target declares no float ABI instead of assuming soft
        #[arg(long)]
        require_float_abi: bool,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Validate and print the full build plan
    Plan {
        /// Settings TOML file
        settings: PathBuf,
        /// Compatibility policy (strict, thumb-family, cortex-prefix)
        #[arg(long)]
        policy: Option<String>,
        /// Installed package root (linker scripts live under it)
        #[arg(long, default_value = ".")]
        package_root: PathBuf,
        /// Published artifact name
        #[arg(long, default_value = "armcortex")]
        package_name: String,
        /// Emit --specs=nano.specs/--specs=nosys.specs link flags
        #[arg(long)]
        runtime_specs: bool,
        /// Fail when the target declares no float ABI instead of assuming soft
        #[arg(long)]
        require_float_abi: bool,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Inspect compatibility policies
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },
    /// Emit a starter settings file
    Template {
        /// Seed a bare-metal record instead of a hosted one
        #[arg(long)]
        bare_metal: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PolicyAction {
    /// List available policies
    List,
    /// Show a policy's full allow-lists
    Describe {
        /// Policy name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check { settings, policy } => {
            let policy = commands::resolve_policy(policy.as_deref())?;
            commands::check::run(&settings, policy)
        }

        Commands::Derive {
            settings,
            policy,
            package_root,
            package_name,
            runtime_specs,
            require_float_abi,
            format,
        } => {
            let policy = commands::resolve_policy(policy.as_deref())?;
            let config = commands::derive_config(runtime_specs, require_float_abi);
            let layout = PackageLayout::new(package_name, package_root);
            commands::derive::run(&settings, policy, &config, &layout, format.as_deref())
        }

        Commands::Plan {
            settings,
            policy,
            package_root,
            package_name,
            runtime_specs,
            require_float_abi,
            format,
        } => {
            let policy = commands::resolve_policy(policy.as_deref())?;
            let config = commands::derive_config(runtime_specs, require_float_abi);
            let layout = PackageLayout::new(package_name, package_root);
            commands::plan::run(&settings, policy, &config, &layout, format.as_deref())
        }

        Commands::Policy { action } => match action {
            PolicyAction::List => commands::policy::list(),
            PolicyAction::Describe { name } => commands::policy::describe(&name),
        },

        Commands::Template { bare_metal, output } => {
            commands::template::run(bare_metal, output.as_deref())
        }
    }
}
