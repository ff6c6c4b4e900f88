//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use slipway::core::target::{BuildConfiguration, Platform, ToolchainVariant};

/// Slipway - build plan resolver for the Keel scripting runtime's native modules
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one module's build plan and print it as JSON
    Plan(PlanArgs),

    /// Print the resolved dependency module list
    Modules(ModulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Module name
    pub module: String,

    /// Module root directory (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub module_root: PathBuf,

    /// Target platform
    #[arg(long)]
    pub platform: Platform,

    /// Build configuration
    #[arg(long, default_value_t = BuildConfiguration::Development)]
    pub configuration: BuildConfiguration,

    /// Link all modules into one image instead of one shared library per module
    #[arg(long)]
    pub monolithic: bool,

    /// Windows toolchain variant
    #[arg(long, default_value_t = ToolchainVariant::Msvc2015)]
    pub toolchain: ToolchainVariant,

    /// Debug builds use the debug C runtime
    #[arg(long)]
    pub debug_runtime: bool,

    /// Directory holding config/keel.toml (defaults to the module root)
    #[arg(long)]
    pub config_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct ModulesArgs {
    /// Directory holding config/keel.toml
    #[arg(long, default_value = ".")]
    pub config_root: PathBuf,

    /// Include the hosting runtime module itself
    #[arg(long)]
    pub include_runtime: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
