//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bigapp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Scaffolding for BigApp projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Manage blueprint folders
    Blueprint {
        #[command(subcommand)]
        action: BlueprintAction,
    },
    /// Manage the application config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum BlueprintAction {
    /// Create a new blueprint folder
    Add {
        /// Existing folder that will hold the blueprint (e.g. 'app/blueprints')
        #[arg(short, long)]
        path: PathBuf,
        /// Blueprint name, converted to snake case
        #[arg(short, long)]
        name: String,
    },
    /// List the blueprints in a folder with their prefix and state
    List {
        #[arg(short, long)]
        path: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default.config.toml with a fresh secret key
    Init {
        /// Application root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
