#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{blueprint, config};
use crate::models::args::{AppCommands, BlueprintAction, Cli, ConfigAction};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Blueprint { action } => match action {
            BlueprintAction::Add { path, name } => blueprint::add_blueprint(&path, &name)?,
            BlueprintAction::List { path } => blueprint::list_blueprints(&path)?,
        },
        AppCommands::Config { action } => match action {
            ConfigAction::Init { path, force } => config::init_config(&path, force)?,
        },
    }

    Ok(())
}
