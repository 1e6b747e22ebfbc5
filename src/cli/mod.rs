// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password generation and strength analysis", long_about = None)]
pub struct Args {
    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
