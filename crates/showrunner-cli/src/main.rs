//! Showrunner CLI Application
//!
//! Command-line interface for the Showrunner content planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands, GenerateArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Showrunner started");

    match command {
        Some(Commands::Generate(generate_args)) => cli.generate(generate_args),
        Some(Commands::Template) => cli.template(),
        Some(Commands::Schema) => cli.schema(),
        None => cli.generate(GenerateArgs::default()),
    }
}
