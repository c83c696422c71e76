use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spdlog::warn;

use minicms::logger::configure_logger;

use crate::commands::*;
use crate::config::open_config;

mod commands;
mod config;

const CFG_FILE_NAME: &str = "minicms.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Renders a post as HTML
    Render(RenderArgs),
    /// Writes the live preview page built from the HTML, CSS and JS blocks
    Sandbox(SourceArgs),
    /// Lists stored posts, most recently updated first
    List(ListArgs),
    /// Lists the tags in use
    Tags(TagsArgs),
    /// Creates an empty draft
    New(NewArgs),
    /// Stores a post read from a JSON file
    Save(SaveArgs),
    /// Deletes a stored post
    Delete(DeleteArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Render(args) => render_cmd(&config, args),
        Command::Sandbox(args) => sandbox_cmd(&config, args),
        Command::List(args) => list_cmd(&config, args),
        Command::Tags(args) => tags_cmd(&config, args),
        Command::New(args) => new_cmd(&config, args),
        Command::Save(args) => save_cmd(&config, args),
        Command::Delete(args) => delete_cmd(&config, args),
    }
}
