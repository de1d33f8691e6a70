//! Rootward
//! Or: the one question every editor plugin keeps re-answering badly —
//! "where does this project actually start?" — answered once, in one binary.

mod cli;
mod commands;
mod config;
mod constants;
mod finder;
mod resolve;
mod vcs;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{find::run_find, root::run_root};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Root {
            path,
            strict,
            shell,
            json,
        } => {
            run_root(path, strict, shell, json)?;
        }

        Commands::Find { name, path, json } => {
            run_find(&name, path, json)?;
        }
    }

    Ok(())
}
