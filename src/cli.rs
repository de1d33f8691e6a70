use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Your CLI entrypoint definition
#[derive(Parser)]
#[command(
    name = "rootward",
    version,
    about = "Resolve the project root for a file by walking up to the nearest marker.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version-control root for a path
    Root {
        /// File or directory to resolve from (defaults to the current directory)
        path: Option<PathBuf>,

        /// Fail instead of falling back to the current directory when no marker is found
        #[arg(long)]
        strict: bool,

        /// Ask `git rev-parse --show-toplevel` instead of walking the filesystem
        #[arg(long)]
        shell: bool,

        /// Emit a JSON object instead of a bare path
        #[arg(long)]
        json: bool,
    },
    /// Print the nearest ancestor-level directory with the given name
    Find {
        /// The directory name to look for (e.g. node_modules, .hg)
        #[arg(value_name = "dir_name")]
        name: String,

        /// File or directory to resolve from (defaults to the current directory)
        path: Option<PathBuf>,

        /// Emit a JSON object instead of a bare path
        #[arg(long)]
        json: bool,
    },
}
