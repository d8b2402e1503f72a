//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Command line for `roster-server`.
///
/// Flags override values from the config file and environment.
#[derive(Debug, Parser)]
#[command(name = "roster-server", version, about = "Serve student identifier lookups over HTTP")]
pub struct Cli {
    /// Config file path (extension optional).
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Address to listen on.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Identifier file, one identifier per line.
    #[arg(short, long)]
    pub data_file: Option<PathBuf>,
}
