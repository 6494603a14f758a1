pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(about = "Command-line client for the depot file-storage service")]
pub struct Args {
    /// Backend API base URL (overrides the configured api_url)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the depot config directory (defaults to ~/.depot)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
