mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Aggregate, reconcile, and sync personal health metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to VITALS_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
