use super::enums::SourceName;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the vitals data directory and configuration")]
    Init,

    #[command(about = "Fetch, reconcile, and persist a window of metrics")]
    Sync {
        #[arg(long, default_value = "7", help = "Fetch window in days, ending yesterday")]
        past_days: u64,

        #[arg(long = "source", help = "Restrict the run to these sources (repeatable)")]
        sources: Vec<SourceName>,

        #[arg(long, help = "Skip the remote store; merge into the local snapshot only")]
        offline: bool,

        #[arg(long, help = "Serve seeded synthetic data instead of configured sources")]
        synthetic: bool,

        #[arg(long, default_value = "0", help = "Seed for --synthetic")]
        seed: u64,
    },

    #[command(about = "Show recent days from the local snapshot")]
    Show {
        #[arg(long, default_value = "7")]
        limit: usize,

        #[arg(long = "source", help = "Show only these sources (repeatable)")]
        sources: Vec<SourceName>,
    },

    #[command(about = "Write the local snapshot as a flat CSV")]
    Export {
        #[arg(long, help = "Output path (defaults to vitals.csv in the data directory)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Record and inspect manual observations")]
    Entry {
        #[command(subcommand)]
        command: EntryCommand,
    },

    #[command(about = "Manage metric sources")]
    Source {
        #[command(subcommand)]
        command: SourceCommand,
    },
}

#[derive(Subcommand)]
pub enum EntryCommand {
    #[command(about = "Append a manual observation to the remote log")]
    Add {
        #[arg(long, help = "Observation date (YYYY-MM-DD, defaults to today)")]
        date: Option<NaiveDate>,

        #[arg(long, help = "Body weight in kilograms")]
        bodyweight: Option<f64>,

        #[arg(long, help = "Mark a lifting session for the day")]
        lift: bool,
    },

    #[command(about = "List entries appended but not yet folded by a sync")]
    List,
}

#[derive(Subcommand)]
pub enum SourceCommand {
    #[command(about = "List known sources and their configuration")]
    List,

    #[command(about = "Configure one source")]
    Set {
        source: SourceName,

        #[arg(long, help = "Path to a fixture export file to read records from")]
        fixture: Option<PathBuf>,

        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        #[arg(long)]
        disable: bool,
    },
}
