use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;
use vitals_runtime::{Config, SourceOutcome, SyncOptions, SyncService};
use vitals_types::Source;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    config: &Config,
    data_dir: &Path,
    past_days: u64,
    sources: Option<Vec<Source>>,
    offline: bool,
    synthetic: bool,
    seed: u64,
) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let options = SyncOptions {
        past_days,
        sources,
        online: !offline,
        synthetic,
        seed,
    };

    let report = SyncService::new(config, data_dir).sync_cycle(&options)?;
    let color = std::io::stdout().is_terminal();

    println!(
        "Sync window: {} .. {} ({} day(s))",
        report.window.0,
        report.window.1,
        past_days.saturating_add(1)
    );

    for (source, outcome) in &report.outcomes {
        println!("  {:<12} {}", source.name(), outcome_line(outcome, color));
    }

    if report.manual_folded > 0 || report.manual_malformed > 0 {
        println!(
            "  {:<12} folded {} pending entr{}, compacted {}",
            "manual log",
            report.manual_folded,
            if report.manual_folded == 1 { "y" } else { "ies" },
            report.manual_compacted
        );
    }

    println!();
    println!("Snapshot: {} ({} days)", report.snapshot_path.display(), report.total_days);
    println!("Export:   {}", report.export_path.display());

    if offline {
        println!("Remote:   skipped (--offline)");
    } else if report.uploaded {
        println!("Remote:   uploaded");
    } else {
        println!("Remote:   unchanged, upload skipped");
    }

    Ok(())
}

fn outcome_line(outcome: &SourceOutcome, color: bool) -> String {
    match outcome {
        SourceOutcome::Fetched { records } => {
            let label = format!("{} record(s)", records);
            if color { label.green().to_string() } else { label }
        }
        SourceOutcome::Disabled => "disabled".to_string(),
        SourceOutcome::NoConnector => "no connector configured".to_string(),
        SourceOutcome::Failed { error } => {
            let label = format!("failed: {}", error);
            if color { label.red().to_string() } else { label }
        }
    }
}
