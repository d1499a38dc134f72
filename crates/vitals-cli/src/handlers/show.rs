use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;
use vitals_runtime::load_local;
use vitals_types::{Source, fields_for, metric_meta};

pub fn handle(data_dir: &Path, limit: usize, sources: &[Source]) -> Result<()> {
    let records = load_local(data_dir)?;

    if records.is_empty() {
        println!("No local data. Run 'vitals sync' first.");
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    let selected: Vec<Source> = if sources.is_empty() {
        Source::ALL.to_vec()
    } else {
        sources.to_vec()
    };

    // Records are kept date-ascending; show the most recent days, newest last.
    let start = records.len().saturating_sub(limit);

    for record in &records[start..] {
        let date = record.date.to_string();
        if color {
            println!("{}", date.bold());
        } else {
            println!("{}", date);
        }

        let mut any = false;
        for source in &selected {
            if !record.has_source(*source) {
                continue;
            }

            let mut parts = Vec::new();
            for field in fields_for(*source) {
                if let Some(value) = record.metric(*source, field) {
                    let label = metric_meta(*source, field)
                        .map(|meta| meta.label)
                        .unwrap_or(field);
                    match metric_meta(*source, field).and_then(|meta| meta.unit) {
                        Some(unit) => parts.push(format!("{}: {} {}", label, value, unit)),
                        None => parts.push(format!("{}: {}", label, value)),
                    }
                }
            }

            if !parts.is_empty() {
                any = true;
                println!("  {:<12} {}", source.name(), parts.join(", "));
            }
        }

        if !any {
            println!("  (no data for selected sources)");
        }
    }

    Ok(())
}
