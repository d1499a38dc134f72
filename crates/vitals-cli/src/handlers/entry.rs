use anyhow::Result;
use chrono::{NaiveDate, Utc};
use vitals_runtime::{Config, EntryService};
use vitals_types::ManualMetrics;

pub fn add(
    config: &Config,
    date: Option<NaiveDate>,
    bodyweight: Option<f64>,
    lift: bool,
) -> Result<()> {
    if bodyweight.is_none() && !lift {
        anyhow::bail!("Nothing to record: pass --bodyweight and/or --lift");
    }

    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let fields = ManualMetrics {
        bodyweight_kg: bodyweight,
        lift: if lift { Some(true) } else { None },
    };

    let key = EntryService::new(config).add(date, fields)?;

    println!("Recorded entry for {} ({})", date, key);
    println!("It will appear in the snapshot after the next 'vitals sync'.");
    Ok(())
}

pub fn list(config: &Config) -> Result<()> {
    let pending = EntryService::new(config).pending()?;

    if pending.is_empty() {
        println!("No pending entries.");
        return Ok(());
    }

    println!("{:<22} {:<12} FIELDS", "RECORDED", "DATE");
    for (_, entry) in &pending {
        let mut parts = Vec::new();
        if let Some(kg) = entry.fields.bodyweight_kg {
            parts.push(format!("bodyweight {} kg", kg));
        }
        if entry.fields.lift == Some(true) {
            parts.push("lift".to_string());
        }
        println!(
            "{:<22} {:<12} {}",
            entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.date.to_string(),
            parts.join(", ")
        );
    }

    Ok(())
}
