use anyhow::Result;
use std::path::{Path, PathBuf};
use vitals_providers::get_source_metadata;
use vitals_runtime::{Config, SourceConfig};
use vitals_types::Source;

pub fn list(config_path: &Path) -> Result<()> {
    let config = Config::load_from(&config_path.to_path_buf())?;

    println!("{:<12} {:<9} {:<30} DESCRIPTION", "SOURCE", "ENABLED", "FIXTURE");
    println!("{}", "-".repeat(90));

    for source in Source::ALL {
        let source_config = config.source(source);
        let fixture = source_config
            .fixture
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        let description = get_source_metadata(source)
            .map(|meta| meta.description)
            .unwrap_or("");

        println!(
            "{:<12} {:<9} {:<30} {}",
            source.name(),
            if source_config.enabled { "yes" } else { "no" },
            fixture,
            description
        );
    }

    Ok(())
}

pub fn set(
    config_path: &Path,
    source: Source,
    fixture: Option<PathBuf>,
    enable: bool,
    disable: bool,
) -> Result<()> {
    let config_path = config_path.to_path_buf();
    let mut config = Config::load_from(&config_path)?;

    let current = config.source(source);
    let enabled = if enable {
        true
    } else if disable {
        false
    } else {
        current.enabled
    };
    let fixture = fixture.or(current.fixture);

    config.set_source(
        source,
        SourceConfig {
            enabled,
            fixture: fixture.clone(),
        },
    );
    config.save_to(&config_path)?;

    println!(
        "Set source '{}': enabled={}, fixture={}",
        source.name(),
        enabled,
        fixture
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    Ok(())
}
