use anyhow::Result;
use std::path::Path;
use vitals_runtime::Config;

pub fn handle(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let config_path = data_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(&config_path)?;

    println!("Initialized data directory: {}", data_dir.display());
    println!("Wrote config: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  - set [remote] root in config.toml to a synced directory");
    println!("  - set encryption_key (or export VITALS_ENCRYPTION_KEY)");
    println!("  - point sources at fixture exports with 'vitals source set'");
    println!("  - run 'vitals sync'");

    Ok(())
}
