use anyhow::Result;
use std::path::{Path, PathBuf};
use vitals_runtime::load_local;
use vitals_store::export;

pub fn handle(data_dir: &Path, output: Option<PathBuf>) -> Result<()> {
    let records = load_local(data_dir)?;
    let path = output.unwrap_or_else(|| data_dir.join("vitals.csv"));

    export::write_csv(&path, &records)?;

    println!("Wrote {} day(s) to {}", records.len(), path.display());
    Ok(())
}
