use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info};

use crate::datagen;
use crate::loader;

pub fn generate_data(output: &Path, records: usize, seed: u64, start_date: NaiveDate) -> Result<()> {
    info!("Generating {} warehouse records", records);
    debug!("Output path: {}", output.display());
    debug!("Seed: {}, start date: {}", seed, start_date);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let dataset = datagen::generate(records, seed, start_date);
    loader::write_csv(&dataset, output)
        .with_context(|| format!("Failed to write dataset to {}", output.display()))?;

    info!(
        "Generated {} records into {}",
        dataset.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_loadable_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("warehouse_data.csv");
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        generate_data(&output, 25, 42, start).unwrap();

        let dataset = loader::load_path(&output).unwrap();
        assert_eq!(dataset.len(), 25);
        assert_eq!(dataset, datagen::generate(25, 42, start));
    }
}
