//! The `phishbuster list` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use phishbuster_core::store::SampleStore;

use crate::config::load_config_from;

pub fn execute(
    samples: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let samples_path = samples.unwrap_or(config.samples);

    let store = SampleStore::new();
    let set = store
        .load(&samples_path)
        .with_context(|| format!("failed to load samples from {}", samples_path.display()))?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(set.as_slice())?);
        }
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Label", "Sender", "Subject", "Link"]);
            for (idx, sample) in set.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(idx),
                    Cell::new(sample.label),
                    Cell::new(&sample.sender),
                    Cell::new(&sample.subject),
                    Cell::new(&sample.link),
                ]);
            }
            println!("{table}");
            println!("{} sample(s)", set.len());
        }
        other => anyhow::bail!("unknown format '{other}' (expected table or json)"),
    }

    Ok(())
}
