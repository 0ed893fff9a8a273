//! The `phishbuster validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use phishbuster_core::model::Label;
use phishbuster_core::store::{validate_sample_set, SampleSet};

use crate::config::load_config_from;

pub fn execute(samples: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let samples_path = samples.unwrap_or(config.samples);

    let set = SampleSet::from_path(&samples_path)
        .with_context(|| format!("invalid sample file: {}", samples_path.display()))?;

    println!(
        "Sample file: {} ({} samples, {} dropped)",
        samples_path.display(),
        set.len(),
        set.dropped_rows()
    );
    println!(
        "  phish: {}, safe: {}",
        set.count(Label::Phish),
        set.count(Label::Safe)
    );

    let warnings = validate_sample_set(&set);
    for w in &warnings {
        let prefix = w
            .index
            .map(|idx| format!("  [#{idx}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Sample file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
