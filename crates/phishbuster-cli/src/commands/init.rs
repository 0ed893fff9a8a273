//! The `phishbuster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create phishbuster.toml
    if std::path::Path::new("phishbuster.toml").exists() {
        println!("phishbuster.toml already exists, skipping.");
    } else {
        std::fs::write("phishbuster.toml", SAMPLE_CONFIG)?;
        println!("Created phishbuster.toml");
    }

    // Create starter sample file
    let samples_path = std::path::Path::new("phishing_samples.csv");
    if samples_path.exists() {
        println!("phishing_samples.csv already exists, skipping.");
    } else {
        std::fs::write(samples_path, STARTER_SAMPLES)?;
        println!("Created phishing_samples.csv");
    }

    println!("\nNext steps:");
    println!("  1. Add your own messages to phishing_samples.csv");
    println!("  2. Run: phishbuster validate");
    println!("  3. Run: phishbuster play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# phishbuster configuration

# CSV with columns: sender, subject, body, link, label, clue
samples = "phishing_samples.csv"

# Uncomment for a repeatable sequence of messages.
# seed = 42

show_tips = true
"#;

const STARTER_SAMPLES: &str = include_str!("../../../../data/phishing_samples.csv");
