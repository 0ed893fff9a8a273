//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level phishbuster configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishbusterConfig {
    /// CSV file to draw samples from.
    #[serde(default = "default_samples")]
    pub samples: PathBuf,
    /// Fixed RNG seed for reproducible rounds.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print the tips list when a game starts.
    #[serde(default = "default_true")]
    pub show_tips: bool,
}

fn default_samples() -> PathBuf {
    PathBuf::from("phishing_samples.csv")
}

fn default_true() -> bool {
    true
}

impl Default for PhishbusterConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: None,
            show_tips: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `phishbuster.toml` in the current directory
/// 2. `~/.config/phishbuster/config.toml`
///
/// Environment variable overrides: `PHISHBUSTER_SAMPLES`, `PHISHBUSTER_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<PhishbusterConfig> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config_from`], with overrides read through `lookup`.
fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PhishbusterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("phishbuster.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<PhishbusterConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // Relative sample paths are relative to the config file.
            if config.samples.is_relative() {
                if let Some(dir) = path.parent() {
                    config.samples = dir.join(&config.samples);
                }
            }
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => PhishbusterConfig::default(),
    };

    apply_env_overrides(config, lookup)
}

/// Apply `PHISHBUSTER_*` overrides using the given variable lookup.
fn apply_env_overrides(
    mut config: PhishbusterConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PhishbusterConfig> {
    if let Some(samples) = lookup("PHISHBUSTER_SAMPLES") {
        config.samples = PathBuf::from(samples);
    }

    if let Some(seed) = lookup("PHISHBUSTER_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid PHISHBUSTER_SEED: '{seed}'"))?;
        config.seed = Some(seed);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("phishbuster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PhishbusterConfig::default();
        assert_eq!(config.samples, PathBuf::from("phishing_samples.csv"));
        assert_eq!(config.seed, None);
        assert!(config.show_tips);
    }

    #[test]
    fn parse_partial_config() {
        let config: PhishbusterConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.samples, PathBuf::from("phishing_samples.csv"));
        assert!(config.show_tips);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("no/such/phishbuster.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn samples_path_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishbuster.toml");
        std::fs::write(&path, "samples = \"data/quiz.csv\"\nshow_tips = false\n").unwrap();

        let config = load_config_with(Some(&path), |_| None).unwrap();
        assert!(!config.show_tips);
        assert_eq!(config.samples, dir.path().join("data/quiz.csv"));
    }

    #[test]
    fn env_overrides_win_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishbuster.toml");
        std::fs::write(&path, "samples = \"data/quiz.csv\"\nseed = 1\n").unwrap();

        let config = load_config_with(Some(&path), |key| match key {
            "PHISHBUSTER_SAMPLES" => Some("/srv/quiz.csv".into()),
            "PHISHBUSTER_SEED" => Some("5".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.samples, PathBuf::from("/srv/quiz.csv"));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishbuster.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();

        let err = load_config_with(Some(&path), |_| None).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn env_overrides_apply() {
        let config = apply_env_overrides(PhishbusterConfig::default(), |key| match key {
            "PHISHBUSTER_SAMPLES" => Some("/tmp/other.csv".into()),
            "PHISHBUSTER_SEED" => Some(" 99 ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.samples, PathBuf::from("/tmp/other.csv"));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn invalid_seed_override_is_rejected() {
        let err = apply_env_overrides(PhishbusterConfig::default(), |key| {
            (key == "PHISHBUSTER_SEED").then(|| "abc".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("PHISHBUSTER_SEED"));
    }
}
