// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub output: Option<String>,
    pub log: Option<String>,
    pub base_url: Option<String>,

    // Pacing
    pub polymer_delay: Option<f64>,
    pub sequence_delay: Option<f64>,
    pub retry_delay: Option<f64>,

    // Polymer filtering
    pub include_polymers: Option<String>,
    pub exclude_polymers: Option<String>,

    // Flags
    pub strict_tls: Option<bool>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# pazyscrape.toml - Configuration file for pazyscrape
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Output directory for PAZy_metadata.tsv and PAZy_sequences.fasta
output = "pazy_output"

# Log file (logs always go to stderr as well)
# log = "pazy_scraper.log"

# Site root of the PAZy database
base_url = "https://pazy.eu"

# =============================================================================
# PACING
# =============================================================================

# Seconds to wait between polymer pages
polymer_delay = 2.0

# Seconds to wait between sequence lookups
sequence_delay = 1.0

# Base backoff before the first retry, doubled on each further retry
retry_delay = 1.0

# =============================================================================
# POLYMER FILTERING
# =============================================================================

# Only visit polymers whose name matches this regex
# include_polymers = "(?i)terephthalate|urethane"

# Skip polymers whose name matches this regex
# exclude_polymers = "(?i)rubber"

# =============================================================================
# FLAGS
# =============================================================================

# Verify TLS certificates
strict_tls = false

# Scrape the polymer tables only: no sequence lookups, no output files
dry_run = false

# Debug logging
verbose = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.output.as_deref(), Some("pazy_output"));
        assert_eq!(config.base_url.as_deref(), Some("https://pazy.eu"));
        assert_eq!(config.polymer_delay, Some(2.0));
        assert_eq!(config.strict_tls, Some(false));
        assert!(config.include_polymers.is_none());
        assert!(config.log.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_bad_types_rejected() {
        assert!(Config::from_toml("unrelated = 1\noutput = \"x\"").is_ok());
        assert!(Config::from_toml("polymer_delay = \"slow\"").is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pazyscrape.toml");
        let config = Config {
            output: Some("out".to_string()),
            sequence_delay: Some(0.5),
            dry_run: Some(true),
            ..Config::default()
        };

        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
        assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
    }
}
