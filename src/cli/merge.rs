// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output (only override defaults, not explicit CLI values)
        if self.output == "." {
            if let Some(output) = config.output {
                self.output = output;
            }
        }
        if self.log.is_none() {
            self.log = config.log;
        }
        if self.base_url == "https://pazy.eu" {
            if let Some(base_url) = config.base_url {
                self.base_url = base_url;
            }
        }

        // Pacing
        if self.polymer_delay == 2.0 {
            if let Some(delay) = config.polymer_delay {
                self.polymer_delay = delay;
            }
        }
        if self.sequence_delay == 1.0 {
            if let Some(delay) = config.sequence_delay {
                self.sequence_delay = delay;
            }
        }
        if self.retry_delay == 1.0 {
            if let Some(delay) = config.retry_delay {
                self.retry_delay = delay;
            }
        }

        // Polymer filtering
        if self.include_polymers.is_none() {
            self.include_polymers = config.include_polymers;
        }
        if self.exclude_polymers.is_none() {
            self.exclude_polymers = config.exclude_polymers;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.strict_tls && config.strict_tls.unwrap_or(false) {
            self.strict_tls = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

impl From<&Args> for Config {
    /// Snapshot of the effective settings, loadable again with `--config`
    fn from(args: &Args) -> Self {
        Config {
            output: Some(args.output.clone()),
            log: args.log.clone(),
            base_url: Some(args.base_url.clone()),
            polymer_delay: Some(args.polymer_delay),
            sequence_delay: Some(args.sequence_delay),
            retry_delay: Some(args.retry_delay),
            include_polymers: args.include_polymers.clone(),
            exclude_polymers: args.exclude_polymers.clone(),
            strict_tls: Some(args.strict_tls),
            dry_run: Some(args.dry_run),
            verbose: Some(args.verbose),
        }
    }
}
