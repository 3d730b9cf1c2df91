// validation.rs - Input validation utilities

use regex::Regex;
use std::time::Duration;
use url::Url;

use crate::cli::args::Args;
use crate::fetch::RetryPolicy;
use crate::pipeline::HarvestSettings;

/// Validate all command line arguments and turn them into harvest settings
pub fn validate_args(args: &Args) -> Result<HarvestSettings, String> {
    let base_url = parse_base_url(&args.base_url)?;

    let polymer_delay = parse_delay("polymer-delay", args.polymer_delay)?;
    let sequence_delay = parse_delay("sequence-delay", args.sequence_delay)?;
    let retry_delay = parse_delay("retry-delay", args.retry_delay)?;

    // Compile regex patterns
    let include_polymers = if let Some(pattern) = &args.include_polymers {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_polymers regex: {}", e))?)
    } else {
        None
    };

    let exclude_polymers = if let Some(pattern) = &args.exclude_polymers {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_polymers regex: {}", e))?)
    } else {
        None
    };

    if args.output.trim().is_empty() {
        return Err("--output must not be empty".to_string());
    }

    let mut settings = HarvestSettings::new(base_url, args.output.trim());
    settings.polymer_delay = polymer_delay;
    settings.sequence_delay = sequence_delay;
    settings.landing_policy = RetryPolicy::landing().with_base_delay(retry_delay);
    settings.page_policy = RetryPolicy::page().with_base_delay(retry_delay);
    settings.include_polymers = include_polymers;
    settings.exclude_polymers = exclude_polymers;
    settings.dry_run = args.dry_run;
    Ok(settings)
}

/// Parse the site root; a trailing slash is added so relative page paths
/// resolve below it.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw.trim()).map_err(|e| format!("Invalid base URL '{}': {}", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Base URL must use http or https, got '{}'", url.scheme()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_delay(name: &str, seconds: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("--{} must be a non-negative number of seconds, got {}", name, seconds))
}
