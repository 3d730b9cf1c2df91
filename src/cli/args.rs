// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// pazyscrape - PAZy enzyme metadata and sequence harvester
pub struct Args {
    /// output directory for PAZy_metadata.tsv and PAZy_sequences.fasta (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub output: String,

    /// path to the log file (logs always go to stderr as well)
    #[argh(option)]
    pub log: Option<String>,

    /// site root of the PAZy database (default: https://pazy.eu)
    #[argh(option, default = "String::from(\"https://pazy.eu\")")]
    pub base_url: String,

    /// seconds to wait between polymer pages (default: 2)
    #[argh(option, default = "2.0")]
    pub polymer_delay: f64,

    /// seconds to wait between sequence lookups (default: 1)
    #[argh(option, default = "1.0")]
    pub sequence_delay: f64,

    /// base backoff in seconds before the first retry, doubled on each further retry (default: 1)
    #[argh(option, default = "1.0")]
    pub retry_delay: f64,

    /// only visit polymers whose name matches this regex
    #[argh(option)]
    pub include_polymers: Option<String>,

    /// skip polymers whose name matches this regex
    #[argh(option)]
    pub exclude_polymers: Option<String>,

    /// verify TLS certificates (disabled by default; the PAZy host has served invalid ones)
    #[argh(switch)]
    pub strict_tls: bool,

    /// scrape the polymer tables only: no sequence lookups, no output files
    #[argh(switch)]
    pub dry_run: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// write the effective settings (CLI merged with --config) to this TOML file and exit
    #[argh(option)]
    pub save_config: Option<String>,
}
