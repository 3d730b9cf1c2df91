// main.rs - CLI entry point

use std::path::Path;

use pazyscrape::cli::Config;
use pazyscrape::logging::init_logging;
use pazyscrape::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
        println!("📄 Loaded configuration from: {}", config_path);
    }

    let settings = validate_args(&args)?;

    if let Some(save_path) = &args.save_config {
        Config::from(&args).to_file(save_path)?;
        return Ok(());
    }

    init_logging(args.log.as_deref().map(Path::new), args.verbose)?;

    println!("🧪 {}", pazyscrape::get_info());
    println!("📅 Started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("🌐 Source: {}", settings.base_url);
    if settings.dry_run {
        println!("🔎 Dry run: polymer tables only");
    } else {
        println!("📂 Output: {}", settings.output_dir.display());
    }

    let fetcher = HttpFetcher::new(!args.strict_tls)?;
    let summary = Harvester::new(fetcher, settings).run()?;

    println!("\n📈 === HARVEST SUMMARY ===");
    println!("  • Polymer pages: {} ({} failed)", summary.polymers, summary.failed_polymers);
    println!("  • Enzyme entries: {}", summary.entries);
    if !args.dry_run {
        println!("  • Sequences resolved: {}", summary.resolved);
        println!("    - Swiss-Prot: {}", summary.swissprot);
        println!("    - TrEMBL: {}", summary.trembl);
        println!("  • Without sequence: {}", summary.missing);
    }
    if let (Some(metadata), Some(fasta)) = (&summary.metadata_path, &summary.fasta_path) {
        println!("📄 Metadata: {}", metadata.display());
        println!("🧬 Sequences: {}", fasta.display());
    }

    println!("\n✅ Harvest completed");
    Ok(())
}
