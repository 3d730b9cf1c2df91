// crossref.rs - Standalone utility matching PAZy sequences against PlasticDB

use std::path::Path;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};

use pazyscrape::crossref::{find_matches, IndexOptions, SequenceIndex};
use pazyscrape::output::write_crossref;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let matches = Command::new("pazy-crossref")
        .version(pazyscrape::VERSION)
        .about("Find matching sequences between PlasticDB and PAZy databases")
        .arg(Arg::new("plasticdb")
            .long("plasticdb")
            .value_name("FILE")
            .help("Path to PlasticDB FASTA file")
            .required(true))
        .arg(Arg::new("pazy")
            .long("pazy")
            .value_name("FILE")
            .help("Path to PAZy FASTA file")
            .required(true))
        .arg(Arg::new("output")
            .long("output")
            .value_name("FILE")
            .help("Path to output TSV file")
            .required(true))
        .arg(Arg::new("verify-exact")
            .long("verify-exact")
            .help("Verify exact sequence matches (more memory intensive)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("noduplicates")
            .long("noduplicates")
            .help("Remove duplicate sequences from PlasticDB (keeps only first occurrence)")
            .action(ArgAction::SetTrue))
        .get_matches();

    let plasticdb_path = required(&matches, "plasticdb")?;
    let pazy_path = required(&matches, "pazy")?;
    let output_path = required(&matches, "output")?;
    let options = IndexOptions {
        verify_exact: matches.get_flag("verify-exact"),
        no_duplicates: matches.get_flag("noduplicates"),
    };

    println!("🔬 PAZy / PlasticDB cross-reference");
    println!("===================================");
    println!("📂 PlasticDB: {}", plasticdb_path);
    println!("📂 PAZy: {}", pazy_path);
    println!();

    let start = Instant::now();
    let index = SequenceIndex::from_fasta(Path::new(plasticdb_path), options)?;
    println!(
        "✅ Indexed {} PlasticDB sequences ({} unique) in {:.2}s",
        index.total_records,
        index.unique_sequences(),
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let found = find_matches(&index, Path::new(pazy_path))?;
    println!("✅ Found {} matches in {:.2}s", found.len(), start.elapsed().as_secs_f64());

    write_crossref(Path::new(output_path), &found)?;
    Ok(())
}

fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> Result<&'a String, String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| format!("--{} is required", name))
}
