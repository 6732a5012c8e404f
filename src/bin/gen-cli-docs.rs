use clap::Parser;
use clap_markdown::help_markdown;
use std::path::PathBuf;

/// Emit a synthetic passive-DNS observation entry as JSON
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of DNS records to generate (random up to 20000 when omitted)
    #[arg(short = 'n', long = "records", value_name = "COUNT")]
    records: Option<usize>,
    /// Seed for the random stream; same seed, same entry
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Normalize timestamps to UTC and render them with the "Z" marker
    #[arg(long)]
    utc: bool,
    /// Assume UTC for the timestamps instead of consulting the system timezone
    #[arg(long)]
    no_system_timezone: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
    /// Write the entry to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    // Print header
    println!("# mkjson CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `mkjson` command-line interface.");
    println!();

    // Generate and print the markdown using the type parameter
    println!("{}", help_markdown::<Cli>());
}
