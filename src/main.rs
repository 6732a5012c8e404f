use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use mkjson::clock::SystemClock;
use mkjson::gen::Generator;
use mkjson::rfc3339::FormatOptions;
use mkjson::tz::SystemTz;

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

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the epoch")?
            .subsec_nanos() as u64
            | 1,
    };

    let options = FormatOptions {
        utc: cli.utc,
        use_system_timezone: !cli.no_system_timezone,
    };
    let tzdb = SystemTz::new();
    let mut generator = Generator::new(SystemClock, seed);
    let entry = generator
        .entry(cli.records, options, &tzdb)
        .context("failed to build observation entry")?;

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create output file at {}", path.display()))?;
            if cli.pretty {
                serde_json::to_writer_pretty(file, &entry)
            } else {
                serde_json::to_writer(file, &entry)
            }
            .with_context(|| format!("failed to write entry to {}", path.display()))?;
        }
        None => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&entry)
            } else {
                serde_json::to_string(&entry)
            }
            .context("failed to serialize entry")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
