/*
cargo run --bin split_half

cargo run --bin split_half -- \
    -i wildfire_data_5.json \
    -a wildfire_data_5part_1.json \
    -b wildfire_data_5part_2.json
*/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

// Split a JSON array file into two contiguous halves.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    // Input JSON file containing a top-level array
    #[arg(short, long, default_value = "wildfire_data_5.json")]
    input: PathBuf,

    // Output file for the first half ("A")
    #[arg(short = 'a', long, default_value = "wildfire_data_5part_1.json")]
    output_a: PathBuf,

    // Output file for the second half ("B")
    #[arg(short = 'b', long, default_value = "wildfire_data_5part_2.json")]
    output_b: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Read input JSON
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} must be a JSON array", args.input.display()))?;
    info!("Loaded {} record(s) from {}", records.len(), args.input.display());

    // Split at the midpoint; the odd element (if any) goes to part B
    let mid = records.len() / 2;
    let (part_a, part_b) = records.split_at(mid);
    info!("Split sizes: a={} b={}", part_a.len(), part_b.len());

    write_part(part_a, &args.output_a)?;
    write_part(part_b, &args.output_b)?;

    // Stat both outputs only after both writes completed
    let size_a = file_size_mb(&args.output_a)?;
    let size_b = file_size_mb(&args.output_b)?;

    println!("✅ Split completed:");
    println!("- {}: {:.2} MB", args.output_a.display(), size_a);
    println!("- {}: {:.2} MB", args.output_b.display(), size_b);

    Ok(())
}

// Pretty-print with 4-space indentation (to_string_pretty uses 2)
fn to_pretty(slice: &[Value]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    slice.serialize(&mut ser)?;
    Ok(buf)
}

fn write_part(slice: &[Value], path: &Path) -> Result<()> {
    fs::write(path, to_pretty(slice)?)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {} record(s) to {}", slice.len(), path.display());
    Ok(())
}

fn file_size_mb(path: &Path) -> Result<f64> {
    let bytes = fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    Ok(bytes as f64 / (1024.0 * 1024.0))
}
