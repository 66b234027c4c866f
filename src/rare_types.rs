/*
cargo run --bin rare_types

cargo run --bin rare_types -- \
    --input       data/main.json \
    --seed        42 \
    --normalize \
    --summary-out output/rare_types.json
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::io;
use std::path::PathBuf;

use rare_types::{group_by_rarity, load_records, report, write_summary, Summary};

const DEFAULT_INPUT: &str = "/storage/emulated/0/ITEM/main.json";

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "List every rarity in an item file with one random example ID")]
struct Args {
    // Item file: JSON array of objects with "Rare" and "Id"
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    // Seed the random picks (omit for a fresh pick every run)
    #[arg(long)]
    seed: Option<u64>,

    // Fold rarity spellings ("Purple+", "purple +") onto one label
    #[arg(long)]
    normalize: bool,

    // Also write the picks as JSON here
    #[arg(long, value_name = "PATH")]
    summary_out: Option<PathBuf>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging setup
    create_dir_all(&args.log_dir)
        .with_context(|| format!("could not create {:?}", args.log_dir))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = args.log_dir.join(format!("rare_types_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting rare_types");
    info!("Input file: {:?}", args.input);

    run(&args)?;

    info!("All done.");
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let records = load_records(&args.input)
        .with_context(|| format!("loading items from {:?}", args.input))?;
    let groups = group_by_rarity(&records, args.normalize);

    let mut rng: Box<dyn rand::RngCore> = match args.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let stdout = io::stdout();
    let samples = report(&groups, rng.as_mut(), &mut stdout.lock())?;
    for s in &samples {
        info!("{}: {} ids, picked {}", s.rare, s.count, s.example_id);
    }

    if let Some(path) = &args.summary_out {
        write_summary(path, &Summary::new(&args.input, &groups, &samples))?;
        info!("Wrote summary → {:?}", path);
    }
    Ok(())
}
