use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use atlas_pack_core::{PackItem, PackJob, PackOutput, PackRequest, pack};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "atlas-pack",
    about = "Lay out rectangular items across fixed-size atlas pages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON item manifest into page layouts
    Pack(PackArgs),
    /// Simple timing bench (packs a random item set once, prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input manifest: JSON array of {id, width, height} records
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file for the page layouts (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// Page side length
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    page_size: u32,
    /// Spacing reserved around each item
    #[arg(long, default_value_t = 2, help_heading = "Layout")]
    padding: u32,
    /// Run the pack on a background worker and wait for its reply
    #[arg(long, default_value_t = false, help_heading = "Execution")]
    background: bool,
    /// Exit nonzero when any item ends up oversized or dropped
    #[arg(long, default_value_t = false, help_heading = "Execution")]
    strict: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random items to generate
    #[arg(long, default_value_t = 500)]
    items: usize,
    /// Smallest generated item side
    #[arg(long, default_value_t = 8)]
    min_size: u32,
    /// Largest generated item side
    #[arg(long, default_value_t = 256)]
    max_size: u32,
    /// Page side length
    #[arg(long, default_value_t = 1024)]
    page_size: u32,
    /// Spacing reserved around each item
    #[arg(long, default_value_t = 2)]
    padding: u32,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(cli: &PackArgs) -> anyhow::Result<()> {
    let manifest = fs::read_to_string(&cli.input)
        .with_context(|| format!("read {}", cli.input.display()))?;
    let items: Vec<PackItem> = serde_json::from_str(&manifest)
        .with_context(|| format!("parse {}", cli.input.display()))?;
    info!(count = items.len(), "loaded item manifest");

    let out = if cli.background {
        let request = PackRequest::new(items, cli.page_size, cli.padding);
        match PackJob::spawn(request).wait().into_result() {
            Ok(out) => out,
            Err(error) => anyhow::bail!("background pack failed: {}", error),
        }
    } else {
        pack(&items, cli.page_size, cli.padding)?
    };

    report(&out);

    let json = serde_json::to_string_pretty(&out)?;
    match &cli.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, pages = out.pages.len(), "layout written");
        }
        None => println!("{}", json),
    }

    if cli.strict && !(out.oversized.is_empty() && out.dropped.is_empty()) {
        anyhow::bail!(
            "strict mode: {} oversized, {} dropped",
            out.oversized.len(),
            out.dropped.len()
        );
    }
    Ok(())
}

fn report(out: &PackOutput) {
    if !out.oversized.is_empty() {
        warn!(
            count = out.oversized.len(),
            ids = ?out.oversized,
            "items larger than the page were excluded"
        );
    }
    if !out.dropped.is_empty() {
        warn!(
            count = out.dropped.len(),
            ids = ?out.dropped,
            "packing stalled; remaining items were dropped"
        );
    }
    let stats = out.stats();
    info!(
        pages = stats.num_pages,
        placements = stats.num_placements,
        used_area = stats.used_area,
        total_area = stats.total_page_area,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "stats"
    );
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::prelude::*;
    use std::time::Instant;

    anyhow::ensure!(
        b.min_size > 0 && b.min_size <= b.max_size,
        "min_size must be in 1..=max_size"
    );
    let mut rng = StdRng::seed_from_u64(b.seed);
    let items: Vec<PackItem> = (0..b.items)
        .map(|i| {
            let w = rng.gen_range(b.min_size..=b.max_size);
            let h = rng.gen_range(b.min_size..=b.max_size);
            PackItem::new(i as u64, w, h)
        })
        .collect();

    let start = Instant::now();
    let out = pack(&items, b.page_size, b.padding)?;
    let dur = start.elapsed();
    let stats = out.stats();
    println!(
        "pages={} occupancy={:.2}% time={}",
        stats.num_pages,
        stats.occupancy * 100.0,
        bench_fmt_dur(dur)
    );
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
