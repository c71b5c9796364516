//! pathway — runs the puck_path pipeline once and prints every stage.
//!
//! A random number of pucks (1–9) is scattered over a 480 × 480 board,
//! snapped to the nearest free parking spot, compacted toward the head of
//! the path, and worked on one at a time until the set is back in order.
//!
//! Environment:
//!
//! | Variable         | Effect                                             |
//! |------------------|----------------------------------------------------|
//! | `PATHWAY_SEED`   | RNG seed (default 42)                              |
//! | `PATHWAY_OUTPUT` | Directory for `puck_snapshots.csv` / `spot_snapshots.csv` |
//! | `PATHWAY_LOG`    | `debug`, `warn`, `error` (default `info`)          |
//! | `LOG_FORMAT`     | `json` for JSON log lines on stderr                |

mod trace;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pp_core::PathConfig;
use pp_output::{CsvWriter, PathOutputObserver};
use pp_sim::CoordinatorBuilder;

use trace::TracePrinter;

fn init_tracing() {
    let level = match std::env::var("PATHWAY_LOG").as_deref() {
        Ok("debug") => "debug",
        Ok("warn") | Ok("warning") => "warn",
        Ok("error") => "error",
        _ => "info",
    };
    let filter = EnvFilter::new(format!("pp_sim={level},pathway={level}"));

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr));
        let _ = subscriber.try_init();
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr));
        let _ = subscriber.try_init();
    }
}

fn config_from_env() -> Result<PathConfig> {
    let mut config = PathConfig::default();
    if let Ok(seed) = std::env::var("PATHWAY_SEED") {
        config.seed = seed
            .parse()
            .with_context(|| format!("PATHWAY_SEED must be an unsigned integer, got {seed:?}"))?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let config = config_from_env()?;
    println!("=== pathway — puck_path simulation ===");
    println!(
        "Seed: {}  |  Max pucks: {}  |  Board: 0..={}",
        config.seed, config.max_pucks, config.grid_extent
    );

    let output = match std::env::var_os("PATHWAY_OUTPUT").map(PathBuf::from) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            info!(dir = %dir.display(), "writing CSV trace");
            Some(PathOutputObserver::new(CsvWriter::new(&dir)?))
        }
        None => None,
    };

    let mut coordinator = CoordinatorBuilder::new(config).build()?;
    let mut printer = TracePrinter::new(output);

    let t0 = Instant::now();
    let summary = coordinator.run(&mut printer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = printer.output.as_mut().and_then(PathOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    println!("Run complete in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    info!(pucks = summary.pucks, processed = summary.processed, "done");
    Ok(())
}
