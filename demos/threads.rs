//! Drives one bar from a single thread, then from many threads at once.
//!
//! ```text
//! cargo run --example threads -- --threads 10 --iterations 100 --style hash
//! ```

use std::{thread, time::Duration};

use clap::Parser;
use fast_progress::{BarStyle, ProgressTracker};

#[derive(Debug, Parser)]
#[command(about = "Shared progress bar demo")]
struct Args {
    /// Worker threads in the multi-threaded run.
    #[arg(short, long, default_value_t = 10)]
    threads: u64,

    /// Units each worker completes.
    #[arg(short, long, default_value_t = 100)]
    iterations: u64,

    /// Simulated work per unit, in milliseconds.
    #[arg(short, long, default_value_t = 10)]
    delay_ms: u64,

    /// Fill style for the multi-threaded run (`equals`, `hash`, or an index).
    #[arg(short, long, default_value_t = BarStyle::Hash)]
    style: BarStyle,

    /// Print only the percentage.
    #[arg(long)]
    hide_bar: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let delay = Duration::from_millis(args.delay_ms);

    let bar = ProgressTracker::builder(100u64)
        .with_visible(!args.hide_bar)
        .build();

    println!("Test single thread:");
    for _ in 0..100 {
        bar.advance();
        thread::sleep(delay);
    }
    eprintln!();

    println!("Test multi thread:");
    bar.reset();
    bar.set_total(args.threads.saturating_mul(args.iterations));
    bar.set_bar_style(args.style);

    thread::scope(|s| {
        for _ in 0..args.threads {
            let bar = bar.clone();
            s.spawn(move || {
                for _ in 0..args.iterations {
                    bar.advance();
                    thread::sleep(delay);
                }
            });
        }
    });
    eprintln!();
}
