//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 runs, fresh hunter
//!   cargo run --bin simulate -- -l 30 --stat 120  # mid-game hunter
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use shadow_monarch::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, save_json) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HUNTER BALANCE SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Hunter Level:   {}", config.player_level);
    println!("  Stat Value:     {}", config.stat_value);
    println!("  Mana:           {}", config.mana);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if save_json {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                tracing::error!(%filename, error = %e, "failed to write JSON report");
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut save_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.player_level = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--stat" => {
                if i + 1 < args.len() {
                    config.stat_value = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-m" | "--mana" => {
                if i + 1 < args.len() {
                    config.mana = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                save_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--mid" => {
                config = SimConfig::mid_game();
            }
            "--late" => {
                config = SimConfig::late_game();
            }
            _ => {}
        }
        i += 1;
    }

    (config, save_json)
}

fn print_help() {
    println!("Hunter Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -l, --level <L>     Hunter level (default: 1)");
    println!("    --stat <V>          Value for every stat (default: 10)");
    println!("    -m, --mana <M>      Mana before each extraction (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs, fresh hunter)");
    println!("    --mid               Mid-game hunter (level 30)");
    println!("    --late              Late-game hunter (level 60)");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=shadow_monarch=debug to trace individual rolls.");
}
