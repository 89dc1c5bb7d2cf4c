//! AI Simulator CLI - fast in-memory match simulation for AI tuning.
//!
//! Plays complete matches between configurable seats, rates every round,
//! and writes per-match metrics plus a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator, SimulatorError};
use std::time::Instant;
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat, SeatSpec};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory match simulator for AI tuning")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per match (2, 4 or 6)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Seat spec for all seats: `random` or `<personality>:<difficulty>`
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3", "seat4", "seat5"])]
    seats: Option<SeatSpec>,

    /// Seat spec for seat 0
    #[arg(long, default_value = "analytical:medium")]
    seat0: SeatSpec,

    /// Seat spec for seat 1
    #[arg(long, default_value = "analytical:medium")]
    seat1: SeatSpec,

    /// Seat spec for seat 2
    #[arg(long, default_value = "analytical:medium")]
    seat2: SeatSpec,

    /// Seat spec for seat 3
    #[arg(long, default_value = "analytical:medium")]
    seat3: SeatSpec,

    /// Seat spec for seat 4
    #[arg(long, default_value = "analytical:medium")]
    seat4: SeatSpec,

    /// Seat spec for seat 5
    #[arg(long, default_value = "analytical:medium")]
    seat5: SeatSpec,

    /// Run seed; every match derives its deal and engine seeds from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

impl Args {
    fn seat_specs(&self) -> Vec<SeatSpec> {
        match self.seats {
            Some(spec) => vec![spec; self.players],
            None => [
                self.seat0, self.seat1, self.seat2, self.seat3, self.seat4, self.seat5,
            ]
            .into_iter()
            .take(self.players)
            .collect(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    bisca::domain::rules::require_supported_players(args.players)?;
    let specs = args.seat_specs();
    let run_seed = args.seed.unwrap_or_else(rand::random);

    if args.show_output {
        info!("Starting AI simulator");
        info!(
            "Configuration: {} games, {} players, seed {}",
            args.games, args.players, run_seed
        );
        let seats: Vec<String> = specs.iter().map(ToString::to_string).collect();
        info!("Seats: {}", seats.join(", "));
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        match run_game(args.players, &specs, run_seed, game_num) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    run_seed,
                    &specs,
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!("Game {} completed: scores={:?}", game_num, result.final_scores);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (detail_path, csv_path) = output_writer.output_paths();
    let detail_path = detail_path.cloned();
    let csv_path = csv_path.cloned();

    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = detail_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }

        print_summary(&results, &specs, errors, elapsed, args.games);
    }

    Ok(())
}

fn run_game(
    players: usize,
    specs: &[SeatSpec],
    run_seed: u64,
    game_num: u32,
) -> Result<GameResult, SimulatorError> {
    let mut ais = Simulator::seats(specs, run_seed, game_num)?;
    Simulator::new(players, run_seed, game_num)?.simulate_game(&mut ais)
}

fn print_summary(
    results: &[GameResult],
    specs: &[SeatSpec],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut team_wins = [0u32; 2];
    let mut ties = 0u32;
    for result in results {
        match result.winning_team() {
            Some(team) => team_wins[usize::from(team)] += 1,
            None => ties += 1,
        }
    }
    let games = results.len() as f64;
    println!("\n=== Results by Team ===");
    for (team, wins) in team_wins.iter().enumerate() {
        println!(
            "Team {}: wins={} ({:.1}%)",
            team,
            wins,
            f64::from(*wins) / games * 100.0
        );
    }
    if ties > 0 {
        println!("Ties: {}", ties);
    }

    println!("\n=== Results by Seat ===");
    for (seat, spec) in specs.iter().enumerate() {
        let scores: Vec<i16> = results
            .iter()
            .filter_map(|r| r.final_scores.get(seat).copied())
            .collect();
        let avg = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / games;
        let min = scores.iter().min().copied().unwrap_or(0);
        let max = scores.iter().max().copied().unwrap_or(0);
        let avg_rating = results
            .iter()
            .filter_map(|r| r.stats.get(seat).copied().flatten())
            .map(|s| s.avg_rating)
            .sum::<f64>()
            / games;
        let switches = results
            .iter()
            .flat_map(|r| r.switches.iter())
            .filter(|s| usize::from(s.seat) == seat)
            .count();
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, avg rating={:.2}, switches={}",
            seat, spec, avg, min, max, avg_rating, switches
        );
    }
}
