#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_sim::{init_logging, sim, SimConfig};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Play automated single-player Battleship games and record turn statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of games to play.
    #[arg(short = 'n', long, default_value_t = 1)]
    games: usize,

    /// Write CSV data to this file instead of stdout.
    #[arg(short = 'o', long = "output", short_alias = 'l')]
    output: Option<PathBuf>,

    /// Write the board after every turn of every game to this file.
    #[arg(short = 'g', long = "game-log", short_alias = 'd')]
    game_log: Option<PathBuf>,

    #[arg(short, long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Games played in parallel [default: available cores].
    #[arg(short, long)]
    workers: Option<usize>,

    /// Print a JSON summary of the batch to stderr when done.
    #[arg(long)]
    summary: bool,
}

#[cfg(feature = "std")]
impl Cli {
    fn into_config(self) -> SimConfig {
        let workers = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        });
        SimConfig {
            games: self.games,
            seed: self.seed,
            workers,
            csv_path: self.output,
            game_log: self.game_log,
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let print_summary = cli.summary;
    let config = cli.into_config();

    let summary = sim::run(&config).await?;
    if print_summary {
        eprintln!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
