#![cfg(feature = "std")]
//! Batch driver: plays many independent games and records their statistics.

use crate::{
    ai,
    common::GameError,
    config::SHIPS,
    game::{Game, GameOutcome},
    ui,
};
use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// First line of the CSV output: total turns, then each ship's sink turn.
pub const CSV_HEADER: &str = "Turn,Carrier,Battleship,Submarine,Cruiser,Destroyer";

/// CSV value for a ship that never sank.
pub const SINK_TURN_INVALID: i64 = -1;

/// Immutable settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`. Random when `None`.
    pub seed: Option<u64>,
    /// Games played in parallel.
    pub workers: usize,
    /// CSV destination, stdout when `None`.
    pub csv_path: Option<PathBuf>,
    /// Per-turn board dump, skipped when `None`.
    pub game_log: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1,
            seed: None,
            workers: 1,
            csv_path: None,
            game_log: None,
        }
    }
}

/// Result of one played game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Zero-based position in the batch.
    pub index: usize,
    pub seed: u64,
    pub outcome: GameOutcome,
    /// Text of the game log, when one was requested.
    pub log: Option<String>,
}

impl GameRecord {
    /// CSV row matching [`CSV_HEADER`].
    pub fn csv_row(&self) -> String {
        let mut row = format!("{}", self.outcome.turns);
        for ship in SHIPS {
            let turn = self.outcome.sink_turns[ship.index()].map_or(SINK_TURN_INVALID, |t| t as i64);
            let _ = write!(row, ",{}", turn);
        }
        row
    }
}

/// Aggregate turn statistics over a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub seed: u64,
    pub mean_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
}

impl Summary {
    fn from_records(seed: u64, records: &[GameRecord]) -> Self {
        let turns = records.iter().map(|r| r.outcome.turns);
        let total: usize = turns.clone().sum();
        Summary {
            games: records.len(),
            seed,
            mean_turns: total as f64 / records.len().max(1) as f64,
            min_turns: turns.clone().min().unwrap_or(0),
            max_turns: turns.max().unwrap_or(0),
        }
    }
}

/// Play game number `index` from `seed`, optionally capturing a log with the
/// ship map and the board after every turn.
pub fn play_one(index: usize, seed: u64, capture_log: bool) -> Result<GameRecord, GameError> {
    let mut game = Game::seeded(seed)?;
    let mut log = capture_log.then(|| {
        format!(
            "# Game {}\nseed: {}\n{}\n\n",
            index + 1,
            seed,
            game.grid().ships()
        )
    });

    let outcome = game.run_with(|grid, result| {
        tracing::trace!(
            turn = grid.turn_count(),
            ?result,
            "scores:\n{}",
            ui::format_score_board(&ai::score_board(grid))
        );
        if let Some(log) = log.as_mut() {
            let _ = write!(log, "## Turn {}\n{}\n\n", grid.turn_count(), grid);
        }
    })?;
    tracing::debug!(game = index + 1, turns = outcome.turns, "game finished");

    Ok(GameRecord {
        index,
        seed,
        outcome,
        log,
    })
}

/// Play the whole batch, spread over `config.workers` blocking tasks, and
/// write the CSV (and game log) in game order.
pub async fn run(config: &SimConfig) -> anyhow::Result<Summary> {
    anyhow::ensure!(config.games > 0, "number of games must be at least 1");
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let games = config.games;
    let workers = config.workers.clamp(1, games);
    let capture_log = config.game_log.is_some();
    tracing::info!(games, workers, seed = base_seed, "starting batch");

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        handles.push(tokio::task::spawn_blocking(move || {
            (worker..games)
                .step_by(workers)
                .map(|index| {
                    let seed = base_seed.wrapping_add(index as u64);
                    play_one(index, seed, capture_log)
                        .with_context(|| format!("game {} (seed {}) failed", index + 1, seed))
                })
                .collect::<anyhow::Result<Vec<_>>>()
        }));
    }

    let mut records = Vec::with_capacity(games);
    for handle in handles {
        records.extend(handle.await.context("game worker panicked")??);
    }
    records.sort_by_key(|r| r.index);

    write_csv(config.csv_path.as_deref(), &records)?;
    if let Some(path) = config.game_log.as_deref() {
        write_game_log(path, &records)?;
    }

    let summary = Summary::from_records(base_seed, &records);
    tracing::info!(
        games = summary.games,
        mean_turns = summary.mean_turns,
        min_turns = summary.min_turns,
        max_turns = summary.max_turns,
        "batch finished"
    );
    Ok(summary)
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open \"{}\"", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

/// Write the CSV header and one row per record.
pub fn write_csv(path: Option<&Path>, records: &[GameRecord]) -> anyhow::Result<()> {
    let mut out = open_output(path)?;
    writeln!(out, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(out, "{}", record.csv_row())?;
    }
    out.flush()?;
    Ok(())
}

fn write_game_log(path: &Path, records: &[GameRecord]) -> anyhow::Result<()> {
    let mut out = open_output(Some(path))?;
    for log in records.iter().filter_map(|r| r.log.as_deref()) {
        out.write_all(log.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
