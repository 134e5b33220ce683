use crate::{
    ai,
    common::{GameError, Status},
    config::NUM_SHIPS,
    grid::Grid,
    player::{AiPlayer, Player},
};
use rand::{rngs::SmallRng, SeedableRng};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Turn statistics of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub turns: usize,
    /// Sink turn per ship in fleet order.
    pub sink_turns: [Option<usize>; NUM_SHIPS],
}

/// One single-player game: a grid owned by one attacker from placement
/// until every ship is sunk.
pub struct Game<P: Player = AiPlayer> {
    grid: Grid,
    player: P,
}

impl Game<AiPlayer> {
    /// Create a game with a fleet placed from `seed`. The same seed always
    /// yields the same placement and, with the deterministic engine, the
    /// same game.
    pub fn seeded(seed: u64) -> Result<Self, GameError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::with_player(AiPlayer::new());
        game.place_ships(&mut rng)?;
        Ok(game)
    }
}

impl<P: Player> Game<P> {
    /// Create a game on a cleared grid. Ships still need placing.
    pub fn with_player(player: P) -> Self {
        Self {
            grid: Grid::new(),
            player,
        }
    }

    /// Start from an already prepared grid.
    pub fn from_grid(grid: Grid, player: P) -> Self {
        Self { grid, player }
    }

    /// Let the player place its fleet using `rng`.
    pub fn place_ships<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.player.place_ships(rng, &mut self.grid)
    }

    /// Immutable reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.grid.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Play a single turn: ask the player for a target and attack it.
    pub fn step(&mut self) -> Result<Status, GameError> {
        let player = &mut self.player;
        ai::play_turn_with(&mut self.grid, |grid| player.select_target(grid))
    }

    /// Play until every ship is sunk.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        self.run_with(|_, _| {})
    }

    /// Play until every ship is sunk, calling `on_turn` after each attack.
    pub fn run_with<F>(&mut self, mut on_turn: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&Grid, Status),
    {
        while self.status() == GameStatus::InProgress {
            let result = self.step()?;
            on_turn(&self.grid, result);
        }
        let outcome = GameOutcome {
            turns: self.grid.turn_count(),
            sink_turns: self.grid.sink_turns(),
        };
        tracing::debug!(turns = outcome.turns, "game won");
        Ok(outcome)
    }
}
