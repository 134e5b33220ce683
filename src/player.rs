use crate::{ai, common::GameError, grid::Grid};
use rand::Rng;

/// Interface implemented by the different kinds of attacker.
pub trait Player {
    /// Place the whole fleet onto a cleared grid and ready it.
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &mut Grid) -> Result<(), GameError>;

    /// Choose the next cell to attack from the public state of `grid`.
    fn select_target(&mut self, grid: &Grid) -> Option<(usize, usize)>;
}

/// Attacker driven by the scoring heuristic in [`crate::ai`], with uniform
/// random placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &mut Grid) -> Result<(), GameError> {
        grid.load_random(rng)
    }

    fn select_target(&mut self, grid: &Grid) -> Option<(usize, usize)> {
        ai::select_target(grid)
    }
}
