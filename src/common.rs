//! Common types: cell statuses, the tagged cell representation and errors.

use crate::ship::ShipId;

/// What is publicly known about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Placement scratch state; never seen once the grid is readied.
    Free,
    /// Not attacked yet.
    Untried,
    /// Attacked, no ship present.
    Miss,
    /// Attacked, struck a ship that is still afloat.
    Hit,
    /// Belongs to a ship whose every segment has been hit.
    Sunk,
}

/// One grid cell. The owning ship is carried only by the variants that can
/// have one, so a `Sunk` cell without a ship or a `Miss` on a ship cannot be
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Untried(Option<ShipId>),
    Miss,
    Hit(ShipId),
    Sunk(ShipId),
}

impl Cell {
    pub fn status(self) -> Status {
        match self {
            Cell::Free => Status::Free,
            Cell::Untried(_) => Status::Untried,
            Cell::Miss => Status::Miss,
            Cell::Hit(_) => Status::Hit,
            Cell::Sunk(_) => Status::Sunk,
        }
    }

    /// Ship occupying the cell, if any.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            Cell::Free | Cell::Miss => None,
            Cell::Untried(ship) => ship,
            Cell::Hit(ship) | Cell::Sunk(ship) => Some(ship),
        }
    }
}

/// Errors raised by the game core. All of them are contract violations:
/// a correctly driven game never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the grid.
    #[error("attack out of bounds at ({x}, {y})")]
    OutOfBounds { x: usize, y: usize },
    /// Cell was already resolved (or the grid is not readied yet).
    #[error("cell ({x}, {y}) was already attacked")]
    AlreadyTried { x: usize, y: usize },
    /// More turns than cells on the grid.
    #[error("turn overflow after {turns} turns")]
    TurnOverflow { turns: usize },
    /// Random placement exhausted its retry budget.
    #[error("no valid placement found for {ship}")]
    NoValidPlacement { ship: ShipId },
    /// Grid state breaks a bookkeeping invariant.
    #[error("corrupt grid: {0}")]
    Corrupt(&'static str),
}
