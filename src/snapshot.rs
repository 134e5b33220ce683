#![cfg(feature = "std")]
//! Binary snapshots of a grid, for replaying or inspecting a game.

use crate::{common::GameError, grid::Grid};

/// Errors returned while encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot holds an invalid grid: {0}")]
    Invalid(#[from] GameError),
}

/// Serialize `grid` with bincode.
pub fn encode(grid: &Grid) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(grid)?)
}

/// Deserialize a grid and check its invariants before handing it out.
pub fn decode(bytes: &[u8]) -> Result<Grid, SnapshotError> {
    let grid: Grid = bincode::deserialize(bytes)?;
    grid.validate()?;
    Ok(grid)
}
