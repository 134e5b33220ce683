// Targeting heuristic for the automated attacker.
// Uses no_std and avoids heap allocations.

use crate::{
    common::{GameError, Status},
    config::{BOARD_SIZE, SHIPS, TURN_MAX},
    extent::Direction,
    grid::Grid,
};

const GRID_SIZE: usize = BOARD_SIZE;

/// Bonus per adjacent hit. Exceeds any score a cell can earn from open
/// space alone, so cells next to a hit always win.
const NEAR_WEIGHT: usize = GRID_SIZE * GRID_SIZE;

/// Smallest contiguous run a remaining ship could still need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest ship not hit yet; `usize::MAX` if every afloat ship is hit.
    pub full: usize,
    /// Smallest fragment bound among hit ships, never above `full`.
    pub partial: usize,
}

/// Lower bound on the unresolved fragment of a ship of `length` with
/// `health` segments left: `max(1, floor(log2(length - health)))`.
///
/// This is a fixed heuristic and must stay exactly as written; turn-count
/// statistics depend on it.
pub fn fragment_bound(length: usize, health: usize) -> usize {
    let hits = length.saturating_sub(health);
    (libm::log2(hits as f64) as usize).max(1)
}

/// Compute the full and partial minimum lengths over the ships still afloat.
pub fn length_bounds(grid: &Grid) -> LengthBounds {
    let mut full = usize::MAX;
    let mut partial = usize::MAX;
    for ship in SHIPS {
        let Some(health) = grid.health(ship).filter(|&h| h > 0) else {
            continue;
        };
        let length = ship.length();
        if health < length {
            partial = partial.min(fragment_bound(length, health));
        } else {
            full = full.min(length);
            partial = partial.min(full);
        }
    }
    LengthBounds { full, partial }
}

/// Score one cell. Zero for resolved cells and for cells no remaining ship
/// can reach.
///
/// Open runs through the cell score `left*right + up*down`, which favours
/// bisecting an unknown run over probing its edge. Each hit lined up next to
/// the cell adds [`NEAR_WEIGHT`].
pub fn score_cell(grid: &Grid, bounds: LengthBounds, x: usize, y: usize) -> usize {
    if grid.status(x, y) != Some(Status::Untried) {
        return 0;
    }
    let [view_left, view_right, view_up, view_down] =
        Direction::ALL.map(|dir| grid.extent(dir, x, y, Status::Untried));
    let [near_left, near_right, near_up, near_down] =
        Direction::ALL.map(|dir| grid.extent_beyond(dir, x, y, Status::Hit));

    let near_horizontal = near_left + near_right;
    let near_vertical = near_up + near_down;
    let fits = |view: usize, near: usize| {
        let min = if near > 0 { bounds.partial } else { bounds.full };
        // view > min - near, kept in unsigned arithmetic
        view + near > min
    };
    let horizontal = fits(view_left + view_right, near_horizontal);
    let vertical = fits(view_up + view_down, near_vertical);
    if !horizontal && !vertical {
        return 0;
    }

    view_left * view_right + view_up * view_down + (near_horizontal + near_vertical) * NEAR_WEIGHT
}

/// Score matrix over the whole grid, indexed `[x][y]`.
pub fn score_board(grid: &Grid) -> [[usize; GRID_SIZE]; GRID_SIZE] {
    let bounds = length_bounds(grid);
    let mut board = [[0usize; GRID_SIZE]; GRID_SIZE];
    for (x, col) in board.iter_mut().enumerate() {
        for (y, score) in col.iter_mut().enumerate() {
            *score = score_cell(grid, bounds, x, y);
        }
    }
    board
}

/// Pick the untried cell with the strictly highest score. Ties go to the
/// first cell in scan order (outer `x`, inner `y`). Returns `None` only when
/// no untried cell is left.
pub fn select_target(grid: &Grid) -> Option<(usize, usize)> {
    let bounds = length_bounds(grid);
    let mut best: Option<(usize, usize, usize)> = None;
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if grid.status(x, y) != Some(Status::Untried) {
                continue;
            }
            let score = score_cell(grid, bounds, x, y);
            if best.map_or(true, |(top, _, _)| score > top) {
                best = Some((score, x, y));
            }
        }
    }
    let (score, x, y) = best?;
    tracing::trace!(x, y, score, ?bounds, "selected target");
    Some((x, y))
}

/// Choose a target and attack it. Any attack failure means the engine picked
/// an illegal cell and is returned as is.
pub fn play_turn(grid: &mut Grid) -> Result<Status, GameError> {
    play_turn_with(grid, select_target)
}

/// Run one turn with targets chosen by `pick`. Refuses to go past
/// [`TURN_MAX`] turns, and treats `pick` returning `None` the same way.
pub fn play_turn_with<F>(grid: &mut Grid, pick: F) -> Result<Status, GameError>
where
    F: FnOnce(&Grid) -> Option<(usize, usize)>,
{
    let turns = grid.turn_count();
    if turns >= TURN_MAX {
        return Err(GameError::TurnOverflow { turns });
    }
    let (x, y) = pick(grid).ok_or(GameError::TurnOverflow { turns })?;
    grid.attack(x, y)
}
