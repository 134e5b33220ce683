//! Directional ray casting over the grid.

use crate::common::Status;
use crate::config::BOARD_SIZE;
use crate::grid::Grid;

/// Viewing direction from a cell. `x` grows to the right, `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit vector `(dx, dy)`.
    pub const fn vector(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Neighbor of `(x, y)` one step along this direction, if it is on the grid.
    pub fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.vector();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < BOARD_SIZE && ny < BOARD_SIZE).then_some((nx, ny))
    }
}

impl Grid {
    /// Count contiguous cells with `status`, starting at and including
    /// `(x, y)`, walking along `dir` until the edge or a different status.
    /// Returns 0 when `(x, y)` is off the grid.
    pub fn extent(&self, dir: Direction, x: usize, y: usize, status: Status) -> usize {
        let mut cursor = Some((x, y));
        let mut distance = 0;
        while let Some((cx, cy)) = cursor {
            if self.status(cx, cy) != Some(status) {
                break;
            }
            distance += 1;
            cursor = dir.step(cx, cy);
        }
        distance
    }

    /// Like [`Grid::extent`] but starting one cell away from `(x, y)`.
    pub fn extent_beyond(&self, dir: Direction, x: usize, y: usize, status: Status) -> usize {
        dir.step(x, y)
            .map_or(0, |(nx, ny)| self.extent(dir, nx, ny, status))
    }
}

