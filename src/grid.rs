//! Grid state: ship placement, attack resolution and sink bookkeeping.

use crate::common::{Cell, GameError, Status};
use crate::config::{BOARD_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS, SHIPS};
use crate::extent::Direction;
use crate::ship::ShipId;
use core::fmt;
use rand::Rng;

/// The N×N board plus per-ship health and turn bookkeeping.
///
/// Cells are indexed `[x][y]`; `x` is the column and `y` the row. A grid
/// starts cleared, receives its ships through [`Grid::place_ship`] or
/// [`Grid::load_random`], and is then mutated only by [`Grid::attack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Remaining segments per ship, `None` until the ship is placed.
    health: [Option<usize>; NUM_SHIPS],
    turns: usize,
    sink_turn: [Option<usize>; NUM_SHIPS],
}

impl Grid {
    /// Create a cleared grid: every cell `Free`, no ships placed.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Free; BOARD_SIZE]; BOARD_SIZE],
            health: [None; NUM_SHIPS],
            turns: 0,
            sink_turn: [None; NUM_SHIPS],
        }
    }

    /// Cell at `(x, y)`, or `None` off the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x).and_then(|col| col.get(y)).copied()
    }

    /// Public status of `(x, y)`, or `None` off the grid.
    pub fn status(&self, x: usize, y: usize) -> Option<Status> {
        self.cell(x, y).map(Cell::status)
    }

    /// Remaining health of `ship`, `None` if it was never placed.
    pub fn health(&self, ship: ShipId) -> Option<usize> {
        self.health[ship.index()]
    }

    /// Number of successful attacks so far.
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    /// Turn on which `ship` sank, if it has.
    pub fn sink_turn(&self, ship: ShipId) -> Option<usize> {
        self.sink_turn[ship.index()]
    }

    /// Sink turns in fleet order.
    pub fn sink_turns(&self) -> [Option<usize>; NUM_SHIPS] {
        self.sink_turn
    }

    /// `true` once no ship has health left. A grid with no ships placed
    /// counts as won.
    pub fn is_won(&self) -> bool {
        self.health.iter().all(|h| h.unwrap_or(0) == 0)
    }

    /// All cells with their coordinates, outer loop over `x`, inner over `y`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, col)| col.iter().enumerate().map(move |(y, &c)| (x, y, c)))
    }

    /// Coordinates occupied by `ship`.
    pub fn footprint(&self, ship: ShipId) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(move |&(_, _, c)| c.ship() == Some(ship))
            .map(|(x, y, _)| (x, y))
    }

    /// Place `ship` with its anchor at `(x, y)`, extending along `dir`.
    ///
    /// Returns `false` without touching the grid if the run of `Free` cells
    /// from the anchor is shorter than the ship, or the ship is already
    /// placed.
    #[must_use]
    pub fn place_ship(&mut self, dir: Direction, x: usize, y: usize, ship: ShipId) -> bool {
        let length = ship.length();
        if self.health(ship).is_some() || self.extent(dir, x, y, Status::Free) < length {
            return false;
        }
        let mut cursor = Some((x, y));
        for _ in 0..length {
            let Some((cx, cy)) = cursor else { break };
            self.cells[cx][cy] = Cell::Untried(Some(ship));
            cursor = dir.step(cx, cy);
        }
        self.health[ship.index()] = Some(length);
        true
    }

    /// Flip every remaining `Free` cell to `Untried`, ending placement.
    pub fn ready(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == Cell::Free {
                *cell = Cell::Untried(None);
            }
        }
    }

    /// Place the whole fleet at random non-overlapping positions, then ready
    /// the grid. Expects a cleared grid.
    ///
    /// Each ship draws an anchor in `[0, N - length]²` and a direction
    /// (right or down) until one fits.
    pub fn load_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for ship in SHIPS {
            let anchor = BOARD_SIZE - ship.length() + 1;
            let mut placed = false;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let x = rng.random_range(0..anchor);
                let y = rng.random_range(0..anchor);
                let dir = if rng.random() {
                    Direction::Right
                } else {
                    Direction::Down
                };
                if self.place_ship(dir, x, y, ship) {
                    tracing::trace!(%ship, x, y, ?dir, "placed ship");
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(GameError::NoValidPlacement { ship });
            }
        }
        self.ready();
        Ok(())
    }

    /// Attack `(x, y)` and report what was there.
    ///
    /// Only `Untried` cells can be attacked. A hit that takes the owning
    /// ship's health to zero turns all of its cells `Sunk` and records the
    /// sink turn.
    pub fn attack(&mut self, x: usize, y: usize) -> Result<Status, GameError> {
        let cell = self.cell(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        let Cell::Untried(owner) = cell else {
            return Err(GameError::AlreadyTried { x, y });
        };
        self.turns += 1;

        let Some(ship) = owner else {
            self.cells[x][y] = Cell::Miss;
            tracing::debug!(x, y, turn = self.turns, "miss");
            return Ok(Status::Miss);
        };

        self.cells[x][y] = Cell::Hit(ship);
        let health = &mut self.health[ship.index()];
        let remaining = health.unwrap_or(0).saturating_sub(1);
        *health = Some(remaining);
        if remaining > 0 {
            tracing::debug!(x, y, turn = self.turns, %ship, remaining, "hit");
            return Ok(Status::Hit);
        }

        for cell in self.cells.iter_mut().flatten() {
            if cell.ship() == Some(ship) {
                *cell = Cell::Sunk(ship);
            }
        }
        self.sink_turn[ship.index()] = Some(self.turns);
        tracing::debug!(x, y, turn = self.turns, %ship, "sunk");
        Ok(Status::Sunk)
    }

    /// Check the bookkeeping invariants tying cells, health, sink turns and
    /// the turn counter together.
    pub fn validate(&self) -> Result<(), GameError> {
        let resolved = self
            .iter()
            .filter(|&(_, _, c)| matches!(c, Cell::Miss | Cell::Hit(_) | Cell::Sunk(_)))
            .count();
        if resolved != self.turns {
            return Err(GameError::Corrupt("turn count differs from resolved cells"));
        }
        if resolved > 0 && self.iter().any(|(_, _, c)| c == Cell::Free) {
            return Err(GameError::Corrupt("free cells on an attacked grid"));
        }

        for ship in SHIPS {
            let idx = ship.index();
            let Some(health) = self.health[idx] else {
                if self.footprint(ship).next().is_some() || self.sink_turn[idx].is_some() {
                    return Err(GameError::Corrupt("unplaced ship has cells or a sink turn"));
                }
                continue;
            };

            let length = ship.length();
            let (mut count, mut hits, mut sunk) = (0, 0, 0);
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (BOARD_SIZE, BOARD_SIZE, 0, 0);
            for (x, y, cell) in self.iter().filter(|&(_, _, c)| c.ship() == Some(ship)) {
                count += 1;
                match cell {
                    Cell::Hit(_) => hits += 1,
                    Cell::Sunk(_) => {
                        hits += 1;
                        sunk += 1;
                    }
                    _ => {}
                }
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }

            if count != length {
                return Err(GameError::Corrupt("ship footprint has the wrong size"));
            }
            let span = (max_x - min_x, max_y - min_y);
            if span != (length - 1, 0) && span != (0, length - 1) {
                return Err(GameError::Corrupt("ship footprint is not a straight line"));
            }
            if health.checked_add(hits) != Some(length) {
                return Err(GameError::Corrupt("health does not match hits"));
            }
            match (health, self.sink_turn[idx]) {
                (0, Some(turn)) if sunk == length && turn <= self.turns => {}
                (0, _) => return Err(GameError::Corrupt("sunk ship is inconsistent")),
                (_, None) if sunk == 0 => {}
                _ => return Err(GameError::Corrupt("afloat ship has sunk cells or a sink turn")),
            }
        }
        Ok(())
    }

    /// Display adapter showing where each ship sits.
    pub fn ships(&self) -> ShipMap<'_> {
        ShipMap(self)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn status_symbol(status: Status) -> char {
    match status {
        Status::Free => '~',
        Status::Untried => '.',
        Status::Miss => 'o',
        Status::Hit => 'X',
        Status::Sunk => '#',
    }
}

fn write_rows<F>(f: &mut fmt::Formatter<'_>, mut symbol: F) -> fmt::Result
where
    F: FnMut(usize, usize) -> char,
{
    write!(f, "   ")?;
    for x in 0..BOARD_SIZE {
        write!(f, " {}", (b'A' + x as u8) as char)?;
    }
    for y in 0..BOARD_SIZE {
        writeln!(f)?;
        write!(f, "{:2} ", y + 1)?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", symbol(x, y))?;
        }
    }
    Ok(())
}

/// Public view: `.` untried, `o` miss, `X` hit, `#` sunk.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, |x, y| status_symbol(self.cells[x][y].status()))
    }
}

/// Hidden view of ship placement, one letter per ship.
pub struct ShipMap<'a>(&'a Grid);

impl fmt::Display for ShipMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, |x, y| self.0.cells[x][y].ship().map_or('.', ShipId::symbol))
    }
}
