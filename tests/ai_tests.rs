use battleship_sim::{
    fragment_bound, length_bounds, play_turn, play_turn_with, score_board, score_cell, select_target, Direction,
    GameError, Grid, LengthBounds, ShipId, Status, BOARD_SIZE, SHIPS, TURN_MAX,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Same layout as the grid tests: Carrier (0..5, 0), Battleship (0..4, 2),
/// Submarine (0, 4..7), Cruiser (5, 5..8), Destroyer (8..10, 8).
fn fixed_grid() -> Grid {
    let mut grid = Grid::new();
    assert!(grid.place_ship(Direction::Right, 0, 0, ShipId::Carrier));
    assert!(grid.place_ship(Direction::Right, 0, 2, ShipId::Battleship));
    assert!(grid.place_ship(Direction::Down, 0, 4, ShipId::Submarine));
    assert!(grid.place_ship(Direction::Down, 5, 5, ShipId::Cruiser));
    assert!(grid.place_ship(Direction::Right, 8, 8, ShipId::Destroyer));
    grid.ready();
    grid
}

fn sink(grid: &mut Grid, ship: ShipId) {
    let cells: Vec<_> = grid
        .footprint(ship)
        .filter(|&(x, y)| grid.status(x, y) == Some(Status::Untried))
        .collect();
    for (x, y) in cells {
        grid.attack(x, y).unwrap();
    }
    assert_eq!(grid.health(ship), Some(0));
}

fn longest_run(grid: &Grid, x: usize, y: usize) -> usize {
    let horizontal = grid.extent(Direction::Left, x, y, Status::Untried)
        + grid.extent(Direction::Right, x, y, Status::Untried)
        - 1;
    let vertical = grid.extent(Direction::Up, x, y, Status::Untried)
        + grid.extent(Direction::Down, x, y, Status::Untried)
        - 1;
    horizontal.max(vertical)
}

fn next_to_hit(grid: &Grid, x: usize, y: usize) -> bool {
    Direction::ALL
        .iter()
        .filter_map(|d| d.step(x, y))
        .any(|(nx, ny)| grid.status(nx, ny) == Some(Status::Hit))
}

#[test]
fn test_fragment_bound_uses_hit_count() {
    // second argument is the remaining health
    assert_eq!(fragment_bound(5, 4), 1);
    assert_eq!(fragment_bound(5, 3), 1);
    assert_eq!(fragment_bound(5, 2), 1);
    assert_eq!(fragment_bound(5, 1), 2);
    assert_eq!(fragment_bound(4, 1), 1);
    assert_eq!(fragment_bound(2, 1), 1);
}

#[test]
fn test_single_hit_carrier_bound() {
    let mut grid = Grid::new();
    assert!(grid.place_ship(Direction::Right, 0, 0, ShipId::Carrier));
    grid.ready();
    assert_eq!(grid.attack(0, 0).unwrap(), Status::Hit);
    assert_eq!(
        length_bounds(&grid),
        LengthBounds { full: usize::MAX, partial: 1 }
    );

    for x in 1..4 {
        grid.attack(x, 0).unwrap();
    }
    // four hits, one segment left: floor(log2(4))
    assert_eq!(
        length_bounds(&grid),
        LengthBounds { full: usize::MAX, partial: 2 }
    );
}

#[test]
fn test_length_bounds_track_fleet() {
    let mut grid = fixed_grid();
    assert_eq!(length_bounds(&grid), LengthBounds { full: 2, partial: 2 });

    // one hit on the carrier: fragment bound 1
    grid.attack(0, 0).unwrap();
    assert_eq!(length_bounds(&grid), LengthBounds { full: 2, partial: 1 });

    // two hits: still 1
    grid.attack(1, 0).unwrap();
    assert_eq!(length_bounds(&grid), LengthBounds { full: 2, partial: 1 });

    sink(&mut grid, ShipId::Destroyer);
    assert_eq!(length_bounds(&grid), LengthBounds { full: 3, partial: 1 });

    sink(&mut grid, ShipId::Carrier);
    assert_eq!(length_bounds(&grid), LengthBounds { full: 3, partial: 3 });

    for ship in [ShipId::Battleship, ShipId::Submarine, ShipId::Cruiser] {
        sink(&mut grid, ship);
    }
    assert_eq!(
        length_bounds(&grid),
        LengthBounds { full: usize::MAX, partial: usize::MAX }
    );
}

#[test]
fn test_partial_never_exceeds_full() {
    for seed in 0..32 {
        let mut grid = Grid::new();
        grid.load_random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        while !grid.is_won() {
            let bounds = length_bounds(&grid);
            assert!(bounds.partial <= bounds.full);
            play_turn(&mut grid).unwrap();
        }
    }
}

#[test]
fn test_open_grid_scores() {
    let grid = fixed_grid();
    let bounds = length_bounds(&grid);
    // corner: 1*10 + 1*10
    assert_eq!(score_cell(&grid, bounds, 0, 0), 20);
    // centre: 5*6 + 5*6
    assert_eq!(score_cell(&grid, bounds, 4, 4), 60);
    assert_eq!(score_cell(&grid, bounds, 5, 5), 60);
    assert_eq!(score_cell(&grid, bounds, BOARD_SIZE, 0), 0);
}

#[test]
fn test_first_target_breaks_ties_in_scan_order() {
    for seed in [0, 7, 42, 1234] {
        let mut grid = Grid::new();
        grid.load_random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        // (4,4), (4,5), (5,4) and (5,5) tie; outer loop is x, inner is y
        assert_eq!(select_target(&grid), Some((4, 4)));
    }
}

#[test]
fn test_resolved_cells_score_zero() {
    let mut grid = fixed_grid();
    grid.attack(4, 4).unwrap();
    let board = score_board(&grid);
    assert_eq!(board[4][4], 0);
    assert_eq!(board[0][0], score_cell(&grid, length_bounds(&grid), 0, 0));
}

#[test]
fn test_pursues_hit() {
    let mut grid = fixed_grid();
    assert_eq!(grid.attack(8, 8).unwrap(), Status::Hit);
    let bounds = length_bounds(&grid);

    assert_eq!(score_cell(&grid, bounds, 7, 8), 8 + 18 + 100);
    assert_eq!(score_cell(&grid, bounds, 9, 8), 1 + 18 + 100);
    assert_eq!(score_cell(&grid, bounds, 8, 7), 18 + 8 + 100);
    assert_eq!(score_cell(&grid, bounds, 8, 9), 18 + 1 + 100);
    assert_eq!(select_target(&grid), Some((7, 8)));

    assert_eq!(play_turn(&mut grid).unwrap(), Status::Miss);
    assert_eq!(select_target(&grid), Some((8, 7)));
    assert_eq!(play_turn(&mut grid).unwrap(), Status::Miss);
    // (9,8) and (8,9) both score 119 now; x = 8 comes first
    assert_eq!(select_target(&grid), Some((8, 9)));
    assert_eq!(play_turn(&mut grid).unwrap(), Status::Miss);
    assert_eq!(play_turn(&mut grid).unwrap(), Status::Sunk);
    assert_eq!(grid.sink_turn(ShipId::Destroyer), Some(5));
}

#[test]
fn test_only_destroyer_left() {
    let mut grid = fixed_grid();
    for ship in [ShipId::Carrier, ShipId::Battleship, ShipId::Submarine, ShipId::Cruiser] {
        sink(&mut grid, ship);
    }
    // isolate the top-right corner
    assert_eq!(grid.attack(8, 0).unwrap(), Status::Miss);
    assert_eq!(grid.attack(9, 1).unwrap(), Status::Miss);
    let bounds = length_bounds(&grid);
    assert_eq!(bounds, LengthBounds { full: 2, partial: 2 });
    assert_eq!(score_cell(&grid, bounds, 9, 0), 0);

    while !grid.is_won() {
        let bounds = length_bounds(&grid);
        let (x, y) = select_target(&grid).unwrap();
        let hunting = grid.iter().any(|(cx, cy, c)| {
            c.status() == Status::Untried && next_to_hit(&grid, cx, cy)
        });
        if hunting {
            assert!(next_to_hit(&grid, x, y));
        } else {
            assert!(longest_run(&grid, x, y) >= bounds.full);
        }
        // no cell in a run shorter than the destroyer ever scores
        for (cx, cy, c) in grid.iter() {
            if c.status() == Status::Untried && !next_to_hit(&grid, cx, cy) && longest_run(&grid, cx, cy) < 2 {
                assert_eq!(score_cell(&grid, bounds, cx, cy), 0);
            }
        }
        play_turn(&mut grid).unwrap();
    }
    assert!(SHIPS.iter().all(|&s| grid.sink_turn(s).is_some()));
}

#[test]
fn test_play_turn_overflow_on_empty_fleet() {
    let mut grid = Grid::new();
    grid.ready();
    for _ in 0..TURN_MAX {
        assert_eq!(play_turn(&mut grid).unwrap(), Status::Miss);
    }
    assert_eq!(select_target(&grid), None);
    assert_eq!(
        play_turn(&mut grid).unwrap_err(),
        GameError::TurnOverflow { turns: TURN_MAX }
    );
}

#[test]
fn test_play_turn_with_custom_picker() {
    let mut grid = fixed_grid();
    assert_eq!(play_turn_with(&mut grid, |_| Some((8, 8))).unwrap(), Status::Hit);
    assert_eq!(
        play_turn_with(&mut grid, |_| Some((8, 8))).unwrap_err(),
        GameError::AlreadyTried { x: 8, y: 8 }
    );
    assert_eq!(
        play_turn_with(&mut grid, |_| None).unwrap_err(),
        GameError::TurnOverflow { turns: 1 }
    );
    assert_eq!(grid.turn_count(), 1);
}
