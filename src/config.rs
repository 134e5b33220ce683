use crate::ship::ShipId;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Upper bound on turns in one game: every cell can be attacked at most once.
pub const TURN_MAX: usize = BOARD_SIZE * BOARD_SIZE;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random anchors drawn per ship before placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fleet in placement order, which is also the CSV column order.
pub const SHIPS: [ShipId; NUM_SHIPS] = [
    ShipId::Carrier,
    ShipId::Battleship,
    ShipId::Submarine,
    ShipId::Cruiser,
    ShipId::Destroyer,
];

