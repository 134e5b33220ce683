//! Ship catalog: the five ship identities and their fixed lengths.

use core::fmt;

/// Identity of a ship in the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipId {
    Carrier,
    Battleship,
    Submarine,
    Cruiser,
    Destroyer,
}

impl ShipId {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipId::Carrier => 5,
            ShipId::Battleship => 4,
            ShipId::Submarine | ShipId::Cruiser => 3,
            ShipId::Destroyer => 2,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipId::Carrier => "Carrier",
            ShipId::Battleship => "Battleship",
            ShipId::Submarine => "Submarine",
            ShipId::Cruiser => "Cruiser",
            ShipId::Destroyer => "Destroyer",
        }
    }

    /// Single-letter tag used by the ship map render.
    pub const fn symbol(self) -> char {
        match self {
            ShipId::Carrier => 'C',
            ShipId::Battleship => 'B',
            ShipId::Submarine => 'S',
            ShipId::Cruiser => 'R',
            ShipId::Destroyer => 'D',
        }
    }

    /// Position in the fleet, used to index per-ship tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
