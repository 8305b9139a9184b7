//! Ship kinds and the persisted ship record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::grid::Coord;
use crate::session::{PlayerId, SessionId, ShipId};

/// The five ship kinds. A fleet carries exactly two of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Sub,
    Cruiser,
    Patrol,
}

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Sub,
        ShipKind::Cruiser,
        ShipKind::Patrol,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Sub => "sub",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Patrol => "patrol",
        }
    }

    pub fn length(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Sub => 3,
            ShipKind::Cruiser => 2,
            ShipKind::Patrol => 1,
        }
    }

    /// Parse a client-supplied kind name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        ShipKind::ALL.into_iter().find(|k| k.name() == raw)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated ship placement, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedShip {
    pub kind: ShipKind,
    pub cells: CellSet,
}

/// A persisted ship: its footprint plus the cells the opponent has hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub player: PlayerId,
    pub session: SessionId,
    pub kind: ShipKind,
    pub cells: CellSet,
    pub hits: CellSet,
    pub sunk: bool,
}

impl Ship {
    /// Register a hit. Returns `true` when the cell was not hit before;
    /// re-hitting flips nothing.
    pub fn record_hit(&mut self, cell: Coord) -> bool {
        debug_assert!(self.cells.contains(cell));
        self.hits.insert(cell)
    }

    /// A ship is sunk when its hit mask covers its footprint.
    pub fn all_cells_hit(&self) -> bool {
        self.hits.covers(self.cells)
    }
}
