//! Cell sets: board masks over the 10×10 grid backed by a single `u128`.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// A set of board cells. Ship footprints, hit masks and overlap checks are
/// all bitwise operations on this type; a `Coord` is valid by construction,
/// so no operation here can fail.
#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet(u128);

impl CellSet {
    pub const fn new() -> Self {
        CellSet(0)
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.0 >> cell.index() & 1 == 1
    }

    /// Insert a cell, returning `true` when it was not already present.
    pub fn insert(&mut self, cell: Coord) -> bool {
        let bit = 1u128 << cell.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// `true` when this set contains every cell of `other`.
    pub fn covers(&self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> {
        let bits = self.0;
        (0..100).filter(move |i| bits >> i & 1 == 1).map(Coord::from_index)
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl BitAnd for CellSet {
    type Output = CellSet;
    fn bitand(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 & rhs.0)
    }
}

impl BitOr for CellSet {
    type Output = CellSet;
    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}
