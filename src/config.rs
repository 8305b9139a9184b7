pub const BOARD_SIZE: u8 = 10;

/// Ships per fleet submission: two of each kind.
pub const FLEET_SIZE: usize = 10;
pub const SHIPS_PER_KIND: usize = 2;

/// Total number of cells a full fleet occupies.
pub const TOTAL_FLEET_CELLS: usize = SHIPS_PER_KIND * (5 + 4 + 3 + 2 + 1);
