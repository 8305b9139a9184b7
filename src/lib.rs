mod cellset;
mod combat;
mod common;
mod config;
mod fleet;
mod grid;
mod locks;
mod logging;
mod matchmaker;
mod notify;
mod server;
mod session;
mod ship;
pub mod store;

pub use cellset::CellSet;
pub use combat::CombatResolver;
pub use common::*;
pub use config::*;
pub use fleet::{validate_fleet, ShipSubmission};
pub use grid::{resolve_cells, Coord, CoordError, GridError, Orientation};
pub use locks::SessionLocks;
pub use logging::init_logging;
pub use matchmaker::Matchmaker;
pub use notify::{Notifier, SessionEvent, SessionFeed};
pub use server::{GameServer, MAX_NAME_LEN};
pub use session::*;
pub use ship::{ResolvedShip, Ship, ShipKind};
