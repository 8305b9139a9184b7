//! Shared result and error types for the engine's public operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, CoordError};
use crate::ship::ShipKind;

/// Result of a resolved shot. `hit` carries the struck ship's kind rather
/// than a bare boolean so the caller can attribute the damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub hit: Option<ShipKind>,
    pub sunk: Option<ShipKind>,
    pub won: bool,
}

/// Rejections from fleet validation, reported per offending ship where the
/// rule applies to a single submission. Pure input errors: nothing is
/// persisted on any of these paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// The submission does not contain exactly ten ships.
    WrongShipCount { got: usize },
    /// A submission names a kind outside the five known ones.
    UnknownShipType { raw: String },
    /// A kind appeared a third time.
    DuplicateShipType { kind: ShipKind },
    /// An origin cell failed to parse, with row/column detail.
    InvalidCoordinate { raw: String, source: CoordError },
    /// An orientation was neither horizontal nor vertical.
    InvalidOrientation { raw: String },
    /// A ship's run of cells leaves the board.
    OutOfBounds { kind: ShipKind },
    /// Two ships claim the same cell.
    OverlappingShips { cell: Coord },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::WrongShipCount { got } => {
                write!(f, "a fleet must contain exactly 10 ships, got {}", got)
            }
            FleetError::UnknownShipType { raw } => write!(f, "unknown ship type: {:?}", raw),
            FleetError::DuplicateShipType { kind } => {
                write!(f, "too many ships of type: {}", kind)
            }
            FleetError::InvalidCoordinate { raw, source } => {
                write!(f, "ship coordinate {:?} is invalid: {}", raw, source)
            }
            FleetError::InvalidOrientation { raw } => {
                write!(f, "ship orientation {:?} is invalid", raw)
            }
            FleetError::OutOfBounds { kind } => write!(f, "{} runs off the board", kind),
            FleetError::OverlappingShips { cell } => write!(f, "ships overlap at {}", cell),
        }
    }
}

/// Rejections from player registration.
#[derive(Debug)]
pub enum RegisterError {
    NameRequired,
    NameTooLong { len: usize },
    UnknownPlayer,
    /// Re-registration presented a different name for a known id.
    NameMismatch,
    Store(anyhow::Error),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::NameRequired => write!(f, "player name required"),
            RegisterError::NameTooLong { len } => {
                write!(f, "player name is too long ({} chars, max 25)", len)
            }
            RegisterError::UnknownPlayer => write!(f, "no player with that id"),
            RegisterError::NameMismatch => write!(f, "player name mismatch"),
            RegisterError::Store(e) => write!(f, "storage failure: {}", e),
        }
    }
}

/// Rejections from matchmaking.
#[derive(Debug)]
pub enum JoinError {
    /// The player already has a session that has not ended.
    AlreadyInSession,
    Store(anyhow::Error),
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::AlreadyInSession => write!(f, "player is already in an unfinished session"),
            JoinError::Store(e) => write!(f, "storage failure: {}", e),
        }
    }
}

/// Rejections from shot resolution.
#[derive(Debug)]
pub enum ShotError {
    CoordRequired,
    InvalidCoordinate(CoordError),
    /// No session with this id, the shooter seated, started and not ended.
    SessionNotFound,
    NotYourTurn,
    Store(anyhow::Error),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::CoordRequired => write!(f, "shot coordinate required"),
            ShotError::InvalidCoordinate(e) => write!(f, "shot coordinate is invalid: {}", e),
            ShotError::SessionNotFound => write!(f, "no matching game found"),
            ShotError::NotYourTurn => write!(f, "it is not your turn"),
            ShotError::Store(e) => write!(f, "storage failure: {}", e),
        }
    }
}

/// Rejections from feed subscription.
#[derive(Debug)]
pub enum SubscribeError {
    SessionNotFound,
    Store(anyhow::Error),
}

impl fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscribeError::SessionNotFound => write!(f, "no matching game found"),
            SubscribeError::Store(e) => write!(f, "storage failure: {}", e),
        }
    }
}
