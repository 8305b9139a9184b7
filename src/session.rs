//! Players, sessions and the shot audit log.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// Opaque player identifier allocated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// Opaque session identifier allocated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

/// Opaque ship identifier allocated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShipId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Derived lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Waiting,
    InProgress,
    Ended,
}

/// One two-player match, from matchmaking to a declared winner.
///
/// Invariants: `turn` is one of the two seated players once `started` is
/// set; `winner` is set only together with `ended`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub started: Option<SystemTime>,
    pub ended: Option<SystemTime>,
    pub winner: Option<PlayerId>,
    pub turn: Option<PlayerId>,
}

impl Session {
    /// A fresh waiting session with a single seated player.
    pub fn waiting(id: SessionId, player1: PlayerId) -> Self {
        Session {
            id,
            player1,
            player2: None,
            started: None,
            ended: None,
            winner: None,
            turn: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.ended.is_some() {
            SessionPhase::Ended
        } else if self.started.is_some() {
            SessionPhase::InProgress
        } else {
            SessionPhase::Waiting
        }
    }

    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.player1 == player || self.player2 == Some(player)
    }

    /// The other seated player, once both seats are filled.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        match self.player2 {
            Some(p2) if player == self.player1 => Some(p2),
            Some(p2) if player == p2 => Some(self.player1),
            _ => None,
        }
    }

    /// Seat the second player and start the match. The first mover is fixed:
    /// the session creator takes the opening turn.
    pub fn start(&mut self, second: PlayerId, at: SystemTime) {
        debug_assert!(self.player2.is_none() && self.started.is_none());
        self.player2 = Some(second);
        self.started = Some(at);
        self.turn = Some(self.player1);
    }

    /// Terminal transition: `winner` and `ended` are set together, never
    /// separately.
    pub fn finish(&mut self, winner: PlayerId, at: SystemTime) {
        self.winner = Some(winner);
        self.ended = Some(at);
    }
}

/// Audit-log entry for an accepted shot, journaled hit or miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub player: PlayerId,
    pub session: SessionId,
    pub cell: Coord,
    pub time: SystemTime,
}
