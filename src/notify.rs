//! Session event feed: per-session broadcast of committed mutations.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::grid::Coord;
use crate::session::{PlayerId, SessionId};
use crate::ship::ShipKind;

/// Committed mutation of a session or one of its ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The second player is seated and the match is live.
    Started { session: SessionId, turn: PlayerId },
    /// A ship took a hit. Delivered to the ship's owner only.
    ShipHit {
        owner: PlayerId,
        kind: ShipKind,
        cell: Coord,
        sunk: bool,
    },
    /// Turn possession moved after a resolved shot.
    TurnChanged { turn: PlayerId },
    /// Terminal: the session ended with a winner.
    Ended { winner: PlayerId },
}

impl SessionEvent {
    fn visible_to(&self, player: PlayerId) -> bool {
        match self {
            SessionEvent::ShipHit { owner, .. } => *owner == player,
            _ => true,
        }
    }
}

const FEED_CAPACITY: usize = 128;

/// Registry of per-session broadcast channels. Publishing is fire-and-forget:
/// a session with no listeners simply drops the event, and a slow consumer
/// never blocks the resolver.
#[derive(Default)]
pub struct Notifier {
    channels: Mutex<HashMap<SessionId, broadcast::Sender<SessionEvent>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn sender(&self, session: SessionId) -> broadcast::Sender<SessionEvent> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(session)
            .or_insert_with(|| broadcast::channel(FEED_CAPACITY).0)
            .clone()
    }

    /// Publish a committed mutation. Best-effort: never fails the operation
    /// that produced the event.
    pub fn publish(&self, session: SessionId, event: SessionEvent) {
        let _ = self.sender(session).send(event);
    }

    /// A live feed of `session`'s mutations as seen by `player`.
    pub fn subscribe(&self, player: PlayerId, session: SessionId) -> SessionFeed {
        SessionFeed {
            player,
            rx: self.sender(session).subscribe(),
        }
    }
}

/// Read-only subscription handle for one (player, session) pair.
#[derive(Debug)]
pub struct SessionFeed {
    player: PlayerId,
    rx: broadcast::Receiver<SessionEvent>,
}

impl SessionFeed {
    /// The next event visible to this player, or `None` once the feed is
    /// closed. A consumer that lagged past the channel capacity resumes at
    /// the oldest retained event rather than failing.
    pub async fn next(&mut self) -> Option<SessionEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.visible_to(self.player) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
