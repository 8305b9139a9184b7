//! Persistence collaborator interface.

use async_trait::async_trait;

use crate::session::{Player, PlayerId, Session, SessionId, Shot};
use crate::ship::{ResolvedShip, Ship};

pub mod in_memory;

pub use in_memory::InMemoryStore;

/// CRUD surface of the persistence collaborator.
///
/// Implementations must make each call atomic on its own;
/// `claim_waiting_session` in particular must never hand the same waiting
/// session to two concurrent callers. Any error is terminal for the single
/// in-flight request; the engine never retries.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_player(&self, name: &str) -> anyhow::Result<Player>;

    async fn find_player(&self, id: PlayerId) -> anyhow::Result<Option<Player>>;

    /// The player's current non-ended session, waiting or in progress.
    async fn find_active_session(&self, player: PlayerId) -> anyhow::Result<Option<Session>>;

    /// Atomically remove and return a session still missing its second
    /// player. Concurrent claims see disjoint sessions.
    async fn claim_waiting_session(&self) -> anyhow::Result<Option<Session>>;

    async fn create_session(&self, first_player: PlayerId) -> anyhow::Result<Session>;

    /// Seat `player` in the second slot, stamp the start time and hand the
    /// opening turn to the session creator.
    async fn attach_second_player(
        &self,
        session: SessionId,
        player: PlayerId,
    ) -> anyhow::Result<Session>;

    async fn create_fleet(
        &self,
        player: PlayerId,
        session: SessionId,
        ships: Vec<ResolvedShip>,
    ) -> anyhow::Result<Vec<Ship>>;

    /// The player's not-yet-sunk ships in `session`.
    async fn find_live_ships(
        &self,
        player: PlayerId,
        session: SessionId,
    ) -> anyhow::Result<Vec<Ship>>;

    /// The session with this id, filtered to ones where `player` is seated.
    async fn find_session(
        &self,
        session: SessionId,
        player: PlayerId,
    ) -> anyhow::Result<Option<Session>>;

    /// Append a shot to the audit log.
    async fn append_shot(&self, shot: Shot) -> anyhow::Result<()>;

    /// Persist a shot's ship mutation and session update as one commit, so
    /// a fully sunk fleet is never observable without its winner.
    async fn commit_resolution(&self, ship: Option<Ship>, session: Session) -> anyhow::Result<()>;
}
