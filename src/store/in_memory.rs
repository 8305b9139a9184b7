//! In-memory store used by the tests and the demo binary.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::SystemTime;

use async_trait::async_trait;

use crate::cellset::CellSet;
use crate::session::{Player, PlayerId, Session, SessionId, ShipId, Shot};
use crate::ship::{ResolvedShip, Ship};
use crate::store::SessionStore;

#[derive(Default)]
struct State {
    last_id: u64,
    players: HashMap<PlayerId, Player>,
    sessions: HashMap<SessionId, Session>,
    waiting: VecDeque<SessionId>,
    ships: HashMap<ShipId, Ship>,
    shots: Vec<Shot>,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Store keeping everything behind a single mutex, so every trait call is
/// one atomic step.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The audit trail for a session, in append order.
    pub fn shots(&self, session: SessionId) -> Vec<Shot> {
        let state = self.state.lock().unwrap();
        state
            .shots
            .iter()
            .filter(|s| s.session == session)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn create_player(&self, name: &str) -> anyhow::Result<Player> {
        let mut state = self.state.lock().unwrap();
        let id = PlayerId(state.next_id());
        let player = Player {
            id,
            name: name.to_string(),
        };
        state.players.insert(id, player.clone());
        Ok(player)
    }

    async fn find_player(&self, id: PlayerId) -> anyhow::Result<Option<Player>> {
        Ok(self.state.lock().unwrap().players.get(&id).cloned())
    }

    async fn find_active_session(&self, player: PlayerId) -> anyhow::Result<Option<Session>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sessions
            .values()
            .find(|s| s.ended.is_none() && s.is_seated(player))
            .cloned())
    }

    async fn claim_waiting_session(&self) -> anyhow::Result<Option<Session>> {
        let mut state = self.state.lock().unwrap();
        let Some(id) = state.waiting.pop_front() else {
            return Ok(None);
        };
        Ok(state.sessions.get(&id).cloned())
    }

    async fn create_session(&self, first_player: PlayerId) -> anyhow::Result<Session> {
        let mut state = self.state.lock().unwrap();
        let id = SessionId(state.next_id());
        let session = Session::waiting(id, first_player);
        state.sessions.insert(id, session.clone());
        state.waiting.push_back(id);
        Ok(session)
    }

    async fn attach_second_player(
        &self,
        session: SessionId,
        player: PlayerId,
    ) -> anyhow::Result<Session> {
        let mut state = self.state.lock().unwrap();
        let session = state
            .sessions
            .get_mut(&session)
            .ok_or_else(|| anyhow::anyhow!("no such session: {session}"))?;
        if session.player2.is_some() || session.started.is_some() {
            anyhow::bail!("session {} already has two players", session.id);
        }
        session.start(player, SystemTime::now());
        Ok(session.clone())
    }

    async fn create_fleet(
        &self,
        player: PlayerId,
        session: SessionId,
        ships: Vec<ResolvedShip>,
    ) -> anyhow::Result<Vec<Ship>> {
        let mut state = self.state.lock().unwrap();
        let mut created = Vec::with_capacity(ships.len());
        for resolved in ships {
            let id = ShipId(state.next_id());
            let ship = Ship {
                id,
                player,
                session,
                kind: resolved.kind,
                cells: resolved.cells,
                hits: CellSet::new(),
                sunk: false,
            };
            state.ships.insert(id, ship.clone());
            created.push(ship);
        }
        Ok(created)
    }

    async fn find_live_ships(
        &self,
        player: PlayerId,
        session: SessionId,
    ) -> anyhow::Result<Vec<Ship>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .ships
            .values()
            .filter(|s| s.player == player && s.session == session && !s.sunk)
            .cloned()
            .collect())
    }

    async fn find_session(
        &self,
        session: SessionId,
        player: PlayerId,
    ) -> anyhow::Result<Option<Session>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sessions
            .get(&session)
            .filter(|s| s.is_seated(player))
            .cloned())
    }

    async fn append_shot(&self, shot: Shot) -> anyhow::Result<()> {
        self.state.lock().unwrap().shots.push(shot);
        Ok(())
    }

    async fn commit_resolution(&self, ship: Option<Ship>, session: Session) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(ship) = ship {
            state.ships.insert(ship.id, ship);
        }
        state.sessions.insert(session.id, session);
        Ok(())
    }
}
