//! Engine façade: the operations exposed to the transport collaborator.

use std::sync::Arc;

use log::info;

use crate::combat::CombatResolver;
use crate::common::{JoinError, RegisterError, ShotError, ShotOutcome, SubscribeError};
use crate::locks::SessionLocks;
use crate::matchmaker::Matchmaker;
use crate::notify::{Notifier, SessionFeed};
use crate::session::{Player, PlayerId, Session, SessionId};
use crate::ship::ResolvedShip;
use crate::store::SessionStore;

/// Maximum display-name length accepted at registration.
pub const MAX_NAME_LEN: usize = 25;

/// The engine's public face. Owns the collaborator handles and the
/// per-session lock registry; one instance serves every session, and every
/// component receives its collaborators at construction rather than through
/// ambient globals.
pub struct GameServer {
    store: Arc<dyn SessionStore>,
    notifier: Arc<Notifier>,
    matchmaker: Matchmaker,
    resolver: CombatResolver,
}

impl GameServer {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let notifier = Arc::new(Notifier::new());
        let locks = Arc::new(SessionLocks::new());
        let matchmaker = Matchmaker::new(store.clone(), notifier.clone(), locks.clone());
        let resolver = CombatResolver::new(store.clone(), notifier.clone(), locks);
        GameServer {
            store,
            notifier,
            matchmaker,
            resolver,
        }
    }

    /// Register a new player, or look an existing one up by id.
    /// Re-registration must present the stored name unchanged.
    pub async fn register_player(
        &self,
        name: &str,
        existing: Option<PlayerId>,
    ) -> Result<Player, RegisterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterError::NameRequired);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(RegisterError::NameTooLong { len });
        }

        if let Some(id) = existing {
            let player = self
                .store
                .find_player(id)
                .await
                .map_err(RegisterError::Store)?
                .ok_or(RegisterError::UnknownPlayer)?;
            if player.name != name {
                return Err(RegisterError::NameMismatch);
            }
            return Ok(player);
        }

        let player = self
            .store
            .create_player(name)
            .await
            .map_err(RegisterError::Store)?;
        info!("registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Attach a player with a validated fleet to a session. Validation is a
    /// separate step: see [`validate_fleet`](crate::validate_fleet).
    pub async fn join_session(
        &self,
        player: PlayerId,
        fleet: Vec<ResolvedShip>,
    ) -> Result<Session, JoinError> {
        self.matchmaker.join_or_create(player, fleet).await
    }

    /// Fire one shot at the opponent's board.
    pub async fn fire_shot(
        &self,
        player: PlayerId,
        session: SessionId,
        coord: &str,
    ) -> Result<ShotOutcome, ShotError> {
        self.resolver.fire_shot(player, session, coord).await
    }

    /// A live feed of the session's committed mutations as seen by
    /// `player`. Fails when the player is not seated in the session.
    pub async fn subscribe(
        &self,
        player: PlayerId,
        session: SessionId,
    ) -> Result<SessionFeed, SubscribeError> {
        self.store
            .find_session(session, player)
            .await
            .map_err(SubscribeError::Store)?
            .ok_or(SubscribeError::SessionNotFound)?;
        Ok(self.notifier.subscribe(player, session))
    }
}
