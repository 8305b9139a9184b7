//! Session pairing: join a waiting opponent or open a new session.

use std::sync::Arc;

use log::info;

use crate::common::JoinError;
use crate::locks::SessionLocks;
use crate::notify::{Notifier, SessionEvent};
use crate::session::{PlayerId, Session};
use crate::ship::ResolvedShip;
use crate::store::SessionStore;

pub struct Matchmaker {
    store: Arc<dyn SessionStore>,
    notifier: Arc<Notifier>,
    locks: Arc<SessionLocks>,
}

impl Matchmaker {
    pub fn new(
        store: Arc<dyn SessionStore>,
        notifier: Arc<Notifier>,
        locks: Arc<SessionLocks>,
    ) -> Self {
        Matchmaker {
            store,
            notifier,
            locks,
        }
    }

    /// Attach `player` to a waiting session, or open a new one when nobody
    /// is waiting. The fleet must already have passed validation.
    ///
    /// The waiting-session claim is atomic inside the store, so two
    /// concurrent joins cannot both take the same second slot.
    pub async fn join_or_create(
        &self,
        player: PlayerId,
        fleet: Vec<ResolvedShip>,
    ) -> Result<Session, JoinError> {
        if self
            .store
            .find_active_session(player)
            .await
            .map_err(JoinError::Store)?
            .is_some()
        {
            return Err(JoinError::AlreadyInSession);
        }

        match self
            .store
            .claim_waiting_session()
            .await
            .map_err(JoinError::Store)?
        {
            Some(waiting) => {
                // Serialize against anything else touching this session.
                let lock = self.locks.get(waiting.id);
                let _guard = lock.lock().await;

                self.store
                    .create_fleet(player, waiting.id, fleet)
                    .await
                    .map_err(JoinError::Store)?;
                let session = self
                    .store
                    .attach_second_player(waiting.id, player)
                    .await
                    .map_err(JoinError::Store)?;
                info!(
                    "session {} started: {} vs {}, {} to move",
                    session.id, session.player1, player, session.player1
                );
                self.notifier.publish(
                    session.id,
                    SessionEvent::Started {
                        session: session.id,
                        turn: session.player1,
                    },
                );
                Ok(session)
            }
            None => {
                let session = self
                    .store
                    .create_session(player)
                    .await
                    .map_err(JoinError::Store)?;
                self.store
                    .create_fleet(player, session.id, fleet)
                    .await
                    .map_err(JoinError::Store)?;
                info!(
                    "player {} opened session {}, waiting for an opponent",
                    player, session.id
                );
                Ok(session)
            }
        }
    }
}
