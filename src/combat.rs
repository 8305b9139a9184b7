//! Shot resolution: turn enforcement, hit/sunk/win detection, state commit.

use std::sync::Arc;
use std::time::SystemTime;

use log::{debug, info};

use crate::common::{ShotError, ShotOutcome};
use crate::grid::Coord;
use crate::locks::SessionLocks;
use crate::notify::{Notifier, SessionEvent};
use crate::session::{PlayerId, Session, SessionId, Shot};
use crate::ship::Ship;
use crate::store::SessionStore;

pub struct CombatResolver {
    store: Arc<dyn SessionStore>,
    notifier: Arc<Notifier>,
    locks: Arc<SessionLocks>,
}

impl CombatResolver {
    pub fn new(
        store: Arc<dyn SessionStore>,
        notifier: Arc<Notifier>,
        locks: Arc<SessionLocks>,
    ) -> Self {
        CombatResolver {
            store,
            notifier,
            locks,
        }
    }

    /// Resolve one shot. The session's lock is held for the whole
    /// read-modify-write, so back-to-back shots or a racing join cannot
    /// corrupt turn order or double-count a fleet wipe.
    pub async fn fire_shot(
        &self,
        player: PlayerId,
        session_id: SessionId,
        coord: &str,
    ) -> Result<ShotOutcome, ShotError> {
        let raw = coord.trim();
        if raw.is_empty() {
            return Err(ShotError::CoordRequired);
        }
        let cell = Coord::parse(raw).map_err(ShotError::InvalidCoordinate)?;

        let lock = self.locks.get(session_id);
        let _guard = lock.lock().await;

        let session = self
            .store
            .find_session(session_id, player)
            .await
            .map_err(ShotError::Store)?
            .filter(|s| s.started.is_some() && s.ended.is_none())
            .ok_or(ShotError::SessionNotFound)?;

        if session.turn != Some(player) {
            return Err(ShotError::NotYourTurn);
        }

        // Journal first: the audit trail records every accepted shot,
        // misses and duplicates included.
        self.store
            .append_shot(Shot {
                player,
                session: session_id,
                cell,
                time: SystemTime::now(),
            })
            .await
            .map_err(ShotError::Store)?;

        let opponent = session.opponent_of(player).ok_or(ShotError::SessionNotFound)?;
        let ships = self
            .store
            .find_live_ships(opponent, session_id)
            .await
            .map_err(ShotError::Store)?;

        let (outcome, updated_ship, updated_session) =
            resolve(session, player, opponent, ships, cell);

        self.store
            .commit_resolution(updated_ship.clone(), updated_session.clone())
            .await
            .map_err(ShotError::Store)?;

        // Committed; publication is best-effort and never fails the shot.
        if let Some(ship) = &updated_ship {
            self.notifier.publish(
                session_id,
                SessionEvent::ShipHit {
                    owner: opponent,
                    kind: ship.kind,
                    cell,
                    sunk: ship.sunk,
                },
            );
        }
        if outcome.won {
            info!("session {} ended, {} wins", session_id, player);
            self.notifier
                .publish(session_id, SessionEvent::Ended { winner: player });
        } else if let Some(turn) = updated_session.turn {
            self.notifier
                .publish(session_id, SessionEvent::TurnChanged { turn });
        }

        debug!(
            "shot {} by {} in {}: hit={:?} sunk={:?} won={}",
            cell, player, session_id, outcome.hit, outcome.sunk, outcome.won
        );
        Ok(outcome)
    }
}

/// Apply one shot to the opponent's live ships and the session, returning
/// the outcome together with the mutated records to persist.
fn resolve(
    mut session: Session,
    shooter: PlayerId,
    opponent: PlayerId,
    live_ships: Vec<Ship>,
    cell: Coord,
) -> (ShotOutcome, Option<Ship>, Session) {
    let mut hit = None;
    let mut sunk = None;
    let mut updated_ship = None;
    let mut remaining = live_ships.len();

    // The no-overlap invariant means at most one ship owns the cell.
    for mut ship in live_ships {
        if !ship.cells.contains(cell) {
            continue;
        }
        ship.record_hit(cell);
        hit = Some(ship.kind);
        if ship.all_cells_hit() {
            ship.sunk = true;
            sunk = Some(ship.kind);
            remaining -= 1;
        }
        updated_ship = Some(ship);
        break;
    }

    let won = sunk.is_some() && remaining == 0;
    if won {
        // Winner and ended land in the same commit as the ship mutation;
        // turn stops meaning anything once the session is terminal.
        session.finish(shooter, SystemTime::now());
    } else {
        session.turn = Some(opponent);
    }

    (ShotOutcome { hit, sunk, won }, updated_ship, session)
}
