//! Fleet validation: composition, geometry and overlap rules.

use serde::{Deserialize, Serialize};

use crate::cellset::CellSet;
use crate::common::FleetError;
use crate::config::{FLEET_SIZE, SHIPS_PER_KIND};
use crate::grid::{resolve_cells, Coord, Orientation};
use crate::ship::{ResolvedShip, ShipKind};

/// Raw client input for a single ship placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSubmission {
    pub kind: String,
    pub origin: String,
    pub orientation: String,
}

impl ShipSubmission {
    pub fn new(kind: &str, origin: &str, orientation: &str) -> Self {
        ShipSubmission {
            kind: kind.to_string(),
            origin: origin.to_string(),
            orientation: orientation.to_string(),
        }
    }
}

/// Validate a complete ten-ship fleet submission.
///
/// Rules run as ordered passes over the whole submission; the first failing
/// pass wins, and within a pass the first offending ship in submission order
/// is reported. Pure: no I/O, no state.
pub fn validate_fleet(submissions: &[ShipSubmission]) -> Result<Vec<ResolvedShip>, FleetError> {
    if submissions.len() != FLEET_SIZE {
        return Err(FleetError::WrongShipCount {
            got: submissions.len(),
        });
    }

    let mut kinds = Vec::with_capacity(FLEET_SIZE);
    for sub in submissions {
        let kind = ShipKind::parse(&sub.kind).ok_or_else(|| FleetError::UnknownShipType {
            raw: sub.kind.clone(),
        })?;
        kinds.push(kind);
    }

    // Ten submissions and at most two per kind leaves exactly two of each.
    let mut seen = [0usize; ShipKind::ALL.len()];
    for &kind in &kinds {
        seen[kind as usize] += 1;
        if seen[kind as usize] > SHIPS_PER_KIND {
            return Err(FleetError::DuplicateShipType { kind });
        }
    }

    let mut origins = Vec::with_capacity(FLEET_SIZE);
    for sub in submissions {
        let origin =
            Coord::parse(&sub.origin).map_err(|source| FleetError::InvalidCoordinate {
                raw: sub.origin.clone(),
                source,
            })?;
        origins.push(origin);
    }

    let mut orientations = Vec::with_capacity(FLEET_SIZE);
    for sub in submissions {
        let orientation =
            Orientation::parse(&sub.orientation).ok_or_else(|| FleetError::InvalidOrientation {
                raw: sub.orientation.clone(),
            })?;
        orientations.push(orientation);
    }

    let mut resolved = Vec::with_capacity(FLEET_SIZE);
    for i in 0..FLEET_SIZE {
        let kind = kinds[i];
        let cells = resolve_cells(origins[i], kind.length(), orientations[i])
            .map_err(|_| FleetError::OutOfBounds { kind })?;
        resolved.push(ResolvedShip {
            kind,
            cells: cells.into_iter().collect(),
        });
    }

    let mut claimed = CellSet::new();
    for ship in &resolved {
        if let Some(cell) = (claimed & ship.cells).iter().next() {
            return Err(FleetError::OverlappingShips { cell });
        }
        claimed = claimed | ship.cells;
    }

    Ok(resolved)
}
