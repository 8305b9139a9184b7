use broadside::{validate_fleet, CellSet, FleetError, ShipKind, ShipSubmission, TOTAL_FLEET_CELLS};
use proptest::prelude::*;

const KINDS: [ShipKind; 10] = [
    ShipKind::Carrier,
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Battleship,
    ShipKind::Sub,
    ShipKind::Sub,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Patrol,
    ShipKind::Patrol,
];

/// One ship per row: any row permutation with any in-bounds column offset is
/// a valid, overlap-free fleet.
fn fleet_from(rows: &[usize], offsets: &[usize], uppercase: bool) -> Vec<ShipSubmission> {
    KINDS
        .iter()
        .zip(rows)
        .zip(offsets)
        .map(|((kind, &row), &offset)| {
            let span = 10 - kind.length();
            let col = offset % (span + 1) + 1;
            let letter = (b'a' + row as u8) as char;
            let mut origin = format!("{letter}{col}");
            if uppercase {
                origin = origin.to_uppercase();
            }
            ShipSubmission::new(kind.name(), &origin, "horizontal")
        })
        .collect()
}

fn arb_rows() -> impl Strategy<Value = Vec<usize>> {
    Just((0..10).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every composition-, geometry- and overlap-correct submission
    /// validates, and the resolved cells form a disjoint union of exactly
    /// one full fleet.
    #[test]
    fn valid_fleets_validate(
        rows in arb_rows(),
        offsets in prop::collection::vec(0..10usize, 10),
        uppercase in any::<bool>(),
    ) {
        let fleet = fleet_from(&rows, &offsets, uppercase);
        let resolved = validate_fleet(&fleet).unwrap();

        let mut union = CellSet::new();
        let mut total = 0;
        for ship in &resolved {
            prop_assert_eq!(ship.cells.len(), ship.kind.length());
            total += ship.cells.len();
            for cell in ship.cells.iter() {
                prop_assert!(union.insert(cell), "ships share cell {}", cell);
            }
        }
        prop_assert_eq!(total, TOTAL_FLEET_CELLS);
        prop_assert_eq!(union.len(), TOTAL_FLEET_CELLS);
    }

    /// Overwriting any submission with a kind that already appears twice is
    /// rejected, naming that kind.
    #[test]
    fn third_of_a_kind_is_rejected(
        rows in arb_rows(),
        offsets in prop::collection::vec(0..10usize, 10),
        victim in 0..10usize,
        culprit in 0..5usize,
    ) {
        let culprit_kind = ShipKind::ALL[culprit];
        prop_assume!(KINDS[victim] != culprit_kind);

        let mut fleet = fleet_from(&rows, &offsets, false);
        fleet[victim].kind = culprit_kind.name().to_string();

        match validate_fleet(&fleet) {
            Err(FleetError::DuplicateShipType { kind }) => prop_assert_eq!(kind, culprit_kind),
            other => prop_assert!(false, "expected DuplicateShipType, got {:?}", other),
        }
    }

    /// Two ships claiming the same cell are always rejected.
    #[test]
    fn overlapping_cells_are_rejected(
        rows in arb_rows(),
        offsets in prop::collection::vec(0..10usize, 10),
    ) {
        let mut fleet = fleet_from(&rows, &offsets, false);
        // Both patrols are single-cell ships; stacking one on the other is
        // the minimal overlap.
        fleet[9].origin = fleet[8].origin.clone();

        prop_assert!(
            matches!(
                validate_fleet(&fleet),
                Err(FleetError::OverlappingShips { .. })
            ),
            "expected OverlappingShips"
        );
    }
}
