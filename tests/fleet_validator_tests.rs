use broadside::{
    validate_fleet, CoordError, FleetError, ShipKind, ShipSubmission, TOTAL_FLEET_CELLS,
};

/// Two of each kind, one ship per row, all packed against column 1.
fn full_fleet() -> Vec<ShipSubmission> {
    [
        ("carrier", "a1"),
        ("carrier", "b1"),
        ("battleship", "c1"),
        ("battleship", "d1"),
        ("sub", "e1"),
        ("sub", "f1"),
        ("cruiser", "g1"),
        ("cruiser", "h1"),
        ("patrol", "i1"),
        ("patrol", "j1"),
    ]
    .into_iter()
    .map(|(kind, origin)| ShipSubmission::new(kind, origin, "horizontal"))
    .collect()
}

#[test]
fn full_fleet_validates() {
    let resolved = validate_fleet(&full_fleet()).unwrap();
    assert_eq!(resolved.len(), 10);

    let total: usize = resolved.iter().map(|s| s.cells.len()).sum();
    assert_eq!(total, TOTAL_FLEET_CELLS);
    for ship in &resolved {
        assert_eq!(ship.cells.len(), ship.kind.length());
    }
}

#[test]
fn submissions_accept_mixed_case_and_short_orientations() {
    let mut fleet = full_fleet();
    fleet[0] = ShipSubmission::new("Carrier", "A1", "H");
    fleet[9] = ShipSubmission::new("PATROL", "J1", "v");
    assert!(validate_fleet(&fleet).is_ok());
}

#[test]
fn eleventh_ship_fails_count_before_duplication() {
    let mut fleet = full_fleet();
    fleet.push(ShipSubmission::new("patrol", "j6", "horizontal"));
    // Patrol now appears three times, but the count check runs first.
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::WrongShipCount { got: 11 }
    );
}

#[test]
fn short_fleet_fails_count() {
    let fleet = &full_fleet()[..9];
    assert_eq!(
        validate_fleet(fleet).unwrap_err(),
        FleetError::WrongShipCount { got: 9 }
    );
}

#[test]
fn unknown_type_is_named() {
    let mut fleet = full_fleet();
    fleet[4] = ShipSubmission::new("dinghy", "e1", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::UnknownShipType {
            raw: "dinghy".to_string()
        }
    );
}

#[test]
fn third_occurrence_flags_the_duplicate_kind() {
    let mut fleet = full_fleet();
    // Turn one cruiser into a third patrol.
    fleet[7] = ShipSubmission::new("patrol", "h1", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::DuplicateShipType {
            kind: ShipKind::Patrol
        }
    );
}

#[test]
fn bad_row_and_bad_column_are_reported_distinctly() {
    let mut fleet = full_fleet();
    fleet[0] = ShipSubmission::new("carrier", "z1", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::InvalidCoordinate {
            raw: "z1".to_string(),
            source: CoordError::BadRow('z')
        }
    );

    let mut fleet = full_fleet();
    fleet[0] = ShipSubmission::new("carrier", "a99", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::InvalidCoordinate {
            raw: "a99".to_string(),
            source: CoordError::BadColumn("99".to_string())
        }
    );
}

#[test]
fn invalid_orientation_is_rejected() {
    let mut fleet = full_fleet();
    fleet[2] = ShipSubmission::new("battleship", "c1", "diagonal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::InvalidOrientation {
            raw: "diagonal".to_string()
        }
    );
}

#[test]
fn out_of_bounds_names_the_ship() {
    let mut fleet = full_fleet();
    fleet[0] = ShipSubmission::new("carrier", "a7", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::OutOfBounds {
            kind: ShipKind::Carrier
        }
    );
}

#[test]
fn overlapping_ships_report_the_repeated_cell() {
    let mut fleet = full_fleet();
    // Second patrol on top of the first.
    fleet[9] = ShipSubmission::new("patrol", "i1", "horizontal");
    match validate_fleet(&fleet).unwrap_err() {
        FleetError::OverlappingShips { cell } => assert_eq!(cell.to_string(), "i1"),
        other => panic!("expected OverlappingShips, got {other:?}"),
    }
}

#[test]
fn unknown_type_outranks_later_rule_failures() {
    let mut fleet = full_fleet();
    // An unparseable coordinate early in the list...
    fleet[0] = ShipSubmission::new("carrier", "zz", "horizontal");
    // ...loses to an unknown kind later in the list.
    fleet[5] = ShipSubmission::new("rowboat", "f1", "horizontal");
    assert_eq!(
        validate_fleet(&fleet).unwrap_err(),
        FleetError::UnknownShipType {
            raw: "rowboat".to_string()
        }
    );
}
