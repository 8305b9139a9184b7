use broadside::{resolve_cells, Coord, CoordError, GridError, Orientation};

#[test]
fn parse_normalizes_case() {
    let lower = Coord::parse("c7").unwrap();
    let upper = Coord::parse("C7").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(upper.to_string(), "c7");
    assert_eq!(Coord::parse("J10").unwrap().to_string(), "j10");
}

#[test]
fn parse_rejects_bad_row_letter() {
    assert_eq!(Coord::parse("z3").unwrap_err(), CoordError::BadRow('z'));
    assert_eq!(Coord::parse("13").unwrap_err(), CoordError::BadRow('1'));
}

#[test]
fn parse_rejects_bad_column() {
    assert_eq!(
        Coord::parse("a0").unwrap_err(),
        CoordError::BadColumn("0".to_string())
    );
    assert_eq!(
        Coord::parse("a11").unwrap_err(),
        CoordError::BadColumn("11".to_string())
    );
    assert_eq!(
        Coord::parse("a").unwrap_err(),
        CoordError::BadColumn(String::new())
    );
    assert_eq!(
        Coord::parse("axy").unwrap_err(),
        CoordError::BadColumn("xy".to_string())
    );
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!(Coord::parse("").unwrap_err(), CoordError::Empty);
    assert_eq!(Coord::parse("   ").unwrap_err(), CoordError::Empty);
}

#[test]
fn horizontal_run_advances_the_numeral() {
    let origin = Coord::parse("a1").unwrap();
    let cells = resolve_cells(origin, 5, Orientation::Horizontal).unwrap();
    let rendered: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
    assert_eq!(rendered, ["a1", "a2", "a3", "a4", "a5"]);
}

#[test]
fn vertical_run_advances_the_letter() {
    let origin = Coord::parse("a1").unwrap();
    let cells = resolve_cells(origin, 5, Orientation::Vertical).unwrap();
    let rendered: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
    assert_eq!(rendered, ["a1", "b1", "c1", "d1", "e1"]);
}

#[test]
fn placement_may_touch_the_far_edge() {
    let origin = Coord::parse("a6").unwrap();
    assert!(resolve_cells(origin, 5, Orientation::Horizontal).is_ok());
    let origin = Coord::parse("f1").unwrap();
    assert!(resolve_cells(origin, 5, Orientation::Vertical).is_ok());
    let origin = Coord::parse("j10").unwrap();
    assert!(resolve_cells(origin, 1, Orientation::Horizontal).is_ok());
}

#[test]
fn placement_off_the_board_fails() {
    let origin = Coord::parse("a7").unwrap();
    assert_eq!(
        resolve_cells(origin, 5, Orientation::Horizontal).unwrap_err(),
        GridError::OutOfBounds
    );
    let origin = Coord::parse("g1").unwrap();
    assert_eq!(
        resolve_cells(origin, 5, Orientation::Vertical).unwrap_err(),
        GridError::OutOfBounds
    );
}
