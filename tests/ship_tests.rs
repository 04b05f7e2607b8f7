use naval_hotseat::{Cell, CellState, Direction, Ship, ShipError};

#[test]
fn test_lengths_and_cells() {
    let ship = Ship::horizontal(2, 1, 3);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.direction(), Direction::Horizontal);
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);

    let ship = Ship::vertical(0, 0, 4);
    assert_eq!(ship.end(), (3, 0));
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert!(ship.contains(3, 0));
    assert!(!ship.contains(4, 0));
    assert_eq!(ship.undestroyed_count(), 4);
}

#[test]
fn test_single_cell_ship() {
    let ship = Ship::single(3, 4);
    assert_eq!(ship.direction(), Direction::Undefined);
    assert_eq!(ship.length(), 1);
    assert!(ship.is_well_formed());
    assert_eq!(ship.cells().collect::<Vec<_>>(), vec![(3, 4)]);
}

#[test]
fn test_malformed_ship_occupies_nothing() {
    let backwards = Ship::new((0, 3), (0, 1), Direction::Horizontal);
    assert!(!backwards.is_well_formed());
    assert_eq!(backwards.length(), 0);
    assert_eq!(backwards.cells().count(), 0);

    let bent = Ship::new((0, 0), (1, 1), Direction::Vertical);
    assert!(!bent.is_well_formed());
    assert_eq!(bent.cells().count(), 0);
}

#[test]
fn test_geometry_near_the_coordinate_limit() {
    let ship = Ship::horizontal(0, usize::MAX, 3);
    assert_eq!(ship.end(), (0, usize::MAX));
    assert_eq!(ship.length(), 1);

    let ship = Ship::new((usize::MAX - 2, 4), (usize::MAX, 4), Direction::Vertical);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.cells().last(), Some((usize::MAX, 4)));

    let mut ship = Ship::single(0, 0);
    assert_eq!(
        ship.extend(usize::MAX, usize::MAX),
        Err(ShipError::NotAdjacent {
            row: usize::MAX,
            col: usize::MAX
        })
    );
}

#[test]
fn test_apply_hit_until_sunk() {
    let mut ship = Ship::horizontal(1, 1, 2);
    assert!(!ship.is_sunk());
    assert!(!ship.apply_hit());
    assert_eq!(ship.undestroyed_count(), 1);
    assert!(ship.apply_hit());
    assert!(ship.is_sunk());
    assert_eq!(ship.undestroyed_count(), 0);
    // further hits change nothing
    assert!(!ship.apply_hit());
    assert_eq!(ship.undestroyed_count(), 0);
    assert!(ship.is_sunk());
}

#[test]
fn test_extend_fixes_direction() {
    let mut ship = Ship::single(1, 1);
    ship.extend(1, 2).unwrap();
    assert_eq!(ship.direction(), Direction::Horizontal);
    ship.extend(1, 3).unwrap();
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.undestroyed_count(), 3);

    let mut ship = Ship::single(1, 1);
    ship.extend(2, 1).unwrap();
    assert_eq!(ship.direction(), Direction::Vertical);
    assert_eq!(ship.end(), (2, 1));
}

#[test]
fn test_extend_rejections_leave_ship_unchanged() {
    let mut ship = Ship::single(1, 1);
    assert_eq!(ship.extend(3, 1), Err(ShipError::NotAdjacent { row: 3, col: 1 }));
    assert_eq!(ship.extend(2, 2), Err(ShipError::NotAdjacent { row: 2, col: 2 }));
    assert_eq!(ship.extend(1, 0), Err(ShipError::Backwards { row: 1, col: 0 }));
    assert_eq!(ship.extend(0, 1), Err(ShipError::Backwards { row: 0, col: 1 }));
    assert_eq!(ship, Ship::single(1, 1));

    ship.extend(1, 2).unwrap();
    assert_eq!(
        ship.extend(2, 2),
        Err(ShipError::DirectionLocked { row: 2, col: 2 })
    );
    assert_eq!(ship.end(), (1, 2));
}

#[test]
fn test_cell_constructor_rejects_missing_ship() {
    for state in [CellState::Ship, CellState::Hit, CellState::Sunk] {
        let cell = Cell::new(state, None);
        assert_eq!(cell.state(), CellState::Invalid);
        assert_eq!(cell.ship(), None);
    }
    for state in [CellState::Water, CellState::Miss, CellState::Selected] {
        assert_eq!(Cell::new(state, None).state(), state);
    }
    assert_eq!(Cell::default(), Cell::water());
}
