use naval_hotseat::{parse_fleet, ConfigError, Fleet, GameConfig, DEFAULT_GRID_SIZE};

fn fleet(entries: &[(usize, usize)]) -> Fleet {
    entries.iter().copied().collect()
}

#[test]
fn test_default_config_is_valid() {
    let default = GameConfig::default();
    assert_eq!(default.size(), DEFAULT_GRID_SIZE);
    assert_eq!(default.ship_count(), 5);
    let rebuilt = GameConfig::new(default.size(), default.fleet().clone()).unwrap();
    assert_eq!(rebuilt, default);
}

#[test]
fn test_grid_size_range() {
    assert_eq!(
        GameConfig::new(4, fleet(&[(2, 1)])),
        Err(ConfigError::GridSizeOutOfRange(4))
    );
    assert_eq!(
        GameConfig::new(21, fleet(&[(2, 1)])),
        Err(ConfigError::GridSizeOutOfRange(21))
    );
    assert!(GameConfig::new(5, fleet(&[(2, 1)])).is_ok());
    assert!(GameConfig::new(20, fleet(&[(2, 1)])).is_ok());
}

#[test]
fn test_fleet_validation() {
    assert_eq!(
        GameConfig::new(10, fleet(&[(6, 1)])),
        Err(ConfigError::UnknownShipLength(6))
    );
    assert_eq!(
        GameConfig::new(10, fleet(&[(2, 6)])),
        Err(ConfigError::TooManyShips { length: 2, count: 6 })
    );
    assert_eq!(
        GameConfig::new(10, fleet(&[(2, 0), (3, 0)])),
        Err(ConfigError::EmptyFleet)
    );
}

#[test]
fn test_missing_lengths_recorded_as_zero() {
    let config = GameConfig::new(8, fleet(&[(3, 2)])).unwrap();
    assert_eq!(config.fleet(), &fleet(&[(2, 0), (3, 2), (4, 0), (5, 0)]));
    assert_eq!(config.ship_count(), 2);
}

#[test]
fn test_parse_fleet() {
    assert_eq!(
        parse_fleet("5:1, 4:1,3:2,2:1").unwrap(),
        fleet(&[(5, 1), (4, 1), (3, 2), (2, 1)])
    );
    assert!(matches!(parse_fleet("5-1"), Err(ConfigError::Malformed(_))));
    assert!(matches!(parse_fleet("x:1"), Err(ConfigError::Malformed(_))));
    assert!(matches!(parse_fleet(""), Err(ConfigError::Malformed(_))));
}

#[test]
fn test_config_from_json_is_validated() {
    let config: GameConfig =
        serde_json::from_str(r#"{"size": 8, "fleet": {"3": 2, "2": 1}}"#).unwrap();
    assert_eq!(config.size(), 8);
    assert_eq!(config.fleet()[&3], 2);
    assert_eq!(config.fleet()[&5], 0);

    let too_big = serde_json::from_str::<GameConfig>(r#"{"size": 30, "fleet": {"2": 1}}"#);
    assert!(too_big.is_err());
}
