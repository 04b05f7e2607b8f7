//! Match configuration: grid size and fleet inventory.

use alloc::collections::BTreeMap;
use core::fmt;

/// Ship count per ship length.
pub type Fleet = BTreeMap<usize, usize>;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 20;
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Ship lengths a fleet may contain, longest first.
pub const SHIP_LENGTHS: [usize; 4] = [5, 4, 3, 2];
pub const MAX_SHIPS_PER_LENGTH: usize = 5;

/// Errors found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    GridSizeOutOfRange(usize),
    UnknownShipLength(usize),
    TooManyShips { length: usize, count: usize },
    EmptyFleet,
    /// Fleet text could not be parsed (expected `length:count,...`).
    Malformed(alloc::string::String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridSizeOutOfRange(size) => write!(
                f,
                "Grid size {} out of range ({}..={})",
                size, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
            ConfigError::UnknownShipLength(len) => {
                write!(f, "Ship length {} not supported (2..=5)", len)
            }
            ConfigError::TooManyShips { length, count } => write!(
                f,
                "{} ships of length {} requested, at most {} allowed",
                count, length, MAX_SHIPS_PER_LENGTH
            ),
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::Malformed(input) => write!(f, "Cannot parse fleet '{}'", input),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A validated grid size and fleet inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct GameConfig {
    size: usize,
    fleet: Fleet,
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawConfig {
    size: usize,
    fleet: Fleet,
}

#[cfg(feature = "std")]
impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.size, raw.fleet)
    }
}

impl GameConfig {
    /// Validate `size` and `fleet`. Lengths missing from `fleet` are recorded
    /// with a count of zero.
    pub fn new(size: usize, fleet: Fleet) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::GridSizeOutOfRange(size));
        }
        let mut normalized: Fleet = SHIP_LENGTHS.iter().map(|&len| (len, 0)).collect();
        for (&length, &count) in fleet.iter() {
            if !SHIP_LENGTHS.contains(&length) {
                return Err(ConfigError::UnknownShipLength(length));
            }
            if count > MAX_SHIPS_PER_LENGTH {
                return Err(ConfigError::TooManyShips { length, count });
            }
            normalized.insert(length, count);
        }
        if normalized.values().sum::<usize>() == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(GameConfig {
            size,
            fleet: normalized,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Total number of ships each player places.
    pub fn ship_count(&self) -> usize {
        self.fleet.values().sum()
    }
}

impl Default for GameConfig {
    /// 10×10 grid with one carrier, one battleship, two cruisers and one
    /// destroyer.
    fn default() -> Self {
        let fleet = [(5, 1), (4, 1), (3, 2), (2, 1)].into_iter().collect();
        GameConfig {
            size: DEFAULT_GRID_SIZE,
            fleet,
        }
    }
}

/// Parse a fleet description such as `"5:1,4:1,3:2,2:1"`.
///
/// Only syntax is checked here; ranges are checked by [`GameConfig::new`].
pub fn parse_fleet(input: &str) -> Result<Fleet, ConfigError> {
    let malformed = || ConfigError::Malformed(input.into());
    let mut fleet = Fleet::new();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (len, count) = entry.split_once(':').ok_or_else(malformed)?;
        let len: usize = len.trim().parse().map_err(|_| malformed())?;
        let count: usize = count.trim().parse().map_err(|_| malformed())?;
        *fleet.entry(len).or_insert(0) += count;
    }
    if fleet.is_empty() {
        return Err(malformed());
    }
    Ok(fleet)
}
