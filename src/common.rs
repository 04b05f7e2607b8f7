//! Common error types for the grid, the ship builder and the match coordinator.

use core::fmt;

/// Errors returned when growing a ship one cell at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// The new cell does not touch the current end cell orthogonally.
    NotAdjacent { row: usize, col: usize },
    /// Ships only grow top-to-bottom or left-to-right.
    Backwards { row: usize, col: usize },
    /// The new cell would bend a ship whose direction is already fixed.
    DirectionLocked { row: usize, col: usize },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::NotAdjacent { row, col } => {
                write!(f, "cell ({}, {}) is not next to the end of the ship", row, col)
            }
            ShipError::Backwards { row, col } => write!(
                f,
                "cell ({}, {}) lies above or left of the ship; extend top-to-bottom or left-to-right",
                row, col
            ),
            ShipError::DirectionLocked { row, col } => write!(
                f,
                "cell ({}, {}) does not follow the ship's direction",
                row, col
            ),
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Operation is not allowed in the grid's current phase.
    WrongPhase,
    /// Ship geometry is not a straight, forward-running line.
    MalformedShip,
    /// No ship of this length is left in the inventory.
    ShipUnavailable { length: usize },
    /// Ship overlaps or touches another ship, or leaves the grid.
    InvalidPlacement,
    /// `begin_combat` was called before every ship was placed.
    FleetIncomplete { remaining: usize },
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            GridError::MalformedShip => write!(f, "Ship geometry is malformed"),
            GridError::ShipUnavailable { length } => {
                write!(f, "No ship of length {} left to place", length)
            }
            GridError::InvalidPlacement => {
                write!(f, "Ship overlaps, touches another ship or leaves the grid")
            }
            GridError::FleetIncomplete { remaining } => {
                write!(f, "Fleet not fully placed ({} ships remaining)", remaining)
            }
            GridError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors returned by the match coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The grid refused the command.
    Grid(GridError),
    /// The pending ship could not be extended.
    Ship(ShipError),
    /// Command belongs to another phase of the match.
    WrongPhase,
    /// The match is over.
    Finished,
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Setup: the cell is not open water.
    CellOccupied { row: usize, col: usize },
    /// Setup: the selection would overlap or touch another ship.
    InvalidPlacement,
    /// Setup: there is no ship selection in progress.
    NoSelection,
    /// Combat: this cell was already fired upon.
    AlreadyTargeted { row: usize, col: usize },
    /// Combat: only one shot per turn.
    ShotAlreadyFired,
    /// Combat: the turn cannot end before its shot.
    NoShotFired,
}

impl From<GridError> for MatchError {
    fn from(err: GridError) -> Self {
        MatchError::Grid(err)
    }
}

impl From<ShipError> for MatchError {
    fn from(err: ShipError) -> Self {
        MatchError::Ship(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Grid(e) => write!(f, "{}", e),
            MatchError::Ship(e) => write!(f, "{}", e),
            MatchError::WrongPhase => write!(f, "Command not allowed in the current phase"),
            MatchError::Finished => write!(f, "The match is already over"),
            MatchError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the grid", row, col)
            }
            MatchError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is not open water", row, col)
            }
            MatchError::InvalidPlacement => {
                write!(f, "Selection overlaps or touches another ship")
            }
            MatchError::NoSelection => write!(f, "No ship selected"),
            MatchError::AlreadyTargeted { row, col } => {
                write!(f, "Cell ({}, {}) was already fired upon", row, col)
            }
            MatchError::ShotAlreadyFired => write!(f, "Only one shot per turn"),
            MatchError::NoShotFired => write!(f, "Fire a shot before ending the turn"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
