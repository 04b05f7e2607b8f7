//! Grid cells and the handle they use to refer to a placed ship.

/// State of a single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Water,
    Ship,
    Hit,
    Sunk,
    Miss,
    /// Part of an in-progress selection during setup.
    Selected,
    /// A cell whose state and ship reference disagreed at construction.
    Invalid,
}

impl CellState {
    /// States that must carry a ship reference.
    pub fn requires_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit | CellState::Sunk)
    }

    /// True once a shot has been resolved on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Sunk | CellState::Miss)
    }
}

/// Handle to a ship stored in a [`Grid`](crate::Grid), in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    state: CellState,
    ship: Option<ShipId>,
}

impl Cell {
    /// Build a cell, downgrading to [`CellState::Invalid`] when a ship state
    /// comes without a ship.
    pub fn new(state: CellState, ship: Option<ShipId>) -> Self {
        if state.requires_ship() && ship.is_none() {
            return Cell {
                state: CellState::Invalid,
                ship: None,
            };
        }
        Cell { state, ship }
    }

    pub const fn water() -> Self {
        Cell {
            state: CellState::Water,
            ship: None,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::water()
    }
}
