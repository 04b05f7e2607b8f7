//! Ship geometry and damage bookkeeping.

use core::fmt;

use crate::common::ShipError;

/// Direction in which a ship runs across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Single cell, not yet extended.
    Undefined,
    Horizontal,
    Vertical,
}

/// A ship spanning `start..=end` along one axis, with its damage state.
///
/// Geometry is kept as the two end cells plus a direction so that a ship can
/// be grown incrementally while it is being selected. Once committed to a
/// grid only the damage fields change.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
    direction: Direction,
    undestroyed_count: usize,
    is_sunk: bool,
}

/// Inclusive cell count from `start` to `end`; zero when `end < start`.
fn span(start: usize, end: usize) -> usize {
    end.checked_sub(start).map_or(0, |d| d.saturating_add(1))
}

impl Ship {
    /// Build a ship from its start cell, end cell and direction.
    pub fn new(start: (usize, usize), end: (usize, usize), direction: Direction) -> Self {
        let mut ship = Ship {
            start_row: start.0,
            start_col: start.1,
            end_row: end.0,
            end_col: end.1,
            direction,
            undestroyed_count: 0,
            is_sunk: false,
        };
        ship.undestroyed_count = ship.length();
        ship
    }

    /// A length-1 ship with no direction yet.
    pub fn single(row: usize, col: usize) -> Self {
        Self::new((row, col), (row, col), Direction::Undefined)
    }

    /// A ship of `length` cells running right from (`row`, `col`).
    pub fn horizontal(row: usize, col: usize, length: usize) -> Self {
        let end_col = col.saturating_add(length.max(1) - 1);
        Self::new((row, col), (row, end_col), Direction::Horizontal)
    }

    /// A ship of `length` cells running down from (`row`, `col`).
    pub fn vertical(row: usize, col: usize, length: usize) -> Self {
        let end_row = row.saturating_add(length.max(1) - 1);
        Self::new((row, col), (end_row, col), Direction::Vertical)
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    pub fn end(&self) -> (usize, usize) {
        (self.end_row, self.end_col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells, derived from the geometry.
    ///
    /// Malformed geometry (end before start) reports zero.
    pub fn length(&self) -> usize {
        match self.direction {
            Direction::Horizontal => span(self.start_col, self.end_col),
            Direction::Vertical => span(self.start_row, self.end_row),
            Direction::Undefined => 1,
        }
    }

    /// Cells not yet hit.
    pub fn undestroyed_count(&self) -> usize {
        self.undestroyed_count
    }

    pub fn is_sunk(&self) -> bool {
        self.is_sunk
    }

    /// True when the ship is a straight line running forward along its
    /// direction (or a single cell when the direction is undefined).
    pub fn is_well_formed(&self) -> bool {
        match self.direction {
            Direction::Horizontal => {
                self.start_row == self.end_row && self.start_col <= self.end_col
            }
            Direction::Vertical => {
                self.start_col == self.end_col && self.start_row <= self.end_row
            }
            Direction::Undefined => self.start() == self.end(),
        }
    }

    /// Coordinates the ship occupies, start to end. Yields nothing for a
    /// malformed ship.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let len = if self.is_well_formed() { self.length() } else { 0 };
        let (row, col, direction) = (self.start_row, self.start_col, self.direction);
        (0..len).map(move |i| match direction {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::Undefined => (row, col),
        })
    }

    /// Whether (`row`, `col`) is one of the ship's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Record one hit. Returns `true` if this hit sank the ship.
    pub fn apply_hit(&mut self) -> bool {
        if self.is_sunk {
            return false;
        }
        self.undestroyed_count = self.undestroyed_count.saturating_sub(1);
        if self.undestroyed_count == 0 {
            self.is_sunk = true;
        }
        self.is_sunk
    }

    /// Grow the ship by one cell at (`row`, `col`).
    ///
    /// The cell must sit directly right of or below the current end. The first
    /// extension fixes the direction.
    pub fn extend(&mut self, row: usize, col: usize) -> Result<(), ShipError> {
        if self.end_row.abs_diff(row).saturating_add(self.end_col.abs_diff(col)) != 1 {
            return Err(ShipError::NotAdjacent { row, col });
        }
        if row < self.end_row || col < self.end_col {
            return Err(ShipError::Backwards { row, col });
        }
        let direction = match self.direction {
            Direction::Undefined if row != self.start_row => Direction::Vertical,
            Direction::Undefined => Direction::Horizontal,
            Direction::Horizontal if row != self.end_row => {
                return Err(ShipError::DirectionLocked { row, col })
            }
            Direction::Vertical if col != self.end_col => {
                return Err(ShipError::DirectionLocked { row, col })
            }
            fixed => fixed,
        };
        self.direction = direction;
        self.end_row = row;
        self.end_col = col;
        self.undestroyed_count = self.length();
        Ok(())
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ ({}, {}) -> ({}, {}), direction: {:?}, length: {}, undestroyed: {}, sunk: {} }}",
            self.start_row,
            self.start_col,
            self.end_row,
            self.end_col,
            self.direction,
            self.length(),
            self.undestroyed_count,
            self.is_sunk,
        )
    }
}
