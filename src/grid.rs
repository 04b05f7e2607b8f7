//! One player's grid: cells, placed ships and fleet bookkeeping.
//!
//! `remaining_fleet` always holds the fleet's outstanding obligation for the
//! current phase. During [`Phase::Setup`] it counts ships still to be placed;
//! [`Grid::begin_combat`] resets it to the full inventory and from then on it
//! counts ships still afloat. `remaining_fleet_count() == 0` therefore means
//! "fleet placed" in setup and "fleet destroyed" in combat.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::cell::{Cell, CellState, ShipId};
use crate::common::GridError;
use crate::config::{Fleet, GameConfig};
use crate::ship::Ship;

const PLACEMENT_ATTEMPTS: usize = 100;
const FLEET_ATTEMPTS: usize = 50;

/// Phase of a single grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Setup,
    Combat,
}

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    player_name: String,
    size: usize,
    /// Row-major, `size * size`.
    cells: Vec<Cell>,
    /// Ship store; cells refer into it by [`ShipId`]. Removed ships leave a
    /// `None` slot that the next placement reuses.
    ships: Vec<Option<Ship>>,
    inventory: Fleet,
    remaining_fleet: Fleet,
    phase: Phase,
}

/// In-bounds 8-neighbourhood of (`row`, `col`), excluding the cell itself.
fn neighbours(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(size - 1);
    rows.flat_map(move |r| {
        (col.saturating_sub(1)..=(col + 1).min(size - 1)).map(move |c| (r, c))
    })
    .filter(move |&cell| cell != (row, col))
}

impl Grid {
    /// Create an all-water grid in setup phase with the full fleet to place.
    pub fn new(player_name: impl Into<String>, config: &GameConfig) -> Self {
        let size = config.size();
        Grid {
            player_name: player_name.into(),
            size,
            cells: alloc::vec![Cell::water(); size * size],
            ships: Vec::new(),
            inventory: config.fleet().clone(),
            remaining_fleet: config.fleet().clone(),
            phase: Phase::Setup,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// State of (`row`, `col`); [`CellState::Invalid`] outside the grid.
    pub fn state_at(&self, row: usize, col: usize) -> CellState {
        self.cell(row, col)
            .map_or(CellState::Invalid, |cell| cell.state())
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    fn is_ship(&self, row: usize, col: usize) -> bool {
        self.state_at(row, col) == CellState::Ship
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0).and_then(Option::as_ref)
    }

    /// Placed ships with their handles.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|ship| (ShipId(i), ship)))
    }

    /// Fleet inventory this grid was created with.
    pub fn inventory(&self) -> &Fleet {
        &self.inventory
    }

    /// Outstanding ships per length: unplaced in setup, afloat in combat.
    pub fn remaining_fleet(&self) -> &Fleet {
        &self.remaining_fleet
    }

    pub fn remaining_fleet_count(&self) -> usize {
        self.remaining_fleet.values().sum()
    }

    /// Whether `ship` may be placed: every cell inside the grid, not a ship
    /// cell, and with no ship cell among its eight neighbours.
    pub fn check_placement(&self, ship: &Ship) -> bool {
        if !ship.is_well_formed() {
            return false;
        }
        ship.cells().all(|(row, col)| {
            if !self.in_bounds(row, col) || self.is_ship(row, col) {
                return false;
            }
            match neighbours(self.size, row, col).find(|&(r, c)| self.is_ship(r, c)) {
                Some((r, c)) => {
                    debug!(
                        "{}: ship at ({}, {}) would touch ship cell ({}, {})",
                        self.player_name, row, col, r, c
                    );
                    false
                }
                None => true,
            }
        })
    }

    /// Commit `ship` to the grid, returning its handle.
    ///
    /// Nothing changes on error.
    pub fn place(&mut self, ship: &Ship) -> Result<ShipId, GridError> {
        if self.phase != Phase::Setup {
            return Err(GridError::WrongPhase);
        }
        if !ship.is_well_formed() {
            return Err(GridError::MalformedShip);
        }
        let length = ship.length();
        let available = match self.remaining_fleet.get(&length) {
            Some(&count) if count > 0 => count,
            _ => return Err(GridError::ShipUnavailable { length }),
        };
        if !self.check_placement(ship) {
            return Err(GridError::InvalidPlacement);
        }
        self.remaining_fleet.insert(length, available - 1);

        let placed = Ship::new(ship.start(), ship.end(), ship.direction());
        let id = match self.ships.iter().position(Option::is_none) {
            Some(slot) => {
                self.ships[slot] = Some(placed);
                ShipId(slot)
            }
            None => {
                self.ships.push(Some(placed));
                ShipId(self.ships.len() - 1)
            }
        };
        for (row, col) in placed.cells() {
            self.set(row, col, Cell::new(CellState::Ship, Some(id)));
        }
        debug!("{}: placed {:?} as {:?}", self.player_name, placed, id);
        Ok(id)
    }

    /// Boolean form of [`Grid::place`].
    pub fn commit_placement(&mut self, ship: &Ship) -> bool {
        match self.place(ship) {
            Ok(_) => true,
            Err(err) => {
                debug!("{}: placement of {:?} rejected: {}", self.player_name, ship, err);
                false
            }
        }
    }

    /// Take `ship` back off the grid during setup.
    ///
    /// If the start cell holds a committed ship, that ship leaves the store and
    /// its length goes back into the inventory. Cells of the geometry that are
    /// `Selected` are cleared as well, so an uncommitted selection can be
    /// cancelled through the same call. Returns `false` when nothing was
    /// removed.
    pub fn remove_placement(&mut self, ship: &Ship) -> bool {
        if self.phase != Phase::Setup {
            debug!("{}: remove_placement outside setup", self.player_name);
            return false;
        }
        if !ship.is_well_formed() || !ship.cells().all(|(r, c)| self.in_bounds(r, c)) {
            return false;
        }
        let mut removed = false;
        let (row, col) = ship.start();
        let committed = self
            .cell(row, col)
            .filter(|cell| cell.state() == CellState::Ship)
            .and_then(|cell| cell.ship());
        if let Some(id) = committed {
            if let Some(stored) = self.ships.get_mut(id.0).and_then(Option::take) {
                if let Some(count) = self.remaining_fleet.get_mut(&stored.length()) {
                    *count += 1;
                }
                for (r, c) in stored.cells() {
                    self.set(r, c, Cell::water());
                }
                debug!("{}: removed {:?}", self.player_name, stored);
                removed = true;
            }
        }
        for (r, c) in ship.cells() {
            removed |= self.clear_selected(r, c);
        }
        if !removed {
            debug!("{}: nothing to remove at {:?}", self.player_name, ship);
        }
        removed
    }

    /// Mark a water cell as part of the selection being built.
    pub fn mark_selected(&mut self, row: usize, col: usize) -> bool {
        if self.phase != Phase::Setup || self.state_at(row, col) != CellState::Water {
            return false;
        }
        self.set(row, col, Cell::new(CellState::Selected, None));
        true
    }

    /// Turn a selected cell back into water.
    pub fn clear_selected(&mut self, row: usize, col: usize) -> bool {
        if self.state_at(row, col) != CellState::Selected {
            return false;
        }
        self.set(row, col, Cell::water());
        true
    }

    /// Switch to combat and start counting ships afloat.
    pub fn begin_combat(&mut self) -> Result<(), GridError> {
        if self.phase != Phase::Setup {
            return Err(GridError::WrongPhase);
        }
        let remaining = self.remaining_fleet_count();
        if remaining > 0 {
            return Err(GridError::FleetIncomplete { remaining });
        }
        self.remaining_fleet = self.inventory.clone();
        self.phase = Phase::Combat;
        debug!("{}: combat started", self.player_name);
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Returns [`CellState::Invalid`] outside combat or the grid. Cells that
    /// were already resolved report their state and stay unchanged.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> CellState {
        if self.phase != Phase::Combat || !self.in_bounds(row, col) {
            debug!(
                "{}: shot at ({}, {}) rejected in {:?}",
                self.player_name, row, col, self.phase
            );
            return CellState::Invalid;
        }
        let cell = self.cells[self.index(row, col)];
        let result = match cell.state() {
            CellState::Ship => self.hit_ship(row, col, cell.ship()),
            CellState::Water => {
                self.set(row, col, Cell::new(CellState::Miss, None));
                CellState::Miss
            }
            other => other,
        };
        debug!("{}: shot at ({}, {}) -> {:?}", self.player_name, row, col, result);
        result
    }

    fn hit_ship(&mut self, row: usize, col: usize, id: Option<ShipId>) -> CellState {
        let Some(id) = id else {
            return CellState::Invalid;
        };
        let Some(ship) = self.ships.get_mut(id.0).and_then(Option::as_mut) else {
            return CellState::Invalid;
        };
        if !ship.apply_hit() {
            self.set(row, col, Cell::new(CellState::Hit, Some(id)));
            return CellState::Hit;
        }
        let sunk = *ship;
        for (r, c) in sunk.cells() {
            self.set(r, c, Cell::new(CellState::Sunk, Some(id)));
        }
        if let Some(count) = self.remaining_fleet.get_mut(&sunk.length()) {
            *count = count.saturating_sub(1);
        }
        debug!("{}: sunk {:?}", self.player_name, sunk);
        CellState::Sunk
    }

    /// A random legal placement for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, GridError> {
        if length == 0 || length > self.size {
            return Err(GridError::UnableToPlaceShip);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let ship = if rng.random() {
                let row = rng.random_range(0..self.size);
                let col = rng.random_range(0..=self.size - length);
                Ship::horizontal(row, col, length)
            } else {
                let row = rng.random_range(0..=self.size - length);
                let col = rng.random_range(0..self.size);
                Ship::vertical(row, col, length)
            };
            if self.check_placement(&ship) {
                return Ok(ship);
            }
        }
        Err(GridError::UnableToPlaceShip)
    }

    /// Place every ship still in the inventory at random, longest first.
    ///
    /// A dead end restarts from the grid as it was on entry; after repeated
    /// failures the grid is left unchanged and an error is returned.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        if self.phase != Phase::Setup {
            return Err(GridError::WrongPhase);
        }
        let original = self.clone();
        'attempt: for _ in 0..FLEET_ATTEMPTS {
            let pending: Vec<(usize, usize)> = self
                .remaining_fleet
                .iter()
                .rev()
                .map(|(&len, &count)| (len, count))
                .collect();
            for (length, count) in pending {
                for _ in 0..count {
                    let placed = self
                        .random_placement(rng, length)
                        .and_then(|ship| self.place(&ship));
                    if placed.is_err() {
                        *self = original.clone();
                        continue 'attempt;
                    }
                }
            }
            return Ok(());
        }
        Err(GridError::UnableToPlaceShip)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ player: {:?}, size: {}, phase: {:?}, remaining: {:?}",
            self.player_name, self.size, self.phase, self.remaining_fleet
        )?;
        for row in self.cells.chunks(self.size) {
            let line: String = row
                .iter()
                .map(|cell| match cell.state() {
                    CellState::Water => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Sunk => '#',
                    CellState::Miss => 'o',
                    CellState::Selected => '+',
                    CellState::Invalid => '!',
                })
                .collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
