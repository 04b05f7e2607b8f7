//! Match coordinator: two grids, turn order and phase changes.
//!
//! The coordinator never advances on its own. Every transition is the result
//! of one of the command methods (`place`, `select`, `commit_selection`,
//! `fire`, `end_turn`, ...) issued by the caller.

use alloc::string::String;
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::cell::{CellState, ShipId};
use crate::common::MatchError;
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::ship::Ship;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::First => write!(f, "player 1"),
            PlayerId::Second => write!(f, "player 2"),
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// `active` is placing ships on their own grid.
    SettingUp { active: PlayerId },
    /// `active` fires at the other grid; one shot per turn.
    InCombat { active: PlayerId, shot_fired: bool },
    Finished { winner: PlayerId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    grids: [Grid; 2],
    phase: MatchPhase,
    /// Ship being selected cell by cell by the active player during setup.
    pending_ship: Option<Ship>,
}

impl Match {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_names(config, "Player 1", "Player 2")
    }

    pub fn with_names(
        config: &GameConfig,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Match {
            grids: [Grid::new(first, config), Grid::new(second, config)],
            phase: MatchPhase::SettingUp {
                active: PlayerId::First,
            },
            pending_ship: None,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Player whose turn it is; `None` once the match is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::SettingUp { active } | MatchPhase::InCombat { active, .. } => Some(active),
            MatchPhase::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn grid(&self, player: PlayerId) -> &Grid {
        &self.grids[player.index()]
    }

    /// Grid owned by the active player.
    pub fn own_grid(&self) -> Option<&Grid> {
        self.active_player().map(|player| self.grid(player))
    }

    /// Grid the active player is firing at, during combat.
    pub fn target_grid(&self) -> Option<&Grid> {
        match self.phase {
            MatchPhase::InCombat { active, .. } => Some(self.grid(active.other())),
            _ => None,
        }
    }

    pub fn pending_ship(&self) -> Option<&Ship> {
        self.pending_ship.as_ref()
    }

    fn setup_player(&self) -> Result<PlayerId, MatchError> {
        match self.phase {
            MatchPhase::SettingUp { active } => Ok(active),
            MatchPhase::InCombat { .. } => Err(MatchError::WrongPhase),
            MatchPhase::Finished { .. } => Err(MatchError::Finished),
        }
    }

    /// Commit `ship` to the active player's grid.
    ///
    /// Any selection in progress is dropped first.
    pub fn place(&mut self, ship: &Ship) -> Result<ShipId, MatchError> {
        let active = self.setup_player()?;
        self.discard_selection();
        let id = self.grids[active.index()].place(ship)?;
        self.after_placement();
        Ok(id)
    }

    /// Place the active player's remaining fleet at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        let active = self.setup_player()?;
        self.discard_selection();
        self.grids[active.index()].place_fleet_randomly(rng)?;
        self.after_placement();
        Ok(())
    }

    /// Add (`row`, `col`) to the ship being selected, starting a new one if
    /// there is none.
    ///
    /// A selection that would break the placement rules is dropped entirely;
    /// a cell that cannot extend the ship leaves the selection as it was.
    pub fn select(&mut self, row: usize, col: usize) -> Result<(), MatchError> {
        let active = self.setup_player()?;
        let grid = &self.grids[active.index()];
        if !grid.in_bounds(row, col) {
            return Err(MatchError::OutOfBounds { row, col });
        }
        if grid.state_at(row, col) != CellState::Water {
            return Err(MatchError::CellOccupied { row, col });
        }
        let candidate = match self.pending_ship {
            None => Ship::single(row, col),
            Some(mut ship) => {
                ship.extend(row, col)?;
                ship
            }
        };
        if !grid.check_placement(&candidate) {
            debug!("selection {:?} rejected", candidate);
            self.discard_selection();
            return Err(MatchError::InvalidPlacement);
        }
        self.grids[active.index()].mark_selected(row, col);
        self.pending_ship = Some(candidate);
        Ok(())
    }

    /// Commit the ship being selected.
    pub fn commit_selection(&mut self) -> Result<ShipId, MatchError> {
        let active = self.setup_player()?;
        let ship = self.pending_ship.ok_or(MatchError::NoSelection)?;
        match self.grids[active.index()].place(&ship) {
            Ok(id) => {
                self.pending_ship = None;
                self.after_placement();
                Ok(id)
            }
            Err(err) => {
                self.discard_selection();
                Err(err.into())
            }
        }
    }

    /// Drop the ship being selected and clear its cells.
    pub fn cancel_selection(&mut self) -> Result<(), MatchError> {
        self.setup_player()?;
        if self.pending_ship.is_none() {
            return Err(MatchError::NoSelection);
        }
        self.discard_selection();
        Ok(())
    }

    fn discard_selection(&mut self) {
        let (Some(ship), Ok(active)) = (self.pending_ship.take(), self.setup_player()) else {
            return;
        };
        let grid = &mut self.grids[active.index()];
        for (row, col) in ship.cells() {
            grid.clear_selected(row, col);
        }
    }

    /// Hand setup to the other player once the active fleet is placed, or
    /// start combat when both fleets are.
    fn after_placement(&mut self) {
        let MatchPhase::SettingUp { active } = self.phase else {
            return;
        };
        if self.grids[active.index()].remaining_fleet_count() > 0 {
            return;
        }
        self.discard_selection();
        let other = active.other();
        if self.grids[other.index()].remaining_fleet_count() > 0 {
            info!("{} finished setup, {} to place", active, other);
            self.phase = MatchPhase::SettingUp { active: other };
            return;
        }
        for grid in self.grids.iter_mut() {
            let started = grid.begin_combat();
            debug_assert!(started.is_ok(), "begin_combat refused: {:?}", started);
        }
        info!("both fleets placed, {} opens fire", active);
        self.phase = MatchPhase::InCombat {
            active,
            shot_fired: false,
        };
    }

    /// Fire the active player's shot for this turn at the opponent's grid.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<CellState, MatchError> {
        let active = match self.phase {
            MatchPhase::InCombat {
                shot_fired: true, ..
            } => return Err(MatchError::ShotAlreadyFired),
            MatchPhase::InCombat { active, .. } => active,
            MatchPhase::SettingUp { .. } => return Err(MatchError::WrongPhase),
            MatchPhase::Finished { .. } => return Err(MatchError::Finished),
        };
        let target = &mut self.grids[active.other().index()];
        if !target.in_bounds(row, col) {
            return Err(MatchError::OutOfBounds { row, col });
        }
        if target.state_at(row, col).is_resolved() {
            return Err(MatchError::AlreadyTargeted { row, col });
        }
        let result = target.resolve_shot(row, col);
        debug!("{} fired at ({}, {}): {:?}", active, row, col, result);
        self.phase = if target.remaining_fleet_count() == 0 {
            info!("{} sank the last ship", active);
            MatchPhase::Finished { winner: active }
        } else {
            MatchPhase::InCombat {
                active,
                shot_fired: true,
            }
        };
        Ok(result)
    }

    /// Pass the turn to the other player after this turn's shot.
    pub fn end_turn(&mut self) -> Result<PlayerId, MatchError> {
        match self.phase {
            MatchPhase::InCombat {
                active,
                shot_fired: true,
            } => {
                let next = active.other();
                self.phase = MatchPhase::InCombat {
                    active: next,
                    shot_fired: false,
                };
                Ok(next)
            }
            MatchPhase::InCombat { .. } => Err(MatchError::NoShotFired),
            MatchPhase::SettingUp { .. } => Err(MatchError::WrongPhase),
            MatchPhase::Finished { .. } => Err(MatchError::Finished),
        }
    }
}
