#![cfg(feature = "std")]

//! Terminal front end for a hot-seat match: grid printing, coordinate
//! parsing and the command loop.

use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{CellState, Grid, Match, MatchPhase, PlayerId};

/// Format a coordinate as `A1`-style text.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col = (b'A' + col as u8) as char;
    format!("{}{}", col, row + 1)
}

/// Parse `A1`-style text into (row, col) for a grid of `size`.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), String> {
    let last_col = (b'A' + size as u8 - 1) as char;
    let mut chars = input.trim().chars();
    let col_ch = chars
        .next()
        .ok_or("Empty input")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

fn cell_char(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Water => '.',
        CellState::Ship if reveal => 'S',
        CellState::Ship => '.',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
        CellState::Miss => 'o',
        CellState::Selected => '+',
        CellState::Invalid => '!',
    }
}

/// Print `grid`; ship cells are hidden unless `reveal` is set.
pub fn print_grid<W: Write>(out: &mut W, grid: &Grid, reveal: bool) -> std::io::Result<()> {
    write!(out, "   ")?;
    for c in 0..grid.size() {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..grid.size() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..grid.size() {
            write!(out, " {}", cell_char(grid.state_at(r, c), reveal))?;
        }
        writeln!(out)?;
    }
    if reveal {
        writeln!(out, "    Legend: S=Ship  +=Selected  X=Hit  #=Sunk  o=Miss  .=Water")
    } else {
        writeln!(out, "    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown")
    }
}

/// Print the per-length fleet counts of `grid`.
pub fn print_fleet<W: Write>(out: &mut W, grid: &Grid, label: &str) -> std::io::Result<()> {
    write!(out, "    {}:", label)?;
    for (length, count) in grid.remaining_fleet().iter().rev() {
        write!(out, "  {}x length {}", count, length)?;
    }
    writeln!(out)
}

fn print_turn<W: Write>(out: &mut W, game: &Match) -> std::io::Result<()> {
    match game.phase() {
        MatchPhase::SettingUp { active } => {
            let grid = game.grid(active);
            writeln!(out, "\n== {} places ships ==", grid.player_name())?;
            print_grid(out, grid, true)?;
            print_fleet(out, grid, "To place")?;
            writeln!(
                out,
                "    Commands: <cell> select, add, reset, random, quit"
            )
        }
        MatchPhase::InCombat { active, shot_fired } => {
            let target = game.grid(active.other());
            writeln!(
                out,
                "\n== {} fires at {} ==",
                game.grid(active).player_name(),
                target.player_name()
            )?;
            print_grid(out, target, false)?;
            print_fleet(out, target, "Afloat")?;
            if shot_fired {
                writeln!(out, "    Commands: next, quit")
            } else {
                writeln!(out, "    Commands: <cell> fire, quit")
            }
        }
        MatchPhase::Finished { winner } => {
            writeln!(out, "\n== {} won ==", game.grid(winner).player_name())?;
            for player in [PlayerId::First, PlayerId::Second] {
                writeln!(out, "{}:", game.grid(player).player_name())?;
                print_grid(out, game.grid(player), true)?;
            }
            Ok(())
        }
    }
}

/// Run a hot-seat match reading commands from `input` until it is won,
/// the input ends or a player quits. Returns the winner, if any.
pub fn run_hotseat<I, W, R>(
    game: &mut Match,
    input: I,
    out: &mut W,
    rng: &mut R,
) -> anyhow::Result<Option<PlayerId>>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut lines = input.lines();
    loop {
        print_turn(out, game)?;
        if let Some(winner) = game.winner() {
            return Ok(Some(winner));
        }
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        let before = game.active_player();
        let outcome = match (game.phase(), command.to_ascii_lowercase().as_str()) {
            (MatchPhase::SettingUp { .. }, "add") => game.commit_selection().map(|_| None),
            (MatchPhase::SettingUp { .. }, "reset") => game.cancel_selection().map(|_| None),
            (MatchPhase::SettingUp { .. }, "random") => {
                game.place_fleet_randomly(rng).map(|_| None)
            }
            (MatchPhase::InCombat { .. }, "next") => game.end_turn().map(|_| None),
            (phase, _) => {
                let size = game.grid(PlayerId::First).size();
                match parse_coord(command, size) {
                    Ok((row, col)) => match phase {
                        MatchPhase::SettingUp { .. } => game.select(row, col).map(|_| None),
                        _ => game.fire(row, col).map(|state| Some((row, col, state))),
                    },
                    Err(msg) => {
                        writeln!(out, "Invalid input: {}", msg)?;
                        continue;
                    }
                }
            }
        };
        match outcome {
            Ok(Some((row, col, state))) => {
                writeln!(out, "Shot at {} -> {:?}", coord_to_string(row, col), state)?
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "Rejected: {}", err)?,
        }
        if game.winner().is_none() && game.active_player() != before {
            writeln!(out, "\nPass the device to the next player.")?;
        }
    }
}
