// One record per line: `Game <id>: 3 blue, 4 red; 1 red, 2 green; 2 green`.
// Rounds are separated by ';', cube entries inside a round by ','.

use std::path::Path;

use crate::error::{PuzzleError, Result};
use crate::input;

pub const DEFAULT_IDS_INPUT: &str = "2a_input";
pub const DEFAULT_POWERS_INPUT: &str = "2b_input";

/// Bag limits a possible game never exceeds in any round.
pub const LIMITS: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

/// Cube counts shown in one round. Colors absent from the round stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub rounds: Vec<CubeSet>,
}

pub fn parse_round(text: &str) -> Result<CubeSet> {
    let mut cubes = CubeSet::default();
    for entry in text.split(',') {
        let fields: Vec<&str> = entry.split_whitespace().collect();
        let [count, color] = fields[..] else {
            return Err(PuzzleError::CubeEntry(entry.trim().to_string()));
        };
        let count: u32 = count.parse().map_err(|source| PuzzleError::CubeCount {
            text: count.to_string(),
            source,
        })?;
        // A repeated color keeps the last count
        match color {
            "red" => cubes.red = count,
            "green" => cubes.green = count,
            "blue" => cubes.blue = count,
            other => return Err(PuzzleError::UnknownColor(other.to_string())),
        }
    }
    Ok(cubes)
}

pub fn parse_game(text: &str) -> Result<Vec<CubeSet>> {
    text.split(';').map(parse_round).collect()
}

/// Parse one record line. The id is the second whitespace token of the
/// header before ':'; the leading word itself is not checked.
pub fn parse_line(line: &str) -> Result<Game> {
    let (header, game) = line
        .split_once(':')
        .ok_or_else(|| PuzzleError::GameHeader(line.to_string()))?;
    let id = header
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| PuzzleError::GameHeader(header.to_string()))?;
    Ok(Game {
        id,
        rounds: parse_game(game)?,
    })
}

pub fn check_round(round: &CubeSet) -> bool {
    round.red <= LIMITS.red && round.green <= LIMITS.green && round.blue <= LIMITS.blue
}

pub fn check_game(rounds: &[CubeSet]) -> bool {
    rounds.iter().all(check_round)
}

/// Per-color maximum over all rounds of a game.
pub fn max_cubes(rounds: &[CubeSet]) -> CubeSet {
    rounds.iter().fold(CubeSet::default(), |acc, round| CubeSet {
        red: acc.red.max(round.red),
        green: acc.green.max(round.green),
        blue: acc.blue.max(round.blue),
    })
}

/// Product of the per-color maxima. A game that never shows one of the
/// colors has a maximum of 0 there, which collapses the product to 0.
pub fn power(cubes: &CubeSet) -> u64 {
    u64::from(cubes.red) * u64::from(cubes.green) * u64::from(cubes.blue)
}

pub fn sum_possible_ids<P: AsRef<Path>>(path: P) -> Result<u64> {
    input::sum_file(path, |line| {
        let game = parse_line(line)?;
        if check_game(&game.rounds) {
            Ok(u64::from(game.id))
        } else {
            log::debug!("game {} exceeds the bag limits", game.id);
            Ok(0)
        }
    })
}

pub fn sum_powers<P: AsRef<Path>>(path: P) -> Result<u64> {
    input::sum_file(path, |line| {
        let game = parse_line(line)?;
        let maxima = max_cubes(&game.rounds);
        if maxima.red == 0 || maxima.green == 0 || maxima.blue == 0 {
            log::debug!("game {} never shows every color, its power is 0", game.id);
        }
        Ok(power(&maxima))
    })
}
