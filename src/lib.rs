// Library interface for advent-solver
// This allows integration tests to access internal modules

pub mod calibration;
pub mod cli;
pub mod cubes;
pub mod error;
pub mod input;

// Re-export commonly used functions for easier testing
pub use calibration::{extract_digits, extract_digits_spelled, line_value, sum_calibration};
pub use cubes::{
    check_game, check_round, max_cubes, parse_game, parse_line, parse_round, power,
    sum_possible_ids, sum_powers,
};
pub use error::{PuzzleError, Result};
pub use input::sum_file;
