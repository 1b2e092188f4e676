use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent puzzle sum CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum the first/last digit value of every line in a calibration document
    Calibration {
        /// Input file for both passes (defaults to 1a_input / 1b_input)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
    /// Check cube games against the bag limits and sum ids and powers
    Cubes {
        /// Input file for both passes (defaults to 2a_input / 2b_input)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure() {
        // Verify CLI structure can be created and accessed
        let cli = Cli {
            command: Commands::Cubes {
                input: Some(PathBuf::from("/path/to/games.txt")),
            },
        };

        match cli.command {
            Commands::Cubes { input: Some(path) } => {
                assert_eq!(path, PathBuf::from("/path/to/games.txt"));
            }
            _ => panic!("Expected cubes with a path"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["advent-solver"]).is_err());
    }

    #[test]
    fn test_calibration_without_override() {
        let cli = Cli::try_parse_from(["advent-solver", "calibration"]).unwrap();
        match cli.command {
            Commands::Calibration { input } => assert_eq!(input, None),
            other => panic!("Expected calibration, got {other:?}"),
        }
    }

    #[test]
    fn test_short_input_flag() {
        let cli = Cli::try_parse_from(["advent-solver", "cubes", "-i", "my_games.txt"]).unwrap();
        match cli.command {
            Commands::Cubes { input } => {
                assert_eq!(input, Some(PathBuf::from("my_games.txt")));
            }
            other => panic!("Expected cubes, got {other:?}"),
        }
    }

    #[test]
    fn test_long_input_flag() {
        let cli = Cli::try_parse_from(["advent-solver", "calibration", "--input", "doc.txt"])
            .unwrap();
        match cli.command {
            Commands::Calibration { input } => {
                assert_eq!(input, Some(PathBuf::from("doc.txt")));
            }
            other => panic!("Expected calibration, got {other:?}"),
        }
    }
}
