use advent_solver::calibration;
use advent_solver::cli::{Commands, parse_cli};
use advent_solver::cubes;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let cli = parse_cli();
    match cli.command {
        Commands::Calibration { input } => run_calibration(input.as_deref()),
        Commands::Cubes { input } => run_cubes(input.as_deref()),
    }
}

fn run_calibration(input: Option<&Path>) {
    let literal = input.unwrap_or(Path::new(calibration::DEFAULT_LITERAL_INPUT));
    match calibration::sum_calibration(literal, calibration::extract_digits) {
        Ok(sum) => println!("sum of calibration values: {sum}"),
        Err(e) => {
            eprintln!("Failed to sum calibration document '{}': {e}", literal.display());
            process::exit(1);
        }
    }

    let spelled = input.unwrap_or(Path::new(calibration::DEFAULT_SPELLED_INPUT));
    match calibration::sum_calibration(spelled, calibration::extract_digits_spelled) {
        Ok(sum) => println!("sum of calibration values with spelled digits: {sum}"),
        Err(e) => {
            eprintln!("Failed to sum calibration document '{}': {e}", spelled.display());
            process::exit(1);
        }
    }
}

fn run_cubes(input: Option<&Path>) {
    let ids_path = input.unwrap_or(Path::new(cubes::DEFAULT_IDS_INPUT));
    match cubes::sum_possible_ids(ids_path) {
        Ok(sum) => println!("sum of ids: {sum}"),
        Err(e) => {
            eprintln!("Failed to sum game ids from '{}': {e}", ids_path.display());
            process::exit(1);
        }
    }

    let powers_path = input.unwrap_or(Path::new(cubes::DEFAULT_POWERS_INPUT));
    match cubes::sum_powers(powers_path) {
        Ok(sum) => println!("sum of powers of sets of cubes: {sum}"),
        Err(e) => {
            eprintln!("Failed to sum powers from '{}': {e}", powers_path.display());
            process::exit(1);
        }
    }
}
