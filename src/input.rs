use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::process_results;

use crate::error::Result;

/// Open `path`, feed every line through `line_value` and return the sum.
///
/// The first failure (unreadable file, broken read, rejected line) aborts
/// the whole sum. The handle is dropped when the iteration ends.
pub fn sum_file<P, F>(path: P, mut line_value: F) -> Result<u64>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> Result<u64>,
{
    let path = path.as_ref();
    log::debug!("reading {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let values = reader.lines().map(|line| {
        let line = line?;
        match line_value(&line) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::debug!("rejected line {line:?}: {e}");
                Err(e)
            }
        }
    });

    let total = process_results(values, |values| values.sum())?;
    log::debug!("{} summed to {total}", path.display());
    Ok(total)
}
