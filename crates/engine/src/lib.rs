// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
pub mod error;
pub mod options;
pub mod source;
pub mod stats;

pub use crate::counter::{count, count_bytes, count_characters, count_lines, count_words};

use crate::config::Config;
use crate::error::EngineError;
use crate::stats::Tally;

/// Run every statistic enabled in `config` against its file.
///
/// Statistics are computed one at a time in output order, and each result is
/// handed to `emit` before the next one starts. The first failure stops the
/// run; anything already emitted stays emitted.
///
/// # Errors
///
/// Returns the first counting error, or the first error returned by `emit`.
pub fn run<F, E>(config: &Config, mut emit: F) -> Result<(), E>
where
    F: FnMut(Tally) -> Result<(), E>,
    E: From<EngineError>,
{
    for kind in config.selection.resolve().kinds() {
        let count = counter::count(kind, &config.path)?;
        log::trace!("{kind} = {count} for {}", config.path.display());
        emit(Tally::new(kind, count, &config.path))?;
    }
    Ok(())
}

/// Collect every enabled statistic, stopping at the first failure.
///
/// # Errors
///
/// Returns the first counting error.
pub fn collect(config: &Config) -> error::Result<Vec<Tally>> {
    let mut tallies = Vec::new();
    run(config, |tally| {
        tallies.push(tally);
        Ok::<_, EngineError>(())
    })?;
    Ok(tallies)
}
