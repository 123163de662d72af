// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::Config;
use crate::error::Result;
use std::io::Write;

/// Count everything `config` asks for and write each result to `out` as soon
/// as it is known.
///
/// # Errors
///
/// Returns the first counting or write failure.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    wc_engine::run(config, |tally| {
        presentation::write_tally(&mut *out, &tally, config.format)
    })
}
