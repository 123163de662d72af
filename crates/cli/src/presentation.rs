// crates/cli/src/presentation.rs
use crate::error::Result;
use std::io::Write;
use wc_engine::options::OutputFormat;
use wc_engine::stats::Tally;

/// Write one statistic in the requested format.
pub fn write_tally<W: Write>(out: &mut W, tally: &Tally, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{} {}", tally.count, tally.path.display())?,
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, tally)?;
            writeln!(out)?;
        }
    }
    // Each line must reach stdout before the next statistic is counted.
    out.flush()?;
    Ok(())
}
