use crate::options::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wc",
    version = crate::VERSION,
    about = "Count bytes, lines, words and characters in a file"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Count bytes
    #[arg(short = 'c', long = "bytes")]
    pub bytes: bool,

    /// Count lines
    #[arg(short = 'l', long = "lines")]
    pub lines: bool,

    /// Count words
    #[arg(short = 'w', long = "words")]
    pub words: bool,

    /// Count characters (UTF-8 scalar values)
    #[arg(short = 'm', long = "chars")]
    pub chars: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// The file to be processed
    pub file: PathBuf,
}
