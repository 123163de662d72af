// crates/cli/src/config.rs
use crate::args::Args;
pub use wc_engine::config::{Config, ConfigBuilder, Selection, SelectionBuilder};

impl From<&Args> for Selection {
    fn from(args: &Args) -> Self {
        Self {
            bytes: args.bytes,
            lines: args.lines,
            words: args.words,
            characters: args.chars,
        }
        .resolve()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            selection: Selection::from(&args),
            format: args.format.into(),
            path: args.file,
        }
    }
}
