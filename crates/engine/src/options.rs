use serde::{Deserialize, Serialize};
use std::fmt;

/// A single statistic the counter knows how to compute.
///
/// The declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Bytes,
    Lines,
    Words,
    Characters,
}

impl Statistic {
    pub const ALL: [Self; 4] = [Self::Bytes, Self::Lines, Self::Words, Self::Characters];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Characters => "characters",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `<count> <path>` per line
    #[default]
    Plain,
    /// One JSON object per line
    Jsonl,
}
