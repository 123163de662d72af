use crate::options::Statistic;
use serde::Serialize;
use std::path::PathBuf;

/// One computed statistic for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub kind: Statistic,
    pub count: usize,
    pub path: PathBuf,
}

impl Tally {
    pub fn new(kind: Statistic, count: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            count,
            path: path.into(),
        }
    }
}
