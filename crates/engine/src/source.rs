//! The two ways a counter can look at a file.
//!
//! Byte access hands out the raw stream and never decodes. Text access
//! decodes each `\n`-terminated segment as UTF-8, so only the textual
//! statistics can fail with [`EngineError::Decode`].

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Open `path` as a buffered raw byte stream.
pub fn open_bytes(path: &Path) -> Result<BufReader<File>> {
    log::debug!("opening {} as bytes", path.display());
    let file = File::open(path).map_err(|e| EngineError::read(path, e))?;
    Ok(BufReader::new(file))
}

/// Read the whole file into memory without decoding.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    log::debug!("reading {} as bytes", path.display());
    std::fs::read(path).map_err(|e| EngineError::read(path, e))
}

/// Decoded view of a file, one `\n`-terminated segment at a time.
///
/// A `\n` byte never occurs inside a multi-byte UTF-8 sequence, so every
/// segment of a valid file decodes on its own.
pub struct TextLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
}

impl TextLines<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("opening {} as text", path.display());
        let file = File::open(path).map_err(|e| EngineError::read(path, e))?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            reader,
            path: path.to_path_buf(),
            buf: Vec::new(),
        }
    }

    /// The next segment including its `\n` terminator, if any.
    ///
    /// Returns `Ok(None)` at end of file.
    pub fn next_segment(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| EngineError::read(&self.path, e))?;
        if read == 0 {
            return Ok(None);
        }
        std::str::from_utf8(&self.buf)
            .map(Some)
            .map_err(|e| EngineError::decode(&self.path, e))
    }

    /// Fold every segment of the file into an accumulator.
    pub fn try_fold<B, F>(mut self, init: B, mut f: F) -> Result<B>
    where
        F: FnMut(B, &str) -> B,
    {
        let mut acc = init;
        while let Some(segment) = self.next_segment()? {
            acc = f(acc, segment);
        }
        Ok(acc)
    }
}
