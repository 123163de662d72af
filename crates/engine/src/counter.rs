use crate::error::{EngineError, Result};
use crate::options::Statistic;
use crate::source::{self, TextLines};
use std::io::{BufRead, ErrorKind};
use std::path::Path;

/// Compute a single statistic for `path`.
pub fn count(kind: Statistic, path: &Path) -> Result<usize> {
    match kind {
        Statistic::Bytes => count_bytes(path),
        Statistic::Lines => count_lines(path),
        Statistic::Words => count_words(path),
        Statistic::Characters => count_characters(path),
    }
}

/// Total number of bytes in the file. Never decodes.
pub fn count_bytes(path: &Path) -> Result<usize> {
    byte_len(source::open_bytes(path)?, path)
}

fn byte_len<R: BufRead>(mut reader: R, path: &Path) -> Result<usize> {
    let mut bytes = 0;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EngineError::read(path, e)),
        };
        if buf.is_empty() {
            break;
        }
        let len = buf.len();
        bytes += len;
        reader.consume(len);
    }

    Ok(bytes)
}

/// Number of lines, counting a trailing unterminated segment as one.
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
pub fn count_lines(path: &Path) -> Result<usize> {
    TextLines::open(path)?.try_fold(0, |lines, segment| lines + lines_in(segment))
}

/// Number of whitespace-separated words.
///
/// Besides Unicode `White_Space`, the information separators U+001C to
/// U+001F also split words.
pub fn count_words(path: &Path) -> Result<usize> {
    TextLines::open(path)?.try_fold(0, |words, segment| words + words_in(segment))
}

/// Number of Unicode scalar values once the whole file is decoded.
pub fn count_characters(path: &Path) -> Result<usize> {
    let bytes = source::read_bytes(path)?;
    std::str::from_utf8(&bytes).map_err(|e| EngineError::decode(path, e))?;
    Ok(bytecount::num_chars(&bytes))
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn words_in(segment: &str) -> usize {
    segment
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

// `segment` is one `read_until(b'\n')` chunk, so any `\r` inside it other
// than a CRLF terminator is a line break of its own.
fn lines_in(segment: &str) -> usize {
    match segment.strip_suffix('\n') {
        Some(body) => {
            let body = body.strip_suffix('\r').unwrap_or(body);
            bytecount::count(body.as_bytes(), b'\r') + 1
        }
        None => {
            let breaks = bytecount::count(segment.as_bytes(), b'\r');
            if segment.ends_with('\r') { breaks } else { breaks + 1 }
        }
    }
}
