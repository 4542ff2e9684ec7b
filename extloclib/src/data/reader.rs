//! Per-file line counting.
//!
//! A file is read whole and decoded as UTF-8. Lines are split with universal
//! newline rules and a line counts as code when anything but whitespace is
//! left after trimming.

use std::path::Path;

use crate::error::ExtlocError;
use crate::Result;

use super::stats::FileCount;

/// Line boundaries recognised when splitting text.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// \x1f is whitespace for trimming but not a line boundary.
fn is_trim_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Iterator over the lines of a string, without their terminators.
///
/// `\r\n` is a single terminator. A terminator at the very end of the text
/// does not start another (empty) line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((idx, c)) => {
                let line = &self.rest[..idx];
                let mut end = idx + c.len_utf8();
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split text into lines using universal newline rules.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Whether a line has any non-whitespace content.
pub fn is_code_line(line: &str) -> bool {
    !line.trim_matches(is_trim_whitespace).is_empty()
}

/// Count total and non-blank lines in a string.
pub fn count_lines(text: &str) -> FileCount {
    let mut count = FileCount::new();
    for line in split_lines(text) {
        count.lines += 1;
        if is_code_line(line) {
            count.lines_code += 1;
        }
    }
    count
}

/// Count total and non-blank lines in a file.
///
/// Returns [`ExtlocError::Decode`] when the content is not valid UTF-8 and
/// [`ExtlocError::FileRead`] when the file cannot be opened or read.
///
/// # Example
///
/// ```rust
/// use extloclib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("a.py");
/// fs::write(&path, "x\n\ny\n").unwrap();
///
/// let count = count_file(&path).unwrap();
/// assert_eq!(count.lines, 3);
/// assert_eq!(count.lines_code, 2);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<FileCount> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| ExtlocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|_| ExtlocError::Decode {
        path: path.to_path_buf(),
    })?;

    Ok(count_lines(text))
}
