//! Image file I/O.
//!
//! Instruction and data images share one text format: each 32-bit word is a
//! line of exactly 8 upper-case, zero-padded hex digits terminated by `\n`.
//! There is no header and no trailing blank line.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::constants::WORD_HEX_DIGITS;
use crate::common::{Error, Result};

/// Renders words in the image format.
///
/// # Examples
///
/// ```
/// use mesivec_core::image::io::format_words;
///
/// assert_eq!(format_words(&[2, 0x1500_0000]), "00000002\n15000000\n");
/// ```
pub fn format_words(words: &[u32]) -> String {
    let mut out = String::with_capacity(words.len() * (WORD_HEX_DIGITS + 1));
    for word in words {
        let _ = writeln!(out, "{word:08X}");
    }
    out
}

/// Writes `words` to `path`, creating or truncating the file.
///
/// The file is flushed and closed before this returns.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_words(path: impl AsRef<Path>, words: &[u32]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    for word in words {
        writeln!(out, "{word:08X}").map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), words = words.len(), "wrote image");
    Ok(())
}

/// Reads an image file back into words.
///
/// Blank lines are skipped; every other line must be exactly 8 hex digits
/// (either case).
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or
/// [`Error::MalformedWord`] for the first line that is not a hex word.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_words(&text).map_err(|(line, content)| Error::MalformedWord {
        path: path.to_path_buf(),
        line,
        content,
    })
}

/// Parses image text; on failure returns the 1-based line number and content.
fn parse_words(text: &str) -> std::result::Result<Vec<u32>, (usize, String)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let digits = line.trim();
            let is_word =
                digits.len() == WORD_HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit());
            if !is_word {
                return Err((idx + 1, line.to_owned()));
            }
            u32::from_str_radix(digits, 16).map_err(|_| (idx + 1, line.to_owned()))
        })
        .collect()
}
