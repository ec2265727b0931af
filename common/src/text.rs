//! # Text Primitives
//!
//! The string operations the walkthrough demonstrates, each a thin wrapper
//! over the standard library so the contracts can be tested by name.
//!
//! Only [`slice_after`] (and [`interface_number`] on top of it) can fail.

use crate::error::TextError;

pub const LINE_DELIMITER: char = '\n';
pub const PATH_SEPARATOR: &str = "/";
pub const INTERFACE_DELIMITER: char = '/';
const MAC_SEPARATOR: char = ':';

/// Splits on every newline. `n` newlines always give `n + 1` pieces,
/// empty pieces included.
pub fn split_lines(block: &str) -> Vec<&str> {
    block.split(LINE_DELIMITER).collect()
}

/// Inverse of [`split_lines`].
pub fn rejoin_lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Removes leading and trailing whitespace, keeping inner spacing intact.
pub fn strip(line: &str) -> &str {
    line.trim()
}

pub fn has_prefix(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn has_suffix(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Literal replacement of every occurrence of `from`. No pattern syntax.
pub fn replace_literal(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

/// `00:1a:2b:3c:4d:5e` -> `001A2B3C4D5E`
pub fn compact_mac(mac: &str) -> String {
    mac.replace(MAC_SEPARATOR, "").to_uppercase()
}

/// Returns everything after the first `delimiter`.
///
/// A trailing delimiter gives an empty slice. A missing one is an error
/// rather than the whole input.
pub fn slice_after(s: &str, delimiter: char) -> Result<&str, TextError> {
    let idx = s.find(delimiter).ok_or_else(|| TextError::DelimiterNotFound {
        delimiter,
        input: s.to_string(),
    })?;
    Ok(&s[idx + delimiter.len_utf8()..])
}

/// `GigabitEthernet0/1` -> `1`
pub fn interface_number(name: &str) -> Result<&str, TextError> {
    slice_after(name, INTERFACE_DELIMITER)
}

pub fn join_path(elements: &[&str]) -> String {
    elements.join(PATH_SEPARATOR)
}
