//! Common utility functions shared across the codebase.
//!
//! All offsets are byte offsets into the source text. The scanning helpers
//! mirror each other: `last_index_of_*` walk backward and exclude the given
//! index, `index_of_*` walk forward and include it.

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Index of the last non-whitespace byte strictly before `before`.
pub(crate) fn last_index_of_non_whitespace(source: &str, before: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    (0..before.min(bytes.len()))
        .rev()
        .find(|&i| !is_space(bytes[i]))
}

/// Index of the last whitespace byte strictly before `before`.
pub(crate) fn last_index_of_whitespace(source: &str, before: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    (0..before.min(bytes.len())).rev().find(|&i| is_space(bytes[i]))
}

/// Index of the first non-whitespace byte at or after `from`.
pub(crate) fn index_of_non_whitespace(source: &str, from: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    (from..bytes.len()).find(|&i| !is_space(bytes[i]))
}

/// Start of the line containing `pos` (the byte right after the previous line break).
pub(crate) fn line_start(source: &str, pos: usize) -> usize {
    let bytes = source.as_bytes();
    (0..pos.min(bytes.len()))
        .rev()
        .find(|&i| bytes[i] == b'\n' || bytes[i] == b'\r')
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// 1-based (line, column) for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// The full text of the line containing `offset`, without the line break.
pub fn source_line(source: &str, offset: usize) -> String {
    let start = line_start(source, offset);
    let rest = &source[start..];
    let end = rest
        .find(['\n', '\r'])
        .map(|i| start + i)
        .unwrap_or(source.len());
    source[start..end].to_string()
}
