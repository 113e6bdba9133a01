//! Header and body splitting.

use std::num::NonZeroUsize;

use crate::{
    error::SplitError,
    scan::{scan, Terminator},
};

/// Options for [split].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    /// Number of lines placed in the header.
    pub lines_to_remove: NonZeroUsize,

    /// Whether the final terminator of the body is kept.
    pub keep_trailing_newline: bool,
}

impl SplitConfig {
    /// Creates a config with the given line count that keeps the trailing
    /// newline.
    pub fn new(lines_to_remove: NonZeroUsize) -> Self {
        Self {
            lines_to_remove,
            keep_trailing_newline: true,
        }
    }

    /// Sets whether the final terminator of the body is kept.
    pub fn with_keep_trailing_newline(mut self, value: bool) -> Self {
        self.keep_trailing_newline = value;
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}

/// Input partitioned into header and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// The first lines of the input, terminators included.
    pub header: &'a [u8],

    /// The remainder of the input.
    pub body: &'a [u8],
}

impl<'a> Split<'a> {
    /// Returns the offset where the body begins in the input.
    pub fn body_offset(&self) -> usize {
        self.header.len()
    }
}

/// Splits `input` after the configured number of lines.
///
/// A final line without a terminator counts as a line.
///
/// Example:
///
/// ```rust
/// # use headsplit::split::{split, SplitConfig};
/// let result = split(b"1\n2\n", &SplitConfig::default()).unwrap();
///
/// assert_eq!(result.header, b"1\n");
/// assert_eq!(result.body, b"2\n");
/// ```
///
/// Returns [SplitError::EmptyInput] if the input has zero length or
/// [SplitError::InsufficientLines] if there are fewer lines than requested.
pub fn split<'a>(input: &'a [u8], config: &SplitConfig) -> Result<Split<'a>, SplitError> {
    if input.is_empty() {
        return Err(SplitError::EmptyInput);
    }

    let requested = config.lines_to_remove.get();
    let mut found = 0;
    let mut header_end = None;

    for boundary in scan(input) {
        found += 1;

        if found == requested {
            header_end = Some(boundary.end);
            break;
        }
    }

    let header_end = header_end.ok_or(SplitError::InsufficientLines { requested, found })?;
    let (header, body) = input.split_at(header_end);

    debug_assert_eq!(header.len() + body.len(), input.len());

    let body = if config.keep_trailing_newline {
        body
    } else {
        trim_trailing_terminator(body)
    };

    tracing::debug!(
        lines = requested,
        header_len = header.len(),
        body_len = body.len(),
        "split"
    );

    Ok(Split { header, body })
}

/// Trims one trailing CRLF, LF, or CR.
///
/// Example:
///
/// ```rust
/// # use headsplit::split::trim_trailing_terminator;
/// assert_eq!(trim_trailing_terminator(b"abc\r\n\r\n"), b"abc\r\n");
/// assert_eq!(trim_trailing_terminator(b"abc\r\n"), b"abc");
/// assert_eq!(trim_trailing_terminator(b"abc\n\n"), b"abc\n");
/// assert_eq!(trim_trailing_terminator(b"abc\r"), b"abc");
/// ```
pub fn trim_trailing_terminator(buf: &[u8]) -> &[u8] {
    let terminator = trailing_terminator(buf);
    &buf[0..buf.len() - terminator.len()]
}

fn trailing_terminator(buf: &[u8]) -> Terminator {
    if buf.ends_with(b"\r\n") {
        Terminator::CrLf
    } else if buf.ends_with(b"\n") {
        Terminator::Lf
    } else if buf.ends_with(b"\r") {
        Terminator::Cr
    } else {
        Terminator::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(lines: usize, keep_trailing_newline: bool) -> SplitConfig {
        SplitConfig::new(NonZeroUsize::new(lines).unwrap())
            .with_keep_trailing_newline(keep_trailing_newline)
    }

    #[test]
    fn test_split_one_line() {
        let result = split(b"1\n2\n", &config(1, true)).unwrap();

        assert_eq!(result.header, b"1\n");
        assert_eq!(result.body, b"2\n");
        assert_eq!(result.body_offset(), 2);
    }

    #[test]
    fn test_split_strip_trailing_newline() {
        let result = split(b"1\n2\n", &config(1, false)).unwrap();

        assert_eq!(result.header, b"1\n");
        assert_eq!(result.body, b"2");
    }

    #[test]
    fn test_split_strip_only_one_terminator() {
        let result = split(b"h\r\nb\r\n\r\n\n", &config(1, false)).unwrap();

        assert_eq!(result.header, b"h\r\n");
        assert_eq!(result.body, b"b\r\n\r\n");
    }

    #[test]
    fn test_split_strip_cr() {
        let result = split(b"1\n2\r", &config(1, false)).unwrap();

        assert_eq!(result.body, b"2");
    }

    #[test]
    fn test_split_crlf_not_split() {
        let result = split(b"a\r\nb", &config(1, true)).unwrap();

        assert_eq!(result.header, b"a\r\n");
        assert_eq!(result.body, b"b");
    }

    #[test]
    fn test_split_unterminated_last_line() {
        let result = split(b"1\n2", &config(2, true)).unwrap();

        assert_eq!(result.header, b"1\n2");
        assert_eq!(result.body, b"");
    }

    #[test]
    fn test_split_all_lines_terminated() {
        let result = split(b"1\r\n2\r\n", &config(2, false)).unwrap();

        assert_eq!(result.header, b"1\r\n2\r\n");
        assert_eq!(result.body, b"");
    }

    #[test]
    fn test_split_mixed_terminators() {
        let result = split(b"1\n2\r3\r\n4", &config(3, true)).unwrap();

        assert_eq!(result.header, b"1\n2\r3\r\n");
        assert_eq!(result.body, b"4");
    }

    #[test]
    fn test_split_insufficient_lines() {
        assert_eq!(
            split(b"1", &config(2, true)),
            Err(SplitError::InsufficientLines {
                requested: 2,
                found: 1
            })
        );
        assert_eq!(
            split(b"1\r\n2\r\n", &config(3, true)),
            Err(SplitError::InsufficientLines {
                requested: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split(b"", &config(1, true)), Err(SplitError::EmptyInput));
        assert_eq!(split(b"", &config(5, false)), Err(SplitError::EmptyInput));
    }

    #[test]
    fn test_split_reconstruct() {
        let inputs: [&[u8]; 5] = [b"1", b"1\r", b"1\n2\r\n3\r4", b"\n\n\n", b"a\r\r\nb\n"];

        for input in inputs {
            for lines in 1..=4 {
                if let Ok(result) = split(input, &config(lines, true)) {
                    assert_eq!([result.header, result.body].concat(), input);
                }
            }
        }
    }

    #[test]
    fn test_split_idempotent() {
        let config = config(2, false);
        let input = b"a\rb\r\nc\n";

        assert_eq!(split(input, &config), split(input, &config));
    }

    #[test]
    fn test_trim_trailing_terminator() {
        assert_eq!(trim_trailing_terminator(b""), b"");
        assert_eq!(trim_trailing_terminator(b"abc"), b"abc");
        assert_eq!(trim_trailing_terminator(b"abc\n"), b"abc");
        assert_eq!(trim_trailing_terminator(b"abc\r\n"), b"abc");
        assert_eq!(trim_trailing_terminator(b"abc\r"), b"abc");
        assert_eq!(trim_trailing_terminator(b"abc\n\r"), b"abc\n");
    }

    #[test]
    fn test_config_default() {
        let config = SplitConfig::default();

        assert_eq!(config.lines_to_remove.get(), 1);
        assert!(config.keep_trailing_newline);
    }
}
