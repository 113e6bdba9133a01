//! Line boundary scanning.
//!
//! The scanner recognizes LF, CRLF, and CR as line terminators. Conventions
//! may be mixed within a single input and CRLF is always a single boundary.

use serde::Serialize;

/// Kind of sequence that ended a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
    /// End of input reached without a terminator.
    None,
}

impl Terminator {
    /// Returns the bytes of the terminator.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Terminator::Lf => b"\n",
            Terminator::CrLf => b"\r\n",
            Terminator::Cr => b"\r",
            Terminator::None => b"",
        }
    }

    /// Returns the number of bytes of the terminator.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns whether the terminator is [Terminator::None].
    pub fn is_empty(&self) -> bool {
        *self == Terminator::None
    }
}

/// End of a line within the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineBoundary {
    /// Offset immediately after the terminator.
    pub end: usize,
    /// Terminator that ended the line.
    pub terminator: Terminator,
}

impl LineBoundary {
    fn new(end: usize, terminator: Terminator) -> Self {
        Self { end, terminator }
    }
}

/// Returns an iterator of line boundaries in `input`.
///
/// Example:
///
/// ```rust
/// # use headsplit::scan::{scan, Terminator};
/// let terminators = scan(b"1\n2\r3\r\n4")
///     .map(|boundary| boundary.terminator)
///     .collect::<Vec<_>>();
///
/// assert_eq!(
///     terminators,
///     [Terminator::Lf, Terminator::Cr, Terminator::CrLf, Terminator::None]
/// );
/// ```
pub fn scan(input: &[u8]) -> LineBoundaries<'_> {
    LineBoundaries::new(input)
}

/// Iterator of [LineBoundary] produced by a single forward pass.
///
/// Created by [scan].
#[derive(Debug, Clone)]
pub struct LineBoundaries<'a> {
    input: &'a [u8],
    position: usize,
    line_start: usize,
    pending_cr: bool,
    finished: bool,
}

impl<'a> LineBoundaries<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            line_start: 0,
            pending_cr: false,
            finished: false,
        }
    }

    fn emit(&mut self, end: usize, terminator: Terminator) -> LineBoundary {
        self.line_start = end;
        LineBoundary::new(end, terminator)
    }

    fn finish(&mut self) -> Option<LineBoundary> {
        self.finished = true;

        if self.pending_cr {
            self.pending_cr = false;
            Some(self.emit(self.input.len(), Terminator::Cr))
        } else if self.line_start < self.input.len() {
            Some(self.emit(self.input.len(), Terminator::None))
        } else {
            None
        }
    }
}

impl<'a> Iterator for LineBoundaries<'a> {
    type Item = LineBoundary;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(&byte) = self.input.get(self.position) {
            let offset = self.position;
            self.position += 1;

            match byte {
                b'\n' if self.pending_cr => {
                    self.pending_cr = false;
                    return Some(self.emit(offset + 1, Terminator::CrLf));
                }
                b'\n' => return Some(self.emit(offset + 1, Terminator::Lf)),
                b'\r' if self.pending_cr => {
                    // Previous CR stands alone; this one is still undecided.
                    return Some(self.emit(offset, Terminator::Cr));
                }
                b'\r' => self.pending_cr = true,
                _ if self.pending_cr => {
                    self.pending_cr = false;
                    return Some(self.emit(offset, Terminator::Cr));
                }
                _ => {}
            }
        }

        self.finish()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            let remaining = self.input.len() - self.position;
            (0, Some(remaining + 1))
        }
    }
}

impl<'a> std::iter::FusedIterator for LineBoundaries<'a> {}
