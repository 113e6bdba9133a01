//! Routing split results to named outputs.

use std::fmt::Display;

use bytes::Bytes;

use crate::{
    error::SplitError,
    split::{split, SplitConfig},
};

/// Named destination of processed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Remainder of the input after the removed lines.
    Body,
    /// Lines removed from the beginning of the input.
    Removed,
    /// Unmodified input that could not be processed.
    Error,
}

impl Route {
    /// Returns all routes.
    pub fn all() -> [Route; 3] {
        [Route::Body, Route::Removed, Route::Error]
    }

    /// Returns the name of the route.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Body => "body",
            Route::Removed => "removed",
            Route::Error => "error",
        }
    }

    /// Returns a description of content sent to the route.
    pub fn description(&self) -> &'static str {
        match self {
            Route::Body => "A new file containing the body of the file, minus the removed lines",
            Route::Removed => "A new file containing the removed lines",
            Route::Error => "Input that caused errors during processing",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content sent to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Destination of the content.
    pub route: Route,
    /// Content bytes.
    pub content: Bytes,
}

impl Output {
    fn new(route: Route, content: Bytes) -> Self {
        Self { route, content }
    }
}

/// Removes a configured number of lines from the beginning of each input.
///
/// The removed lines are sent to [Route::Removed] and the rest to
/// [Route::Body]. Inputs that cannot be split are sent unmodified to
/// [Route::Error].
#[derive(Debug, Clone, Default)]
pub struct ExtractHeader {
    config: SplitConfig,
}

impl ExtractHeader {
    /// Creates a processor with the given config.
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Splits the input into header and body.
    ///
    /// The returned buffers are slices of `input` and do not copy.
    pub fn split(&self, input: &Bytes) -> Result<(Bytes, Bytes), SplitError> {
        let result = split(input, &self.config)?;
        let body_offset = result.body_offset();
        let body_end = body_offset + result.body.len();

        Ok((
            input.slice(0..body_offset),
            input.slice(body_offset..body_end),
        ))
    }

    /// Processes an input into routed outputs.
    pub fn process(&self, input: Bytes) -> Vec<Output> {
        match self.split(&input) {
            Ok((header, body)) => {
                tracing::debug!(
                    removed_len = header.len(),
                    body_len = body.len(),
                    "extract header ok"
                );

                vec![
                    Output::new(Route::Removed, header),
                    Output::new(Route::Body, body),
                ]
            }
            Err(error) => {
                tracing::warn!(%error, input_len = input.len(), "extract header failed");

                vec![Output::new(Route::Error, input)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    fn processor(lines: usize, keep_trailing_newline: bool) -> ExtractHeader {
        ExtractHeader::new(
            SplitConfig::new(NonZeroUsize::new(lines).unwrap())
                .with_keep_trailing_newline(keep_trailing_newline),
        )
    }

    #[test]
    fn test_route_names() {
        let names = Route::all().map(|route| route.name());

        assert_eq!(names, ["body", "removed", "error"]);
        assert_eq!(Route::Removed.to_string(), "removed");
        assert_eq!(
            Route::Removed.description(),
            "A new file containing the removed lines"
        );
    }

    #[test]
    fn test_process_success() {
        let outputs = processor(1, true).process(Bytes::from_static(b"1\n2\n"));

        assert_eq!(
            outputs,
            [
                Output::new(Route::Removed, Bytes::from_static(b"1\n")),
                Output::new(Route::Body, Bytes::from_static(b"2\n")),
            ]
        );
    }

    #[test]
    fn test_process_strip_trailing_newline() {
        let outputs = processor(1, false).process(Bytes::from_static(b"1\r\n2\r\n"));

        assert_eq!(outputs[0].content, b"1\r\n"[..]);
        assert_eq!(outputs[1].content, b"2"[..]);
    }

    #[test]
    fn test_process_error_keeps_input() {
        let outputs = processor(3, false).process(Bytes::from_static(b"1\n2\n"));

        assert_eq!(
            outputs,
            [Output::new(Route::Error, Bytes::from_static(b"1\n2\n"))]
        );
    }

    #[test]
    fn test_process_empty() {
        let outputs = processor(1, true).process(Bytes::new());

        assert_eq!(outputs, [Output::new(Route::Error, Bytes::new())]);
    }
}
