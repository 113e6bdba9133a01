//! Named text properties for configuring a split.
//!
//! Host frameworks pass configuration as name/value strings. This module
//! validates them into a [SplitConfig].

use std::num::NonZeroUsize;

use crate::{error::PropertyError, split::SplitConfig};

/// Description of a configurable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Name used to look up the property.
    pub name: &'static str,
    /// Human readable description.
    pub description: &'static str,
    /// Value used when the property is not given.
    pub default_value: &'static str,
    /// Permitted values, or empty if any value passing validation is allowed.
    pub allowable_values: &'static [&'static str],
}

/// Number of lines to remove from the beginning of the input.
pub const REMOVE_NUM_LINES: PropertyDescriptor = PropertyDescriptor {
    name: "Remove Number of Lines",
    description: "The number of lines to remove from the file",
    default_value: "1",
    allowable_values: &[],
};

/// Whether the body keeps its final newline.
pub const KEEP_TRAILING_NEWLINE: PropertyDescriptor = PropertyDescriptor {
    name: "Keep Trailing Newlines",
    description: "Whether to keep the final newline in the resulting body",
    default_value: "true",
    allowable_values: &["true", "false"],
};

/// Returns all supported properties.
pub fn supported_properties() -> &'static [PropertyDescriptor] {
    &[REMOVE_NUM_LINES, KEEP_TRAILING_NEWLINE]
}

/// Parses a positive integer line count.
///
/// Example:
///
/// ```rust
/// # use headsplit::property::parse_line_count;
/// assert_eq!(parse_line_count("3").unwrap().get(), 3);
/// assert!(parse_line_count("0").is_err());
/// ```
pub fn parse_line_count(value: &str) -> Result<NonZeroUsize, PropertyError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| PropertyError::InvalidLineCount {
            name: REMOVE_NUM_LINES.name.to_string(),
            value: value.to_string(),
        })
}

/// Parses a boolean that is exactly `true` or `false`.
pub fn parse_boolean(value: &str) -> Result<bool, PropertyError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PropertyError::InvalidBoolean {
            name: KEEP_TRAILING_NEWLINE.name.to_string(),
            value: value.to_string(),
        }),
    }
}

impl SplitConfig {
    /// Creates a config from name/value properties.
    ///
    /// Properties not given use their default values. Later values
    /// replace earlier values with the same name.
    pub fn from_properties<'a, I>(properties: I) -> Result<Self, PropertyError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut lines_to_remove = parse_line_count(REMOVE_NUM_LINES.default_value)?;
        let mut keep_trailing_newline = parse_boolean(KEEP_TRAILING_NEWLINE.default_value)?;

        for (name, value) in properties {
            if name == REMOVE_NUM_LINES.name {
                lines_to_remove = parse_line_count(value)?;
            } else if name == KEEP_TRAILING_NEWLINE.name {
                keep_trailing_newline = parse_boolean(value)?;
            } else {
                return Err(PropertyError::UnknownProperty(name.to_string()));
            }
        }

        Ok(SplitConfig::new(lines_to_remove).with_keep_trailing_newline(keep_trailing_newline))
    }
}
