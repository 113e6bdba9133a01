//! Splits byte streams into a header of leading lines and a body.
//!
//! Lines may end with LF, CRLF, or CR, and the conventions may be mixed.
//!
//! ```rust
//! # use headsplit::split::{split, SplitConfig};
//! let result = split(b"name,size\r\na,1\r\n", &SplitConfig::default()).unwrap();
//!
//! assert_eq!(result.header, b"name,size\r\n");
//! assert_eq!(result.body, b"a,1\r\n");
//! ```

#![warn(missing_docs)]
pub mod error;
pub mod io;
pub mod processor;
pub mod property;
pub mod scan;
pub mod split;
