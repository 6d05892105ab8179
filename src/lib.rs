//! Format byte and bit counts as human-readable strings.
//!
//! ```
//! use sizefmt::{Options, format};
//!
//! assert_eq!(format(1337.0, &Options::default()).unwrap(), "1.34kB");
//!
//! let options = Options { binary: true, space: true, ..Options::default() };
//! assert_eq!(format(1337.0, &options).unwrap(), "1.31 KiB");
//! ```

pub mod error;
pub mod format;
pub mod options;
mod units;

pub use error::Error;
pub use format::format;
pub use options::Options;
