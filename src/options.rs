use serde::{Deserialize, Serialize};

/// Formatting options. Every field has a neutral default, so callers usually
/// start from [`Options::default()`] and override the fields they care about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Format the value as bits instead of bytes.
    pub bits: bool,

    /// Scale by powers of 1024 with IEC prefixes (`KiB`, `Mibit`, ...) instead
    /// of powers of 1000 (`kB`, `Mbit`, ...).
    pub binary: bool,

    /// Put a space between the number and the unit.
    pub space: bool,

    /// Prefix positive values with `+`. Zero never gets a sign.
    pub signed: bool,

    /// Accepted for configuration compatibility; output formatting currently
    /// ignores it (no grouping, no locale decimal marks).
    pub locale: Option<String>,

    /// Lower bound on the number of fraction digits. `0` leaves the bound
    /// unset.
    pub minimum_fraction_digits: u32,

    /// Upper bound on the number of fraction digits. `0` leaves the bound
    /// unset. Setting either bound disables the default rounding to three
    /// significant digits.
    pub maximum_fraction_digits: u32,
}
