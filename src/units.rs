//! Static unit tables. Index 0 is the unscaled unit; indices 1-8 are
//! successive powers of 1000 or 1024.

pub(crate) const BYTE: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

pub(crate) const BIBYTE: [&str; 9] =
    ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

pub(crate) const BIT: [&str; 9] =
    ["b", "kbit", "Mbit", "Gbit", "Tbit", "Pbit", "Ebit", "Zbit", "Ybit"];

pub(crate) const BIBIT: [&str; 9] =
    ["b", "kibit", "Mibit", "Gibit", "Tibit", "Pibit", "Eibit", "Zibit", "Yibit"];

pub(crate) fn table(bits: bool, binary: bool) -> &'static [&'static str; 9] {
    match (bits, binary) {
        (true, true) => &BIBIT,
        (true, false) => &BIT,
        (false, true) => &BIBYTE,
        (false, false) => &BYTE,
    }
}
