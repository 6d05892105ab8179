use crate::error::Error;
use crate::options::Options;
use crate::units;

/// Format a byte (or bit) count as a human-readable string.
///
/// Fails only when `byte_size` is NaN or infinite; negative, zero, fractional
/// and astronomically large values all format.
///
/// ```
/// use sizefmt::{Options, format};
///
/// assert_eq!(format(1337.0, &Options::default()).unwrap(), "1.34kB");
/// assert_eq!(format(-1337.0, &Options::default()).unwrap(), "-1.34kB");
/// assert!(format(f64::NAN, &Options::default()).is_err());
/// ```
pub fn format(byte_size: f64, options: &Options) -> Result<String, Error> {
    if !byte_size.is_finite() {
        return Err(Error::InvalidInput(byte_size));
    }

    let units = units::table(options.bits, options.binary);
    let separator = if options.space { " " } else { "" };

    // Zero never carries a sign, even in signed mode.
    if options.signed && byte_size == 0.0 {
        return Ok(format!("0{separator}{}", units[0]));
    }

    let negative = byte_size < 0.0;
    let prefix = if negative {
        "-"
    } else if options.signed {
        "+"
    } else {
        ""
    };
    let mut value = if negative { -byte_size } else { byte_size };

    let digits = FractionDigits::from_options(options);

    if value < 1.0 {
        let number = format_number(value, digits.as_ref());
        return Ok(format!("{prefix}{number}{separator}{}", units[0]));
    }

    let base: f64 = if options.binary { 1024.0 } else { 1000.0 };
    let exponent = if options.binary {
        (value.ln() / base.ln()).floor().min((units.len() - 1) as f64) as usize
    } else {
        (value.log10() / 3.0).floor().min((units.len() - 1) as f64) as usize
    };
    value /= base.powi(exponent as i32);

    if digits.is_none() {
        value = round_to_significant(value, 3);
    }

    let number = format_number(value, digits.as_ref());
    Ok(format!("{prefix}{number}{separator}{}", units[exponent]))
}

/// Explicit fraction-digit bounds. Present only when the caller set at least
/// one bound; their presence suppresses the default significant-digit
/// rounding.
struct FractionDigits {
    minimum: u32,
    maximum: Option<u32>,
}

impl FractionDigits {
    fn from_options(options: &Options) -> Option<Self> {
        if options.minimum_fraction_digits == 0 && options.maximum_fraction_digits == 0 {
            return None;
        }
        let maximum = (options.maximum_fraction_digits != 0)
            .then(|| options.maximum_fraction_digits.max(options.minimum_fraction_digits));
        Some(FractionDigits { minimum: options.minimum_fraction_digits, maximum })
    }
}

/// Round to `digits` significant digits, ties away from zero.
fn round_to_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits - 1 - magnitude;
    // Scale by a non-negative power of ten in both directions; powers up to
    // 10^22 are exact in f64, fractional ones are not.
    let scale = 10_f64.powi(decimals.abs());
    if decimals >= 0 {
        (value * scale).round() / scale
    } else {
        (value / scale).round() * scale
    }
}

/// Render a non-negative value as plain decimal text. Without bounds this is
/// the shortest exact representation; with bounds the fraction is rounded to
/// at most `maximum` digits and zero-padded to at least `minimum`.
fn format_number(value: f64, digits: Option<&FractionDigits>) -> String {
    let Some(digits) = digits else {
        return value.to_string();
    };

    let mut text = match digits.maximum {
        Some(maximum) => format!("{value:.prec$}", prec = maximum as usize),
        None => value.to_string(),
    };

    let minimum = digits.minimum as usize;

    // Trim trailing zeros the fixed-precision rendering introduced, but never
    // below the minimum.
    while fraction_len(&text) > minimum && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    let missing = minimum.saturating_sub(fraction_len(&text));
    if missing > 0 {
        if !text.contains('.') {
            text.push('.');
        }
        text.extend(std::iter::repeat_n('0', missing));
    }

    text
}

fn fraction_len(text: &str) -> usize {
    text.find('.').map_or(0, |dot| text.len() - dot - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_significant_digits() {
        assert_eq!(round_to_significant(1.337, 3), 1.34);
        assert_eq!(round_to_significant(1.30566, 3), 1.31);
        assert_eq!(round_to_significant(999.5, 3), 1000.0);
        assert_eq!(round_to_significant(42.0, 3), 42.0);
        assert_eq!(round_to_significant(0.0, 3), 0.0);
    }

    #[test]
    fn shortest_rendering_has_no_trailing_zeros() {
        assert_eq!(format_number(1.0, None), "1");
        assert_eq!(format_number(1.5, None), "1.5");
        assert_eq!(format_number(1.34, None), "1.34");
    }

    #[test]
    fn maximum_bound_truncates_and_trims() {
        let digits = FractionDigits { minimum: 0, maximum: Some(1) };
        assert_eq!(format_number(1.92, Some(&digits)), "1.9");
        assert_eq!(format_number(1.0, Some(&digits)), "1");
    }

    #[test]
    fn minimum_bound_pads_with_zeros() {
        let digits = FractionDigits { minimum: 3, maximum: None };
        assert_eq!(format_number(1.9, Some(&digits)), "1.900");
        assert_eq!(format_number(2.0, Some(&digits)), "2.000");
    }

    #[test]
    fn bounds_compose() {
        let digits = FractionDigits { minimum: 1, maximum: Some(3) };
        assert_eq!(format_number(2.5, Some(&digits)), "2.5");
        assert_eq!(format_number(1.23456, Some(&digits)), "1.235");
        assert_eq!(format_number(4.0, Some(&digits)), "4.0");
    }

    #[test]
    fn conflicting_bounds_prefer_the_minimum() {
        let digits = FractionDigits::from_options(&Options {
            minimum_fraction_digits: 3,
            maximum_fraction_digits: 1,
            ..Options::default()
        })
        .unwrap();
        assert_eq!(format_number(1.23456, Some(&digits)), "1.235");
    }
}
