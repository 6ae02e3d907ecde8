//! Rendering of scalars at display precision.

use crate::fuzzy::{PRECISION, fuzzy_is_int};

/// Render `number` the way Sass prints it.
///
/// Fuzzy integers drop their fraction, everything else keeps at most
/// [`PRECISION`] fractional digits with trailing zeros removed.
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let mut text = if fuzzy_is_int(number) {
        format!("{:.0}", number.round())
    } else {
        let mut fixed = format!("{number:.PRECISION$}");
        if fixed.contains('.') {
            let trimmed = fixed.trim_end_matches('0').trim_end_matches('.').len();
            fixed.truncate(trimmed);
        }
        fixed
    };

    if text == "-0" {
        text = "0".to_owned();
    }
    text
}
