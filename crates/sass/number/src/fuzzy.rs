//! Epsilon-tolerant comparisons over `f64`.
//!
//! Unit conversions and chained arithmetic accumulate rounding error, so every
//! equality, ordering and integer check in this crate goes through these helpers
//! instead of the raw float operators.

/// Number of fractional digits kept when a number is rendered.
pub const PRECISION: usize = 10;

/// Largest difference at which two numbers are still considered equal.
pub const EPSILON: f64 = 1e-11;

/// Scale applied before rounding in [`fuzzy_hash`]; matches [`PRECISION`].
const HASH_SCALE: f64 = 1e10;

/// Returns whether `left` and `right` are equal within [`EPSILON`].
#[must_use]
pub fn fuzzy_equals(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

/// Strict `<` that never holds for fuzzy-equal operands.
#[must_use]
pub fn fuzzy_less_than(left: f64, right: f64) -> bool {
    left < right && !fuzzy_equals(left, right)
}

/// `<=` where fuzzy equality counts as equal.
#[must_use]
pub fn fuzzy_less_than_or_equals(left: f64, right: f64) -> bool {
    left < right || fuzzy_equals(left, right)
}

/// Strict `>` that never holds for fuzzy-equal operands.
#[must_use]
pub fn fuzzy_greater_than(left: f64, right: f64) -> bool {
    left > right && !fuzzy_equals(left, right)
}

/// `>=` where fuzzy equality counts as equal.
#[must_use]
pub fn fuzzy_greater_than_or_equals(left: f64, right: f64) -> bool {
    left > right || fuzzy_equals(left, right)
}

/// Returns whether `number` lies within [`EPSILON`] of an integer.
#[must_use]
pub fn fuzzy_is_int(number: f64) -> bool {
    if !number.is_finite() {
        return false;
    }
    let fraction = number.rem_euclid(1.0);
    fuzzy_equals(fraction, 0.0) || fuzzy_equals(fraction, 1.0)
}

/// Returns the nearest integer when `number` is a fuzzy integer.
///
/// `None` means "not an integer"; callers decide whether that is an error.
#[must_use]
pub fn fuzzy_as_int(number: f64) -> Option<i64> {
    fuzzy_is_int(number).then(|| number.round() as i64)
}

/// Rounds half away from zero, treating a fraction fuzzy-equal to `.5` as `.5`.
#[must_use]
pub fn fuzzy_round(number: f64) -> f64 {
    let fraction = number.rem_euclid(1.0);
    let round_down = if number > 0.0 {
        fuzzy_less_than(fraction, 0.5)
    } else {
        fuzzy_less_than_or_equals(fraction, 0.5)
    };
    if round_down {
        number.floor()
    } else {
        number.ceil()
    }
}

/// Clamps `number` to `min` or `max` when it is fuzzy-equal to either bound,
/// returns it unchanged when strictly between them, and `None` otherwise.
#[must_use]
pub fn fuzzy_check_range(number: f64, min: f64, max: f64) -> Option<f64> {
    if fuzzy_equals(number, min) {
        return Some(min);
    }
    if fuzzy_equals(number, max) {
        return Some(max);
    }
    (number > min && number < max).then_some(number)
}

/// Exclusive range check: fuzzy-equal bounds do not count as inside.
#[must_use]
pub fn fuzzy_in_range(number: f64, min: f64, max: f64) -> bool {
    fuzzy_greater_than(number, min) && fuzzy_less_than(number, max)
}

/// Inclusive range check: fuzzy-equal bounds count as inside.
#[must_use]
pub fn fuzzy_in_range_inclusive(number: f64, min: f64, max: f64) -> bool {
    fuzzy_greater_than_or_equals(number, min) && fuzzy_less_than_or_equals(number, max)
}

/// Hash key consistent with [`fuzzy_equals`] for all but values straddling a
/// rounding boundary at [`PRECISION`] digits.
#[must_use]
pub fn fuzzy_hash(number: f64) -> i64 {
    // Casting also folds `-0.0` into `0`.
    (number * HASH_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Values closer than epsilon compare equal, farther ones do not.
    #[test]
    fn equality_tolerance() {
        assert!(fuzzy_equals(0.1 + 0.2, 0.3));
        assert!(fuzzy_equals(1.0, 1.0 + 1e-12));
        assert!(!fuzzy_equals(1.0, 1.0 + 1e-9));
    }

    /// Equality takes precedence over ordering.
    #[test]
    fn ordering_respects_equality() {
        let nearly_one = 1.0 - 1e-13;
        assert!(!fuzzy_less_than(nearly_one, 1.0));
        assert!(fuzzy_less_than_or_equals(nearly_one, 1.0));
        assert!(!fuzzy_greater_than(1.0, nearly_one));
        assert!(fuzzy_greater_than_or_equals(1.0, nearly_one));
        assert!(fuzzy_less_than(1.0, 2.0));
        assert!(fuzzy_greater_than(2.0, 1.0));
    }

    /// Integer detection absorbs rounding noise on both sides.
    #[test]
    fn integer_detection() {
        assert!(fuzzy_is_int(3.0));
        assert!(fuzzy_is_int(2.999_999_999_999_9));
        assert!(fuzzy_is_int(-4.000_000_000_000_1));
        assert!(!fuzzy_is_int(0.3));
        assert!(!fuzzy_is_int(f64::NAN));
        assert!(!fuzzy_is_int(f64::INFINITY));
        assert_eq!(fuzzy_as_int(1.0 + 2.000_000_000_000_1), Some(3));
        assert_eq!(fuzzy_as_int(-2.999_999_999_999_9), Some(-3));
        assert_eq!(fuzzy_as_int(0.5), None);
    }

    /// Half-way values round away from zero.
    #[test]
    fn rounding() {
        assert!(fuzzy_equals(fuzzy_round(2.5), 3.0));
        assert!(fuzzy_equals(fuzzy_round(2.499_999_999_999_9), 3.0));
        assert!(fuzzy_equals(fuzzy_round(2.4), 2.0));
        assert!(fuzzy_equals(fuzzy_round(-2.5), -3.0));
        assert!(fuzzy_equals(fuzzy_round(-2.4), -2.0));
    }

    /// Range checks clamp to the bound on fuzzy equality.
    #[test]
    fn range_checks() {
        assert_eq!(fuzzy_check_range(1.0 + 1e-13, 0.0, 1.0), Some(1.0));
        assert_eq!(fuzzy_check_range(-1e-13, 0.0, 1.0), Some(0.0));
        assert_eq!(fuzzy_check_range(0.5, 0.0, 1.0), Some(0.5));
        assert_eq!(fuzzy_check_range(1.5, 0.0, 1.0), None);
        assert_eq!(fuzzy_check_range(-0.5, 0.0, 1.0), None);
        assert_eq!(fuzzy_check_range(-1e-9, 0.0, 1.0), None);
        assert!(fuzzy_in_range(0.5, 0.0, 1.0));
        assert!(!fuzzy_in_range(1.0, 0.0, 1.0));
        assert!(fuzzy_in_range_inclusive(1.0, 0.0, 1.0));
        assert!(!fuzzy_in_range_inclusive(1.1, 0.0, 1.0));
    }

    /// Fuzzy-equal values share a hash key, signed zeros included.
    #[test]
    fn hash_consistency() {
        assert_eq!(fuzzy_hash(0.1 + 0.2), fuzzy_hash(0.3));
        assert_eq!(fuzzy_hash(-0.0), fuzzy_hash(0.0));
        assert_ne!(fuzzy_hash(1.0), fuzzy_hash(1.1));
    }

    /// Fuzzy-equal values straddling a rounding boundary get different keys.
    #[test]
    fn hash_rounding_boundary() {
        assert!(fuzzy_equals(4.6e-11, 5.4e-11));
        assert_eq!(fuzzy_hash(4.6e-11), 0);
        assert_eq!(fuzzy_hash(5.4e-11), 1);
    }
}
