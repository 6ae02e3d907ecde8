//! Unit algebra: converting a scalar between signatures and combining
//! signatures under multiplication and division.

use log::trace;

use crate::conversions::{conversion_factor, table_factor};
use crate::error::{SassError, SassResult};
use crate::unit::{Unit, UnitList, UnitSignature};

/// Remove the first unit of `units` for which `factor_of` yields a factor.
///
/// Returns that factor, or `None` with `units` untouched when nothing matched.
/// The last unit takes the removed unit's place.
fn remove_first_match<F>(units: &mut UnitList, factor_of: F) -> Option<f64>
where
    F: Fn(Unit) -> Option<f64>,
{
    let (position, factor) = units
        .iter()
        .enumerate()
        .find_map(|(position, unit)| factor_of(*unit).map(|factor| (position, factor)))?;
    units.swap_remove(position);
    Some(factor)
}

fn incompatible(from: &UnitSignature, to: &UnitSignature) -> SassError {
    trace!(target: "sass_number", "no unit matching from `{from}` to `{to}`");
    SassError::IncompatibleUnits {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Express `value`, measured in `from`, in the units of `to`.
///
/// Each target unit consumes one convertible source unit (first match, order
/// independent). Identical signatures and unitless sides on either end pass
/// the value through untouched.
///
/// # Errors
/// Returns [`SassError::IncompatibleUnits`] when a target unit finds no
/// convertible source unit or source units are left over.
pub fn convert_value(value: f64, from: &UnitSignature, to: &UnitSignature) -> SassResult<f64> {
    if from == to || from.is_empty() || to.is_empty() {
        return Ok(value);
    }

    let mut numerators: UnitList = from.numerators().iter().copied().collect();
    let mut denominators: UnitList = from.denominators().iter().copied().collect();
    let mut converted = value;

    for &target in to.numerators() {
        let factor = remove_first_match(&mut numerators, |source| {
            conversion_factor(source, target)
        })
        .ok_or_else(|| incompatible(from, to))?;
        converted *= factor;
    }
    for &target in to.denominators() {
        let factor = remove_first_match(&mut denominators, |source| {
            conversion_factor(target, source)
        })
        .ok_or_else(|| incompatible(from, to))?;
        converted *= factor;
    }

    if numerators.is_empty() && denominators.is_empty() {
        Ok(converted)
    } else {
        Err(incompatible(from, to))
    }
}

/// Whether any numerator would cancel against any denominator.
fn any_cancel(numerators: &[Unit], denominators: &[Unit]) -> bool {
    numerators.iter().any(|&numerator| {
        denominators
            .iter()
            .any(|&denominator| table_factor(numerator, denominator).is_some())
    })
}

/// Multiply a scalar carrying `left` units by one carrying `right` units.
///
/// `value` is the product of the two scalars. Numerators cancel against the
/// other side's denominators when the conversion table relates them, folding
/// the factor into the value. The result is neither sorted nor deduplicated.
#[must_use]
pub fn multiply_units(
    value: f64,
    left: &UnitSignature,
    right: &UnitSignature,
) -> (f64, UnitSignature) {
    let (left_numerators, left_denominators) = (left.numerators(), left.denominators());
    let (right_numerators, right_denominators) = (right.numerators(), right.denominators());

    if left_numerators.is_empty() {
        if left_denominators.is_empty() {
            return (value, right.clone());
        }
        if right_denominators.is_empty() && !any_cancel(right_numerators, left_denominators) {
            return (
                value,
                UnitSignature::from_units(
                    right_numerators.iter().copied().collect(),
                    left_denominators.iter().copied().collect(),
                ),
            );
        }
    } else if right_numerators.is_empty() {
        if right_denominators.is_empty() {
            return (value, left.clone());
        }
        if left_denominators.is_empty() && !any_cancel(left_numerators, right_denominators) {
            return (
                value,
                UnitSignature::from_units(
                    left_numerators.iter().copied().collect(),
                    right_denominators.iter().copied().collect(),
                ),
            );
        }
    }

    let mut product = value;
    let mut numerators = UnitList::new();

    let mut remaining_right: UnitList = right_denominators.iter().copied().collect();
    for &numerator in left_numerators {
        match remove_first_match(&mut remaining_right, |denominator| {
            table_factor(numerator, denominator)
        }) {
            Some(factor) => product *= factor,
            None => numerators.push(numerator),
        }
    }

    let mut remaining_left: UnitList = left_denominators.iter().copied().collect();
    for &numerator in right_numerators {
        match remove_first_match(&mut remaining_left, |denominator| {
            table_factor(numerator, denominator)
        }) {
            Some(factor) => product *= factor,
            None => numerators.push(numerator),
        }
    }

    remaining_left.extend(remaining_right);
    (product, UnitSignature::from_units(numerators, remaining_left))
}

/// Divide a scalar carrying `left` units by one carrying `right` units.
///
/// `value` is the quotient of the two scalars; the divisor's signature is
/// inverted and combined as in [`multiply_units`].
#[must_use]
pub fn divide_units(
    value: f64,
    left: &UnitSignature,
    right: &UnitSignature,
) -> (f64, UnitSignature) {
    multiply_units(value, left, &right.inverted())
}
