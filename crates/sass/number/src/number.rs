//! The immutable Sass number: a scalar, its unit signature and, for literals,
//! the text the author wrote.

use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};

use crate::algebra::convert_value;
use crate::error::{SassError, SassResult};
use crate::format::format_number;
use crate::fuzzy::{fuzzy_as_int, fuzzy_check_range, fuzzy_equals, fuzzy_hash, fuzzy_is_int};
use crate::unit::{Unit, UnitSignature};

/// Textual form a number can reproduce when emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Original {
    /// Computed, or stripped.
    #[default]
    None,
    /// Literal text: written by the author, the canonical rendering of a
    /// literal, or `lhs/rhs` joined by division.
    Literal(String),
}

/// A Sass number.
///
/// Equality and hashing only look at the scalar (fuzzily); units are ignored.
/// Use [`Number::is_comparable_to`] plus a comparison when units matter.
#[derive(Clone, Debug)]
pub struct Number {
    value: f64,
    units: UnitSignature,
    original: Original,
}

impl Number {
    /// A unitless number.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_units(value, UnitSignature::none())
    }

    /// A number with a single numerator unit.
    #[must_use]
    pub fn with_unit(value: f64, unit: &str) -> Self {
        Self::with_units(value, UnitSignature::single(unit))
    }

    /// A number with an arbitrary signature.
    #[must_use]
    pub fn with_units(value: f64, units: UnitSignature) -> Self {
        Self {
            value,
            units,
            original: Original::None,
        }
    }

    /// A number read from a literal. Its canonical rendering becomes the
    /// original form, kept until stripped.
    #[must_use]
    pub fn literal(value: f64, units: UnitSignature) -> Self {
        let number = Self::with_units(value, units);
        let text = number.to_string();
        number.with_original_text(text)
    }

    /// The same number carrying `text` as its original form.
    #[must_use]
    pub fn with_original_text(self, text: impl Into<String>) -> Self {
        Self {
            original: Original::Literal(text.into()),
            ..self
        }
    }

    /// The scalar.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit signature.
    #[must_use]
    pub const fn units(&self) -> &UnitSignature {
        &self.units
    }

    #[must_use]
    pub fn numerator_units(&self) -> &[Unit] {
        self.units.numerators()
    }

    #[must_use]
    pub fn denominator_units(&self) -> &[Unit] {
        self.units.denominators()
    }

    /// Whether any numerator or denominator unit is present.
    #[must_use]
    pub fn has_units(&self) -> bool {
        !self.units.is_empty()
    }

    /// The original-form state.
    #[must_use]
    pub const fn original_form(&self) -> &Original {
        &self.original
    }

    #[must_use]
    pub fn has_original(&self) -> bool {
        !matches!(self.original, Original::None)
    }

    #[must_use]
    pub fn original(&self) -> Option<&str> {
        match &self.original {
            Original::None => None,
            Original::Literal(text) => Some(text),
        }
    }

    /// A copy with no original form.
    #[must_use]
    pub fn without_original(&self) -> Self {
        Self::with_units(self.value, self.units.clone())
    }

    /// Whether the scalar is a fuzzy integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        fuzzy_is_int(self.value)
    }

    /// The scalar as an integer, if it is a fuzzy integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        fuzzy_as_int(self.value)
    }

    /// The scalar as an integer.
    ///
    /// # Errors
    /// Returns [`SassError::NotAnInteger`] when the scalar is not a fuzzy integer.
    pub fn assert_int(&self, name: Option<&str>) -> SassResult<i64> {
        self.as_int().ok_or_else(|| SassError::NotAnInteger {
            value: self.to_string(),
            name: name.map(str::to_owned),
        })
    }

    /// Translate this 1-based, possibly negative Sass index into a 0-based
    /// offset into a sequence of `length` elements.
    ///
    /// # Errors
    /// Returns [`SassError::NotAnInteger`] for non-integers and
    /// [`SassError::InvalidIndex`] for `0` or an index past either end.
    pub fn assert_index_for(&self, length: usize, name: Option<&str>) -> SassResult<usize> {
        let index = self.assert_int(name)?;
        // Rendered from `self`: `index` saturates past `i64`.
        let invalid = || SassError::InvalidIndex {
            index: self.to_string(),
            length,
            name: name.map(str::to_owned),
        };
        if index == 0 {
            return Err(invalid());
        }
        let magnitude = usize::try_from(index.unsigned_abs()).map_err(|_| invalid())?;
        if magnitude > length {
            return Err(invalid());
        }
        Ok(if index < 0 {
            length - magnitude
        } else {
            magnitude - 1
        })
    }

    /// The scalar, clamped to a bound it is fuzzy-equal to.
    ///
    /// # Errors
    /// Returns [`SassError::OutOfRange`] unless the scalar is within `[min, max]`.
    pub fn value_in_range(&self, min: f64, max: f64, name: Option<&str>) -> SassResult<f64> {
        fuzzy_check_range(self.value, min, max).ok_or_else(|| {
            let unit = self.unit_string();
            SassError::OutOfRange {
                value: self.to_string(),
                min: format!("{}{unit}", format_number(min)),
                max: format!("{}{unit}", format_number(max)),
                name: name.map(str::to_owned),
            }
        })
    }

    /// Whether the signature is exactly the single numerator `unit`.
    #[must_use]
    pub fn has_unit(&self, unit: &str) -> bool {
        self.units.is_single(unit)
    }

    /// # Errors
    /// Returns [`SassError::WrongUnit`] unless [`Number::has_unit`] holds.
    pub fn assert_unit(&self, unit: &str, name: Option<&str>) -> SassResult<()> {
        if self.has_unit(unit) {
            return Ok(());
        }
        Err(SassError::WrongUnit {
            value: self.to_string(),
            unit: unit.to_owned(),
            name: name.map(str::to_owned),
        })
    }

    /// # Errors
    /// Returns [`SassError::UnexpectedUnits`] if the number has any unit.
    pub fn assert_no_units(&self, name: Option<&str>) -> SassResult<()> {
        if self.has_units() {
            return Err(SassError::UnexpectedUnits {
                value: self.to_string(),
                name: name.map(str::to_owned),
            });
        }
        Ok(())
    }

    /// The scalar expressed in `target` units.
    ///
    /// A unitless number adopts `target` as-is, and an empty `target` returns
    /// the scalar unchanged.
    ///
    /// # Errors
    /// Returns [`SassError::IncompatibleUnits`] when the signatures don't match.
    pub fn value_in_units(&self, target: &UnitSignature) -> SassResult<f64> {
        convert_value(self.value, &self.units, target)
    }

    /// The scalar expressed in the single unit `unit`.
    ///
    /// # Errors
    /// Returns [`SassError::IncompatibleUnits`] when the units don't match.
    pub fn value_in_unit(&self, unit: &str) -> SassResult<f64> {
        self.value_in_units(&UnitSignature::single(unit))
    }

    /// This number converted to `target` units.
    ///
    /// # Errors
    /// Returns [`SassError::IncompatibleUnits`] when the signatures don't match.
    pub fn coerce(&self, target: &UnitSignature) -> SassResult<Self> {
        Ok(Self::with_units(self.value_in_units(target)?, target.clone()))
    }

    /// The units as Sass prints them after the scalar; empty when unitless.
    #[must_use]
    pub fn unit_string(&self) -> String {
        if self.has_units() {
            self.units.to_string()
        } else {
            String::new()
        }
    }

    /// Text for CSS output: the original form when there is one, otherwise
    /// the computed number.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        self.original()
            .map_or_else(|| self.to_string(), str::to_owned)
    }
}

impl Display for Number {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}{}",
            format_number(self.value),
            self.unit_string()
        )
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        fuzzy_equals(self.value, other.value)
    }
}

impl Eq for Number {}

/// Hashes the value rounded to [`PRECISION`](crate::fuzzy::PRECISION) digits.
///
/// Two values that are fuzzy-equal but round to different keys, such as
/// `4.6e-11` and `5.4e-11` (keys `0` and `1`), break the `Eq`/`Hash`
/// contract: a `HashSet<Number>` keeps both.
impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fuzzy_hash(self.value).hash(state);
    }
}
