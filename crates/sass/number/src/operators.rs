//! Arithmetic and comparison operators with a number on the left.
//!
//! Every operator accepts any [`Value`] on the right. Numbers are coerced into
//! a shared signature first; other kinds either fail with
//! [`SassError::UndefinedOperation`] or, for `+`, `-` and `/` against a color,
//! fall back to the generic string-joining operator.

use core::fmt::{self, Display, Formatter};

use log::debug;

use crate::algebra::{divide_units, multiply_units};
use crate::error::{SassError, SassResult};
use crate::fuzzy::{
    fuzzy_greater_than, fuzzy_greater_than_or_equals, fuzzy_less_than, fuzzy_less_than_or_equals,
};
use crate::number::Number;
use crate::value::Value;

/// Binary operators a number can appear on the left of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Times,
    DividedBy,
    Modulo,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
}

impl BinaryOperator {
    /// The operator as written in Sass.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::DividedBy => "/",
            Self::Modulo => "%",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEquals => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEquals => "<=",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

impl Number {
    fn undefined(&self, operator: BinaryOperator, other: &Value) -> SassError {
        SassError::UndefinedOperation {
            operator: operator.symbol(),
            left: self.to_string(),
            right: other.to_string(),
        }
    }

    fn expect_number<'value>(
        &self,
        operator: BinaryOperator,
        other: &'value Value,
    ) -> SassResult<&'value Number> {
        other
            .as_number()
            .ok_or_else(|| self.undefined(operator, other))
    }

    /// Both scalars in one signature: `other` is converted into this number's
    /// units when it has any, otherwise this number into `other`'s.
    fn coerced_values(&self, other: &Self) -> SassResult<(f64, f64)> {
        if self.has_units() {
            Ok((self.value(), other.value_in_units(self.units())?))
        } else {
            Ok((self.value_in_units(other.units())?, other.value()))
        }
    }

    /// Apply `operation` to both coerced scalars. The result takes the
    /// signature of whichever side has units, preferring this one.
    fn coerced_arithmetic<F>(&self, other: &Self, operation: F) -> SassResult<Self>
    where
        F: FnOnce(f64, f64) -> f64,
    {
        let (left, right) = self.coerced_values(other)?;
        let units = if self.has_units() {
            self.units()
        } else {
            other.units()
        };
        Ok(Self::with_units(operation(left, right), units.clone()))
    }

    fn compare<F>(&self, operator: BinaryOperator, other: &Value, test: F) -> SassResult<bool>
    where
        F: FnOnce(f64, f64) -> bool,
    {
        let number = self.expect_number(operator, other)?;
        let (left, right) = self.coerced_values(number)?;
        Ok(test(left, right))
    }

    /// Generic fallback for the operators that defer on a color operand.
    fn fallback(&self, operator: BinaryOperator, other: &Value) -> Value {
        Value::concatenate(&Value::Number(self.clone()), operator.symbol(), other)
    }

    /// Whether `self` and `other` can be compared: true when either is
    /// unitless or their signatures convert into one another.
    #[must_use]
    pub fn is_comparable_to(&self, other: &Self) -> bool {
        if !self.has_units() || !other.has_units() {
            return true;
        }
        match self.coerced_values(other) {
            Ok(_) => true,
            Err(error) => {
                debug!(target: "sass_number", "{self} is not comparable to {other}: {error}");
                false
            }
        }
    }

    /// `self > other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers,
    /// [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn greater_than(&self, other: &Value) -> SassResult<bool> {
        self.compare(BinaryOperator::GreaterThan, other, fuzzy_greater_than)
    }

    /// `self >= other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers,
    /// [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn greater_than_or_equals(&self, other: &Value) -> SassResult<bool> {
        self.compare(
            BinaryOperator::GreaterThanOrEquals,
            other,
            fuzzy_greater_than_or_equals,
        )
    }

    /// `self < other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers,
    /// [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn less_than(&self, other: &Value) -> SassResult<bool> {
        self.compare(BinaryOperator::LessThan, other, fuzzy_less_than)
    }

    /// `self <= other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers,
    /// [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn less_than_or_equals(&self, other: &Value) -> SassResult<bool> {
        self.compare(
            BinaryOperator::LessThanOrEquals,
            other,
            fuzzy_less_than_or_equals,
        )
    }

    /// `self % other`, always non-negative for a non-zero divisor.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers,
    /// [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn modulo(&self, other: &Value) -> SassResult<Value> {
        let number = self.expect_number(BinaryOperator::Modulo, other)?;
        let remainder = self.coerced_arithmetic(number, f64::rem_euclid)?;
        Ok(Value::Number(remainder))
    }

    /// `self + other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for operands other than numbers and
    /// colors, [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn plus(&self, other: &Value) -> SassResult<Value> {
        match other {
            Value::Number(number) => Ok(Value::Number(
                self.coerced_arithmetic(number, |left, right| left + right)?,
            )),
            Value::Color(_) => Ok(self.fallback(BinaryOperator::Plus, other)),
            Value::Other(_) => Err(self.undefined(BinaryOperator::Plus, other)),
        }
    }

    /// `self - other`.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for operands other than numbers and
    /// colors, [`SassError::IncompatibleUnits`] when the units don't convert.
    pub fn minus(&self, other: &Value) -> SassResult<Value> {
        match other {
            Value::Number(number) => Ok(Value::Number(
                self.coerced_arithmetic(number, |left, right| left - right)?,
            )),
            Value::Color(_) => Ok(self.fallback(BinaryOperator::Minus, other)),
            Value::Other(_) => Err(self.undefined(BinaryOperator::Minus, other)),
        }
    }

    /// `self * other`, cancelling convertible units.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for non-numbers.
    pub fn times(&self, other: &Value) -> SassResult<Value> {
        let number = self.expect_number(BinaryOperator::Times, other)?;
        let (product, units) =
            multiply_units(self.value() * number.value(), self.units(), number.units());
        Ok(Value::Number(Self::with_units(product, units)))
    }

    /// `self / other`, cancelling convertible units.
    ///
    /// When both operands still carry an original form the quotient carries
    /// `lhs/rhs`, so `16px/2` can be emitted as written.
    ///
    /// # Errors
    /// [`SassError::UndefinedOperation`] for operands other than numbers and
    /// colors.
    pub fn divided_by(&self, other: &Value) -> SassResult<Value> {
        let number = match other {
            Value::Number(number) => number,
            Value::Color(_) => return Ok(self.fallback(BinaryOperator::DividedBy, other)),
            Value::Other(_) => return Err(self.undefined(BinaryOperator::DividedBy, other)),
        };
        let (quotient, units) =
            divide_units(self.value() / number.value(), self.units(), number.units());
        let mut result = Self::with_units(quotient, units);
        if let (Some(numerator), Some(denominator)) = (self.original(), number.original()) {
            result = result.with_original_text(format!("{numerator}/{denominator}"));
        }
        Ok(Value::Number(result))
    }

    /// `+self`.
    #[must_use]
    pub fn unary_plus(&self) -> Self {
        self.clone()
    }

    /// `-self`: same units, no original form.
    #[must_use]
    pub fn unary_minus(&self) -> Self {
        Self::with_units(-self.value(), self.units().clone())
    }
}
