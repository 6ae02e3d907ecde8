//! Failures raised while validating and combining numbers.

use core::fmt::{self, Display, Formatter};
use std::error::Error;

/// Result alias used throughout the crate.
pub type SassResult<T> = Result<T, SassError>;

/// Failures raised by number arithmetic, conversion and argument validation.
///
/// Operands are carried already rendered so the host can report them without
/// holding on to the values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SassError {
    /// No unit-by-unit matching exists between two signatures.
    IncompatibleUnits {
        /// Rendered source signature.
        from: String,
        /// Rendered target signature.
        to: String,
    },
    /// An operator was applied to a pair of value kinds it does not support.
    UndefinedOperation {
        /// Operator symbol, e.g. `+`.
        operator: &'static str,
        /// Rendered left operand.
        left: String,
        /// Rendered right operand.
        right: String,
    },
    /// The number is not within epsilon of an integer.
    NotAnInteger {
        /// Rendered number.
        value: String,
        /// Argument name, without `$`.
        name: Option<String>,
    },
    /// A list index was zero or past either end of the list.
    InvalidIndex {
        /// Rendered index, as given.
        index: String,
        /// Length of the list being indexed.
        length: usize,
        /// Argument name, without `$`.
        name: Option<String>,
    },
    /// The number lies outside an inclusive range.
    OutOfRange {
        /// Rendered number.
        value: String,
        /// Rendered lower bound, including units.
        min: String,
        /// Rendered upper bound, including units.
        max: String,
        /// Argument name, without `$`.
        name: Option<String>,
    },
    /// The number does not have exactly the requested unit.
    WrongUnit {
        /// Rendered number.
        value: String,
        /// The unit that was required.
        unit: String,
        /// Argument name, without `$`.
        name: Option<String>,
    },
    /// The number has units where none were allowed.
    UnexpectedUnits {
        /// Rendered number.
        value: String,
        /// Argument name, without `$`.
        name: Option<String>,
    },
}

impl SassError {
    /// The message without any argument-name prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::IncompatibleUnits { from, to } => format!("Incompatible units {from} and {to}."),
            Self::UndefinedOperation {
                operator,
                left,
                right,
            } => format!("Undefined operation \"{left} {operator} {right}\"."),
            Self::NotAnInteger { value, .. } => format!("{value} is not an int."),
            Self::InvalidIndex { index, .. } if index == "0" => {
                "List index may not be 0.".to_owned()
            }
            Self::InvalidIndex { index, length, .. } => {
                format!("Invalid index {index} for a list with {length} elements.")
            }
            Self::OutOfRange {
                value, min, max, ..
            } => format!("Expected {value} to be within {min} and {max}."),
            Self::WrongUnit { value, unit, .. } => {
                format!("Expected {value} to have unit \"{unit}\".")
            }
            Self::UnexpectedUnits { value, .. } => format!("Expected {value} to have no units."),
        }
    }

    /// The argument the failure is attributed to, if the caller named one.
    #[must_use]
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::IncompatibleUnits { .. } | Self::UndefinedOperation { .. } => None,
            Self::NotAnInteger { name, .. }
            | Self::InvalidIndex { name, .. }
            | Self::OutOfRange { name, .. }
            | Self::WrongUnit { name, .. }
            | Self::UnexpectedUnits { name, .. } => name.as_deref(),
        }
    }
}

impl Display for SassError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self.argument_name() {
            Some(name) => write!(formatter, "${name}: {}", self.message()),
            None => formatter.write_str(&self.message()),
        }
    }
}

impl Error for SassError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Argument names prefix the message with `$name: `.
    #[test]
    fn argument_name_prefix() {
        let named = SassError::NotAnInteger {
            value: "1.5".to_owned(),
            name: Some("amount".to_owned()),
        };
        assert_eq!(named.to_string(), "$amount: 1.5 is not an int.");
        assert_eq!(named.argument_name(), Some("amount"));

        let anonymous = SassError::UnexpectedUnits {
            value: "3px".to_owned(),
            name: None,
        };
        assert_eq!(anonymous.to_string(), "Expected 3px to have no units.");
    }

    /// Zero and out-of-bounds indices get different messages.
    #[test]
    fn index_messages() {
        let zero = SassError::InvalidIndex {
            index: "0".to_owned(),
            length: 3,
            name: None,
        };
        assert_eq!(zero.message(), "List index may not be 0.");
        let past_end = SassError::InvalidIndex {
            index: "-4".to_owned(),
            length: 3,
            name: Some("n".to_owned()),
        };
        assert_eq!(
            past_end.to_string(),
            "$n: Invalid index -4 for a list with 3 elements."
        );
    }

    /// Operator failures quote the whole expression.
    #[test]
    fn operation_messages() {
        let undefined = SassError::UndefinedOperation {
            operator: "*",
            left: "1px".to_owned(),
            right: "#ff0000".to_owned(),
        };
        assert_eq!(undefined.to_string(), "Undefined operation \"1px * #ff0000\".");
        let incompatible = SassError::IncompatibleUnits {
            from: "s".to_owned(),
            to: "px".to_owned(),
        };
        assert_eq!(incompatible.to_string(), "Incompatible units s and px.");
        assert_eq!(incompatible.argument_name(), None);
    }
}
