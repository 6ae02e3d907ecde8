//! Sass numbers: scalars with compound units, fuzzy comparison, unit
//! conversion and cancellation, and the arithmetic operators built on them.

#![forbid(unsafe_code)]

// Bottom-up: float helpers, unit tables, signatures, then the number itself.
pub mod algebra;
pub mod conversions;
pub mod error;
pub mod format;
pub mod fuzzy;
pub mod number;
pub mod operators;
pub mod unit;
pub mod value;

pub use algebra::{convert_value, divide_units, multiply_units};
pub use conversions::{UnitCategory, category_of, conversion_factor, is_convertible};
pub use error::{SassError, SassResult};
pub use format::format_number;
pub use fuzzy::{EPSILON, PRECISION};
pub use number::{Number, Original};
pub use operators::BinaryOperator;
pub use unit::{Unit, UnitList, UnitSignature};
pub use value::{Color, Value};
