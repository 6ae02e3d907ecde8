//! The value kinds numeric operators need to tell apart.

use core::fmt::{self, Display, Formatter};

use crate::format::format_number;
use crate::number::Number;

/// Largest channel value.
const CHANNEL_MAX: f64 = 255.0;

/// A minimal RGBA color operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// An opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }
}

impl Display for Color {
    /// Opaque colors print as `#rrggbb`, translucent ones as `rgba(...)`.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.alpha == u8::MAX {
            write!(
                formatter,
                "#{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue
            )
        } else {
            let alpha = format_number(f64::from(self.alpha) / CHANNEL_MAX);
            write!(
                formatter,
                "rgba({}, {}, {}, {alpha})",
                self.red, self.green, self.blue
            )
        }
    }
}

/// A compiler value as seen by numeric operators.
///
/// Only numbers and colors are distinguished; every other kind (strings,
/// lists, maps, booleans) arrives as its rendered CSS text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A number with units.
    Number(Number),
    /// A color.
    Color(Color),
    /// Any other value, carried as its CSS text.
    Other(String),
}

impl Value {
    /// The number inside, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            Self::Color(_) | Self::Other(_) => None,
        }
    }

    /// Generic operator used when a number defers to the value-level default:
    /// both sides rendered and joined by `operator`.
    pub(crate) fn concatenate(left: &Self, operator: &str, right: &Self) -> Self {
        Self::Other(format!("{}{operator}{}", left.to_css_string(), right.to_css_string()))
    }

    /// Text used when the value is emitted into CSS.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            Self::Number(number) => number.to_css_string(),
            Self::Color(color) => color.to_string(),
            Self::Other(text) => text.clone(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => Display::fmt(number, formatter),
            Self::Color(color) => Display::fmt(color, formatter),
            Self::Other(text) => formatter.write_str(text),
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}
