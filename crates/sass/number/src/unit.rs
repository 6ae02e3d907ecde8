//! Interned unit symbols and numerator/denominator unit signatures.

use core::fmt::{self, Debug, Display, Formatter};

use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;
use smallvec::SmallVec;

/// Process-wide unit symbol interner.
static INTERNER: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::default);

/// An interned unit symbol such as `px` or `deg`.
///
/// Any symbol is accepted; unknown ones simply never convert.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit(Spur);

impl Unit {
    /// Intern `symbol`.
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        Self(INTERNER.get_or_intern(symbol))
    }

    /// The symbol text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        INTERNER.resolve(&self.0)
    }
}

impl From<&str> for Unit {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl PartialEq<str> for Unit {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl Debug for Unit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Unit").field(&self.as_str()).finish()
    }
}

impl Display for Unit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An ordered run of units. Repeats are meaningful (`px*px`).
pub type UnitList = SmallVec<Unit, 2>;

/// Numerator and denominator units attached to a number.
///
/// Order is insertion order and is kept as-is; no sorting or deduplication
/// happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitSignature {
    numerators: UnitList,
    denominators: UnitList,
}

impl UnitSignature {
    /// The empty signature.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single numerator unit.
    #[must_use]
    pub fn single(unit: &str) -> Self {
        let mut numerators = UnitList::new();
        numerators.push(Unit::new(unit));
        Self {
            numerators,
            denominators: UnitList::new(),
        }
    }

    /// Build a signature from unit symbols.
    #[must_use]
    pub fn new(numerators: &[&str], denominators: &[&str]) -> Self {
        Self {
            numerators: numerators.iter().map(|symbol| Unit::new(symbol)).collect(),
            denominators: denominators
                .iter()
                .map(|symbol| Unit::new(symbol))
                .collect(),
        }
    }

    /// Build a signature from already interned units.
    #[must_use]
    pub fn from_units(numerators: UnitList, denominators: UnitList) -> Self {
        Self {
            numerators,
            denominators,
        }
    }

    /// Numerator units in insertion order.
    #[must_use]
    pub fn numerators(&self) -> &[Unit] {
        &self.numerators
    }

    /// Denominator units in insertion order.
    #[must_use]
    pub fn denominators(&self) -> &[Unit] {
        &self.denominators
    }

    /// Whether both sequences are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numerators.is_empty() && self.denominators.is_empty()
    }

    /// The reciprocal signature.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            numerators: self.denominators.clone(),
            denominators: self.numerators.clone(),
        }
    }

    /// Whether this is exactly one numerator unit equal to `unit`.
    #[must_use]
    pub fn is_single(&self, unit: &str) -> bool {
        self.denominators.is_empty()
            && matches!(self.numerators.as_slice(), [only] if *only == *unit)
    }
}

/// Join `units` with `*`.
fn write_product(formatter: &mut Formatter<'_>, units: &[Unit]) -> fmt::Result {
    for (position, unit) in units.iter().enumerate() {
        if position > 0 {
            formatter.write_str("*")?;
        }
        formatter.write_str(unit.as_str())?;
    }
    Ok(())
}

impl Display for UnitSignature {
    /// Renders `no units`, `d^-1`, `(d1*d2)^-1`, `n1*n2` or `n1*n2/d1*d2`.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match (self.numerators.as_slice(), self.denominators.as_slice()) {
            ([], []) => formatter.write_str("no units"),
            ([], [single]) => write!(formatter, "{single}^-1"),
            ([], denominators) => {
                formatter.write_str("(")?;
                write_product(formatter, denominators)?;
                formatter.write_str(")^-1")
            }
            (numerators, []) => write_product(formatter, numerators),
            (numerators, denominators) => {
                write_product(formatter, numerators)?;
                formatter.write_str("/")?;
                write_product(formatter, denominators)
            }
        }
    }
}
