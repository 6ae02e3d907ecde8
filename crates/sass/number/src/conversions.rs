//! Static conversion factors between the CSS units Sass knows how to convert.
//!
//! Units are grouped into closed categories. Inside a category every unit has a
//! direct factor to every other unit; across categories nothing converts.

use core::f64::consts::PI;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::unit::Unit;

/// A closed group of mutually convertible units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// `in`, `cm`, `pc`, `mm`, `q`, `pt`, `px`.
    Length,
    /// `deg`, `grad`, `rad`, `turn`.
    Angle,
    /// `s`, `ms`.
    Time,
    /// `Hz`, `kHz`.
    Frequency,
    /// `dpi`, `dpcm`, `dppx`.
    Resolution,
}

/// One category's units and its factor matrix.
///
/// `factors[row][column]` is how many `units[column]` make up one `units[row]`.
struct CategoryTable {
    category: UnitCategory,
    units: &'static [&'static str],
    factors: &'static [&'static [f64]],
}

static LENGTH_UNITS: [&str; 7] = ["in", "cm", "pc", "mm", "q", "pt", "px"];
static LENGTH_FACTORS: [&[f64]; 7] = [
    &[1.0, 2.54, 6.0, 25.4, 101.6, 72.0, 96.0],
    &[1.0 / 2.54, 1.0, 6.0 / 2.54, 10.0, 40.0, 72.0 / 2.54, 96.0 / 2.54],
    &[1.0 / 6.0, 2.54 / 6.0, 1.0, 25.4 / 6.0, 101.6 / 6.0, 12.0, 16.0],
    &[1.0 / 25.4, 1.0 / 10.0, 6.0 / 25.4, 1.0, 4.0, 72.0 / 25.4, 96.0 / 25.4],
    &[1.0 / 101.6, 1.0 / 40.0, 6.0 / 101.6, 1.0 / 4.0, 1.0, 72.0 / 101.6, 96.0 / 101.6],
    &[1.0 / 72.0, 2.54 / 72.0, 1.0 / 12.0, 25.4 / 72.0, 101.6 / 72.0, 1.0, 4.0 / 3.0],
    &[1.0 / 96.0, 2.54 / 96.0, 1.0 / 16.0, 25.4 / 96.0, 101.6 / 96.0, 3.0 / 4.0, 1.0],
];

static ANGLE_UNITS: [&str; 4] = ["deg", "grad", "rad", "turn"];
static ANGLE_FACTORS: [&[f64]; 4] = [
    &[1.0, 10.0 / 9.0, PI / 180.0, 1.0 / 360.0],
    &[9.0 / 10.0, 1.0, PI / 200.0, 1.0 / 400.0],
    &[180.0 / PI, 200.0 / PI, 1.0, 1.0 / (2.0 * PI)],
    &[360.0, 400.0, 2.0 * PI, 1.0],
];

static TIME_UNITS: [&str; 2] = ["s", "ms"];
static TIME_FACTORS: [&[f64]; 2] = [&[1.0, 1000.0], &[1.0 / 1000.0, 1.0]];

static FREQUENCY_UNITS: [&str; 2] = ["Hz", "kHz"];
static FREQUENCY_FACTORS: [&[f64]; 2] = [&[1.0, 1.0 / 1000.0], &[1000.0, 1.0]];

static RESOLUTION_UNITS: [&str; 3] = ["dpi", "dpcm", "dppx"];
static RESOLUTION_FACTORS: [&[f64]; 3] = [
    &[1.0, 1.0 / 2.54, 1.0 / 96.0],
    &[2.54, 1.0, 2.54 / 96.0],
    &[96.0, 96.0 / 2.54, 1.0],
];

static CATEGORIES: [CategoryTable; 5] = [
    CategoryTable {
        category: UnitCategory::Length,
        units: &LENGTH_UNITS,
        factors: &LENGTH_FACTORS,
    },
    CategoryTable {
        category: UnitCategory::Angle,
        units: &ANGLE_UNITS,
        factors: &ANGLE_FACTORS,
    },
    CategoryTable {
        category: UnitCategory::Time,
        units: &TIME_UNITS,
        factors: &TIME_FACTORS,
    },
    CategoryTable {
        category: UnitCategory::Frequency,
        units: &FREQUENCY_UNITS,
        factors: &FREQUENCY_FACTORS,
    },
    CategoryTable {
        category: UnitCategory::Resolution,
        units: &RESOLUTION_UNITS,
        factors: &RESOLUTION_FACTORS,
    },
];

/// Where a unit sits in [`CATEGORIES`].
#[derive(Clone, Copy)]
struct TablePosition {
    category: usize,
    index: usize,
}

static INDEX: Lazy<HashMap<Unit, TablePosition>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, table) in CATEGORIES.iter().enumerate() {
        for (position, symbol) in table.units.iter().enumerate() {
            index.insert(
                Unit::new(symbol),
                TablePosition {
                    category,
                    index: position,
                },
            );
        }
    }
    index
});

/// Factor `f` such that `1 from == f to`, looked up in the table only.
///
/// Units missing from the table have no factor at all, not even to themselves.
#[must_use]
pub fn table_factor(from: Unit, to: Unit) -> Option<f64> {
    let source = INDEX.get(&from)?;
    let target = INDEX.get(&to)?;
    if source.category != target.category {
        return None;
    }
    CATEGORIES
        .get(source.category)?
        .factors
        .get(source.index)?
        .get(target.index)
        .copied()
}

/// Factor `f` such that `1 from == f to`.
///
/// Identical symbols convert with factor `1` whether or not the table knows them.
#[must_use]
pub fn conversion_factor(from: Unit, to: Unit) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }
    table_factor(from, to)
}

/// The category `unit` belongs to, if any.
#[must_use]
pub fn category_of(unit: Unit) -> Option<UnitCategory> {
    let position = INDEX.get(&unit)?;
    CATEGORIES
        .get(position.category)
        .map(|table| table.category)
}

/// Whether `unit` converts to anything other than itself.
#[must_use]
pub fn is_convertible(unit: Unit) -> bool {
    INDEX.contains_key(&unit)
}
