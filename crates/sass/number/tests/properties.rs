use anyhow::{Result, anyhow};
use sass_number::{
    Number, SassError, UnitSignature, Value, conversion_factor, convert_value, fuzzy::fuzzy_equals,
};

fn init_logging() {
    let _installed = env_logger::builder().is_test(true).try_init();
}

fn number_of(value: Value) -> Result<Number> {
    match value {
        Value::Number(number) => Ok(number),
        other @ (Value::Color(_) | Value::Other(_)) => Err(anyhow!("expected a number, got {other}")),
    }
}

/// Converting there and back returns the starting value.
#[test]
fn conversion_round_trips() -> Result<()> {
    let cases = [
        (UnitSignature::new(&["in"], &[]), UnitSignature::new(&["px"], &[])),
        (UnitSignature::new(&["px"], &["ms"]), UnitSignature::new(&["cm"], &["s"])),
        (UnitSignature::new(&["deg", "s"], &[]), UnitSignature::new(&["ms", "turn"], &[])),
        (UnitSignature::new(&[], &["dpi"]), UnitSignature::new(&[], &["dppx"])),
    ];
    for (from, to) in &cases {
        for start in [1.0, -3.5, 1234.5678] {
            let there = convert_value(start, from, to)?;
            let back = convert_value(there, to, from)?;
            assert!(fuzzy_equals(back, start), "{start} {from} -> {to} -> {back}");
        }
    }
    Ok(())
}

/// Factors between two units of one category multiply to one.
#[test]
fn conversion_factors_are_reciprocal() {
    let groups: [&[&str]; 5] = [
        &["in", "cm", "pc", "mm", "q", "pt", "px"],
        &["deg", "grad", "rad", "turn"],
        &["s", "ms"],
        &["Hz", "kHz"],
        &["dpi", "dpcm", "dppx"],
    ];
    for group in groups {
        for &first in group {
            for &second in group {
                let forward = conversion_factor(first.into(), second.into());
                let backward = conversion_factor(second.into(), first.into());
                let product = forward.zip(backward).map(|(there, back)| there * back);
                assert!(
                    product.is_some_and(|value| fuzzy_equals(value, 1.0)),
                    "{first} <-> {second}"
                );
            }
        }
    }
}

/// Multiplying then dividing by the same number restores the value, once
/// expressed in the starting units again.
#[test]
fn multiplication_inverts_division() -> Result<()> {
    init_logging();
    let start = Number::with_units(12.5, UnitSignature::new(&["px"], &["s"]));
    for divisor in [
        Number::with_unit(4.0, "ms"),
        Number::with_unit(0.25, "in"),
        Number::new(3.0),
    ] {
        let product = number_of(start.times(&Value::from(divisor.clone()))?)?;
        let restored = number_of(product.divided_by(&Value::from(divisor))?)?;
        assert!(fuzzy_equals(restored.value_in_units(start.units())?, start.value()));
    }
    Ok(())
}

/// Operand order does not change the product's magnitude.
#[test]
fn multiplication_magnitude_commutes() -> Result<()> {
    let left = Number::with_unit(3.0, "in");
    let right = Number::with_units(2.0, UnitSignature::new(&["deg"], &["px"]));
    let forward = number_of(left.times(&Value::from(right.clone()))?)?;
    let backward = number_of(right.times(&Value::from(left))?)?;
    assert!(fuzzy_equals(forward.value(), backward.value()));
    assert!(fuzzy_equals(forward.value(), 576.0));
    Ok(())
}

/// Literal operands keep their slash form through division.
#[test]
fn division_preserves_slash_syntax() -> Result<()> {
    let sixteen = Number::literal(16.0, UnitSignature::single("px"));
    let two = Number::literal(2.0, UnitSignature::none());
    let quotient = number_of(sixteen.divided_by(&Value::from(two))?)?;
    assert_eq!(quotient.original(), Some("16px/2"));
    assert!(fuzzy_equals(quotient.value(), 8.0));
    assert!(quotient.has_unit("px"));
    Ok(())
}

/// One-based and negative indices map onto offsets; 0 and overflow fail.
#[test]
fn index_assertions() -> Result<()> {
    assert_eq!(Number::new(1.0).assert_index_for(3, None)?, 0);
    assert_eq!(Number::new(-1.0).assert_index_for(3, None)?, 2);
    assert!(matches!(
        Number::new(0.0).assert_index_for(3, None),
        Err(SassError::InvalidIndex { ref index, .. }) if index == "0"
    ));
    assert!(matches!(
        Number::new(4.0).assert_index_for(3, Some("n")),
        Err(SassError::InvalidIndex { ref index, length: 3, .. }) if index == "4"
    ));
    Ok(())
}

/// Sums within tolerance of an integer count as integers.
#[test]
fn integer_tolerance() -> Result<()> {
    let inexact = number_of(Number::new(0.1).plus(&Value::from(Number::new(0.2)))?)?;
    assert!(!inexact.is_int());

    let near = number_of(Number::new(1.0).plus(&Value::from(Number::new(2.000_000_000_000_1)))?)?;
    assert!(near.is_int());
    assert_eq!(near.assert_int(None)?, 3);
    Ok(())
}

/// Adding pixels to seconds fails.
#[test]
fn incompatible_units_fail() {
    init_logging();
    let result = Number::with_unit(1.0, "px").plus(&Value::from(Number::with_unit(1.0, "s")));
    assert!(matches!(result, Err(SassError::IncompatibleUnits { .. })));
}

/// A unitless number compares against any unit.
#[test]
fn unitless_absorbs_units() -> Result<()> {
    init_logging();
    assert!(Number::new(5.0).less_than(&Value::from(Number::with_unit(10.0, "px")))?);
    Ok(())
}

/// Pixels and seconds are not comparable, and asking does not fail.
#[test]
fn incomparable_units_report_false() {
    init_logging();
    let pixels = Number::with_unit(1.0, "px");
    assert!(!pixels.is_comparable_to(&Number::with_unit(1.0, "s")));
    assert!(pixels.is_comparable_to(&Number::with_unit(1.0, "in")));
}
