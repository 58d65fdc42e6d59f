/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Units as types.
//!
//! Every unit type carries its descriptor as an associated constant.
//! The constants are computed by the same `const fn`s as the dynamic
//! descriptors, while the program is compiled: an invalid composition
//! or conversion makes the constant fail to evaluate, which is a
//! compile error at the point where the unit is used.

mod base;
mod combinator;
mod measure;

pub use base::{
    Base, BaseKind, Current, Length, LuminousIntensity, Mass, Temperature,
    Time,
};
pub use combinator::{Frac, Inverse, Offset, Scaled};
pub use measure::Measure;

use crate::{Conversion, LinearUnit, Ratio, Unit, UnitError};

/// A unit known at compile time.
pub trait UnitType {
    const UNIT: Unit;
}

/// A unit that can be scaled, inverted and multiplied: anything but
/// an offset unit.
pub trait LinearUnitType: UnitType {
    const LINEAR: LinearUnit;
}

/// A ratio known at compile time.
pub trait RatioType {
    const RATIO: Ratio;
}

/* Compile-time error reporting. Panic messages must be literals in
constant evaluation, hence one message per error kind. */

pub(crate) const fn fail(err: UnitError) -> ! {
    match err {
        UnitError::Conversion(_, _) => {
            panic!("incompatible units: dimensions differ")
        }
        UnitError::Mul(_, _)
        | UnitError::Div(_, _)
        | UnitError::Pow(_, _)
        | UnitError::Inv(_)
        | UnitError::Scale(_, _)
        | UnitError::Offset(_, _) => panic!("unsupported unit composition"),
        UnitError::Add(_, _) | UnitError::Sub(_, _) => {
            panic!("unsupported unit operation")
        }
        UnitError::Overflow => panic!("ratio overflow"),
        UnitError::ZeroDenominator => panic!("zero denominator"),
        UnitError::InvalidScale(_) => {
            panic!("scale factors must be positive")
        }
        UnitError::InvalidDimension(_) => panic!("invalid dimension"),
        UnitError::Inexact(_) => {
            panic!("conversion requires floating-point storage")
        }
        UnitError::IntegerStorage => {
            panic!("value cannot be stored as an integer")
        }
        UnitError::NotCanonical(_) => panic!(
            "not a canonical SI unit: convert explicitly before \
             taking the number"
        ),
        UnitError::ParseNumber => panic!("invalid number"),
    }
}

pub(crate) const fn resolve_ratio(r: Result<Ratio, UnitError>) -> Ratio {
    match r {
        Ok(v) => v,
        Err(e) => fail(e),
    }
}

pub(crate) const fn resolve_linear(
    r: Result<LinearUnit, UnitError>,
) -> LinearUnit {
    match r {
        Ok(v) => v,
        Err(e) => fail(e),
    }
}

pub(crate) const fn resolve_conversion(
    r: Result<Conversion, UnitError>,
) -> Conversion {
    match r {
        Ok(v) => v,
        Err(e) => fail(e),
    }
}
