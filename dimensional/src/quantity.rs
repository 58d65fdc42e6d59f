/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use log::trace;
use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::numeric::{Numeric, Scalar};
use super::typed::{Measure, UnitType};
use super::{Dimension, Unit, NEUTRAL_UNIT};

/// A value with a unit known at runtime.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity(pub Scalar, pub Unit);

impl Quantity {
    pub fn new<T: Into<Scalar>>(val: T, unit: Unit) -> Self {
        Quantity(val.into(), unit)
    }

    pub fn from_unit(unit: Unit) -> Self {
        Quantity(Scalar::Integer(1), unit)
    }

    pub fn from_value<T: Into<Scalar>>(value: T) -> Self {
        Quantity(value.into(), NEUTRAL_UNIT)
    }

    pub fn dimension(&self) -> Dimension {
        self.1.dimension()
    }

    /// Integer values stay integral where the conversion allows it.
    pub fn convert(self, unit: &Unit) -> Result<Self, UnitError> {
        let conversion = self.1.conversion(unit)?;
        let value = conversion.apply_scalar(self.0)?;
        trace!("{} -> {} {} ({})", self, value, unit, conversion);
        Ok(Quantity(value, *unit))
    }

    /// The same quantity in the canonical SI unit of its dimension.
    pub fn normalize(self) -> Result<Self, UnitError> {
        self.convert(&self.1.normalize())
    }

    /// The bare number, if the unit is a canonical SI unit.
    pub fn into_number(self) -> Result<Scalar, UnitError> {
        match self.1.is_canonical() {
            true => Ok(self.0),
            false => Err(UnitError::NotCanonical(self.1)),
        }
    }

    pub fn try_into_measure<U: UnitType, N: Numeric>(
        self,
    ) -> Result<Measure<U, N>, UnitError> {
        let Quantity(value, _) = self.convert(&U::UNIT)?;
        Ok(Measure::new(N::from_scalar(value)?))
    }

    pub fn powi(self, n: i32) -> Result<Self, UnitError> {
        let unit = self.1.powi(n)?;
        let value = match self.0 {
            Scalar::Integer(v) if n >= 0 => u32::try_from(n)
                .ok()
                .and_then(|n| v.checked_pow(n))
                .map(Scalar::Integer)
                .ok_or(UnitError::Overflow)?,
            v => Scalar::Float(v.to_f64().powi(n)),
        };
        Ok(Quantity(value, unit))
    }

    /* Note: we cannot implement the trait, because it does not allow
    for error conditions. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.0.partial_cmp(&rhs.convert(&self.1)?.0))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.0, self.1)
    }
}

/* Sums convert the right operand into the unit of the left one.
Offset units are points on a scale, not amounts, and cannot be
added. */

impl Add<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        if self.1.linear().is_none() || rhs.1.linear().is_none() {
            return Err(UnitError::Add(self.1, rhs.1));
        }
        let rhs = rhs.convert(&self.1)?;
        Ok(Quantity(self.0.checked_add(rhs.0)?, self.1))
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        if self.1.linear().is_none() || rhs.1.linear().is_none() {
            return Err(UnitError::Sub(self.1, rhs.1));
        }
        let rhs = rhs.convert(&self.1)?;
        Ok(Quantity(self.0.checked_sub(rhs.0)?, self.1))
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0.checked_mul(rhs.0)?, (self.1 * rhs.1)?))
    }
}

impl Div<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0.checked_div(rhs.0)?, (self.1 / rhs.1)?))
    }
}

impl Mul<Scalar> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn mul(self, rhs: Scalar) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0.checked_mul(rhs)?, self.1))
    }
}

impl Div<Scalar> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Scalar) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0.checked_div(rhs)?, self.1))
    }
}
