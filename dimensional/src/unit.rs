/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use super::conversion::Conversion;
use super::dimension::{write_composite, BaseDimension, Dimension};
use super::error::UnitError;
use super::ratio::Ratio;

/// A unit that is a pure multiple of the canonical SI unit of its
/// dimension. The ratio is always positive; ratio one means the unit
/// is the canonical SI unit itself.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(try_from = "LinearUnitFields")]
pub struct LinearUnit {
    dimension: Dimension,
    ratio: Ratio,
}

/* Deserialized units go through `LinearUnit::new`. */
#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct LinearUnitFields {
    dimension: Dimension,
    ratio: Ratio,
}

impl TryFrom<LinearUnitFields> for LinearUnit {
    type Error = UnitError;
    fn try_from(fields: LinearUnitFields) -> Result<Self, UnitError> {
        LinearUnit::new(fields.dimension, fields.ratio)
    }
}

/// An affine unit: a value `v` in this unit is `v + offset` in the
/// base unit. Offset units take part in conversions only; they cannot
/// be scaled, inverted or multiplied.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct OffsetUnit {
    base: LinearUnit,
    offset: Ratio,
}

/// A unit descriptor.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Linear(LinearUnit),
    Offset(OffsetUnit),
}

pub const NEUTRAL_UNIT: Unit = Unit::Linear(LinearUnit::ONE);

impl LinearUnit {
    pub const ONE: Self = LinearUnit {
        dimension: Dimension::NONE,
        ratio: Ratio::ONE,
    };

    pub const fn new(
        dimension: Dimension,
        ratio: Ratio,
    ) -> Result<Self, UnitError> {
        match ratio.is_positive() {
            true => Ok(LinearUnit { dimension, ratio }),
            false => Err(UnitError::InvalidScale(ratio)),
        }
    }

    pub const fn base(dim: BaseDimension) -> Self {
        LinearUnit {
            dimension: Dimension::base(dim),
            ratio: Ratio::ONE,
        }
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub const fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub const fn is_canonical(&self) -> bool {
        self.ratio.is_one()
    }

    /// The canonical SI unit of the same dimension.
    pub const fn canonical(&self) -> Self {
        LinearUnit {
            dimension: self.dimension,
            ratio: Ratio::ONE,
        }
    }

    /// One of the resulting unit equals `r` of this unit.
    pub const fn scale(self, r: Ratio) -> Result<Self, UnitError> {
        if !r.is_positive() {
            return Err(UnitError::InvalidScale(r));
        }
        Ok(LinearUnit {
            dimension: self.dimension,
            ratio: const_try!(r.checked_mul(self.ratio)),
        })
    }

    pub const fn recip(self) -> Result<Self, UnitError> {
        Ok(LinearUnit {
            dimension: const_try!(self.dimension.recip()),
            ratio: const_try!(self.ratio.recip()),
        })
    }

    pub const fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        Ok(LinearUnit {
            dimension: const_try!(self.dimension.checked_mul(rhs.dimension)),
            ratio: const_try!(self.ratio.checked_mul(rhs.ratio)),
        })
    }

    pub const fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        Ok(LinearUnit {
            dimension: const_try!(self.dimension.checked_div(rhs.dimension)),
            ratio: const_try!(self.ratio.checked_div(rhs.ratio)),
        })
    }

    pub const fn powi(self, n: i32) -> Result<Self, UnitError> {
        Ok(LinearUnit {
            dimension: const_try!(self.dimension.powi(n)),
            ratio: const_try!(self.ratio.powi(n)),
        })
    }

    /// The product of all factors; the empty product is dimensionless.
    pub const fn product(factors: &[Self]) -> Result<Self, UnitError> {
        let mut result = Self::ONE;
        let mut i = 0;
        while i < factors.len() {
            result = const_try!(result.checked_mul(factors[i]));
            i += 1;
        }
        Ok(result)
    }

    /// The affine unit whose zero lies at `offset` of this unit.
    pub const fn offset(self, offset: Ratio) -> OffsetUnit {
        OffsetUnit { base: self, offset }
    }
}

impl OffsetUnit {
    pub const fn base(&self) -> LinearUnit {
        self.base
    }

    pub const fn offset(&self) -> Ratio {
        self.offset
    }
}

impl Unit {
    pub const fn base(dim: BaseDimension) -> Self {
        Unit::Linear(LinearUnit::base(dim))
    }

    pub const fn dimension(&self) -> Dimension {
        self.base_unit().dimension
    }

    pub const fn linear(&self) -> Option<LinearUnit> {
        match self {
            Unit::Linear(u) => Some(*u),
            Unit::Offset(_) => None,
        }
    }

    /// The linear unit in which the offset is expressed (or the unit
    /// itself for linear units).
    pub const fn base_unit(&self) -> LinearUnit {
        match self {
            Unit::Linear(u) => *u,
            Unit::Offset(u) => u.base,
        }
    }

    pub const fn offset(&self) -> Ratio {
        match self {
            Unit::Linear(_) => Ratio::ZERO,
            Unit::Offset(u) => u.offset,
        }
    }

    pub const fn is_canonical(&self) -> bool {
        match self {
            Unit::Linear(u) => u.is_canonical(),
            Unit::Offset(_) => false,
        }
    }

    pub const fn normalize(&self) -> Self {
        Unit::Linear(self.base_unit().canonical())
    }

    pub const fn scale(self, r: Ratio) -> Result<Self, UnitError> {
        match self {
            Unit::Linear(u) => Ok(Unit::Linear(const_try!(u.scale(r)))),
            Unit::Offset(_) => Err(UnitError::Scale(self, r)),
        }
    }

    pub const fn recip(self) -> Result<Self, UnitError> {
        match self {
            Unit::Linear(u) => Ok(Unit::Linear(const_try!(u.recip()))),
            Unit::Offset(_) => Err(UnitError::Inv(self)),
        }
    }

    pub const fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Unit::Linear(a), Unit::Linear(b)) => {
                Ok(Unit::Linear(const_try!(a.checked_mul(b))))
            }
            _ => Err(UnitError::Mul(self, rhs)),
        }
    }

    pub const fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Unit::Linear(a), Unit::Linear(b)) => {
                Ok(Unit::Linear(const_try!(a.checked_div(b))))
            }
            _ => Err(UnitError::Div(self, rhs)),
        }
    }

    pub const fn powi(self, n: i32) -> Result<Self, UnitError> {
        match self {
            Unit::Linear(u) => Ok(Unit::Linear(const_try!(u.powi(n)))),
            Unit::Offset(_) => Err(UnitError::Pow(self, n)),
        }
    }

    /// Offsets can only be applied to linear units.
    pub const fn with_offset(self, offset: Ratio) -> Result<Self, UnitError> {
        match self {
            Unit::Linear(u) => Ok(Unit::Offset(u.offset(offset))),
            Unit::Offset(_) => Err(UnitError::Offset(self, offset)),
        }
    }

    pub const fn conversion(&self, to: &Unit) -> Result<Conversion, UnitError> {
        Conversion::between(self, to)
    }

    pub fn convert(&self, to: &Unit, value: f64) -> Result<f64, UnitError> {
        Ok(self.conversion(to)?.apply_f64(value))
    }
}

impl From<LinearUnit> for Unit {
    fn from(unit: LinearUnit) -> Self {
        Unit::Linear(unit)
    }
}

impl From<OffsetUnit> for Unit {
    fn from(unit: OffsetUnit) -> Self {
        Unit::Offset(unit)
    }
}

impl Display for LinearUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match (self.dimension.is_dimensionless(), self.ratio.is_one()) {
            (true, _) => write!(f, "{}", self.ratio),
            (false, true) => write_si(f, &self.dimension),
            (false, false) => {
                write!(f, "{} ", self.ratio)?;
                write_si(f, &self.dimension)
            }
        }
    }
}

fn write_si(f: &mut Formatter, dim: &Dimension) -> Result<(), fmt::Error> {
    write_composite(f, dim.factors().map(|(d, e)| (d.si_symbol(), e)))
}

impl Display for OffsetUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} + {}", self.base, self.offset)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Unit::Linear(u) => write!(f, "{}", u),
            Unit::Offset(u) => write!(f, "{}", u),
        }
    }
}

impl Mul<Unit> for Unit {
    type Output = Result<Unit, UnitError>;
    fn mul(self, rhs: Unit) -> Result<Unit, UnitError> {
        self.checked_mul(rhs)
    }
}

impl Div<Unit> for Unit {
    type Output = Result<Unit, UnitError>;
    fn div(self, rhs: Unit) -> Result<Unit, UnitError> {
        self.checked_div(rhs)
    }
}
