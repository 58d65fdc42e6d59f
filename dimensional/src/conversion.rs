/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use num_traits::NumCast;
use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::numeric::{widen, Numeric, NumericKind, Scalar};
use super::ratio::Ratio;
use super::unit::Unit;

/// The exact affine map `v * factor + shift` between two units of
/// equivalent dimension.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Conversion {
    factor: Ratio,
    shift: Ratio,
}

impl Conversion {
    pub const IDENTITY: Self = Conversion {
        factor: Ratio::ONE,
        shift: Ratio::ZERO,
    };

    /// With `ra`, `oa` the ratio and offset of `from` and `rb`, `ob`
    /// those of `to`, a value `v` is `(v + oa) * ra` in SI units,
    /// hence `v * ra / rb + oa * ra / rb - ob` in `to`.
    pub const fn between(from: &Unit, to: &Unit) -> Result<Self, UnitError> {
        let (a, b) = (from.base_unit(), to.base_unit());
        if !a.dimension().equivalent(&b.dimension()) {
            return Err(UnitError::Conversion(a.dimension(), b.dimension()));
        }
        let factor = const_try!(a.ratio().checked_div(b.ratio()));
        let shift = const_try!(from.offset().checked_mul(factor));
        Ok(Conversion {
            factor,
            shift: const_try!(shift.checked_sub(to.offset())),
        })
    }

    pub const fn factor(&self) -> Ratio {
        self.factor
    }

    pub const fn shift(&self) -> Ratio {
        self.shift
    }

    /// Whether integers are mapped onto integers.
    pub const fn is_exact(&self) -> bool {
        self.factor.is_integer() && self.shift.is_integer()
    }

    pub const fn is_identity(&self) -> bool {
        self.factor.is_one() && self.shift.is_zero()
    }

    /// This conversion followed by `next`.
    pub const fn then(self, next: Self) -> Result<Self, UnitError> {
        let shift = const_try!(self.shift.checked_mul(next.factor));
        Ok(Conversion {
            factor: const_try!(self.factor.checked_mul(next.factor)),
            shift: const_try!(shift.checked_add(next.shift)),
        })
    }

    pub const fn inverse(self) -> Result<Self, UnitError> {
        let factor = const_try!(self.factor.recip());
        let shift = const_try!(self.shift.checked_mul(factor));
        Ok(Conversion {
            factor,
            shift: const_try!(Ratio::ZERO.checked_sub(shift)),
        })
    }

    /// The factor that makes this conversion unusable for integer
    /// storage, if any.
    const fn inexact_part(&self) -> Ratio {
        match self.factor.is_integer() {
            true => self.shift,
            false => self.factor,
        }
    }

    pub fn apply_f64(&self, value: f64) -> f64 {
        if self.is_identity() {
            return value;
        }
        value * self.factor.num() as f64 / self.factor.den() as f64
            + self.shift.to_f64()
    }

    /// Integer storage is converted in integer arithmetic, which
    /// requires an exact conversion; floats are converted in `f64`.
    pub fn apply<N: Numeric>(&self, value: N) -> Result<N, UnitError> {
        match N::KIND {
            _ if self.is_identity() => Ok(value),
            NumericKind::Float => {
                <N as NumCast>::from(self.apply_f64(value.as_f64()))
                    .ok_or(UnitError::Overflow)
            }
            NumericKind::Integer => match self.is_exact() {
                true => value
                    .checked_scale(self.factor.num(), self.shift.num())
                    .ok_or(UnitError::Overflow),
                false => Err(UnitError::Inexact(self.inexact_part())),
            },
        }
    }

    /// Integers stay integers when the conversion is exact and are
    /// widened to floats otherwise.
    pub fn apply_scalar(&self, value: Scalar) -> Result<Scalar, UnitError> {
        match (
            value,
            widen(value.kind(), NumericKind::Integer, self.is_exact()),
        ) {
            (Scalar::Integer(v), NumericKind::Integer) => {
                Ok(Scalar::Integer(self.apply(v)?))
            }
            (v, _) => Ok(Scalar::Float(self.apply_f64(v.to_f64()))),
        }
    }

    /// Conversion for statically checked units, where inexact integer
    /// conversions have already been rejected.
    ///
    /// # Panics
    ///
    /// Panics if the converted integer does not fit its storage type,
    /// as integer arithmetic overflow does.
    pub(crate) fn scale<N: Numeric>(&self, value: N) -> N {
        match self.apply(value) {
            Ok(v) => v,
            Err(e) => panic!("unit conversion failed: {e}"),
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.shift.is_zero() {
            true => write!(f, "x * {}", self.factor),
            false => write!(f, "x * {} + {}", self.factor, self.shift),
        }
    }
}
