/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Whether values of a storage type are integral or floating-point.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    Integer,
    Float,
}

/// The storage policy: the result of combining two values, the right
/// one of which is first converted by a factor that is `exact` (an
/// integer), stays integral only if both sides are integral and the
/// conversion is exact. Anything else is computed in floating-point.
pub const fn widen(
    lhs: NumericKind,
    rhs: NumericKind,
    exact: bool,
) -> NumericKind {
    match (lhs, rhs, exact) {
        (NumericKind::Integer, NumericKind::Integer, true) => {
            NumericKind::Integer
        }
        _ => NumericKind::Float,
    }
}

/// Arithmetic types usable as storage for a measure.
pub trait Numeric:
    Num
    + NumCast
    + ToPrimitive
    + Bounded
    + Copy
    + PartialOrd
    + Debug
    + Display
    + 'static
{
    const KIND: NumericKind;

    /// Lossy for 64-bit integers; never fails for the storage types.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Converts between storage types. Fractions are truncated, values
    /// out of the target's range saturate at its bounds and NaN becomes
    /// zero.
    fn cast<M: Numeric>(self) -> M {
        match <M as NumCast>::from(self) {
            Some(v) => v,
            None if self.partial_cmp(&self).is_none() => M::zero(),
            None if self < Self::zero() => M::min_value(),
            None => M::max_value(),
        }
    }

    /// Computes `self * factor + shift` exactly, for integer storage.
    fn checked_scale(self, factor: i64, shift: i64) -> Option<Self> {
        self.to_i128()?
            .checked_mul(factor as i128)?
            .checked_add(shift as i128)
            .and_then(<Self as NumCast>::from)
    }

    fn to_scalar(self) -> Scalar {
        match (Self::KIND, self.to_i64()) {
            (NumericKind::Integer, Some(v)) => Scalar::Integer(v),
            _ => Scalar::Float(self.as_f64()),
        }
    }

    /// Fails if a float without an exact integer value is stored in an
    /// integer type, or if a value does not fit.
    fn from_scalar(value: Scalar) -> Result<Self, UnitError> {
        let converted = match (value, Self::KIND) {
            (Scalar::Integer(v), _) => <Self as NumCast>::from(v),
            (Scalar::Float(v), NumericKind::Float) => {
                <Self as NumCast>::from(v)
            }
            (Scalar::Float(v), NumericKind::Integer) => {
                if v.fract() != 0.0 || !v.is_finite() {
                    return Err(UnitError::IntegerStorage);
                }
                <Self as NumCast>::from(v)
            }
        };
        converted.ok_or(UnitError::Overflow)
    }
}

macro_rules! impl_numeric {
    ($kind:ident: $($t:ty),*) => {
        $(
            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::$kind;
            }
        )*
    };
}

impl_numeric!(Integer: i32, i64, u32, u64);
impl_numeric!(Float: f32, f64);

/// The common storage type of a binary operation, following the usual
/// arithmetic conversions: floats win over integers, the wider type
/// wins, and unsigned wins between integers of equal width.
pub trait Promote<Rhs: Numeric = Self>: Numeric {
    type Output: Numeric;
}

macro_rules! promote {
    ($($t:ty),* ; $($a:ty, $b:ty => $c:ty);* $(;)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;
            }
        )*
        $(
            impl Promote<$b> for $a {
                type Output = $c;
            }
            impl Promote<$a> for $b {
                type Output = $c;
            }
        )*
    };
}

promote!(
    i32, i64, u32, u64, f32, f64;
    i32, i64 => i64;
    i32, u32 => u32;
    i32, u64 => u64;
    i64, u32 => i64;
    i64, u64 => u64;
    u32, u64 => u64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, u32 => f32;
    f32, u64 => f32;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, u32 => f64;
    f64, u64 => f64;
    f32, f64 => f64;
);

/// A runtime value, integral as long as the storage policy allows.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
}

impl Scalar {
    pub const fn kind(&self) -> NumericKind {
        match self {
            Scalar::Integer(_) => NumericKind::Integer,
            Scalar::Float(_) => NumericKind::Float,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Integer(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_add(b)
                .map(Scalar::Integer)
                .ok_or(UnitError::Overflow),
            _ => Ok(Scalar::Float(self.to_f64() + rhs.to_f64())),
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_sub(b)
                .map(Scalar::Integer)
                .ok_or(UnitError::Overflow),
            _ => Ok(Scalar::Float(self.to_f64() - rhs.to_f64())),
        }
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_mul(b)
                .map(Scalar::Integer)
                .ok_or(UnitError::Overflow),
            _ => Ok(Scalar::Float(self.to_f64() * rhs.to_f64())),
        }
    }

    /// Integer division stays integral only when it is exact; division
    /// by integer zero gives the floating-point result.
    pub fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b))
                if b != 0 && a.checked_rem(b) == Some(0) =>
            {
                a.checked_div(b)
                    .map(Scalar::Integer)
                    .ok_or(UnitError::Overflow)
            }
            _ => Ok(Scalar::Float(self.to_f64() / rhs.to_f64())),
        }
    }

    pub fn checked_neg(self) -> Result<Self, UnitError> {
        match self {
            Scalar::Integer(v) => v
                .checked_neg()
                .map(Scalar::Integer)
                .ok_or(UnitError::Overflow),
            Scalar::Float(v) => Ok(Scalar::Float(-v)),
        }
    }

    pub fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Some(a.cmp(b)),
            _ => self.to_f64().partial_cmp(&rhs.to_f64()),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Scalar::Integer(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for Scalar {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(v) => Ok(Scalar::Integer(v)),
            Err(_) => s
                .parse::<f64>()
                .map(Scalar::Float)
                .map_err(|_| UnitError::ParseNumber),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{widen, Numeric, NumericKind, Promote, Scalar};
    use crate::UnitError;

    fn promoted<A: Promote<B>, B: Numeric>() -> NumericKind {
        <A as Promote<B>>::Output::KIND
    }

    #[test]
    fn storage_policy() {
        use NumericKind::{Float, Integer};
        assert_eq!(widen(Integer, Integer, true), Integer);
        assert_eq!(widen(Integer, Integer, false), Float);
        assert_eq!(widen(Float, Integer, true), Float);
        assert_eq!(widen(Integer, Float, true), Float);
    }

    #[test]
    fn promotion() {
        assert_eq!(promoted::<i32, i64>(), NumericKind::Integer);
        assert_eq!(promoted::<u64, f32>(), NumericKind::Float);
        assert_eq!(
            std::any::type_name::<<i32 as Promote<u32>>::Output>(),
            "u32"
        );
        assert_eq!(
            std::any::type_name::<<f32 as Promote<f64>>::Output>(),
            "f64"
        );
    }

    #[test]
    fn casts_truncate_and_saturate() {
        assert_eq!(2.9f64.cast::<i32>(), 2);
        assert_eq!((-1.0f64).cast::<u32>(), 0);
        assert_eq!(7i64.cast::<f32>(), 7.0);
        assert_eq!(300u64.cast::<u32>(), 300);
        assert_eq!((-1i32).cast::<u32>(), 0);
        assert_eq!(u64::MAX.cast::<i64>(), i64::MAX);
        assert_eq!(1e300f64.cast::<i32>(), i32::MAX);
        assert_eq!(f64::NAN.cast::<i64>(), 0);
        assert_eq!(3.5f32.as_f64(), 3.5);
    }

    #[test]
    fn exact_integer_scaling() {
        assert_eq!(3i32.checked_scale(12, 0), Some(36));
        assert_eq!(i32::MAX.checked_scale(2, 0), None);
        assert_eq!(0u32.checked_scale(1, -1), None);
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(i64::from_scalar(Scalar::Float(4.0)), Ok(4));
        assert_eq!(
            i64::from_scalar(Scalar::Float(4.5)),
            Err(UnitError::IntegerStorage)
        );
        assert_eq!(
            u32::from_scalar(Scalar::Integer(-1)),
            Err(UnitError::Overflow)
        );
        assert_eq!(
            f32::from_scalar(Scalar::Integer(3)),
            Ok(3.0)
        );
        assert_eq!(
            i32::from_scalar(Scalar::Float(f64::INFINITY)),
            Err(UnitError::IntegerStorage)
        );
        assert_eq!(
            i32::from_scalar(Scalar::Float(1e12)),
            Err(UnitError::Overflow)
        );
        assert_eq!(u64::MAX.to_scalar(), Scalar::Float(u64::MAX as f64));
        assert_eq!(2.5f32.to_scalar(), Scalar::Float(2.5));
        assert_eq!(5u32.to_scalar(), Scalar::Integer(5));
    }

    #[test]
    fn scalar_arithmetic() {
        let (a, b) = (Scalar::Integer(6), Scalar::Integer(4));
        assert_eq!(a.checked_add(b), Ok(Scalar::Integer(10)));
        assert_eq!(a.checked_div(Scalar::Integer(3)), Ok(Scalar::Integer(2)));
        assert_eq!(a.checked_div(b), Ok(Scalar::Float(1.5)));
        assert_eq!(
            a.checked_mul(Scalar::Float(0.5)),
            Ok(Scalar::Float(3.0))
        );
        assert_eq!(
            Scalar::Integer(i64::MAX).checked_add(Scalar::Integer(1)),
            Err(UnitError::Overflow)
        );
        assert_eq!(
            Scalar::Integer(1).checked_div(Scalar::Integer(0)),
            Ok(Scalar::Float(f64::INFINITY))
        );
    }

    #[test]
    fn scalar_parsing_and_json() {
        assert_eq!("12".parse::<Scalar>(), Ok(Scalar::Integer(12)));
        assert_eq!("1.5".parse::<Scalar>(), Ok(Scalar::Float(1.5)));
        assert_eq!("x".parse::<Scalar>(), Err(UnitError::ParseNumber));
        assert_eq!(
            serde_json::from_str::<Scalar>("3").unwrap(),
            Scalar::Integer(3)
        );
        assert_eq!(
            serde_json::from_str::<Scalar>("3.25").unwrap(),
            Scalar::Float(3.25)
        );
    }
}
