/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::ratio::Ratio;

/// The six base dimensions. Every dimension is a product of integer
/// powers of these.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Mass,
    Length,
    Time,
    Temperature,
    Current,
    LuminousIntensity,
}

const BASE_DIMENSIONS: [BaseDimension; 6] = [
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Temperature,
    BaseDimension::Current,
    BaseDimension::LuminousIntensity,
];

impl BaseDimension {
    pub const LIST: &[Self] = &BASE_DIMENSIONS;

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The prime assigned to this dimension in the rational encoding.
    pub const fn prime(&self) -> i64 {
        match self {
            BaseDimension::Mass => 2,
            BaseDimension::Length => 3,
            BaseDimension::Time => 5,
            BaseDimension::Temperature => 7,
            BaseDimension::Current => 11,
            BaseDimension::LuminousIntensity => 13,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Mass => "M",
            BaseDimension::Length => "L",
            BaseDimension::Time => "T",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Current => "I",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    /// Symbol of the canonical SI unit of this dimension.
    pub const fn si_symbol(&self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Temperature => "K",
            BaseDimension::Current => "A",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Current => "current",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// A physical dimension, as the exponents of the six base dimensions
/// (indexed by [`BaseDimension::index`]).
///
/// Conversion is possible only between units of equivalent
/// dimension. Exponents are limited to the range of `i8`; exceeding
/// it is reported as [`UnitError::Overflow`].
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dimension([i8; 6]);

impl Dimension {
    pub const NONE: Self = Dimension([0; 6]);

    pub const fn new(exponents: [i8; 6]) -> Self {
        Dimension(exponents)
    }

    pub const fn base(dim: BaseDimension) -> Self {
        let mut exponents = [0; 6];
        exponents[dim.index()] = 1;
        Dimension(exponents)
    }

    pub const fn exponents(&self) -> [i8; 6] {
        self.0
    }

    pub const fn exponent(&self, dim: BaseDimension) -> i8 {
        self.0[dim.index()]
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equivalent(&Self::NONE)
    }

    pub const fn equivalent(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 6 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 6 {
            exponents[i] = match exponents[i].checked_add(rhs.0[i]) {
                Some(e) => e,
                None => return Err(UnitError::Overflow),
            };
            i += 1;
        }
        Ok(Dimension(exponents))
    }

    pub const fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        self.checked_mul(const_try!(rhs.recip()))
    }

    pub const fn recip(self) -> Result<Self, UnitError> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 6 {
            exponents[i] = match exponents[i].checked_neg() {
                Some(e) => e,
                None => return Err(UnitError::Overflow),
            };
            i += 1;
        }
        Ok(Dimension(exponents))
    }

    pub const fn powi(self, n: i32) -> Result<Self, UnitError> {
        let mut exponents = self.0;
        let mut i = 0;
        while i < 6 {
            let e = exponents[i] as i64 * n as i64;
            if e < i8::MIN as i64 || e > i8::MAX as i64 {
                return Err(UnitError::Overflow);
            }
            exponents[i] = e as i8;
            i += 1;
        }
        Ok(Dimension(exponents))
    }

    /// The prime encoding of this dimension: the product of
    /// `prime^exponent` over the base dimensions, with negative
    /// exponents ending up in the denominator.
    ///
    /// Multiplying dimensions multiplies their encodings, and two
    /// dimensions are equivalent iff their encodings are equal. The
    /// encoding overflows long before the exponent vector does.
    pub const fn encode(&self) -> Result<Ratio, UnitError> {
        let (mut num, mut den) = (1i64, 1i64);
        let mut i = 0;
        while i < 6 {
            let prime = BASE_DIMENSIONS[i].prime();
            let e = self.0[i];
            let mut k = 0;
            while k < e.unsigned_abs() {
                let r = match e > 0 {
                    true => num.checked_mul(prime),
                    false => den.checked_mul(prime),
                };
                match (r, e > 0) {
                    (Some(v), true) => num = v,
                    (Some(v), false) => den = v,
                    (None, _) => return Err(UnitError::Overflow),
                }
                k += 1;
            }
            i += 1;
        }
        Ratio::new(num, den)
    }

    /// Recovers a dimension from its prime encoding. Any factor
    /// other than the six base primes is rejected.
    pub const fn decode(code: Ratio) -> Result<Self, UnitError> {
        if !code.is_positive() {
            return Err(UnitError::InvalidDimension(code));
        }
        let (mut num, mut den) = (code.num(), code.den());
        let mut exponents = [0i8; 6];
        let mut i = 0;
        while i < 6 {
            let prime = BASE_DIMENSIONS[i].prime();
            while num % prime == 0 {
                num /= prime;
                exponents[i] = match exponents[i].checked_add(1) {
                    Some(e) => e,
                    None => return Err(UnitError::Overflow),
                };
            }
            while den % prime == 0 {
                den /= prime;
                exponents[i] = match exponents[i].checked_sub(1) {
                    Some(e) => e,
                    None => return Err(UnitError::Overflow),
                };
            }
            i += 1;
        }
        match num == 1 && den == 1 {
            true => Ok(Dimension(exponents)),
            false => Err(UnitError::InvalidDimension(code)),
        }
    }

    /// Factors with a non-zero exponent, in base dimension order.
    pub fn factors(
        &self,
    ) -> impl Iterator<Item = (BaseDimension, i8)> + Clone + '_ {
        BaseDimension::LIST
            .iter()
            .map(|d| (*d, self.exponent(*d)))
            .filter(|(_, e)| *e != 0)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.is_dimensionless() {
            true => write!(f, "1"),
            false => write_composite(
                f,
                self.factors().map(|(d, e)| (d.symbol(), e)),
            ),
        }
    }
}

/// Writes `a⋅b²/c` style composites; factors must be non-zero.
pub(crate) fn write_composite<'a, I>(
    f: &mut Formatter,
    factors: I,
) -> Result<(), fmt::Error>
where
    I: Iterator<Item = (&'a str, i8)> + Clone,
{
    let num = factors
        .clone()
        .filter(|(_, p)| *p > 0)
        .map(|(u, p)| format!("{}{}", u, superscript(p)))
        .collect::<Vec<String>>();
    let den = factors
        .filter(|(_, p)| *p < 0)
        .map(|(u, p)| format!("{}{}", u, superscript(-p)))
        .collect::<Vec<String>>();
    match num.is_empty() {
        true => write!(f, "1")?,
        false => write!(f, "{}", num.join("\u{22c5}"))?,
    }
    if !den.is_empty() {
        write!(f, "/{}", den.join("\u{22c5}"))?;
    }
    Ok(())
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: i8) -> String {
    match val {
        1 => String::new(),
        _ => val
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => c,
            })
            .collect(),
    }
}

/* Operations on dimensions, used for type-checking. */

impl Mul<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn mul(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        self.checked_mul(rhs)
    }
}

impl Div<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn div(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        self.checked_div(rhs)
    }
}

impl Add<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn add(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        match self.equivalent(&rhs) {
            true => Ok(self),
            false => Err(UnitError::Conversion(self, rhs)),
        }
    }
}

impl Sub<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn sub(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        match self.equivalent(&rhs) {
            true => Ok(self),
            false => Err(UnitError::Conversion(self, rhs)),
        }
    }
}
