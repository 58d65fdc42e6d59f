/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::error::UnitError;

/// An exact rational number, used both for scale factors and for
/// affine offsets.
///
/// Values are always kept in lowest terms with a positive
/// denominator, so structural equality is numeric equality.
/// Arithmetic is carried out in 128 bits and fails with
/// [`UnitError::Overflow`] when the reduced result does not fit.
#[derive(
    SerializeDisplay,
    DeserializeFromStr,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub struct Ratio {
    num: i64,
    den: i64,
}

const fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    pub const ZERO: Self = Ratio { num: 0, den: 1 };
    pub const ONE: Self = Ratio { num: 1, den: 1 };

    pub const fn new(num: i64, den: i64) -> Result<Self, UnitError> {
        Self::reduce(num as i128, den as i128)
    }

    pub const fn integer(n: i64) -> Self {
        Ratio { num: n, den: 1 }
    }

    /// Caller guarantees `den > 0` and `gcd(num, den) == 1`.
    pub(crate) const fn raw(num: i64, den: i64) -> Self {
        Ratio { num, den }
    }

    const fn reduce(num: i128, den: i128) -> Result<Self, UnitError> {
        if den == 0 {
            return Err(UnitError::ZeroDenominator);
        }
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        if num < i64::MIN as i128
            || num > i64::MAX as i128
            || den > i64::MAX as i128
        {
            return Err(UnitError::Overflow);
        }
        Ok(Ratio {
            num: num as i64,
            den: den as i64,
        })
    }

    pub const fn num(&self) -> i64 {
        self.num
    }

    pub const fn den(&self) -> i64 {
        self.den
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Cross-multiplied equality, usable in constant expressions.
    pub const fn equals(&self, other: &Self) -> bool {
        self.num as i128 * other.den as i128
            == other.num as i128 * self.den as i128
    }

    pub const fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    pub const fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        Self::reduce(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    pub const fn checked_add(self, rhs: Self) -> Result<Self, UnitError> {
        Self::reduce(
            self.num as i128 * rhs.den as i128
                + rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    pub const fn checked_sub(self, rhs: Self) -> Result<Self, UnitError> {
        Self::reduce(
            self.num as i128 * rhs.den as i128
                - rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    pub const fn recip(self) -> Result<Self, UnitError> {
        Self::reduce(self.den as i128, self.num as i128)
    }

    /// Exponentiation by squaring. The base is only squared while
    /// exponent bits remain, so an overflow always means the result
    /// itself does not fit.
    pub const fn powi(self, n: i32) -> Result<Self, UnitError> {
        let mut base = match n < 0 {
            true => const_try!(self.recip()),
            false => self,
        };
        let mut e = n.unsigned_abs();
        let mut result = Ratio::ONE;
        while e > 0 {
            if e & 1 == 1 {
                result = const_try!(result.checked_mul(base));
            }
            e >>= 1;
            if e > 0 {
                base = const_try!(base.checked_mul(base));
            }
        }
        Ok(result)
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num as i128 * other.den as i128)
            .cmp(&(other.num as i128 * self.den as i128))
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.den {
            1 => write!(f, "{}", self.num),
            _ => write!(f, "{}/{}", self.num, self.den),
        }
    }
}

impl FromStr for Ratio {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num.trim(), den.trim()),
            None => (s.trim(), "1"),
        };
        Ratio::new(
            num.parse().map_err(|_| UnitError::ParseNumber)?,
            den.parse().map_err(|_| UnitError::ParseNumber)?,
        )
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Ratio {
    fn schema_name() -> String {
        String::from("Ratio")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::Ratio;
    use crate::UnitError;

    #[test]
    fn reduces_and_normalizes_sign() {
        let r = Ratio::new(3048, -10000).unwrap();
        assert_eq!(r.num(), -381);
        assert_eq!(r.den(), 1250);
        assert_eq!(Ratio::new(0, -7).unwrap(), Ratio::ZERO);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Ratio::new(1, 0), Err(UnitError::ZeroDenominator));
        assert_eq!(Ratio::ZERO.recip(), Err(UnitError::ZeroDenominator));
    }

    #[test]
    fn arithmetic() {
        let half = Ratio::new(1, 2).unwrap();
        let third = Ratio::new(1, 3).unwrap();
        let r = |n, d| Ratio::new(n, d).unwrap();
        assert_eq!(half.checked_mul(third).unwrap(), r(1, 6));
        assert_eq!(half.checked_div(third).unwrap(), r(3, 2));
        assert_eq!(half.checked_add(third).unwrap(), r(5, 6));
        assert_eq!(third.checked_sub(half).unwrap(), r(-1, 6));
        assert_eq!(half.powi(-3).unwrap(), Ratio::integer(8));
        assert_eq!(half.powi(0).unwrap(), Ratio::ONE);
    }

    #[test]
    fn overflow_is_reported() {
        let big = Ratio::integer(i64::MAX);
        assert_eq!(
            big.checked_mul(Ratio::integer(2)),
            Err(UnitError::Overflow)
        );
        assert_eq!(
            Ratio::integer(1_000_000_000).powi(3),
            Err(UnitError::Overflow)
        );
        /* Intermediate products may exceed 64 bits as long as the
        reduced result fits. */
        let r = big.checked_mul(Ratio::new(2, i64::MAX).unwrap()).unwrap();
        assert_eq!(r, Ratio::integer(2));
    }

    #[test]
    fn large_exponents() {
        assert_eq!(Ratio::ONE.powi(i32::MAX), Ok(Ratio::ONE));
        assert_eq!(Ratio::integer(-1).powi(i32::MIN), Ok(Ratio::ONE));
        assert_eq!(Ratio::integer(-1).powi(i32::MAX), Ok(Ratio::integer(-1)));
        assert_eq!(Ratio::ZERO.powi(i32::MAX), Ok(Ratio::ZERO));
        assert_eq!(
            Ratio::integer(2).powi(i32::MAX),
            Err(UnitError::Overflow)
        );
        assert_eq!(Ratio::integer(-2).powi(63), Ok(Ratio::integer(i64::MIN)));
        assert_eq!(
            Ratio::new(2, 3).unwrap().powi(-5),
            Ratio::new(243, 32)
        );
    }

    #[test]
    fn equality_and_order() {
        let a = Ratio::new(2, 4).unwrap();
        let b = Ratio::new(1, 2).unwrap();
        assert!(a.equals(&b));
        assert!(Ratio::new(1, 3).unwrap() < b);
        assert!(Ratio::new(-1, 2).unwrap() < Ratio::ZERO);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Ratio::new(5463, 20).unwrap().to_string(), "5463/20");
        assert_eq!(Ratio::integer(60).to_string(), "60");
        assert_eq!(
            "27315/100".parse::<Ratio>().unwrap(),
            Ratio::new(5463, 20).unwrap()
        );
        assert_eq!(" 12 ".parse::<Ratio>().unwrap(), Ratio::integer(12));
        assert_eq!("1/x".parse::<Ratio>(), Err(UnitError::ParseNumber));
        assert_eq!("1/0".parse::<Ratio>(), Err(UnitError::ZeroDenominator));
    }

    #[test]
    fn serializes_as_string() {
        let r = Ratio::new(1, 760).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"1/760\"");
        assert_eq!(
            serde_json::from_str::<Ratio>("\"2/1520\"").unwrap(),
            r
        );
    }
}
