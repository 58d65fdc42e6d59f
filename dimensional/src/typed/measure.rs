/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{fail, resolve_conversion, Inverse, LinearUnitType, UnitType};
use crate::{Conversion, Numeric, NumericKind, Promote, Quantity};
use crate::{Unit, UnitError};

/// A value with its unit in its type, stored as `N`.
///
/// Values of the same dimension convert into each other, exactly
/// where the storage type allows it:
///
/// ```
/// use dimensional::si::{Foot, Inch, Meter};
/// use dimensional::prefix::Kilo;
/// use dimensional::Measure;
///
/// let feet = Measure::<Foot, i32>::new(3);
/// assert_eq!(feet.convert::<Inch>().value(), 36);
///
/// let m = Measure::<Meter>::new(1500.0);
/// assert_eq!(m.convert::<Kilo<Meter>>().value(), 1.5);
/// ```
///
/// Anything else is rejected when the program is compiled:
///
/// ```compile_fail
/// use dimensional::si::{Meter, Second};
/// use dimensional::Measure;
///
/// let _ = Measure::<Meter>::new(1.0).convert::<Second>();
/// ```
///
/// ```compile_fail
/// use dimensional::si::{Foot, Inch};
/// use dimensional::Measure;
///
/// // 1/12 foot per inch does not fit integer storage.
/// let _ = Measure::<Inch, i32>::new(3).convert::<Foot>();
/// ```
///
/// ```compile_fail
/// use dimensional::si::{Meter, Second};
/// use dimensional::Measure;
///
/// let _ = Measure::<Meter>::new(1.0) + Measure::<Second>::new(1.0);
/// ```
///
/// Sums in integer storage need the right operand to convert exactly
/// into the left operand's unit; rebind to a float type otherwise:
///
/// ```compile_fail
/// use dimensional::si::{Foot, Inch};
/// use dimensional::Measure;
///
/// let _ = Measure::<Foot, i32>::new(1) + Measure::<Inch, i32>::new(1);
/// ```
///
/// ```
/// use dimensional::si::{Foot, Inch};
/// use dimensional::Measure;
///
/// let sum = Measure::<Foot, i32>::new(1).rebind::<f64>()
///     + Measure::<Inch, i32>::new(6);
/// assert_eq!(sum.value(), 1.5);
/// let inches = Measure::<Inch, i32>::new(1) + Measure::<Foot, i32>::new(1);
/// assert_eq!(inches.value(), 13);
/// ```
///
/// Malformed units are rejected as soon as a measure is built:
///
/// ```compile_fail
/// use dimensional::si::Meter;
/// use dimensional::typed::{Frac, Scaled};
/// use dimensional::Measure;
///
/// let _ = Measure::<Scaled<Meter, Frac<0, 1>>>::new(1.0);
/// ```
pub struct Measure<U, N = f64> {
    value: N,
    unit: PhantomData<fn() -> U>,
}

/// Statically resolved conversion from `Self`'s unit to `V`.
trait ConvertTo<V> {
    const CONVERSION: Conversion;
}

impl<U: UnitType, V: UnitType, N: Numeric> ConvertTo<V> for Measure<U, N> {
    const CONVERSION: Conversion = {
        let conversion =
            resolve_conversion(Conversion::between(&U::UNIT, &V::UNIT));
        if matches!(N::KIND, NumericKind::Integer) && !conversion.is_exact()
        {
            fail(UnitError::Inexact(conversion.factor()))
        }
        conversion
    };
}

impl<U: UnitType, N: Numeric> Measure<U, N> {
    /* Matching on the unit forces its evaluation, which fails for
    malformed units. */
    const WELL_FORMED: () = match U::UNIT {
        Unit::Linear(_) | Unit::Offset(_) => (),
    };

    const CANONICAL: () = match U::UNIT.is_canonical() {
        true => (),
        false => fail(UnitError::NotCanonical(U::UNIT)),
    };

    pub fn new(value: N) -> Self {
        let () = Self::WELL_FORMED;
        Measure {
            value,
            unit: PhantomData,
        }
    }

    pub fn value(&self) -> N {
        self.value
    }

    pub fn unit(&self) -> Unit {
        U::UNIT
    }

    /// # Panics
    ///
    /// Panics if the converted value overflows integer storage.
    pub fn convert<V: UnitType>(self) -> Measure<V, N> {
        let conversion = <Self as ConvertTo<V>>::CONVERSION;
        Measure::new(conversion.scale(self.value))
    }

    pub fn try_convert<V: UnitType>(self) -> Result<Measure<V, N>, UnitError> {
        let conversion = <Self as ConvertTo<V>>::CONVERSION;
        Ok(Measure::new(conversion.apply(self.value)?))
    }

    /// The same measure in another storage type (`as` semantics).
    pub fn rebind<M: Numeric>(self) -> Measure<U, M> {
        Measure::new(self.value.cast())
    }

    /// The bare number, for canonical SI units only. Anything else has
    /// to be converted explicitly first:
    ///
    /// ```compile_fail
    /// use dimensional::si::Minute;
    /// use dimensional::Measure;
    ///
    /// let _ = Measure::<Minute>::new(5.0).into_number();
    /// ```
    pub fn into_number(self) -> N {
        let () = Self::CANONICAL;
        self.value
    }

    pub fn to_quantity(self) -> Quantity {
        Quantity(self.value.to_scalar(), U::UNIT)
    }
}

impl<U, N: Copy> Clone for Measure<U, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, N: Copy> Copy for Measure<U, N> {}

impl<U: UnitType, N: Debug> Debug for Measure<U, N> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_tuple("Measure")
            .field(&self.value)
            .field(&U::UNIT)
            .finish()
    }
}

impl<U: UnitType, N: Display> Display for Measure<U, N> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.value, U::UNIT)
    }
}

impl<U, N: PartialEq> PartialEq for Measure<U, N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U, N: PartialOrd> PartialOrd for Measure<U, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/* Operations on measures. Products and quotients need linear units
and compute their unit in the type; sums convert the right operand
into the unit of the left one. */

impl<U, V, N, M> Mul<Measure<V, M>> for Measure<U, N>
where
    U: LinearUnitType,
    V: LinearUnitType,
    N: Promote<M>,
    M: Numeric,
{
    type Output = Measure<(U, V), <N as Promote<M>>::Output>;
    fn mul(self, rhs: Measure<V, M>) -> Self::Output {
        let lhs: <N as Promote<M>>::Output = self.value.cast();
        let rhs: <N as Promote<M>>::Output = rhs.value.cast();
        Measure::new(lhs * rhs)
    }
}

impl<U, V, N, M> Div<Measure<V, M>> for Measure<U, N>
where
    U: LinearUnitType,
    V: LinearUnitType,
    N: Promote<M>,
    M: Numeric,
{
    type Output = Measure<(U, Inverse<V>), <N as Promote<M>>::Output>;
    fn div(self, rhs: Measure<V, M>) -> Self::Output {
        let lhs: <N as Promote<M>>::Output = self.value.cast();
        let rhs: <N as Promote<M>>::Output = rhs.value.cast();
        Measure::new(lhs / rhs)
    }
}

impl<U, V, N, M> Add<Measure<V, M>> for Measure<U, N>
where
    U: LinearUnitType,
    V: LinearUnitType,
    N: Promote<M>,
    M: Numeric,
{
    type Output = Measure<U, <N as Promote<M>>::Output>;
    fn add(self, rhs: Measure<V, M>) -> Self::Output {
        let lhs: <N as Promote<M>>::Output = self.value.cast();
        let rhs: Measure<U, <N as Promote<M>>::Output> =
            rhs.rebind().convert();
        Measure::new(lhs + rhs.value)
    }
}

impl<U, V, N, M> Sub<Measure<V, M>> for Measure<U, N>
where
    U: LinearUnitType,
    V: LinearUnitType,
    N: Promote<M>,
    M: Numeric,
{
    type Output = Measure<U, <N as Promote<M>>::Output>;
    fn sub(self, rhs: Measure<V, M>) -> Self::Output {
        let lhs: <N as Promote<M>>::Output = self.value.cast();
        let rhs: Measure<U, <N as Promote<M>>::Output> =
            rhs.rebind().convert();
        Measure::new(lhs - rhs.value)
    }
}

impl<U, N> Neg for Measure<U, N>
where
    U: UnitType,
    N: Numeric + Neg<Output = N>,
{
    type Output = Measure<U, N>;
    fn neg(self) -> Measure<U, N> {
        Measure::new(-self.value)
    }
}

/* Scalars scale a measure without changing its unit; dividing a
scalar by a measure inverts the unit. */

macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<U: UnitType> Mul<$t> for Measure<U, $t> {
                type Output = Measure<U, $t>;
                fn mul(self, rhs: $t) -> Measure<U, $t> {
                    Measure::new(self.value * rhs)
                }
            }

            impl<U: UnitType> Div<$t> for Measure<U, $t> {
                type Output = Measure<U, $t>;
                fn div(self, rhs: $t) -> Measure<U, $t> {
                    Measure::new(self.value / rhs)
                }
            }

            impl<U: UnitType> Mul<Measure<U, $t>> for $t {
                type Output = Measure<U, $t>;
                fn mul(self, rhs: Measure<U, $t>) -> Measure<U, $t> {
                    Measure::new(self * rhs.value)
                }
            }

            impl<U: LinearUnitType> Div<Measure<U, $t>> for $t {
                type Output = Measure<Inverse<U>, $t>;
                fn div(self, rhs: Measure<U, $t>) -> Measure<Inverse<U>, $t> {
                    Measure::new(self / rhs.value)
                }
            }

            impl<U: UnitType> From<Measure<U, $t>> for $t {
                fn from(measure: Measure<U, $t>) -> $t {
                    measure.into_number()
                }
            }
        )*
    };
}

scalar_ops!(i32, i64, u32, u64, f32, f64);
