/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::marker::PhantomData;

use super::{resolve_linear, resolve_ratio};
use super::{LinearUnitType, RatioType, UnitType};
use crate::{LinearUnit, Ratio, Unit};

/// The ratio `N/D`.
pub struct Frac<const N: i64, const D: i64>;

impl<const N: i64, const D: i64> RatioType for Frac<N, D> {
    const RATIO: Ratio = resolve_ratio(Ratio::new(N, D));
}

/// One `Scaled<U, R>` is `R` times `U`.
pub struct Scaled<U, R>(PhantomData<(U, R)>);

impl<U: LinearUnitType, R: RatioType> LinearUnitType for Scaled<U, R> {
    const LINEAR: LinearUnit = resolve_linear(U::LINEAR.scale(R::RATIO));
}

impl<U: LinearUnitType, R: RatioType> UnitType for Scaled<U, R> {
    const UNIT: Unit = Unit::Linear(Self::LINEAR);
}

pub struct Inverse<U>(PhantomData<U>);

impl<U: LinearUnitType> LinearUnitType for Inverse<U> {
    const LINEAR: LinearUnit = resolve_linear(U::LINEAR.recip());
}

impl<U: LinearUnitType> UnitType for Inverse<U> {
    const UNIT: Unit = Unit::Linear(Self::LINEAR);
}

/// An affine unit with its zero at `R` of `U`.
///
/// This is not a [`LinearUnitType`], so it cannot appear in scaled,
/// inverted or product units:
///
/// ```compile_fail
/// use dimensional::si::{Celsius, Meter};
/// use dimensional::typed::UnitType;
///
/// let _ = <(Celsius, Meter)>::UNIT;
/// ```
pub struct Offset<U, R>(PhantomData<(U, R)>);

impl<U: LinearUnitType, R: RatioType> UnitType for Offset<U, R> {
    const UNIT: Unit = Unit::Offset(U::LINEAR.offset(R::RATIO));
}

/* Tuples of linear units are their product. */

macro_rules! product {
    ($($t:ident),*) => {
        impl<$($t: LinearUnitType),*> LinearUnitType for ($($t,)*) {
            const LINEAR: LinearUnit =
                resolve_linear(LinearUnit::product(&[$($t::LINEAR),*]));
        }

        impl<$($t: LinearUnitType),*> UnitType for ($($t,)*) {
            const UNIT: Unit =
                Unit::Linear(<Self as LinearUnitType>::LINEAR);
        }
    };
}

product!();
product!(A);
product!(A, B);
product!(A, B, C);
product!(A, B, C, D);
product!(A, B, C, D, E);
product!(A, B, C, D, E, F);
product!(A, B, C, D, E, F, G);
product!(A, B, C, D, E, F, G, H);
