/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::marker::PhantomData;

use super::{LinearUnitType, UnitType};
use crate::{BaseDimension, LinearUnit, Unit};

/// Type-level base dimension.
pub trait BaseKind {
    const DIMENSION: BaseDimension;
}

macro_rules! base_kind {
    ($($name:ident),*) => {
        $(
            pub enum $name {}

            impl BaseKind for $name {
                const DIMENSION: BaseDimension = BaseDimension::$name;
            }
        )*
    };
}

base_kind!(Mass, Length, Time, Temperature, Current, LuminousIntensity);

/// The canonical SI unit of a base dimension.
pub struct Base<D>(PhantomData<D>);

impl<D: BaseKind> LinearUnitType for Base<D> {
    const LINEAR: LinearUnit = LinearUnit::base(D::DIMENSION);
}

impl<D: BaseKind> UnitType for Base<D> {
    const UNIT: Unit = Unit::Linear(Self::LINEAR);
}
