/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::ratio::Ratio;
use super::typed::{Frac, Scaled};
use super::unit::Unit;

pub type Pico<U> = Scaled<U, Frac<1, 1_000_000_000_000>>;
pub type Nano<U> = Scaled<U, Frac<1, 1_000_000_000>>;
pub type Micro<U> = Scaled<U, Frac<1, 1_000_000>>;
pub type Milli<U> = Scaled<U, Frac<1, 1000>>;
pub type Centi<U> = Scaled<U, Frac<1, 100>>;
pub type Deci<U> = Scaled<U, Frac<1, 10>>;
pub type Deca<U> = Scaled<U, Frac<10, 1>>;
pub type Hecto<U> = Scaled<U, Frac<100, 1>>;
pub type Kilo<U> = Scaled<U, Frac<1000, 1>>;
pub type Mega<U> = Scaled<U, Frac<1_000_000, 1>>;
pub type Giga<U> = Scaled<U, Frac<1_000_000_000, 1>>;
pub type Tera<U> = Scaled<U, Frac<1_000_000_000_000, 1>>;

/// Decimal prefixes for units configured at runtime.
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
pub enum SiPrefix {
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

static SI_PREFIXES: [SiPrefix; 17] = [
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Unit,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
];

impl SiPrefix {
    pub fn list() -> &'static [Self] {
        &SI_PREFIXES
    }

    pub const fn power(&self) -> i32 {
        match self {
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
        }
    }

    /// `10^power`; every prefix fits an `i64` ratio.
    pub const fn ratio(&self) -> Ratio {
        let mut n = 1;
        let mut i = 0;
        while i < self.power().unsigned_abs() {
            n *= 10;
            i += 1;
        }
        match self.power() < 0 {
            true => Ratio::raw(1, n),
            false => Ratio::raw(n, 1),
        }
    }

    pub const fn apply(&self, unit: Unit) -> Result<Unit, UnitError> {
        unit.scale(self.ratio())
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Kilo, Micro, SiPrefix};
    use crate::si::{Celsius, Gram, Kilogram, Meter};
    use crate::typed::{LinearUnitType, UnitType};
    use crate::{Ratio, UnitError};

    #[test]
    fn typed_prefixes() {
        assert_eq!(<Kilo<Gram>>::UNIT, Kilogram::UNIT);
        assert_eq!(
            <Micro<Meter>>::LINEAR.ratio(),
            Ratio::new(1, 1_000_000).unwrap()
        );
    }

    #[test]
    fn runtime_prefixes() {
        assert_eq!(SiPrefix::Exa.ratio(), Ratio::integer(10i64.pow(18)));
        assert_eq!(
            SiPrefix::Atto.ratio(),
            Ratio::new(1, 10i64.pow(18)).unwrap()
        );
        assert_eq!(SiPrefix::Unit.ratio(), Ratio::ONE);
        assert_eq!(SiPrefix::Kilo.apply(Gram::UNIT), Ok(Kilogram::UNIT));
        assert_eq!(
            SiPrefix::Kilo.apply(Celsius::UNIT),
            Err(UnitError::Scale(Celsius::UNIT, Ratio::integer(1000)))
        );
        assert!(SiPrefix::list().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SiPrefix::Micro.to_string(), "µ");
    }
}
