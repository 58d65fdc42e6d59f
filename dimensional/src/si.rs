/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! SI, SI-accepted and customary units.

use super::typed::{
    Base, Current, Frac, Inverse, Length, LinearUnitType, LuminousIntensity,
    Mass, Measure, Offset, Scaled, Temperature, Time, UnitType,
};
use super::Unit;

pub use super::prefix::{
    Centi, Deca, Deci, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, Pico,
    Tera,
};

pub type Square<U> = (U, U);
pub type Cubic<U> = (U, U, U);
pub type Quartic<U> = (U, U, U, U);
pub type Per<U> = Inverse<U>;

/* Base units. */

pub type Kilogram = Base<Mass>;
pub type Meter = Base<Length>;
pub type Second = Base<Time>;
pub type Kelvin = Base<Temperature>;
pub type Ampere = Base<Current>;
pub type Candela = Base<LuminousIntensity>;

/* Derived SI units. */

pub type Hertz = Per<Second>;
pub type Newton = (Kilogram, Meter, Hertz, Hertz);
pub type Pascal = (Kilogram, Per<Meter>, Hertz, Hertz);
pub type Joule = (Newton, Meter);
pub type Watt = (Joule, Hertz);
pub type Coulomb = (Second, Ampere);
pub type Volt = (Watt, Per<Ampere>);
pub type Farad = (Coulomb, Per<Volt>);
pub type Ohm = (Volt, Per<Ampere>);
pub type Siemens = Per<Ohm>;
pub type Weber = (Volt, Second);
pub type Tesla = (Weber, Per<Meter>, Per<Meter>);
pub type Henry = (Weber, Per<Ampere>);
pub type Lux = (Candela, Per<Meter>, Per<Meter>);
pub type Becquerel = Hertz;
pub type Gray = (Joule, Per<Kilogram>);
pub type Sievert = Gray;

/* Units accepted for use with the SI. */

pub type Gram = Milli<Kilogram>;
pub type Minute = Scaled<Second, Frac<60, 1>>;
pub type Hour = Scaled<Minute, Frac<60, 1>>;
pub type Day = Scaled<Hour, Frac<24, 1>>;
pub type AstronomicalUnit = Scaled<Meter, Frac<149_597_870_700, 1>>;
pub type Hectare = Scaled<Square<Meter>, Frac<10_000, 1>>;
pub type Liter = Scaled<Cubic<Meter>, Frac<1, 1000>>;
pub type Litre = Liter;
pub type Tonne = Scaled<Kilogram, Frac<1000, 1>>;
pub type MetricTon = Tonne;
pub type Atmosphere = Scaled<Pascal, Frac<101_325, 1>>;
pub type Torr = Scaled<Atmosphere, Frac<1, 760>>;
pub type MmHg = Torr;

/* Foot-pound-second units. */

pub type Foot = Scaled<Meter, Frac<3048, 10_000>>;
pub type Yard = Scaled<Foot, Frac<3, 1>>;
pub type Mile = Scaled<Foot, Frac<5280, 1>>;
pub type Inch = Scaled<Foot, Frac<1, 12>>;
pub type Slug = Scaled<Kilogram, Frac<145_939, 10_000>>;
/// Pound-force.
pub type Pound = (Slug, Foot, Hertz, Hertz);
pub type Kip = Kilo<Pound>;
pub type FootPound = (Foot, Pound);
pub type Psi = (Pound, Per<Inch>, Per<Inch>);

/* Speed. */

pub type Mps = (Meter, Hertz);
pub type Mph = (Mile, Per<Hour>);

/* Temperature. */

pub type Rankine = Scaled<Kelvin, Frac<10, 18>>;
pub type Celsius = Offset<Kelvin, Frac<27_315, 100>>;
pub type Fahrenheit = Offset<Rankine, Frac<45_967, 100>>;

/// A measure of `factor` units of `T1` per `T2`.
///
/// ```
/// use dimensional::si::{conversion_factor, Gram, Liter, Meter};
/// use dimensional::Measure;
///
/// let density = conversion_factor::<Gram, Liter>(1.2);
/// let volume = Measure::<(Meter, Meter, Meter)>::new(2.0);
/// let mass = (density * volume).convert::<Gram>();
/// assert!((mass.value() - 2400.0).abs() < 1e-9);
/// ```
pub fn conversion_factor<T1, T2>(factor: f64) -> Measure<(T1, Per<T2>)>
where
    T1: LinearUnitType,
    T2: LinearUnitType,
{
    Measure::new(factor)
}

macro_rules! catalog {
    ($($name:literal => $unit:ty),* $(,)?) => {
        /// Named units, as used to seed a [`crate::UnitRegistry`].
        pub const CATALOG: &[(&str, Unit)] = &[
            $(($name, <$unit as UnitType>::UNIT)),*
        ];
    };
}

catalog! {
    "kilogram" => Kilogram,
    "meter" => Meter,
    "second" => Second,
    "kelvin" => Kelvin,
    "ampere" => Ampere,
    "candela" => Candela,
    "hertz" => Hertz,
    "newton" => Newton,
    "pascal" => Pascal,
    "joule" => Joule,
    "watt" => Watt,
    "coulomb" => Coulomb,
    "volt" => Volt,
    "farad" => Farad,
    "ohm" => Ohm,
    "siemens" => Siemens,
    "weber" => Weber,
    "tesla" => Tesla,
    "henry" => Henry,
    "lux" => Lux,
    "becquerel" => Becquerel,
    "gray" => Gray,
    "sievert" => Sievert,
    "gram" => Gram,
    "minute" => Minute,
    "hour" => Hour,
    "day" => Day,
    "astronomical_unit" => AstronomicalUnit,
    "hectare" => Hectare,
    "liter" => Liter,
    "litre" => Litre,
    "tonne" => Tonne,
    "metric_ton" => MetricTon,
    "atmosphere" => Atmosphere,
    "torr" => Torr,
    "mmhg" => MmHg,
    "foot" => Foot,
    "yard" => Yard,
    "mile" => Mile,
    "inch" => Inch,
    "slug" => Slug,
    "pound" => Pound,
    "kip" => Kip,
    "foot_pound" => FootPound,
    "psi" => Psi,
    "mps" => Mps,
    "mph" => Mph,
    "rankine" => Rankine,
    "celsius" => Celsius,
    "fahrenheit" => Fahrenheit,
    "millimeter" => Milli<Meter>,
    "centimeter" => Centi<Meter>,
    "kilometer" => Kilo<Meter>,
    "millisecond" => Milli<Second>,
    "kilowatt" => Kilo<Watt>,
    "kilojoule" => Kilo<Joule>,
}
