/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Dimensional analysis with exact rational scale factors.
//!
//! Units are described by a [`Dimension`] (integer exponents of the
//! six base dimensions) and a [`Ratio`] relative to the canonical SI
//! unit of that dimension. Affine units (degrees Celsius and
//! Fahrenheit) additionally carry an offset.
//!
//! The same descriptors are used in two ways:
//!
//! - statically, through the zero-sized unit types of [`typed`] and
//!   [`si`]: a [`Measure`] carries its unit in its type, and unit
//!   mismatches are rejected when the program is compiled;
//! - dynamically, through [`Unit`] values, [`Quantity`] and a
//!   [`UnitRegistry`] of named units configured at runtime.
//!
//! ```
//! use dimensional::si::{Foot, Meter, Mile};
//! use dimensional::Measure;
//!
//! let run = Measure::<Mile>::new(1.0) + Measure::<Meter>::new(400.0);
//! assert!((run.convert::<Foot>().value() - 6592.33).abs() < 0.01);
//! ```

/// `?` for `const fn`s returning `Result`.
macro_rules! const_try {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => return Err(e),
        }
    };
}

pub mod conversion;
pub mod dimension;
pub mod error;
pub mod numeric;
pub mod prefix;
pub mod quantity;
pub mod ratio;
pub mod registry;
pub mod si;
pub mod typed;
pub mod unit;

pub use crate::unit::{LinearUnit, OffsetUnit, Unit, NEUTRAL_UNIT};
pub use conversion::Conversion;
pub use dimension::{BaseDimension, Dimension};
pub use error::{RegistryError, UnitError};
pub use numeric::{widen, Numeric, NumericKind, Promote, Scalar};
pub use prefix::SiPrefix;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use registry::{UnitDefinition, UnitRegistry};
pub use typed::{LinearUnitType, Measure, RatioType, UnitType};
