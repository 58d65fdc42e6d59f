/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::RegistryError;
use super::si::CATALOG;
use super::{
    BaseDimension, Quantity, Ratio, Scalar, SiPrefix, Unit, NEUTRAL_UNIT,
};

/// How a named unit is built from other named units.
///
/// ```json
/// {
///   "furlong": { "scaled": { "unit": "yard", "ratio": "220" } },
///   "fortnight": { "scaled": { "unit": "day", "ratio": "14" } },
///   "speed": { "product": ["furlong", "per_fortnight"] },
///   "per_fortnight": { "inverse": "fortnight" }
/// }
/// ```
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum UnitDefinition {
    Base(BaseDimension),
    Scaled { unit: String, ratio: Ratio },
    Prefixed { unit: String, prefix: SiPrefix },
    Product(Vec<String>),
    Inverse(String),
    Power { unit: String, exponent: i32 },
    Offset { unit: String, offset: Ratio },
    Alias(String),
}

impl UnitDefinition {
    /// Names of the units this definition depends on.
    pub fn references(&self) -> Vec<&str> {
        match self {
            UnitDefinition::Base(_) => Vec::new(),
            UnitDefinition::Product(units) => {
                units.iter().map(String::as_str).collect()
            }
            UnitDefinition::Scaled { unit, .. }
            | UnitDefinition::Prefixed { unit, .. }
            | UnitDefinition::Power { unit, .. }
            | UnitDefinition::Offset { unit, .. }
            | UnitDefinition::Inverse(unit)
            | UnitDefinition::Alias(unit) => vec![unit.as_str()],
        }
    }
}

/// Named units, built and validated when they are defined.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct UnitRegistry {
    units: BTreeMap<String, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the units of [`crate::si::CATALOG`].
    pub fn with_catalog() -> Self {
        UnitRegistry {
            units: CATALOG
                .iter()
                .map(|(name, unit)| (name.to_string(), *unit))
                .collect(),
        }
    }

    pub fn insert(
        &mut self,
        name: &str,
        unit: Unit,
    ) -> Result<(), RegistryError> {
        if self.units.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        debug!("defining unit {name} = {unit}");
        self.units.insert(name.to_string(), unit);
        Ok(())
    }

    pub fn define(
        &mut self,
        name: &str,
        def: &UnitDefinition,
    ) -> Result<Unit, RegistryError> {
        if self.units.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let unit = self.build(def)?;
        self.insert(name, unit)?;
        Ok(unit)
    }

    /// Defines a set of units that may refer to each other, in
    /// dependency order. Either all definitions succeed or the
    /// registry is left unchanged.
    pub fn define_all(
        &mut self,
        defs: &BTreeMap<String, UnitDefinition>,
    ) -> Result<(), RegistryError> {
        if let Some(name) = defs.keys().find(|n| self.units.contains_key(*n)) {
            return Err(RegistryError::Duplicate(name.clone()));
        }
        let mut staged = self.clone();
        let mut visiting = BTreeSet::new();
        for name in defs.keys() {
            staged.resolve(name, defs, &mut visiting)?;
        }
        *self = staged;
        Ok(())
    }

    fn resolve(
        &mut self,
        name: &str,
        defs: &BTreeMap<String, UnitDefinition>,
        visiting: &mut BTreeSet<String>,
    ) -> Result<Unit, RegistryError> {
        if let Some(unit) = self.units.get(name) {
            return Ok(*unit);
        }
        let def = defs
            .get(name)
            .ok_or_else(|| RegistryError::UnknownUnit(name.to_string()))?;
        if !visiting.insert(name.to_string()) {
            return Err(RegistryError::Cycle(name.to_string()));
        }
        for dep in def.references() {
            self.resolve(dep, defs, visiting)?;
        }
        visiting.remove(name);
        self.define(name, def)
    }

    fn build(&self, def: &UnitDefinition) -> Result<Unit, RegistryError> {
        Ok(match def {
            UnitDefinition::Base(dim) => Unit::base(*dim),
            UnitDefinition::Scaled { unit, ratio } => {
                self.get(unit)?.scale(*ratio)?
            }
            UnitDefinition::Prefixed { unit, prefix } => {
                prefix.apply(self.get(unit)?)?
            }
            UnitDefinition::Product(units) => {
                units.iter().try_fold(NEUTRAL_UNIT, |acc, name| {
                    Ok::<_, RegistryError>((acc * self.get(name)?)?)
                })?
            }
            UnitDefinition::Inverse(unit) => self.get(unit)?.recip()?,
            UnitDefinition::Power { unit, exponent } => {
                self.get(unit)?.powi(*exponent)?
            }
            UnitDefinition::Offset { unit, offset } => {
                self.get(unit)?.with_offset(*offset)?
            }
            UnitDefinition::Alias(unit) => self.get(unit)?,
        })
    }

    /// Loads a JSON map of unit definitions.
    pub fn load_json(&mut self, json: &str) -> Result<(), RegistryError> {
        let defs: BTreeMap<String, UnitDefinition> =
            serde_json::from_str(json)?;
        debug!("loading {} unit definitions", defs.len());
        self.define_all(&defs)
    }

    pub fn load(&mut self, path: &Path) -> Result<(), RegistryError> {
        debug!("loading unit definitions from {}", path.display());
        self.load_json(&fs::read_to_string(path)?)
    }

    /// A registry with the catalog units and the definitions in `json`.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let mut registry = Self::with_catalog();
        registry.load_json(json)?;
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Result<Unit, RegistryError> {
        self.units
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownUnit(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.units.iter().map(|(name, unit)| (name.as_str(), unit))
    }

    pub fn quantity(
        &self,
        value: Scalar,
        name: &str,
    ) -> Result<Quantity, RegistryError> {
        Ok(Quantity(value, self.get(name)?))
    }

    pub fn convert(
        &self,
        quantity: &Quantity,
        name: &str,
    ) -> Result<Quantity, RegistryError> {
        Ok(quantity.convert(&self.get(name)?)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{UnitDefinition, UnitRegistry};
    use crate::si::{Foot, Meter, Second};
    use crate::typed::UnitType;
    use crate::{Dimension, Ratio, RegistryError, Scalar, UnitError};

    #[test]
    fn catalog_lookup() {
        let registry = UnitRegistry::with_catalog();
        assert_eq!(registry.get("foot").unwrap(), Foot::UNIT);
        assert!(matches!(
            registry.get("furlong"),
            Err(RegistryError::UnknownUnit(name)) if name == "furlong"
        ));
        let q = registry.quantity(Scalar::Integer(3), "yard").unwrap();
        assert_eq!(
            registry.convert(&q, "foot").unwrap().0,
            Scalar::Integer(9)
        );
    }

    #[test]
    fn definitions_are_validated_eagerly() {
        let mut registry = UnitRegistry::with_catalog();
        let furlong = UnitDefinition::Scaled {
            unit: "yard".to_string(),
            ratio: Ratio::integer(220),
        };
        registry.define("furlong", &furlong).unwrap();
        assert!(matches!(
            registry.define("furlong", &furlong),
            Err(RegistryError::Duplicate(_))
        ));
        assert!(matches!(
            registry.define(
                "bad",
                &UnitDefinition::Scaled {
                    unit: "meter".to_string(),
                    ratio: Ratio::ZERO
                }
            ),
            Err(RegistryError::Unit(UnitError::InvalidScale(_)))
        ));
        assert!(matches!(
            registry.define(
                "hot",
                &UnitDefinition::Inverse("celsius".to_string())
            ),
            Err(RegistryError::Unit(UnitError::Inv(_)))
        ));
        assert!(registry.get("bad").is_err());
    }

    #[test]
    fn dependency_order_and_cycles() {
        let mut defs = BTreeMap::new();
        defs.insert(
            "area".to_string(),
            UnitDefinition::Power {
                unit: "rod".to_string(),
                exponent: 2,
            },
        );
        defs.insert(
            "rod".to_string(),
            UnitDefinition::Scaled {
                unit: "foot".to_string(),
                ratio: Ratio::new(33, 2).unwrap(),
            },
        );
        let mut registry = UnitRegistry::with_catalog();
        registry.define_all(&defs).unwrap();
        assert_eq!(
            registry.get("area").unwrap().dimension(),
            Dimension::new([0, 2, 0, 0, 0, 0])
        );

        let mut cyclic = BTreeMap::new();
        cyclic.insert("a".to_string(), UnitDefinition::Alias("b".into()));
        cyclic.insert("b".to_string(), UnitDefinition::Alias("a".into()));
        let mut registry = UnitRegistry::new();
        assert!(matches!(
            registry.define_all(&cyclic),
            Err(RegistryError::Cycle(_))
        ));
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn json_configuration() {
        let registry = UnitRegistry::from_json(
            r#"{
                "fortnight": { "scaled": { "unit": "day", "ratio": "14" } },
                "kilosecond": {
                    "prefixed": { "unit": "second", "prefix": "kilo" }
                },
                "velocity": { "product": ["meter", "hertz"] },
                "kelvin_again": { "base": "temperature" },
                "warm": { "offset": { "unit": "kelvin", "offset": "300" } }
            }"#,
        )
        .unwrap();
        let q = registry.quantity(Scalar::Integer(1), "fortnight").unwrap();
        assert_eq!(
            registry.convert(&q, "kilosecond").unwrap().0,
            Scalar::Float(1209.6)
        );
        assert_eq!(
            registry.get("velocity").unwrap(),
            (Meter::UNIT / Second::UNIT).unwrap()
        );
        assert_eq!(
            registry.get("kelvin_again").unwrap(),
            registry.get("kelvin").unwrap()
        );
        let warm = registry.quantity(Scalar::Integer(0), "warm").unwrap();
        assert_eq!(
            registry.convert(&warm, "kelvin").unwrap().0,
            Scalar::Integer(300)
        );
        assert!(matches!(
            UnitRegistry::from_json(r#"{ "x": { "alias": "nothing" } }"#),
            Err(RegistryError::UnknownUnit(_))
        ));
        assert!(matches!(
            UnitRegistry::from_json("{"),
            Err(RegistryError::Json(_))
        ));
    }
}
