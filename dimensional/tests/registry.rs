/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::Path;

use dimensional::si::{Celsius, Fahrenheit, Meter, Mps, Square};
use dimensional::typed::UnitType;
use dimensional::{
    BaseDimension, Quantity, Ratio, RegistryError, Scalar, UnitDefinition,
    UnitRegistry,
};

fn registry() -> UnitRegistry {
    let mut registry = UnitRegistry::with_catalog();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/units.json");
    registry.load(Path::new(path)).unwrap();
    registry
}

#[test]
fn loads_definitions_in_dependency_order() {
    let registry = registry();
    let speed = registry
        .quantity(Scalar::Integer(1), "furlong_per_fortnight")
        .unwrap();
    let Quantity(mps, unit) = registry.convert(&speed, "mps").unwrap();
    assert_eq!(unit, Mps::UNIT);
    assert!((mps.to_f64() - 1.663_095e-4).abs() < 1e-9);

    let area = registry.get("square_furlong").unwrap();
    assert_eq!(area.dimension(), <Square<Meter>>::UNIT.dimension());
    assert_eq!(
        registry
            .convert(
                &registry.quantity(Scalar::Integer(1), "furlong").unwrap(),
                "microfurlong"
            )
            .unwrap()
            .0,
        Scalar::Integer(1_000_000)
    );
}

#[test]
fn aliases_and_offsets() {
    let registry = registry();
    assert_eq!(registry.get("centigrade").unwrap(), Celsius::UNIT);
    assert_eq!(registry.get("degree_fahrenheit").unwrap(), Fahrenheit::UNIT);
    let q = registry.quantity(Scalar::Integer(100), "centigrade").unwrap();
    let f = registry.convert(&q, "degree_fahrenheit").unwrap();
    assert!((f.0.to_f64() - 212.0).abs() < 1e-9);
}

#[test]
fn failed_loads_leave_the_registry_unchanged() {
    let mut registry = registry();
    let before = registry.clone();
    let result = registry.load_json(
        r#"{
            "good": { "alias": "meter" },
            "bad": { "inverse": "celsius" }
        }"#,
    );
    assert!(matches!(result, Err(RegistryError::Unit(_))));
    assert_eq!(registry, before);
    assert!(matches!(
        registry.load_json(r#"{ "furlong": { "alias": "meter" } }"#),
        Err(RegistryError::Duplicate(name)) if name == "furlong"
    ));
    assert!(matches!(
        registry.load(Path::new("/nonexistent/units.json")),
        Err(RegistryError::Io(_))
    ));
}

#[test]
fn registries_serialize_as_maps() {
    let mut registry = UnitRegistry::new();
    registry
        .define("meter", &UnitDefinition::Base(BaseDimension::Length))
        .unwrap();
    registry
        .define(
            "foot",
            &UnitDefinition::Scaled {
                unit: "meter".to_string(),
                ratio: Ratio::new(3048, 10000).unwrap(),
            },
        )
        .unwrap();
    let json = serde_json::to_value(&registry).unwrap();
    assert_eq!(json["foot"]["linear"]["ratio"], "381/1250");
    let back: UnitRegistry = serde_json::from_value(json).unwrap();
    assert_eq!(back, registry);
}

#[test]
fn serialized_registries_are_validated() {
    for ratio in ["0", "-2"] {
        let json = serde_json::json!({
            "meter": {
                "linear": { "dimension": [0, 1, 0, 0, 0, 0], "ratio": "1" }
            },
            "broken": {
                "linear": { "dimension": [0, 1, 0, 0, 0, 0], "ratio": ratio }
            }
        });
        assert!(serde_json::from_value::<UnitRegistry>(json).is_err());
    }
    let quantity = serde_json::json!([
        3,
        { "linear": { "dimension": [0, 1, 0, 0, 0, 0], "ratio": "-2" } }
    ]);
    assert!(serde_json::from_value::<Quantity>(quantity).is_err());
}

#[test]
fn huge_powers_of_dimensionless_units() {
    let registry = UnitRegistry::from_json(
        r#"{
            "one": { "product": [] },
            "big": { "power": { "unit": "one", "exponent": 2147483647 } },
            "tiny": { "power": { "unit": "one", "exponent": -2147483648 } }
        }"#,
    )
    .unwrap();
    assert_eq!(registry.get("big").unwrap(), registry.get("one").unwrap());
    assert_eq!(registry.get("tiny").unwrap(), registry.get("one").unwrap());
    assert!(matches!(
        UnitRegistry::from_json(
            r#"{
                "one": { "product": [] },
                "half": { "scaled": { "unit": "one", "ratio": "1/2" } },
                "x": { "power": { "unit": "half", "exponent": 65536 } }
            }"#
        ),
        Err(RegistryError::Unit(_))
    ));
}
