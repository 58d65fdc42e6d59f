/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dimensional::si::{
    Celsius, Cubic, Day, Fahrenheit, Foot, Hertz, Hour, Inch, Kelvin, Kilo,
    Kilogram, Liter, Meter, Mile, Newton, Pound, Rankine, Second, Slug,
    Yard,
};
use dimensional::typed::{Inverse, LinearUnitType, UnitType};
use dimensional::{Conversion, Measure, Unit};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn scale_composition() {
    for x in [0.0, 1.0, 1234.5, -3e12, 1e-300] {
        let km = Measure::<Meter>::new(x).convert::<Kilo<Meter>>();
        assert_eq!(km.value(), x / 1000.0);
    }
}

#[test]
fn dimensional_closure() {
    fn check<U: LinearUnitType, V: LinearUnitType>() {
        assert_eq!(
            <(U, V)>::LINEAR.dimension(),
            U::LINEAR
                .dimension()
                .checked_mul(V::LINEAR.dimension())
                .unwrap()
        );
        assert_eq!(
            <Inverse<U>>::LINEAR.dimension(),
            U::LINEAR.dimension().recip().unwrap()
        );
    }
    check::<Meter, Second>();
    check::<Newton, Foot>();
    check::<Kilogram, Hertz>();
    check::<Liter, Pound>();
}

#[test]
fn affine_correctness() {
    let k = Measure::<Celsius>::new(0.0).convert::<Kelvin>().value();
    assert!(close(k, 273.15));
    let c = Measure::<Fahrenheit>::new(32.0).convert::<Celsius>().value();
    assert!(c.abs() < 1e-9);
    let f = Measure::<Celsius>::new(100.0).convert::<Fahrenheit>().value();
    assert!(close(f, 212.0));
    let r = Measure::<Fahrenheit>::new(0.0).convert::<Rankine>().value();
    assert!(close(r, 459.67));
}

#[test]
fn derived_unit_scenario() {
    /* Pound is already the pound-force; its own composition is the
    slug-foot-per-second-squared chain. */
    let lbf = Measure::<Newton>::new(1.0)
        .convert::<(Slug, Foot, Hertz, Hertz)>()
        .value();
    assert!((lbf - 0.224809).abs() < 1e-6);
    assert_eq!(
        Measure::<Newton>::new(1.0).convert::<Pound>().value(),
        lbf
    );
}

#[test]
fn customary_chain() {
    assert_eq!(Measure::<Mile>::new(1.0).convert::<Foot>().value(), 5280.0);
    assert_eq!(
        Measure::<Hour>::new(1.0).convert::<Second>().value(),
        3600.0
    );
    assert_eq!(
        Measure::<Liter>::new(1.0).convert::<Cubic<Meter>>().value(),
        0.001
    );
}

#[test]
fn integer_preserving_conversion() {
    let inches = Measure::<Foot, i64>::new(7).convert::<Inch>();
    assert_eq!(inches.value(), 84);
    let yards = Measure::<Mile, u32>::new(2).convert::<Yard>();
    assert_eq!(yards.value(), 3520);
    /* Non-integral ratios need floating-point storage. */
    let feet = inches.rebind::<f64>().convert::<Foot>();
    assert_eq!(feet.value(), 7.0);
    let c = Conversion::between(&Inch::UNIT, &Foot::UNIT).unwrap();
    assert!(!c.is_exact());
    assert!(c.apply(12i64).is_err());
}

#[test]
fn compatibility_rejection() {
    assert!(Conversion::between(&Meter::UNIT, &Second::UNIT).is_err());
    let q = Measure::<Meter>::new(1.0).to_quantity();
    let s = Measure::<Second>::new(1.0).to_quantity();
    assert!((q + s).is_err());
    assert!((q - s).is_err());
}

/* Units grouped by dimension. */
const UNITS: &[&[Unit]] = &[
    &[
        Meter::UNIT,
        Foot::UNIT,
        Inch::UNIT,
        Mile::UNIT,
        <Kilo<Meter>>::UNIT,
    ],
    &[Second::UNIT, Hour::UNIT, Day::UNIT],
    &[Kelvin::UNIT, Celsius::UNIT, Fahrenheit::UNIT, Rankine::UNIT],
];

fn unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(UNITS.concat())
}

fn unit_pair() -> impl Strategy<Value = (Unit, Unit)> {
    (0..UNITS.len()).prop_flat_map(|g| {
        let units = UNITS[g];
        (0..units.len(), 0..units.len())
            .prop_map(move |(a, b)| (units[a], units[b]))
    })
}

proptest! {
    #[test]
    fn round_trip((from, to) in unit_pair(), x in -1e9f64..1e9) {
        let there = from.convert(&to, x).unwrap();
        let back = to.convert(&from, there).unwrap();
        prop_assert!(close(back, x) || (back - x).abs() < 1e-6);
    }

    #[test]
    fn identity(u in unit(), x in any::<f64>()) {
        let y = u.convert(&u, x).unwrap();
        prop_assert_eq!(y.to_bits(), x.to_bits());
    }

    #[test]
    fn exact_round_trip(x in -1_000_000i64..1_000_000) {
        let inches = Measure::<Foot, i64>::new(x).convert::<Inch>();
        let feet = inches.rebind::<f64>().convert::<Foot>();
        prop_assert_eq!(feet.value(), x as f64);
    }
}
