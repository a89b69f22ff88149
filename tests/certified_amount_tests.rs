// Copyright 2025 Cowboy AI, LLC.

use cim_monoid::{Amount, CertifiedAmount, EnvironmentalImpact, Monoid, MonoidError};
use test_case::test_case;

#[test_case(1.004, 0.0, true ; "value within tolerance")]
#[test_case(1.0, 0.05, true ; "same value")]
#[test_case(1.009, 0.1, true ; "both within tolerance")]
#[test_case(1.02, 0.0, false ; "value beyond tolerance")]
#[test_case(1.0, 0.2, false ; "margin beyond tolerance")]
fn tolerant_equality(value: f64, margin: f64, equal: bool) {
    let reference = Amount::new(1.0, "kWh", 0.05);
    assert_eq!(Amount::new(value, "kWh", margin) == reference, equal);
}

#[test]
fn unit_mismatch_is_an_error() {
    let err = Amount::new(1.0, "kWh", 0.0)
        .append(&Amount::new(1.0, "T", 0.0))
        .unwrap_err();
    assert_eq!(
        err,
        MonoidError::UnitMismatch {
            left: "kWh".to_string(),
            right: "T".to_string(),
        }
    );
}

#[test]
fn scaling_sets_weight_to_coefficient() {
    let amount = Amount::new(2.0, "kWh", 0.5);
    let scaled = CertifiedAmount::new(amount.clone(), 1.0, 1.0).scale(0.3);
    assert_eq!(scaled.weight(), 0.3);
    assert!((scaled.score() - 0.3).abs() < 1e-12);
    assert_eq!(scaled.amount(), &amount.scale(0.3));

    let heavy = CertifiedAmount::new(amount, 2.0, 4.0).scale(0.5);
    assert_eq!(heavy.weight(), 0.5);
    assert_eq!(heavy.score(), 1.0);
}

#[test_case(1.0, 1.0, 100.0 ; "fully certified")]
#[test_case(0.0, 1.0, 0.0 ; "uncertified")]
#[test_case(1.3, 2.3, 100.0 * 1.3 / 2.3 ; "partially certified")]
#[test_case(0.0, 0.0, 0.0 ; "no weight")]
fn certified_percentage(score: f64, weight: f64, expected: f64) {
    let amount = CertifiedAmount::new(Amount::neutral("T"), score, weight);
    assert!((amount.certified_percentage() - expected).abs() < 1e-9);
}

#[test]
fn pizza_supply_chain() {
    let cooking = EnvironmentalImpact::single_supplier(
        CertifiedAmount::certified(1.0, "kWh", 0.3),
        CertifiedAmount::certified(1.0, "T", 0.25),
    );
    let dough = EnvironmentalImpact::single_supplier(
        CertifiedAmount::uncertified(5.0, "kWh", 5.0),
        CertifiedAmount::uncertified(0.5, "T", 1.0),
    );
    let tomato_sauce = EnvironmentalImpact::single_supplier(
        CertifiedAmount::uncertified(3.0, "kWh", 1.0),
        CertifiedAmount::certified(0.2, "T", 0.1),
    );

    let expected = EnvironmentalImpact::new(
        3,
        CertifiedAmount::new(Amount::new(6.9, "kWh", 5.6), 1.0, 2.3),
        CertifiedAmount::new(Amount::new(1.56, "T", 1.28), 1.3, 2.3),
    );

    let by_scale = cooking
        .append(&dough)
        .unwrap()
        .append(&tomato_sauce.scale(0.3))
        .unwrap();
    let by_weighted_add = cooking
        .append(&dough)
        .unwrap()
        .add_weighted(0.3, &tomato_sauce)
        .unwrap();
    let regrouped = cooking
        .append(&dough.append(&tomato_sauce.scale(0.3)).unwrap())
        .unwrap();

    assert_eq!(by_scale, expected);
    assert_eq!(by_weighted_add, expected);
    assert_eq!(regrouped, expected);
    assert_eq!(
        EnvironmentalImpact::concat_all(vec![cooking, dough, tomato_sauce.scale(0.3)]).unwrap(),
        expected
    );
}
