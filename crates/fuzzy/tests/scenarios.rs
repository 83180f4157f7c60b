//! Literal reference scenarios.
//!
//! Each test pins an exact input/output pair that any implementation of these
//! operators must reproduce.

use fuzzy_agg::{
    check_laws, Aggregation, AlphaCut, ArithmeticMean, Complement, Cosine, DombiIntersection,
    DombiUnion, DualNorm, FuzzyError, LawConfig, Line, Linear, Membership, Norm, NormKind,
    ParametricFactory, Point, RollingAiwa, Triangular, WeightedAggregation, WeightedValue, Zadeh,
};
use fuzzy_agg::{
    AlgebraicProduct, AlgebraicSum, Aiwa, BoundedDifference, BoundedSum, DrasticProduct,
    DrasticSum, HamacherProduct, HamacherSum, Maximum, Minimum, YagerIntersection, YagerUnion,
};

fn wv(weight: f64, value: f64) -> WeightedValue {
    WeightedValue::new(weight, value)
}

// =============================================================================
// Dombi Union
// =============================================================================

#[test]
fn dombi_union_least_drastic_is_maximum() {
    let union = DombiUnion::BY_DRASTICALITY.create(&[0.0]).unwrap();
    assert_eq!(union.apply(&[0.9, 0.2, 0.1]), 0.9);
}

#[test]
fn dombi_union_most_drastic_is_drastic_sum() {
    let union = DombiUnion::BY_DRASTICALITY.create(&[1.0]).unwrap();
    assert_eq!(union.apply(&[0.9, 0.2, 0.1]), 1.0);
    assert_eq!(union.apply(&[0.9, 0.2, 0.1]), DrasticSum.apply(&[0.9, 0.2, 0.1]));
}

#[test]
fn dombi_union_is_one_when_any_input_is_one() {
    for p in [0.0, 0.25, 1.0, 4.0, 100.0, f64::INFINITY] {
        let union = DombiUnion::BY_EXPONENT.create(&[p]).unwrap();
        assert_eq!(union.apply(&[0.3, 1.0]), 1.0, "p = {p}");
        assert_eq!(union.apply(&[1.0]), 1.0, "p = {p}");
        assert_eq!(union.apply(&[0.0, 0.5, 1.0, 0.99]), 1.0, "p = {p}");
    }
}

#[test]
fn dombi_dual_is_intersection_with_same_exponent() {
    let union = DombiUnion::BY_DRASTICALITY.create(&[0.25]).unwrap();
    let intersection: DombiIntersection = union.dual();
    assert_eq!(intersection.exponent(), 3.0);
    assert_eq!(intersection.kind(), NormKind::TNorm);
    assert_eq!(intersection.dual(), union);
}

#[test]
fn dombi_factories_reject_out_of_domain_parameters() {
    assert!(matches!(
        DombiUnion::BY_EXPONENT.create(&[-1.0]),
        Err(FuzzyError::InvalidParameter { name: "p", .. })
    ));
    assert!(matches!(
        DombiUnion::BY_DRASTICALITY.create(&[1.5]),
        Err(FuzzyError::InvalidParameter {
            name: "drasticality",
            ..
        })
    ));
    assert_eq!(
        DombiUnion::BY_EXPONENT.create(&[]),
        Err(FuzzyError::ParameterCount {
            expected: 1,
            actual: 0
        })
    );
}

// =============================================================================
// Fixed Aggregators
// =============================================================================

#[test]
fn arithmetic_mean_reference_values() {
    assert!(ArithmeticMean.apply(&[]).is_nan());
    let mean = ArithmeticMean.apply(&[0.8, 0.2, 0.4, 0.6, 0.0]);
    assert!((mean - 0.4).abs() < 1e-12, "mean = {mean}");
}

#[test]
fn every_norm_returns_identity_on_empty_input() {
    let ops: [Norm; 14] = [
        Minimum.into(),
        Maximum.into(),
        AlgebraicProduct.into(),
        AlgebraicSum.into(),
        BoundedDifference.into(),
        BoundedSum.into(),
        DrasticProduct.into(),
        DrasticSum.into(),
        HamacherProduct::new(2.0).unwrap().into(),
        HamacherSum::new(2.0).unwrap().into(),
        DombiIntersection::with_exponent(2.0).unwrap().into(),
        DombiUnion::with_exponent(2.0).unwrap().into(),
        YagerIntersection::with_exponent(2.0).unwrap().into(),
        YagerUnion::with_exponent(2.0).unwrap().into(),
    ];
    for op in ops {
        let expected = match op.kind() {
            NormKind::TNorm => 1.0,
            NormKind::TConorm => 0.0,
        };
        assert_eq!(op.apply(&[]), expected, "{op}");
    }
}

// =============================================================================
// Rolling Aggregator
// =============================================================================

#[test]
fn rolling_aiwa_reference_sequence() {
    let mut rolling = RollingAiwa::new(2.0 / 3.0).unwrap();

    let a = rolling
        .add(wv(0.4, 0.1))
        .unwrap()
        .add(wv(1.0, 0.7))
        .unwrap()
        .value()
        .unwrap();
    rolling.clear();
    let b = rolling
        .add(wv(0.4, 0.9))
        .unwrap()
        .add(wv(1.0, 0.4))
        .unwrap()
        .value()
        .unwrap();

    assert!((a - 0.565).abs() < 0.001, "a = {a}");
    assert!((b - 0.442).abs() < 0.001, "b = {b}");
}

#[test]
fn rolling_aiwa_empty_is_undefined() {
    let mut rolling = RollingAiwa::new(0.4).unwrap();
    assert_eq!(rolling.value(), Err(FuzzyError::UndefinedAggregate));
    rolling.add(wv(1.0, 0.5)).unwrap();
    rolling.clear();
    assert_eq!(rolling.value(), Err(FuzzyError::UndefinedAggregate));
    assert_eq!(rolling.andness(), 0.4);
}

#[test]
fn neutral_aiwa_is_weighted_mean() {
    let aiwa = Aiwa::new(0.5).unwrap();
    let pairs = [wv(2.0, 0.1), wv(1.0, 0.7), wv(1.0, 0.5)];
    let y = aiwa.apply_weighted(&pairs).unwrap();
    assert!((y - (0.2 + 0.7 + 0.5) / 4.0).abs() < 1e-12);
}

// =============================================================================
// Membership and Negation
// =============================================================================

#[test]
fn alpha_cut_of_identity_ramp() {
    let ramp = Linear::new(Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap());
    assert_eq!(ramp.membership(0.0), 0.0);
    assert_eq!(ramp.membership(0.5), 0.5);
    assert_eq!(ramp.membership(1.0), 1.0);

    let cut = AlphaCut::new(ramp, 0.6).unwrap();
    assert_eq!(cut.membership(0.0), 0.0);
    assert_eq!(cut.membership(0.5), 0.0);
    assert_eq!(cut.membership(1.0), 1.0);
}

#[test]
fn cosine_reference_points() {
    let bump = Cosine::new(1.0, 1.0).unwrap();
    assert_eq!(bump.membership(0.0), 0.0);
    assert_eq!(bump.membership(1.0), 1.0);
    assert_eq!(bump.membership(2.0), 0.0);
    assert_eq!(bump.membership(10.0), 0.0);
    assert_eq!(bump.membership(-10.0), 0.0);
}

#[test]
fn zadeh_complement_of_triangle() {
    let not_one = Complement::new(Triangular::new(0.0, 1.0, 2.0).unwrap(), Zadeh);
    assert_eq!(not_one.membership(1.0), 0.0);
    assert_eq!(not_one.membership(0.0), 1.0);
    assert_eq!(not_one.membership(2.0), 1.0);
    assert_eq!(not_one.negate(0.5), 0.5);
}

// =============================================================================
// Law Checker
// =============================================================================

#[test]
fn every_family_passes_the_law_checker() {
    let config = LawConfig::default();
    let ops: Vec<Norm> = vec![
        Minimum.into(),
        AlgebraicProduct.into(),
        BoundedDifference.into(),
        DrasticProduct.into(),
        HamacherProduct::new(0.0).unwrap().into(),
        HamacherProduct::new(2.0).unwrap().into(),
        DombiIntersection::with_exponent(0.5).unwrap().into(),
        DombiIntersection::with_drasticality(1.0).unwrap().into(),
        YagerIntersection::with_exponent(2.0).unwrap().into(),
        YagerIntersection::with_exponent(f64::INFINITY).unwrap().into(),
    ];
    for op in ops {
        for candidate in [op, op.dual()] {
            let report = check_laws(&candidate, &config);
            assert!(report.is_lawful(), "{candidate}\n{report}");
        }
    }
}
