//! Property-based tests for the operator algebra.
//!
//! Uses proptest to check the norm axioms, De Morgan duality and the rolling
//! aggregator's equivalence with the batch operator over random inputs.

use fuzzy_agg::{
    Aggregation, Aiwa, DombiIntersection, DombiUnion, DualNorm, HamacherProduct, Norm, NormKind,
    RollingAiwa, WeightedAggregation, WeightedValue, YagerUnion,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn degree() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        1 => Just(1.0),
        8 => 0.0..=1.0_f64,
    ]
}

fn exponent() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        1 => Just(f64::INFINITY),
        8 => 0.05..20.0_f64,
    ]
}

fn norm() -> impl Strategy<Value = Norm> {
    let fixed = proptest::sample::select(Norm::FIXED.to_vec());
    let hamacher = (0.0..10.0_f64).prop_map(|g| Norm::from(HamacherProduct::new(g).unwrap()));
    let dombi = exponent().prop_map(|p| Norm::from(DombiUnion::with_exponent(p).unwrap()));
    let yager = exponent().prop_map(|p| Norm::from(YagerUnion::with_exponent(p).unwrap()));
    prop_oneof![fixed, hamacher, dombi, yager]
        .prop_flat_map(|op| prop_oneof![Just(op), Just(op.dual())])
}

fn observation() -> impl Strategy<Value = WeightedValue> {
    (0.0..=1.0_f64, degree()).prop_map(|(w, v)| WeightedValue::new(w, v))
}

// =============================================================================
// Norm Axioms
// =============================================================================

proptest! {
    /// T(x, y) = T(y, x)
    #[test]
    fn prop_commutative(op in norm(), x in degree(), y in degree()) {
        prop_assert!((op.apply2(x, y) - op.apply2(y, x)).abs() < EPS, "{}", op);
    }

    /// Results stay in [0, 1]
    #[test]
    fn prop_range(op in norm(), xs in proptest::collection::vec(degree(), 0..8)) {
        let y = op.apply(&xs);
        prop_assert!((-EPS..=1.0 + EPS).contains(&y), "{} gave {}", op, y);
    }

    /// The identity element is neutral and the absorbing element decides
    #[test]
    fn prop_identity_and_absorption(op in norm(), x in degree()) {
        let kind = op.kind();
        prop_assert!((op.apply2(x, kind.identity()) - x).abs() < EPS, "{}", op);
        prop_assert_eq!(op.apply2(x, kind.absorbing()), kind.absorbing());
    }

    /// Any absorbing input short-circuits an n-ary call exactly
    #[test]
    fn prop_absorbing_short_circuit(
        op in norm(),
        mut xs in proptest::collection::vec(degree(), 0..6),
        at in 0usize..6,
    ) {
        let absorbing = op.kind().absorbing();
        let at = at.min(xs.len());
        xs.insert(at, absorbing);
        prop_assert_eq!(op.apply(&xs), absorbing);
    }

    /// Non-decreasing in each argument
    #[test]
    fn prop_monotone(op in norm(), x in degree(), y in degree(), z in degree()) {
        let (lo, hi) = if y <= z { (y, z) } else { (z, y) };
        prop_assert!(op.apply2(x, lo) <= op.apply2(x, hi) + EPS, "{}", op);
    }

    /// S(x, y) = 1 - T(1 - x, 1 - y)
    #[test]
    fn prop_de_morgan(op in norm(), x in degree(), y in degree()) {
        let dual = op.dual();
        let via_dual = 1.0 - dual.apply2(1.0 - x, 1.0 - y);
        prop_assert!((op.apply2(x, y) - via_dual).abs() < EPS, "{}", op);
    }

    /// dual(dual(op)) == op, with the same parameters and behavior
    #[test]
    fn prop_dual_involution(op in norm(), xs in proptest::collection::vec(degree(), 0..6)) {
        let round_trip = op.dual().dual();
        prop_assert_eq!(round_trip, op);
        prop_assert_eq!(round_trip.apply(&xs).to_bits(), op.apply(&xs).to_bits());
        prop_assert_ne!(op.dual().kind(), op.kind());
    }
}

// =============================================================================
// Dombi Family
// =============================================================================

proptest! {
    /// Dombi union is exactly 1 whenever an input is 1
    #[test]
    fn prop_dombi_union_one(p in exponent(), xs in proptest::collection::vec(degree(), 0..6)) {
        let union = DombiUnion::with_exponent(p).unwrap();
        let mut xs = xs;
        xs.push(1.0);
        prop_assert_eq!(union.apply(&xs), 1.0);
    }

    /// Dombi intersection lies between the drastic product and the minimum
    #[test]
    fn prop_dombi_bounded_by_extremes(p in exponent(), x in degree(), y in degree()) {
        let t = DombiIntersection::with_exponent(p).unwrap().apply2(x, y);
        let min = x.min(y);
        let drastic = Norm::DrasticProduct.apply2(x, y);
        prop_assert!(t <= min + EPS);
        prop_assert!(t >= drastic - EPS);
    }
}

// =============================================================================
// Weighted Aggregation
// =============================================================================

proptest! {
    /// The rolling value after k additions equals the batch value of those k
    #[test]
    fn prop_rolling_equals_fresh(
        andness in 0.01..0.99_f64,
        observations in proptest::collection::vec(observation(), 1..12),
    ) {
        let aiwa = Aiwa::new(andness).unwrap();
        let mut rolling = RollingAiwa::from(aiwa);
        for k in 1..=observations.len() {
            rolling.add(observations[k - 1]).unwrap();
            prop_assert_eq!(rolling.value(), aiwa.apply_weighted(&observations[..k]));
        }
    }

    /// The aggregate lies between the smallest and largest weighted value
    #[test]
    fn prop_aiwa_between_extremes(
        andness in 0.01..0.99_f64,
        observations in proptest::collection::vec(observation(), 1..12),
    ) {
        let aiwa = Aiwa::new(andness).unwrap();
        if let Ok(y) = aiwa.apply_weighted(&observations) {
            let lo = observations.iter().map(|o| o.value()).fold(f64::INFINITY, f64::min);
            let hi = observations.iter().map(|o| o.value()).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(y >= lo - EPS && y <= hi + EPS, "{} not in [{}, {}]", y, lo, hi);
        }
    }

    /// Values outside [0, 1] still give a finite aggregate within their range
    #[test]
    fn prop_aiwa_finite_outside_unit_interval(
        andness in 0.01..0.99_f64,
        observations in proptest::collection::vec(
            (0.01..=1.0_f64, -5.0..5.0_f64).prop_map(|(w, v)| WeightedValue::new(w, v)),
            1..10,
        ),
    ) {
        let aiwa = Aiwa::new(andness).unwrap();
        let y = aiwa.apply_weighted(&observations).unwrap();
        let lo = observations.iter().map(|o| o.value()).fold(f64::INFINITY, f64::min);
        let hi = observations.iter().map(|o| o.value()).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(y.is_finite(), "andness {} gave {}", andness, y);
        prop_assert!(y >= lo - EPS && y <= hi + EPS, "{} not in [{}, {}]", y, lo, hi);

        let mut rolling = RollingAiwa::from(aiwa);
        rolling.extend_from(observations.iter().copied()).unwrap();
        prop_assert_eq!(rolling.value(), Ok(y));
    }

    /// Higher andness never increases the aggregate
    #[test]
    fn prop_aiwa_andness_monotone(
        a in 0.01..0.99_f64,
        b in 0.01..0.99_f64,
        xs in proptest::collection::vec(degree(), 1..8),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let and_like = Aiwa::new(hi).unwrap().apply(&xs);
        let or_like = Aiwa::new(lo).unwrap().apply(&xs);
        prop_assert!(and_like <= or_like + EPS, "{} > {}", and_like, or_like);
    }

    /// Clearing restores the empty state and keeps the andness
    #[test]
    fn prop_clear_resets(
        andness in 0.01..0.99_f64,
        observations in proptest::collection::vec(observation(), 0..6),
    ) {
        let mut rolling = RollingAiwa::new(andness).unwrap();
        rolling.extend_from(observations).unwrap();
        rolling.clear();
        prop_assert!(rolling.is_empty());
        prop_assert!(rolling.value().is_err());
        prop_assert_eq!(rolling.andness(), andness);
    }
}

#[test]
fn kind_identities_are_complementary() {
    for kind in NormKind::ALL {
        assert_eq!(kind.identity() + kind.absorbing(), 1.0);
    }
}
