//! Property tests for the circular encode/fit/decode/score procedure.

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};
use proptest::prelude::*;

use protractor::testing::synthetic_circular;
use protractor::{
    chance_centered, decode_angle, encode_angle, wrap_angle, AngularError, CircularRegressor,
    Regressor, RidgeRegressor, Scorer,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

// =============================================================================
// The four-point scenario
// =============================================================================

#[test]
fn cardinal_angles_roundtrip_through_encode_decode() {
    let theta = array![0.0f32, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];

    let encoded: Vec<(f32, f32)> = theta.iter().map(|&t| encode_angle(t)).collect();
    let expected = [(1.0f32, 0.0f32), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    for (&(c, s), &(ec, es)) in encoded.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(c, ec, epsilon = 1e-6);
        assert_abs_diff_eq!(s, es, epsilon = 1e-6);
    }

    let decoded: Array1<f32> = encoded.iter().map(|&(c, s)| decode_angle(c, s)).collect();

    // 0 and π/2 come back verbatim; π may surface as ±π and 3π/2 as −π/2,
    // both the same point on the circle.
    assert_abs_diff_eq!(decoded[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(decoded[1], FRAC_PI_2, epsilon = 1e-6);
    assert_abs_diff_eq!(decoded[2].abs(), PI, epsilon = 1e-6);
    assert_abs_diff_eq!(decoded[3], -FRAC_PI_2, epsilon = 1e-6);

    let error = AngularError.score(theta.view(), decoded.view()).unwrap();
    assert_abs_diff_eq!(error, 0.0, epsilon = 1e-6);
}

// =============================================================================
// Equivalence: composed regressor == manual two-model pipeline
// =============================================================================

#[test]
fn composed_regressor_matches_manual_two_model_pipeline() {
    let dataset = synthetic_circular(40, 4, 21, 0.2);
    let (train, test) = dataset.split_half();
    let template = RidgeRegressor::new(1e-3);

    let mut composed = CircularRegressor::new(template.clone());
    composed.fit(train.features(), train.targets()).unwrap();
    let composed_pred = composed.predict(test.features()).unwrap();

    // By hand: encode, fit two clones of the same template, predict, decode.
    let cos_targets = train.targets().mapv(f32::cos);
    let sin_targets = train.targets().mapv(f32::sin);
    let mut cos_model = template.clone();
    let mut sin_model = template.clone();
    cos_model.fit(train.features(), cos_targets.view()).unwrap();
    sin_model.fit(train.features(), sin_targets.view()).unwrap();
    let cos_pred = cos_model.predict(test.features()).unwrap();
    let sin_pred = sin_model.predict(test.features()).unwrap();
    let manual: Array1<f32> = cos_pred
        .iter()
        .zip(sin_pred.iter())
        .map(|(&c, &s)| decode_angle(c, s))
        .collect();

    assert_eq!(composed_pred.len(), manual.len());
    for (&a, &b) in composed_pred.iter().zip(manual.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }
}

// =============================================================================
// Properties of the wrap and the error
// =============================================================================

proptest! {
    #[test]
    fn whole_turns_wrap_to_zero_error(theta in -6.0f32..6.0, k in -3i32..=3) {
        let shifted = theta + k as f32 * TAU;
        let err = AngularError
            .score(array![theta].view(), array![shifted].view())
            .unwrap();
        prop_assert!(err < 1e-4, "error {err} for theta {theta}, k {k}");
    }

    #[test]
    fn error_is_symmetric(a in -10.0f32..10.0, b in -10.0f32..10.0) {
        let ab = AngularError.score(array![a].view(), array![b].view()).unwrap();
        let ba = AngularError.score(array![b].view(), array![a].view()).unwrap();
        prop_assert!((ab - ba).abs() < 1e-5);
    }

    #[test]
    fn error_and_centered_score_are_bounded(a in -10.0f32..10.0, b in -10.0f32..10.0) {
        let err = AngularError.score(array![a].view(), array![b].view()).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI + 1e-6).contains(&err));

        let centered = chance_centered(err);
        let half_pi = std::f64::consts::FRAC_PI_2;
        prop_assert!((-half_pi - 1e-6..=half_pi + 1e-6).contains(&centered));
    }

    #[test]
    fn wrapped_difference_never_exceeds_half_a_turn(d in -50.0f32..50.0) {
        prop_assert!(wrap_angle(d).abs() <= PI + 1e-5);
    }

    #[test]
    fn decode_inverts_encode_on_the_principal_interval(theta in -3.14f32..3.14) {
        let (c, s) = encode_angle(theta);
        prop_assert!((decode_angle(c, s) - theta).abs() < 1e-5);
    }
}
