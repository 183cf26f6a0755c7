//! Circular scoring.
//!
//! Angles live on a circle: 0 and 2π are the same point, so a raw difference
//! of predictions near the wrap boundary can read as almost a full turn when
//! the angular separation is tiny. Every difference must therefore be wrapped
//! back into one period before it is summarized.

use std::f32::consts::{PI, TAU};
use std::f64::consts::FRAC_PI_2;

use ndarray::ArrayView1;

use super::{validate_pair, ScoreError, Scorer};

/// Wrap a signed angular difference into `[-π, π)`.
///
/// Implements `((diff + π) mod 2π) − π` with a Euclidean remainder, so any
/// finite input is valid: angles outside one period fold back onto the
/// circle. `|wrap_angle(d)| <= π` for all `d`.
#[inline]
pub fn wrap_angle(diff: f32) -> f32 {
    (diff + PI).rem_euclid(TAU) - PI
}

/// Presentation-only transform of a mean absolute angular error onto a
/// chance-centered scale: `π/2 − error`, in `[-π/2, π/2]`.
///
/// Zero is chance and larger positive values indicate better angular
/// agreement. This is a derived convenience for reporting; the canonical
/// score is the error itself, as returned by [`AngularError`].
#[inline]
pub fn chance_centered(mean_abs_error: f64) -> f64 {
    FRAC_PI_2 - mean_abs_error
}

/// Mean absolute angular error between true and predicted angles.
///
/// Each elementwise difference `true − predicted` is wrapped into one period
/// via [`wrap_angle`] before taking the absolute value, then averaged across
/// trials. Bounded in `[0, π]`; chance level π/2; lower is better.
///
/// Use [`chance_centered`] when an accuracy-style number (0 = chance, higher
/// = better) is wanted for display.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularError;

impl Scorer for AngularError {
    fn score(&self, y_true: ArrayView1<f32>, y_pred: ArrayView1<f32>) -> Result<f64, ScoreError> {
        let n = validate_pair(y_true, y_pred)?;

        let sum: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| wrap_angle(t - p).abs() as f64)
            .sum();

        Ok(sum / n as f64)
    }

    fn name(&self) -> &'static str {
        "angular_error"
    }

    fn chance_level(&self) -> f64 {
        FRAC_PI_2
    }

    fn higher_is_better(&self) -> bool {
        false
    }
}

// =============================================================================
// Tests
// =============================================================================
