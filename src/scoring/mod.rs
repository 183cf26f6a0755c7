//! Topology-appropriate scoring functions.
//!
//! Scorers are pure functions of a true/predicted pair of sequences. They are
//! separate from the decoders that produce the predictions, and they report
//! degenerate inputs as errors instead of substituting a numeric default: a
//! single-class AUC or a zero-variance rank correlation is a property of the
//! data the caller must know about, not a 0.5 to average away.
//!
//! # Available Scorers
//!
//! - [`Auc`]: area under the ROC curve for binary labels, chance 0.5
//! - [`SpearmanRho`]: rank correlation for ordered targets, chance 0
//! - [`AngularError`]: wrapped mean absolute error for angles, chance π/2

mod circular;
mod classification;
mod rank;
mod regression;

pub use circular::{chance_centered, wrap_angle, AngularError};
pub use classification::Auc;
pub use regression::SpearmanRho;

pub(crate) use rank::average_ranks;

use ndarray::ArrayView1;

// =============================================================================
// ScoreError
// =============================================================================

/// Errors raised by scoring functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// True and predicted sequences must be the same length.
    #[error("true values ({true_len}) and predictions ({pred_len}) must have equal length")]
    LengthMismatch { true_len: usize, pred_len: usize },

    /// No trials to score.
    #[error("cannot score an empty set of trials")]
    Empty,

    /// AUC needs both classes present in the true labels.
    #[error("AUC is undefined when the test set contains a single class")]
    SingleClass,

    /// Rank correlation needs variance on both sides.
    #[error("rank correlation is undefined for a zero-variance {side} sequence")]
    ConstantInput { side: &'static str },
}

// =============================================================================
// Scorer Trait
// =============================================================================

/// A scoring function for one target topology.
///
/// `score` consumes predictions in whatever space the scorer expects:
/// class-1 probabilities for [`Auc`], real values for [`SpearmanRho`],
/// angles in radians for [`AngularError`].
pub trait Scorer {
    /// Compute the score of `y_pred` against `y_true`.
    fn score(&self, y_true: ArrayView1<f32>, y_pred: ArrayView1<f32>) -> Result<f64, ScoreError>;

    /// Name of the scorer (for reports and logging).
    fn name(&self) -> &'static str;

    /// Expected score of a predictor with no true signal.
    fn chance_level(&self) -> f64;

    /// Whether higher values indicate better agreement.
    fn higher_is_better(&self) -> bool;
}

/// Shared length/emptiness validation. Returns the common length.
pub(crate) fn validate_pair(
    y_true: ArrayView1<f32>,
    y_pred: ArrayView1<f32>,
) -> Result<usize, ScoreError> {
    if y_true.len() != y_pred.len() {
        return Err(ScoreError::LengthMismatch {
            true_len: y_true.len(),
            pred_len: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ScoreError::Empty);
    }
    Ok(y_true.len())
}

// =============================================================================
// Tests
// =============================================================================
