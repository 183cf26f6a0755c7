//! Trainable model abstractions and reference estimators.
//!
//! The decoding pipelines only need the minimal train/predict contract
//! expressed by [`Regressor`] and [`Classifier`]; any estimator satisfying it
//! can be plugged in. Two deterministic closed-form estimators ship with the
//! crate so the pipelines are usable out of the box:
//!
//! - [`RidgeRegressor`]: ridge regression via the normal equations
//! - [`NearestCentroidClassifier`]: class-mean classifier with a logistic
//!   link for probabilities
//!
//! A configured-but-unfitted model value acts as the "model factory": cloning
//! it yields an identically configured, fully independent instance. This is
//! how [`CircularRegressor`] obtains its two component models.

mod centroid;
mod circular;
mod linear;

pub use centroid::NearestCentroidClassifier;
pub use circular::{decode_angle, encode_angle, CircularRegressor};
pub use linear::RidgeRegressor;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

// =============================================================================
// ModelError
// =============================================================================

/// Errors raised by model fitting and prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// `predict` was called before `fit`.
    #[error("model has not been fitted")]
    NotFitted,

    /// Feature rows and target entries disagree.
    #[error("feature matrix has {features} trials but target vector has {targets}")]
    ShapeMismatch { features: usize, targets: usize },

    /// Prediction features must match the channel count seen during `fit`.
    #[error("model was fitted on {expected} channels but received {got}")]
    ChannelMismatch { expected: usize, got: usize },

    /// Nothing to fit on.
    #[error("training set must contain at least one trial")]
    EmptyTrainingSet,

    /// Both classes are required to fit a binary classifier.
    #[error("training labels must contain both classes")]
    SingleClassTraining,

    /// The normal equations could not be solved.
    #[error("normal equations are singular; increase the ridge penalty")]
    SingularSystem,
}

pub(crate) fn check_fit_shapes(
    features: ArrayView2<f32>,
    targets: ArrayView1<f32>,
) -> Result<(), ModelError> {
    if features.nrows() != targets.len() {
        return Err(ModelError::ShapeMismatch {
            features: features.nrows(),
            targets: targets.len(),
        });
    }
    if features.nrows() == 0 {
        return Err(ModelError::EmptyTrainingSet);
    }
    Ok(())
}

// =============================================================================
// Traits
// =============================================================================

/// A trainable regressor: real-valued targets in, real-valued predictions out.
pub trait Regressor {
    /// Fit the model on a feature matrix `[n_trials, n_channels]` and one
    /// target per trial.
    fn fit(&mut self, features: ArrayView2<f32>, targets: ArrayView1<f32>) -> Result<(), ModelError>;

    /// Predict one value per trial.
    fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, ModelError>;
}

/// A trainable binary classifier.
///
/// Labels are binary: values above 0.5 count as class 1, the rest as class 0.
pub trait Classifier {
    /// Fit the model on a feature matrix and one label per trial.
    fn fit(&mut self, features: ArrayView2<f32>, labels: ArrayView1<f32>) -> Result<(), ModelError>;

    /// Predict a hard 0/1 label per trial.
    fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, ModelError>;

    /// Predict class posterior probabilities.
    ///
    /// Returns `[n_trials, 2]` with columns `(p_class0, p_class1)`, rows
    /// aligned with the rows of `features` and summing to 1.
    fn predict_proba(&self, features: ArrayView2<f32>) -> Result<Array2<f32>, ModelError>;
}
