//! Dataset container and the deterministic train/test split.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

/// Errors raised when assembling a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// Feature rows and target entries must correspond 1:1 and in order.
    #[error("feature matrix has {features} trials but target vector has {targets}")]
    ShapeMismatch { features: usize, targets: usize },

    /// An empty dataset cannot be fitted or scored.
    #[error("dataset must contain at least one trial")]
    Empty,
}

/// Trial-major data container.
///
/// # Storage Layout
///
/// Features are stored **trial-major**: `[n_trials, n_channels]`. Each row is
/// one trial's fixed-length vector of sensor readings, and row `i` of the
/// feature matrix corresponds to entry `i` of the target vector.
///
/// # Example
///
/// ```
/// use protractor::Dataset;
/// use ndarray::{array, Array1};
///
/// // 4 trials, 2 channels
/// let features = array![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]];
/// let targets = Array1::from(vec![0.0, 1.0, 0.0, 1.0]);
/// let ds = Dataset::new(features, targets).unwrap();
///
/// assert_eq!(ds.n_trials(), 4);
/// assert_eq!(ds.n_channels(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_trials, n_channels]`.
    features: Array2<f32>,
    /// One target per trial.
    targets: Array1<f32>,
}

impl Dataset {
    /// Create a dataset from a feature matrix and a target vector.
    ///
    /// Fails fast on a row-count mismatch; the pairing between trials and
    /// targets is positional and there is no way to recover it later.
    pub fn new(features: Array2<f32>, targets: Array1<f32>) -> Result<Self, DataError> {
        if features.nrows() != targets.len() {
            return Err(DataError::ShapeMismatch {
                features: features.nrows(),
                targets: targets.len(),
            });
        }
        if features.nrows() == 0 {
            return Err(DataError::Empty);
        }
        Ok(Self { features, targets })
    }

    /// Number of trials (rows).
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.features.nrows()
    }

    /// Number of sensor channels per trial (columns).
    #[inline]
    pub fn n_channels(&self) -> usize {
        self.features.ncols()
    }

    /// Read-only view of the feature matrix.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Read-only view of the target vector.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f32> {
        self.targets.view()
    }

    /// Deterministic, non-random 50/50 split by index order.
    ///
    /// Train is the first `⌊N/2⌋` trials, test is the remainder. No shuffling
    /// and no stratification; feature/target correspondence is preserved on
    /// both sides.
    pub fn split_half(&self) -> (Dataset, Dataset) {
        let mid = self.n_trials() / 2;
        let train = Dataset {
            features: self.features.slice(s![..mid, ..]).to_owned(),
            targets: self.targets.slice(s![..mid]).to_owned(),
        };
        let test = Dataset {
            features: self.features.slice(s![mid.., ..]).to_owned(),
            targets: self.targets.slice(s![mid..]).to_owned(),
        };
        (train, test)
    }
}

// =============================================================================
// Tests
// =============================================================================
