//! Nearest-centroid classification.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::{check_fit_shapes, Classifier, ModelError};

/// Binary classifier scoring trials by distance to the two class means.
///
/// With identity covariance the difference of squared distances to the class
/// centroids reduces to a linear score `x·(μ₁−μ₀) − (‖μ₁‖²−‖μ₀‖²)/2`, which
/// is pushed through a logistic link for `predict_proba`. Deterministic, no
/// iterative training.
#[derive(Debug, Clone, Default)]
pub struct NearestCentroidClassifier {
    state: Option<CentroidState>,
}

#[derive(Debug, Clone)]
struct CentroidState {
    /// μ₁ − μ₀, one weight per channel.
    direction: Array1<f32>,
    /// (‖μ₁‖² − ‖μ₀‖²) / 2.
    threshold: f32,
}

impl NearestCentroidClassifier {
    /// Create an unfitted classifier.
    pub fn new() -> Self {
        Self::default()
    }

    fn scores(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, ModelError> {
        let state = self.state.as_ref().ok_or(ModelError::NotFitted)?;
        if features.ncols() != state.direction.len() {
            return Err(ModelError::ChannelMismatch {
                expected: state.direction.len(),
                got: features.ncols(),
            });
        }
        Ok(features.dot(&state.direction) - state.threshold)
    }
}

impl Classifier for NearestCentroidClassifier {
    fn fit(&mut self, features: ArrayView2<f32>, labels: ArrayView1<f32>) -> Result<(), ModelError> {
        check_fit_shapes(features, labels)?;
        let p = features.ncols();

        let mut mean0 = vec![0.0f64; p];
        let mut mean1 = vec![0.0f64; p];
        let mut count0 = 0usize;
        let mut count1 = 0usize;
        for (row, &label) in features.rows().into_iter().zip(labels.iter()) {
            let (mean, count) = if label > 0.5 {
                (&mut mean1, &mut count1)
            } else {
                (&mut mean0, &mut count0)
            };
            for (m, &v) in mean.iter_mut().zip(row.iter()) {
                *m += v as f64;
            }
            *count += 1;
        }
        if count0 == 0 || count1 == 0 {
            return Err(ModelError::SingleClassTraining);
        }
        for m in &mut mean0 {
            *m /= count0 as f64;
        }
        for m in &mut mean1 {
            *m /= count1 as f64;
        }

        let direction =
            Array1::from_iter(mean1.iter().zip(&mean0).map(|(&m1, &m0)| (m1 - m0) as f32));
        let norm1: f64 = mean1.iter().map(|&m| m * m).sum();
        let norm0: f64 = mean0.iter().map(|&m| m * m).sum();
        let threshold = ((norm1 - norm0) / 2.0) as f32;

        self.state = Some(CentroidState { direction, threshold });
        Ok(())
    }

    fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, ModelError> {
        let scores = self.scores(features)?;
        Ok(scores.mapv(|s| if s >= 0.0 { 1.0 } else { 0.0 }))
    }

    fn predict_proba(&self, features: ArrayView2<f32>) -> Result<Array2<f32>, ModelError> {
        let scores = self.scores(features)?;
        let mut proba = Array2::<f32>::zeros((scores.len(), 2));
        for (i, &s) in scores.iter().enumerate() {
            let p1 = 1.0 / (1.0 + (-s).exp());
            proba[[i, 0]] = 1.0 - p1;
            proba[[i, 1]] = p1;
        }
        Ok(proba)
    }
}

// =============================================================================
// Tests
// =============================================================================
