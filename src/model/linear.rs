//! Closed-form ridge regression.

use ndarray::{Array1, ArrayView1, ArrayView2};

use super::{check_fit_shapes, ModelError, Regressor};

/// Ridge regressor solved in closed form via the normal equations.
///
/// Features and targets are centered, `(XᵀX + λI) w = Xᵀy` is solved by
/// Gaussian elimination with partial pivoting, and the intercept is recovered
/// from the means. Fitting is deterministic: two instances fitted on the same
/// data produce bitwise-identical predictions.
///
/// # Example
///
/// ```
/// use protractor::{Regressor, RidgeRegressor};
/// use ndarray::{array, Array1};
///
/// let x = array![[0.0f32], [1.0], [2.0], [3.0]];
/// let y = Array1::from(vec![1.0f32, 3.0, 5.0, 7.0]);
///
/// let mut model = RidgeRegressor::new(0.0);
/// model.fit(x.view(), y.view()).unwrap();
/// let pred = model.predict(array![[4.0f32]].view()).unwrap();
/// assert!((pred[0] - 9.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct RidgeRegressor {
    lambda: f32,
    weights: Option<Array1<f32>>,
    intercept: f32,
}

impl Default for RidgeRegressor {
    fn default() -> Self {
        Self::new(1e-3)
    }
}

impl RidgeRegressor {
    /// Create an unfitted regressor with the given L2 penalty.
    ///
    /// `lambda == 0` is ordinary least squares; collinear channels then
    /// surface as [`ModelError::SingularSystem`].
    pub fn new(lambda: f32) -> Self {
        Self { lambda, weights: None, intercept: 0.0 }
    }

    /// The L2 penalty.
    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    /// Fitted channel weights, if the model has been fitted.
    pub fn weights(&self) -> Option<ArrayView1<'_, f32>> {
        self.weights.as_ref().map(|w| w.view())
    }

    /// Fitted intercept (0 before fitting).
    pub fn intercept(&self) -> f32 {
        self.intercept
    }
}

impl Regressor for RidgeRegressor {
    fn fit(&mut self, features: ArrayView2<f32>, targets: ArrayView1<f32>) -> Result<(), ModelError> {
        check_fit_shapes(features, targets)?;
        let n = features.nrows();
        let p = features.ncols();

        // Column means and target mean, accumulated in f64.
        let mut x_mean = vec![0.0f64; p];
        for row in features.rows() {
            for (m, &v) in x_mean.iter_mut().zip(row.iter()) {
                *m += v as f64;
            }
        }
        for m in &mut x_mean {
            *m /= n as f64;
        }
        let y_mean = targets.iter().map(|&v| v as f64).sum::<f64>() / n as f64;

        // Normal equations on centered data: only the upper triangle of the
        // Gram matrix is accumulated, then mirrored.
        let mut gram = vec![0.0f64; p * p];
        let mut rhs = vec![0.0f64; p];
        for (row, &y) in features.rows().into_iter().zip(targets.iter()) {
            let yc = y as f64 - y_mean;
            for i in 0..p {
                let xi = row[i] as f64 - x_mean[i];
                rhs[i] += xi * yc;
                for j in i..p {
                    gram[i * p + j] += xi * (row[j] as f64 - x_mean[j]);
                }
            }
        }
        for i in 0..p {
            for j in 0..i {
                gram[i * p + j] = gram[j * p + i];
            }
            gram[i * p + i] += self.lambda as f64;
        }

        let w = solve_dense(&mut gram, &mut rhs, p)?;
        let intercept = y_mean - x_mean.iter().zip(&w).map(|(m, wi)| m * wi).sum::<f64>();

        self.weights = Some(Array1::from_iter(w.iter().map(|&v| v as f32)));
        self.intercept = intercept as f32;
        Ok(())
    }

    fn predict(&self, features: ArrayView2<f32>) -> Result<Array1<f32>, ModelError> {
        let w = self.weights.as_ref().ok_or(ModelError::NotFitted)?;
        if features.ncols() != w.len() {
            return Err(ModelError::ChannelMismatch {
                expected: w.len(),
                got: features.ncols(),
            });
        }
        Ok(features.dot(w) + self.intercept)
    }
}

/// Solve `A x = b` in place by Gaussian elimination with partial pivoting.
fn solve_dense(a: &mut [f64], b: &mut [f64], p: usize) -> Result<Vec<f64>, ModelError> {
    for col in 0..p {
        let mut pivot = col;
        for r in col + 1..p {
            if a[r * p + col].abs() > a[pivot * p + col].abs() {
                pivot = r;
            }
        }
        if a[pivot * p + col].abs() < 1e-12 {
            return Err(ModelError::SingularSystem);
        }
        if pivot != col {
            for c in col..p {
                a.swap(pivot * p + c, col * p + c);
            }
            b.swap(pivot, col);
        }
        for r in col + 1..p {
            let factor = a[r * p + col] / a[col * p + col];
            if factor == 0.0 {
                continue;
            }
            for c in col..p {
                a[r * p + c] -= factor * a[col * p + c];
            }
            b[r] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; p];
    for col in (0..p).rev() {
        let mut s = b[col];
        for c in col + 1..p {
            s -= a[col * p + c] * x[c];
        }
        x[col] = s / a[col * p + col];
    }
    Ok(x)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 2*x0 - x1 + 0.5
        let x = array![
            [0.0f32, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0],
        ];
        let y = x.rows().into_iter()
            .map(|r| 2.0 * r[0] - r[1] + 0.5)
            .collect::<Array1<f32>>();

        let mut model = RidgeRegressor::new(0.0);
        model.fit(x.view(), y.view()).unwrap();

        let w = model.weights().unwrap();
        assert_abs_diff_eq!(w[0], 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(w[1], -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(model.intercept(), 0.5, epsilon = 1e-4);

        let preds = model.predict(x.view()).unwrap();
        for (&p, &t) in preds.iter().zip(y.iter()) {
            assert_abs_diff_eq!(p, t, epsilon = 1e-4);
        }
    }

    #[test]
    fn fitting_is_deterministic() {
        let x = array![[1.0f32, 2.0], [3.0, 1.0], [0.5, 0.5], [2.0, 2.0]];
        let y = array![1.0f32, 2.0, 0.5, 1.5];

        let mut a = RidgeRegressor::default();
        let mut b = RidgeRegressor::default();
        a.fit(x.view(), y.view()).unwrap();
        b.fit(x.view(), y.view()).unwrap();

        assert_eq!(a.predict(x.view()).unwrap(), b.predict(x.view()).unwrap());
    }

    #[test]
    fn predict_before_fit_fails() {
        let model = RidgeRegressor::default();
        let x = array![[1.0f32, 2.0]];
        assert_eq!(model.predict(x.view()).unwrap_err(), ModelError::NotFitted);
    }

    #[test]
    fn fit_rejects_shape_mismatch() {
        let x = array![[1.0f32], [2.0]];
        let y = array![1.0f32, 2.0, 3.0];
        let mut model = RidgeRegressor::default();
        assert_eq!(
            model.fit(x.view(), y.view()).unwrap_err(),
            ModelError::ShapeMismatch { features: 2, targets: 3 }
        );
    }

    #[test]
    fn predict_rejects_channel_mismatch() {
        let x = array![[1.0f32, 2.0], [2.0, 3.0]];
        let y = array![1.0f32, 2.0];
        let mut model = RidgeRegressor::default();
        model.fit(x.view(), y.view()).unwrap();
        let bad = array![[1.0f32, 2.0, 3.0]];
        assert_eq!(
            model.predict(bad.view()).unwrap_err(),
            ModelError::ChannelMismatch { expected: 2, got: 3 }
        );
    }

    #[test]
    fn duplicate_channels_without_penalty_are_singular() {
        let x = array![[1.0f32, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let y = array![1.0f32, 2.0, 3.0];
        let mut model = RidgeRegressor::new(0.0);
        assert_eq!(model.fit(x.view(), y.view()).unwrap_err(), ModelError::SingularSystem);

        // A positive penalty regularizes the same system.
        let mut ridged = RidgeRegressor::new(1e-2);
        ridged.fit(x.view(), y.view()).unwrap();
        assert!(ridged.predict(x.view()).is_ok());
    }
}
