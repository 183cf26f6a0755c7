//! Ordinal scoring.

use ndarray::ArrayView1;

use super::{average_ranks, validate_pair, ScoreError, Scorer};

/// Spearman rank correlation between true and predicted values.
///
/// Both sequences are converted to midranks and the Pearson correlation of
/// the ranks is returned. Bounded in `[-1, 1]`; chance level 0; the sign
/// carries the direction of the monotonic relationship.
///
/// Constant-valued inputs (all ties on either side) have no defined rank
/// correlation and yield [`ScoreError::ConstantInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpearmanRho;

impl Scorer for SpearmanRho {
    fn score(&self, y_true: ArrayView1<f32>, y_pred: ArrayView1<f32>) -> Result<f64, ScoreError> {
        let n = validate_pair(y_true, y_pred)? as f64;

        let ranks_true = average_ranks(y_true);
        let ranks_pred = average_ranks(y_pred);

        let mean_true = ranks_true.iter().sum::<f64>() / n;
        let mean_pred = ranks_pred.iter().sum::<f64>() / n;

        let mut var_true = 0.0f64;
        let mut var_pred = 0.0f64;
        let mut cov = 0.0f64;
        for (&rt, &rp) in ranks_true.iter().zip(ranks_pred.iter()) {
            let dt = rt - mean_true;
            let dp = rp - mean_pred;
            var_true += dt * dt;
            var_pred += dp * dp;
            cov += dt * dp;
        }

        if var_true == 0.0 {
            return Err(ScoreError::ConstantInput { side: "true" });
        }
        if var_pred == 0.0 {
            return Err(ScoreError::ConstantInput { side: "predicted" });
        }

        // Floating noise can push the ratio a hair outside [-1, 1].
        Ok((cov / (var_true.sqrt() * var_pred.sqrt())).clamp(-1.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "spearman_rho"
    }

    fn chance_level(&self) -> f64 {
        0.0
    }

    fn higher_is_better(&self) -> bool {
        true
    }
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
    fn self_correlation_is_one() {
        let v = array![3.0f32, 1.0, 4.0, 1.5, 5.0];
        let rho = SpearmanRho.score(v.view(), v.view()).unwrap();
        assert_abs_diff_eq!(rho, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_order_is_minus_one() {
        let v = array![1.0f32, 2.0, 3.0, 4.0, 5.0];
        let r = array![5.0f32, 4.0, 3.0, 2.0, 1.0];
        let rho = SpearmanRho.score(v.view(), r.view()).unwrap();
        assert_abs_diff_eq!(rho, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn monotone_nonlinear_map_is_still_one() {
        // Spearman only sees rank order, not the spacing.
        let v = array![1.0f32, 2.0, 3.0, 4.0];
        let cubed = array![1.0f32, 8.0, 27.0, 64.0];
        let rho = SpearmanRho.score(v.view(), cubed.view()).unwrap();
        assert_abs_diff_eq!(rho, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_predictions_are_an_error() {
        let v = array![1.0f32, 2.0, 3.0];
        let flat = array![7.0f32, 7.0, 7.0];
        assert_eq!(
            SpearmanRho.score(v.view(), flat.view()).unwrap_err(),
            ScoreError::ConstantInput { side: "predicted" }
        );
        assert_eq!(
            SpearmanRho.score(flat.view(), v.view()).unwrap_err(),
            ScoreError::ConstantInput { side: "true" }
        );
    }

    #[test]
    fn ties_use_midranks() {
        // y_pred ties on the middle pair; rho stays within bounds and positive.
        let v = array![1.0f32, 2.0, 3.0, 4.0];
        let p = array![1.0f32, 2.0, 2.0, 4.0];
        let rho = SpearmanRho.score(v.view(), p.view()).unwrap();
        assert!(rho > 0.9 && rho <= 1.0);
    }
}
