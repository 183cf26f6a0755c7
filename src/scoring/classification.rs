//! Categorical scoring.

use ndarray::ArrayView1;

use super::{average_ranks, validate_pair, ScoreError, Scorer};

/// Area under the ROC curve for binary classification.
///
/// Computed via the Mann-Whitney rank statistic on the class-1 probabilities,
/// with midranks for tied predictions. Bounded in `[0, 1]`; chance level 0.5;
/// higher is better.
///
/// Labels are binary: values above 0.5 count as class 1, the rest as class 0.
/// If the true labels contain only one class the AUC is undefined and
/// [`ScoreError::SingleClass`] is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auc;

impl Scorer for Auc {
    fn score(&self, y_true: ArrayView1<f32>, y_pred: ArrayView1<f32>) -> Result<f64, ScoreError> {
        let n = validate_pair(y_true, y_pred)?;

        let n_pos = y_true.iter().filter(|&&l| l > 0.5).count();
        let n_neg = n - n_pos;
        if n_pos == 0 || n_neg == 0 {
            return Err(ScoreError::SingleClass);
        }

        let ranks = average_ranks(y_pred);
        let rank_sum_pos: f64 = y_true
            .iter()
            .zip(ranks.iter())
            .filter(|(&l, _)| l > 0.5)
            .map(|(_, &r)| r)
            .sum();

        let n_pos_f = n_pos as f64;
        let n_neg_f = n_neg as f64;
        let u = rank_sum_pos - n_pos_f * (n_pos_f + 1.0) / 2.0;
        Ok(u / (n_pos_f * n_neg_f))
    }

    fn name(&self) -> &'static str {
        "auc"
    }

    fn chance_level(&self) -> f64 {
        0.5
    }

    fn higher_is_better(&self) -> bool {
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
