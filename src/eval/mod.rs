//! Shared evaluation harness.
//!
//! One entry point, [`evaluate`], runs the same procedure for every topology:
//! deterministic half split, fit on the first half, score on the second, and
//! return an [`EvalReport`] that carries the score together with the metadata
//! needed to read it (metric name, chance level, direction).

mod logger;

pub use logger::{EvalLogger, Verbosity};

use serde::Serialize;

use crate::data::Dataset;
use crate::decoding::{DecodeError, Decoder};

// =============================================================================
// EvalReport
// =============================================================================

/// The outcome of one decoding analysis.
///
/// A score is meaningless without its chance level and direction, so the
/// report carries all three. Serializable, so per-analysis results can be
/// collected and written out by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Caller-supplied analysis name (e.g. `"target_presence"`).
    pub analysis: String,
    /// Name of the scorer that produced `score`.
    pub metric: String,
    /// The computed score, in the scorer's canonical units.
    pub score: f64,
    /// Expected score of a no-signal predictor.
    pub chance_level: f64,
    /// Whether larger scores indicate better agreement.
    pub higher_is_better: bool,
    /// Trials used for fitting.
    pub n_train: usize,
    /// Trials used for scoring.
    pub n_test: usize,
}

impl std::fmt::Display for EvalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]: {:.4} (chance {:.4}, train {}, test {})",
            self.analysis, self.metric, self.score, self.chance_level, self.n_train, self.n_test
        )
    }
}

// =============================================================================
// EvalOptions
// =============================================================================

/// Options for [`evaluate`].
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Analysis name carried into the report and log lines.
    pub analysis: String,
    /// Logging verbosity.
    pub verbosity: Verbosity,
}

impl EvalOptions {
    /// Options with the given analysis name and silent logging.
    pub fn new(analysis: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            verbosity: Verbosity::Silent,
        }
    }

    /// Set the logging verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self::new("decode")
    }
}

// =============================================================================
// evaluate
// =============================================================================

/// Split, fit, and score one decoder on one dataset.
///
/// Train is the first `⌊N/2⌋` trials and test is the remainder (see
/// [`Dataset::split_half`]). The call is synchronous and pure with respect to
/// its inputs; the decoder is left holding the fitted model, so further test
/// sets can be scored against the same fit via [`Decoder::score`].
pub fn evaluate<D: Decoder>(
    decoder: &mut D,
    dataset: &Dataset,
    options: EvalOptions,
) -> Result<EvalReport, DecodeError> {
    let logger = EvalLogger::new(options.verbosity);
    let (train, test) = dataset.split_half();

    logger.info(&format!(
        "{}: fit on {} trials, score on {}",
        options.analysis,
        train.n_trials(),
        test.n_trials()
    ));
    decoder.fit(&train)?;
    let score = decoder.score(&test)?;

    let scorer = decoder.scorer();
    let report = EvalReport {
        analysis: options.analysis,
        metric: scorer.name().to_string(),
        score,
        chance_level: scorer.chance_level(),
        higher_is_better: scorer.higher_is_better(),
        n_train: train.n_trials(),
        n_test: test.n_trials(),
    };
    logger.report(&report);
    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
