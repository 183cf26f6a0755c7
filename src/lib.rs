//! protractor: topology-aware target decoding for trial-structured data.
//!
//! Sensor experiments pair each trial (one row of a feature matrix) with a
//! to-be-predicted target. How that target should be modelled and scored
//! depends on its topology:
//!
//! - **Categorical** targets come from a finite unordered label set and are
//!   scored with area under the ROC curve.
//! - **Ordinal** targets are real values with a meaningful order and are
//!   scored with Spearman rank correlation.
//! - **Circular** targets are angles defined modulo 2π, where the maximum
//!   and minimum values are adjacent. They are regressed through a
//!   (cos θ, sin θ) encoding and scored with wrapped angular error.
//!
//! # Key Types
//!
//! - [`CategoricalDecoder`] / [`OrdinalDecoder`] / [`CircularDecoder`] -
//!   per-topology fit/predict/score pipelines
//! - [`CircularRegressor`] - the paired cos/sin component regressor
//! - [`Auc`] / [`SpearmanRho`] / [`AngularError`] - scoring functions
//! - [`Dataset`] - trial-major data container with a deterministic half split
//! - [`evaluate`] - the shared split/fit/score harness
//!
//! # Example
//!
//! ```
//! use protractor::{evaluate, CircularDecoder, EvalOptions, RidgeRegressor};
//! use protractor::testing::synthetic_circular;
//!
//! let dataset = synthetic_circular(64, 4, 7, 0.1);
//! let mut decoder = CircularDecoder::new(RidgeRegressor::default());
//! let report = evaluate(&mut decoder, &dataset, EvalOptions::new("probe_angle")).unwrap();
//!
//! // Mean absolute angular error; chance level is pi/2.
//! assert!(report.score < std::f64::consts::FRAC_PI_2);
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod decoding;
pub mod eval;
pub mod model;
pub mod scoring;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{DataError, Dataset};

pub use decoding::{
    CategoricalDecoder, CircularDecoder, DecodeError, Decoder, OrdinalDecoder,
};

pub use eval::{evaluate, EvalLogger, EvalOptions, EvalReport, Verbosity};

pub use model::{
    decode_angle, encode_angle, CircularRegressor, Classifier, ModelError,
    NearestCentroidClassifier, Regressor, RidgeRegressor,
};

pub use scoring::{
    chance_centered, wrap_angle, AngularError, Auc, ScoreError, Scorer, SpearmanRho,
};
