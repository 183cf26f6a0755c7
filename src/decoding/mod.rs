//! Per-topology decoding pipelines.
//!
//! A decoder composes four steps: a target transform matched to the target's
//! topology (none for categorical, identity for ordinal, cos/sin for
//! circular), delegation to the trainable model(s), an inverse transform of
//! the predictions back into target space, and a topology-appropriate scorer.
//!
//! All pipelines are stateless between calls apart from the fitted model they
//! own; nothing is persisted and every score is recomputed per invocation.

mod categorical;
mod circular;
mod ordinal;

pub use categorical::CategoricalDecoder;
pub use circular::CircularDecoder;
pub use ordinal::OrdinalDecoder;

use ndarray::Array1;

use crate::data::Dataset;
use crate::model::ModelError;
use crate::scoring::{ScoreError, Scorer};

// =============================================================================
// DecodeError
// =============================================================================

/// Errors surfaced by a decoding pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

// =============================================================================
// Decoder Trait
// =============================================================================

/// A fitted-model-plus-scorer pipeline for one target topology.
pub trait Decoder {
    /// Fit the underlying model(s) on a training dataset.
    fn fit(&mut self, train: &Dataset) -> Result<(), DecodeError>;

    /// One prediction per test trial, in the space the scorer consumes:
    /// class-1 probabilities for the categorical path, real values for the
    /// ordinal path, decoded angles for the circular path.
    fn predictions(&self, test: &Dataset) -> Result<Array1<f32>, DecodeError>;

    /// The scorer paired with this topology.
    fn scorer(&self) -> &dyn Scorer;

    /// Score predictions on a test dataset against its true targets.
    fn score(&self, test: &Dataset) -> Result<f64, DecodeError> {
        let preds = self.predictions(test)?;
        Ok(self.scorer().score(test.targets(), preds.view())?)
    }
}
