//! Ordinal decoding: regression predictions scored with rank correlation.

use ndarray::Array1;

use super::{DecodeError, Decoder};
use crate::data::Dataset;
use crate::model::Regressor;
use crate::scoring::{Scorer, SpearmanRho};

/// Decoding pipeline for real-valued ordered targets.
///
/// The target transform is the identity: the regressor is fitted on the raw
/// values and its predictions are scored with [`SpearmanRho`], which only
/// cares about the monotonic relationship between truth and prediction.
#[derive(Debug, Clone)]
pub struct OrdinalDecoder<R> {
    model: R,
    scorer: SpearmanRho,
}

impl<R: Regressor> OrdinalDecoder<R> {
    /// Wrap a configured regressor.
    pub fn new(model: R) -> Self {
        Self { model, scorer: SpearmanRho }
    }

    /// The wrapped regressor.
    pub fn model(&self) -> &R {
        &self.model
    }
}

impl<R: Regressor> Decoder for OrdinalDecoder<R> {
    fn fit(&mut self, train: &Dataset) -> Result<(), DecodeError> {
        self.model.fit(train.features(), train.targets())?;
        Ok(())
    }

    fn predictions(&self, test: &Dataset) -> Result<Array1<f32>, DecodeError> {
        Ok(self.model.predict(test.features())?)
    }

    fn scorer(&self) -> &dyn Scorer {
        &self.scorer
    }
}
