//! Circular decoding: the cos/sin component pair scored with angular error.

use ndarray::Array1;

use super::{DecodeError, Decoder};
use crate::data::Dataset;
use crate::model::{CircularRegressor, Regressor};
use crate::scoring::{AngularError, Scorer};

/// Decoding pipeline for angular targets.
///
/// Owns a [`CircularRegressor`] built from a single regressor template, so
/// the cos and sin components are fitted by identically configured,
/// independent models. Decoded angles are scored with [`AngularError`];
/// [`crate::scoring::chance_centered`] converts the reported error into an
/// accuracy-style number when one is wanted.
#[derive(Debug, Clone)]
pub struct CircularDecoder<R> {
    model: CircularRegressor<R>,
    scorer: AngularError,
}

impl<R: Regressor + Clone> CircularDecoder<R> {
    /// Build the pipeline from a regressor template.
    pub fn new(template: R) -> Self {
        Self {
            model: CircularRegressor::new(template),
            scorer: AngularError,
        }
    }

    /// The composed two-component regressor.
    pub fn model(&self) -> &CircularRegressor<R> {
        &self.model
    }
}

impl<R: Regressor + Clone + Send> Decoder for CircularDecoder<R> {
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
