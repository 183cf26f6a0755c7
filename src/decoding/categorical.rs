//! Categorical decoding: classifier posteriors scored with AUC.

use ndarray::Array1;

use super::{DecodeError, Decoder};
use crate::data::Dataset;
use crate::model::Classifier;
use crate::scoring::{Auc, Scorer};

/// Decoding pipeline for unordered binary labels.
///
/// No target transform is needed; the classifier is fitted on the labels as
/// given, and its class-1 posterior probabilities are scored with [`Auc`].
#[derive(Debug, Clone)]
pub struct CategoricalDecoder<C> {
    model: C,
    scorer: Auc,
}

impl<C: Classifier> CategoricalDecoder<C> {
    /// Wrap a configured classifier.
    pub fn new(model: C) -> Self {
        Self { model, scorer: Auc }
    }

    /// The wrapped classifier.
    pub fn model(&self) -> &C {
        &self.model
    }
}

impl<C: Classifier> Decoder for CategoricalDecoder<C> {
    fn fit(&mut self, train: &Dataset) -> Result<(), DecodeError> {
        self.model.fit(train.features(), train.targets())?;
        Ok(())
    }

    fn predictions(&self, test: &Dataset) -> Result<Array1<f32>, DecodeError> {
        let proba = self.model.predict_proba(test.features())?;
        Ok(proba.column(1).to_owned())
    }

    fn scorer(&self) -> &dyn Scorer {
        &self.scorer
    }
}
