use std::path::Path;

use log::{debug, info};
use readmit_core::PatientFeatures;

use crate::artifact::{ModelArtifact, ModelError, RawLabel};

/// The single capability the rest of the pipeline sees: an ordered feature
/// vector in, a raw binary label out. Implemented by the real model and by
/// test stubs.
pub trait Classifier {
    fn classify(&self, features: &PatientFeatures) -> Result<RawLabel, ModelError>;
}

/// The pre-trained readmission classifier, loaded once at process start and
/// immutable for the life of the process.
///
/// Construct one with [`ReadmitModel::load`] during startup and hand it to
/// the pipeline by reference; a load failure is fatal, since the system has
/// no way to predict without a model.
#[derive(Debug, Clone)]
pub struct ReadmitModel {
    artifact: ModelArtifact,
}

impl ReadmitModel {
    /// Loads and validates the model artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(path)?;
        let model = Self::from_artifact(artifact)?;
        info!(
            "loaded model '{}' ({} trees, {} features) from {}",
            model.artifact.name.as_deref().unwrap_or("unnamed"),
            model.artifact.trees.len(),
            model.artifact.num_features,
            path.display()
        );
        Ok(model)
    }

    /// Wraps an in-memory artifact after structural validation.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        Ok(ReadmitModel { artifact })
    }

    /// Feature arity the model expects.
    pub fn num_features(&self) -> usize {
        self.artifact.num_features
    }

    /// Majority vote over the ensemble. Ties go to label 0.
    fn predict(&self, x: &[f64]) -> Result<RawLabel, ModelError> {
        if x.len() != self.artifact.num_features {
            return Err(ModelError::ShapeMismatch {
                expected: self.artifact.num_features,
                actual: x.len(),
            });
        }
        let ones: usize = self
            .artifact
            .trees
            .iter()
            .map(|tree| ModelArtifact::walk(tree, x) as usize)
            .sum();
        let label = RawLabel::from(ones * 2 > self.artifact.trees.len());
        debug!(
            "ensemble vote: {ones}/{} trees -> label {label}",
            self.artifact.trees.len()
        );
        Ok(label)
    }
}

impl Classifier for ReadmitModel {
    fn classify(&self, features: &PatientFeatures) -> Result<RawLabel, ModelError> {
        // The vector is forwarded exactly as assembled; the adapter never
        // transforms it.
        self.predict(features.as_slice())
    }
}
