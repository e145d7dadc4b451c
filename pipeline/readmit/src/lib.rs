//! Early-readmission risk pipeline for diabetic patients.
//!
//! Ties the stages together: raw clinical input is encoded field by field,
//! assembled into the fixed-order feature vector, classified by the
//! pre-trained model, and mapped to a risk category with advisory text.

pub mod decision;
pub mod pipeline;

use thiserror::Error;

pub use decision::{decide, Decision, RiskCategory};
pub use pipeline::Pipeline;
pub use readmit_core::{EncodeError, Field, PatientFeatures, FEATURE_COUNT};
pub use readmit_encode::RawValue;
pub use readmit_model::{Classifier, ModelError, RawLabel, ReadmitModel};

/// Any failure along one classification request.
///
/// Encoding and shape errors abort only the request that raised them;
/// the pipeline (and the model behind it) stays usable for the next call.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The classifier broke its own contract. Not an input problem.
    #[error("classifier returned unexpected label {0}; expected 0 or 1")]
    UnexpectedLabel(RawLabel),
}
