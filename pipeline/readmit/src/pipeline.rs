use std::collections::HashMap;

use log::debug;
use readmit_core::{EncodeError, Field, FEATURE_COUNT};
use readmit_encode::{encode_field, RawValue};
use readmit_model::Classifier;
use readmit_vector::assemble;

use crate::decision::{decide, Decision};
use crate::PipelineError;

/// The feature-encoding and inference-decision pipeline.
///
/// Holds nothing but a reference to the process-wide classifier, so it is
/// cheap to construct and carries no per-request state: each `predict` call
/// builds its vector fresh and discards it. Concurrent callers sharing one
/// classifier need no coordination because nothing here is ever mutated.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a, C: Classifier> {
    classifier: &'a C,
}

impl<'a, C: Classifier> Pipeline<'a, C> {
    /// Wires the pipeline to an already-loaded classifier.
    pub fn new(classifier: &'a C) -> Self {
        Pipeline { classifier }
    }

    /// Runs one classification request end to end: encode each raw field,
    /// assemble the ordered vector, classify, and map the label to a
    /// decision. Fails on the first problem with the offending field named.
    pub fn predict(&self, raw: &HashMap<Field, RawValue>) -> Result<Decision, PipelineError> {
        let mut encoded = HashMap::with_capacity(FEATURE_COUNT);
        for field in Field::ORDER {
            let value = raw.get(&field).ok_or(EncodeError::MissingField(field))?;
            encoded.insert(field, encode_field(field, value)?);
        }
        let features = assemble(&encoded)?;
        debug!("assembled feature vector {features}");
        let label = self.classifier.classify(&features)?;
        decide(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::RiskCategory;
    use pretty_assertions::assert_eq;
    use readmit_core::PatientFeatures;
    use readmit_model::{ModelError, RawLabel};

    /// Stub classifier returning a fixed label, recording nothing.
    struct Fixed(RawLabel);

    impl Classifier for Fixed {
        fn classify(&self, _features: &PatientFeatures) -> Result<RawLabel, ModelError> {
            Ok(self.0)
        }
    }

    fn raw_patient() -> HashMap<Field, RawValue> {
        [
            (Field::Gender, RawValue::from("Female")),
            (Field::AgeGroup, RawValue::Num(45.0)),
            (Field::AdmissionTypeId, RawValue::Num(1.0)),
            (Field::TimeInHospital, RawValue::Num(5.0)),
            (Field::NumLabProcedures, RawValue::Num(40.0)),
            (Field::NumMedications, RawValue::Num(12.0)),
            (Field::NumberInpatient, RawValue::Num(2.0)),
            (Field::Diag1, RawValue::Num(250.0)),
            (Field::Diag2, RawValue::Num(401.0)),
            (Field::Diag3, RawValue::Num(272.0)),
            (Field::Metformin, RawValue::from("No")),
            (Field::Insulin, RawValue::from("Steady")),
            (Field::Change, RawValue::from("No")),
            (Field::DiabetesMed, RawValue::from("Yes")),
            (Field::DischargedTo, RawValue::Num(1.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn full_request_reaches_a_decision() {
        let classifier = Fixed(1);
        let pipeline = Pipeline::new(&classifier);
        let decision = pipeline.predict(&raw_patient()).unwrap();
        assert_eq!(decision.category, RiskCategory::HighRisk);
    }

    #[test]
    fn missing_raw_field_is_named_before_classification() {
        let classifier = Fixed(0);
        let pipeline = Pipeline::new(&classifier);
        let mut raw = raw_patient();
        raw.remove(&Field::Diag2);
        let err = pipeline.predict(&raw).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Encode(EncodeError::MissingField(Field::Diag2))
        ));
    }

    #[test]
    fn pipeline_is_reusable_after_a_failed_request() {
        let classifier = Fixed(0);
        let pipeline = Pipeline::new(&classifier);

        let mut bad = raw_patient();
        bad.insert(Field::Insulin, RawValue::from("Down"));
        assert!(pipeline.predict(&bad).is_err());

        let decision = pipeline.predict(&raw_patient()).unwrap();
        assert_eq!(decision.category, RiskCategory::LowRisk);
    }

    #[test]
    fn contract_breaking_label_surfaces_as_unexpected() {
        let classifier = Fixed(7);
        let pipeline = Pipeline::new(&classifier);
        assert!(matches!(
            pipeline.predict(&raw_patient()),
            Err(PipelineError::UnexpectedLabel(7))
        ));
    }
}
