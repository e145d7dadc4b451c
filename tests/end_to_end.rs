// System tests: a real artifact on disk, loaded and driven through the
// whole pipeline.
use std::collections::HashMap;
use std::io::Write;

use pretty_assertions::assert_eq;
use readmit::{Field, Pipeline, PipelineError, RawValue, ReadmitModel, RiskCategory};
use readmit_core::EncodeError;

/// A single-tree ensemble that flags patients with two or more prior
/// inpatient visits, serialized the way the training pipeline would.
const MODEL_JSON: &str = r#"{
    "name": "readmit-test",
    "num_features": 15,
    "trees": [
        {
            "nodes": [
                { "split": { "feature": 6, "threshold": 2.0, "left": 1, "right": 2 } },
                { "leaf": { "label": 0 } },
                { "leaf": { "label": 1 } }
            ]
        }
    ]
}"#;

fn model_on_disk() -> ReadmitModel {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MODEL_JSON.as_bytes()).unwrap();
    ReadmitModel::load(file.path()).unwrap()
}

fn scenario_patient() -> HashMap<Field, RawValue> {
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
fn high_risk_patient_gets_monitoring_advisory() {
    let model = model_on_disk();
    let pipeline = Pipeline::new(&model);

    let decision = pipeline.predict(&scenario_patient()).unwrap();
    assert_eq!(decision.category, RiskCategory::HighRisk);
    assert!(decision.advisory.contains("additional monitoring"));
}

#[test]
fn first_admission_patient_is_low_risk() {
    let model = model_on_disk();
    let pipeline = Pipeline::new(&model);

    let mut raw = scenario_patient();
    raw.insert(Field::NumberInpatient, RawValue::Num(0.0));
    let decision = pipeline.predict(&raw).unwrap();
    assert_eq!(decision.category, RiskCategory::LowRisk);
    assert_eq!(decision.advisory, "The patient has a low risk of readmission.");
}

#[test]
fn a_bad_request_does_not_poison_the_next_one() {
    let model = model_on_disk();
    let pipeline = Pipeline::new(&model);

    let mut bad = scenario_patient();
    bad.insert(Field::AdmissionTypeId, RawValue::Num(99.0));
    let err = pipeline.predict(&bad).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Encode(EncodeError::OutOfRange {
            field: Field::AdmissionTypeId,
            ..
        })
    ));

    // Same model, same pipeline, next request works.
    let decision = pipeline.predict(&scenario_patient()).unwrap();
    assert_eq!(decision.category, RiskCategory::HighRisk);
}

#[test]
fn one_model_serves_independent_concurrent_requests() {
    // The loaded model is immutable; sessions share it by reference with
    // no coordination.
    let model = model_on_disk();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let pipeline = Pipeline::new(&model);
                let decision = pipeline.predict(&scenario_patient()).unwrap();
                assert_eq!(decision.category, RiskCategory::HighRisk);
            });
        }
    });
}
