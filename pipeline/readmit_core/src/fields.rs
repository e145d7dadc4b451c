use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The 15 clinical attributes consumed by the readmission classifier.
///
/// Variant order here is documentation only; the classifier's slot order is
/// fixed by [`Field::ORDER`], which every vector-producing code path must go
/// through. The classifier has no notion of field names, only positions, so
/// reordering `ORDER` silently corrupts every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// 0 = male, 1 = female
    Gender,
    /// Ten-year age bucket, 1..=10
    AgeGroup,
    /// Admission type code, 1..=8 (Emergency, Urgent, Elective, Newborn,
    /// Not Available, NULL, Trauma Center, Not Mapped)
    AdmissionTypeId,
    /// Length of stay in days, 1..=30
    TimeInHospital,
    /// Count of lab procedures during the encounter
    NumLabProcedures,
    /// Count of distinct medications administered
    NumMedications,
    /// Count of prior inpatient visits
    NumberInpatient,
    /// Primary diagnosis code
    Diag1,
    /// Secondary diagnosis code
    Diag2,
    /// Additional diagnosis code
    Diag3,
    /// 0 = not used, 1 = used
    Metformin,
    /// Insulin usage code: 1 = No, 2 = Up, 3 = Steady
    Insulin,
    /// 0 = no medication change, 1 = changed
    Change,
    /// 0 = not on diabetes medication, 1 = on diabetes medication
    DiabetesMed,
    /// Discharge destination code, 1..=30
    DischargedTo,
}

/// The number of slots the classifier expects.
pub const FEATURE_COUNT: usize = 15;

impl Field {
    /// Canonical slot order of the classifier's input vector.
    pub const ORDER: [Field; FEATURE_COUNT] = [
        Field::Gender,
        Field::AgeGroup,
        Field::AdmissionTypeId,
        Field::TimeInHospital,
        Field::NumLabProcedures,
        Field::NumMedications,
        Field::NumberInpatient,
        Field::Diag1,
        Field::Diag2,
        Field::Diag3,
        Field::Metformin,
        Field::Insulin,
        Field::Change,
        Field::DiabetesMed,
        Field::DischargedTo,
    ];

    /// The original dataset column name for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::AgeGroup => "age",
            Field::AdmissionTypeId => "admission_type_id",
            Field::TimeInHospital => "time_in_hospital",
            Field::NumLabProcedures => "num_lab_procedures",
            Field::NumMedications => "num_medications",
            Field::NumberInpatient => "number_inpatient",
            Field::Diag1 => "diag_1",
            Field::Diag2 => "diag_2",
            Field::Diag3 => "diag_3",
            Field::Metformin => "metformin",
            Field::Insulin => "insulin",
            Field::Change => "change",
            Field::DiabetesMed => "diabetesMed",
            Field::DischargedTo => "discharged_to",
        }
    }

    /// Inclusive numeric domain of the encoded value, or `None` when the
    /// field is unconstrained beyond being present (diagnosis codes).
    pub const fn domain(self) -> Option<(f64, f64)> {
        match self {
            Field::Gender | Field::Metformin | Field::Change | Field::DiabetesMed => {
                Some((0.0, 1.0))
            }
            Field::AgeGroup => Some((1.0, 10.0)),
            Field::AdmissionTypeId => Some((1.0, 8.0)),
            Field::TimeInHospital | Field::DischargedTo => Some((1.0, 30.0)),
            Field::NumLabProcedures | Field::NumMedications | Field::NumberInpatient => {
                Some((0.0, f64::INFINITY))
            }
            Field::Insulin => Some((1.0, 3.0)),
            Field::Diag1 | Field::Diag2 | Field::Diag3 => None,
        }
    }

    /// Whether the encoded value must be a whole number. Diagnosis codes are
    /// passed through as supplied.
    pub const fn integer_coded(self) -> bool {
        !matches!(self, Field::Diag1 | Field::Diag2 | Field::Diag3)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field name from the input boundary is not one of
/// the 15 known clinical attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown clinical field name: '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ORDER
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
