use std::fmt;

use readmit_model::RawLabel;

use crate::PipelineError;

/// Advisory shown alongside a high-risk classification.
pub const HIGH_RISK_ADVISORY: &str =
    "The patient is at high risk of readmission. Consider additional monitoring and intervention.";

/// Advisory shown alongside a low-risk classification.
pub const LOW_RISK_ADVISORY: &str = "The patient has a low risk of readmission.";

/// The two terminal outcomes of a classification. There are no
/// intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    HighRisk,
    LowRisk,
}

impl RiskCategory {
    /// Stable machine-readable name, used at the JSON output boundary.
    pub fn code(self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "HIGH_RISK",
            RiskCategory::LowRisk => "LOW_RISK",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::HighRisk => f.write_str("High Risk of Readmission"),
            RiskCategory::LowRisk => f.write_str("Low Risk of Readmission"),
        }
    }
}

/// What the caller renders: the category plus its advisory text, passed
/// through with no further transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub category: RiskCategory,
    pub advisory: &'static str,
}

/// Maps the classifier's raw label to its clinical meaning.
///
/// Pure and total over {0, 1}; any other label is a broken classifier
/// contract, surfaced as [`PipelineError::UnexpectedLabel`].
pub fn decide(label: RawLabel) -> Result<Decision, PipelineError> {
    match label {
        1 => Ok(Decision {
            category: RiskCategory::HighRisk,
            advisory: HIGH_RISK_ADVISORY,
        }),
        0 => Ok(Decision {
            category: RiskCategory::LowRisk,
            advisory: LOW_RISK_ADVISORY,
        }),
        other => Err(PipelineError::UnexpectedLabel(other)),
    }
}
