use readmit_core::{EncodeError, Field};

/// A raw field value as supplied by the collaborating UI layer: either a
/// human-readable categorical label or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Label(String),
    Num(f64),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Label(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Num(n)
    }
}

/// Maps "Male" to 0.0 and "Female" to 1.0.
pub fn encode_gender(raw: &str) -> Result<f64, EncodeError> {
    match raw {
        "Male" => Ok(0.0),
        "Female" => Ok(1.0),
        other => Err(EncodeError::InvalidCategory {
            field: Field::Gender,
            value: other.to_string(),
        }),
    }
}

/// Buckets an age in years into the ten-year groups the model was trained
/// on: `clamp(floor(age / 10) + 1, 1, 10)`.
///
/// Total over all non-negative ages: 0–9 encode to bucket 1, 90 and above
/// to bucket 10. Negative or non-finite ages are rejected rather than
/// clamped; an impossible age is corrupt input, not a very young patient.
pub fn encode_age_group(age_years: f64) -> Result<f64, EncodeError> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(EncodeError::OutOfRange {
            field: Field::AgeGroup,
            value: age_years,
        });
    }
    let bucket = (age_years / 10.0).floor() + 1.0;
    Ok(bucket.min(10.0))
}

/// Generic No/Yes flag used for metformin, change, and diabetesMed:
/// maps "No" to 0.0 and "Yes" to 1.0.
pub fn encode_binary_flag(field: Field, raw: &str) -> Result<f64, EncodeError> {
    match raw {
        "No" => Ok(0.0),
        "Yes" => Ok(1.0),
        other => Err(EncodeError::InvalidCategory {
            field,
            value: other.to_string(),
        }),
    }
}

/// Insulin usage: "No" = 1.0, "Up" = 2.0, "Steady" = 3.0.
///
/// The trained model only ever saw these three states, so "Down" (which a
/// few form variants offered) is rejected like any other unknown label.
pub fn encode_insulin(raw: &str) -> Result<f64, EncodeError> {
    match raw {
        "No" => Ok(1.0),
        "Up" => Ok(2.0),
        "Steady" => Ok(3.0),
        other => Err(EncodeError::InvalidCategory {
            field: Field::Insulin,
            value: other.to_string(),
        }),
    }
}

/// Validates a pass-through numeric field against its declared domain.
///
/// Integer-coded fields additionally reject fractional values; diagnosis
/// codes are accepted as supplied.
pub fn encode_numeric(field: Field, value: f64) -> Result<f64, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::OutOfRange { field, value });
    }
    if field.integer_coded() && value.fract() != 0.0 {
        return Err(EncodeError::OutOfRange { field, value });
    }
    if let Some((min, max)) = field.domain() {
        if value < min || value > max {
            return Err(EncodeError::OutOfRange { field, value });
        }
    }
    Ok(value)
}

/// Encodes one raw input into its canonical slot value.
///
/// Categorical fields accept their enumerated labels or the already-encoded
/// numeric code (form variants differ in which they send); everything else
/// must arrive as a number. The age field takes the age in *years* and
/// applies the bucketing transform, not a pre-bucketed group.
pub fn encode_field(field: Field, raw: &RawValue) -> Result<f64, EncodeError> {
    let encoded = match (field, raw) {
        (Field::Gender, RawValue::Label(s)) => encode_gender(s)?,
        (Field::Insulin, RawValue::Label(s)) => encode_insulin(s)?,
        (
            Field::Metformin | Field::Change | Field::DiabetesMed,
            RawValue::Label(s),
        ) => encode_binary_flag(field, s)?,
        (Field::AgeGroup, RawValue::Num(n)) => encode_age_group(*n)?,
        (_, RawValue::Num(n)) => encode_numeric(field, *n)?,
        (_, RawValue::Label(s)) => {
            return Err(EncodeError::InvalidCategory {
                field,
                value: s.clone(),
            })
        }
    };
    #[cfg(feature = "logging")]
    log::trace!("encoded {field} -> {encoded}");
    Ok(encoded)
}
