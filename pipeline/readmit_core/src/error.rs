use thiserror::Error;

use crate::fields::Field;

/// Request-scoped errors raised while turning raw clinical input into an
/// encoded feature vector.
///
/// Every variant names the offending field: per the propagation policy,
/// nothing is silently coerced or defaulted, since a defaulted value would
/// corrupt a clinical prediction. These abort only the current request; the
/// pipeline stays reusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// A categorical label was not in the field's enumerated domain.
    #[error("field '{field}': unrecognized category '{value}'")]
    InvalidCategory { field: Field, value: String },

    /// A numeric value fell outside the field's declared domain.
    #[error("field '{field}': value {value} outside declared domain")]
    OutOfRange { field: Field, value: f64 },

    /// One of the 15 required fields was absent from the input mapping.
    #[error("required field '{0}' is missing")]
    MissingField(Field),
}

impl EncodeError {
    /// The field this error is about.
    pub fn field(&self) -> Field {
        match self {
            EncodeError::InvalidCategory { field, .. } => *field,
            EncodeError::OutOfRange { field, .. } => *field,
            EncodeError::MissingField(field) => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_offending_field() {
        let err = EncodeError::OutOfRange {
            field: Field::AdmissionTypeId,
            value: 12.0,
        };
        assert_eq!(err.field(), Field::AdmissionTypeId);
        assert!(err.to_string().contains("admission_type_id"));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn missing_field_message_names_the_field() {
        let err = EncodeError::MissingField(Field::Insulin);
        assert_eq!(err.to_string(), "required field 'insulin' is missing");
    }
}
