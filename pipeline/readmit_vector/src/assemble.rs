use std::collections::HashMap;

use readmit_core::{EncodeError, Field, PatientFeatures, FEATURE_COUNT};

/// Builds the classifier's input vector from a map of encoded field values.
///
/// Fields are laid out in the slot order of [`Field::ORDER`]; the classifier
/// only understands positions, so this function is the single place a vector
/// may be constructed. Missing fields are reported in slot order, one at a
/// time, so the caller always learns the first gap.
///
/// Ranges are re-checked here even though every value should already have
/// passed its encoder, so an unvalidated value can never reach the model.
pub fn assemble(fields: &HashMap<Field, f64>) -> Result<PatientFeatures, EncodeError> {
    let mut slots = [0.0f64; FEATURE_COUNT];
    for (slot, field) in slots.iter_mut().zip(Field::ORDER) {
        let value = *fields
            .get(&field)
            .ok_or(EncodeError::MissingField(field))?;
        check_domain(field, value)?;
        *slot = value;
    }
    Ok(PatientFeatures::from_slots(slots))
}

fn check_domain(field: Field, value: f64) -> Result<(), EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::OutOfRange { field, value });
    }
    if let Some((min, max)) = field.domain() {
        if value < min || value > max {
            return Err(EncodeError::OutOfRange { field, value });
        }
    }
    Ok(())
}
