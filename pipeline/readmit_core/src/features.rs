use std::fmt;

use crate::fields::{Field, FEATURE_COUNT};

/// The canonical encoded record: one numeric value per clinical attribute,
/// in the slot order of [`Field::ORDER`].
///
/// A `PatientFeatures` is built fresh for each prediction request by the
/// assembler and is never mutated afterwards; it carries no lifecycle beyond
/// the single classification call it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientFeatures([f64; FEATURE_COUNT]);

impl PatientFeatures {
    /// Wraps an already-ordered, already-validated slot array.
    ///
    /// Callers outside the assembler should not construct these directly;
    /// the assembler is the only place presence and range are enforced.
    pub fn from_slots(slots: [f64; FEATURE_COUNT]) -> Self {
        PatientFeatures(slots)
    }

    /// The encoded value in a named slot.
    pub fn get(&self, field: Field) -> f64 {
        // ORDER is the single source of slot positions.
        let idx = Field::ORDER
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        self.0[idx]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for PatientFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_access_follows_slot_order() {
        let mut slots = [0.0; FEATURE_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = i as f64;
        }
        let features = PatientFeatures::from_slots(slots);
        assert_eq!(features.get(Field::Gender), 0.0);
        assert_eq!(features.get(Field::Insulin), 11.0);
        assert_eq!(features.get(Field::DischargedTo), 14.0);
    }

    #[test]
    fn display_renders_a_flat_vector() {
        let features = PatientFeatures::from_slots([1.0; FEATURE_COUNT]);
        assert!(features.to_string().starts_with("[1, 1,"));
    }
}
