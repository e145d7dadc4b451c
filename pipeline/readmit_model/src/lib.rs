//! Classifier adapter for the readmission-risk pipeline.
//!
//! Wraps the pre-trained model artifact behind a single `classify`
//! capability. The artifact is loaded once at process start, validated
//! structurally, and never mutated afterwards; everything outside this
//! crate sees only an opaque label source.

pub mod artifact;
pub mod classifier;

pub use artifact::*;
pub use classifier::*;
