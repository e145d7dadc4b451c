//! Field encoder for the readmission-risk pipeline.
//!
//! Turns the raw, human-entered representation of each clinical attribute
//! (a categorical label or a number) into the canonical numeric encoding
//! the classifier was trained on. Every encoder is total over its declared
//! domain and rejects everything else; nothing is coerced or defaulted.

pub mod encode;

pub use encode::*;
