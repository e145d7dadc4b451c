//! Feature vector assembler.
//!
//! Orders encoded field values into the fixed 15-slot vector the classifier
//! expects and enforces completeness and ranges one final time before the
//! vector crosses the model boundary.

pub mod assemble;

pub use assemble::*;
