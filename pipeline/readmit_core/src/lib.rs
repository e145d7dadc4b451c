// Core types for the readmission-risk pipeline
pub mod error;
pub mod features;
pub mod fields;

pub use error::*;
pub use features::*;
pub use fields::*;
