//! Integration test crate for the readmission-risk pipeline; see the
//! `[[test]]` targets at the package root.
