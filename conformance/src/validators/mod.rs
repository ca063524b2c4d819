//! Conformance validators organized by target.

pub mod artifacts;
pub mod vocabulary;
