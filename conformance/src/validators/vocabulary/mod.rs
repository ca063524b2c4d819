//! Validators that run against the in-memory vocabulary (no file I/O).

pub mod inventory;
pub mod lookup;
