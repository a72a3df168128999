//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! filesystem-facing readers the import pipeline starts from.

pub mod catalog;
pub mod clock;
pub mod correlation;
pub mod filesystem;
pub mod importers;
pub mod ports;
