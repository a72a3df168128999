//! Skyline Engine library.
//!
//! Turns a building placement file plus a directory of model files into a
//! scene: one model reference node per building, grouped under a single root
//! node and written through a scene persistence port.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports, filesystem adapters, metadata importers, asset catalog
//! - `use_cases/` - Node building, scene assembly, and the import orchestration
//! - `config` - Command-line and environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end pipeline tests against the filesystem adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
