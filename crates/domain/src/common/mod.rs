//! Shared helpers used by the domain and its adapters.

mod paths;

pub use paths::{file_base, file_extension, file_stem};
