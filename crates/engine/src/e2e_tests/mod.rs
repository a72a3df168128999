//! End-to-end import tests.
//!
//! These run the complete App against the filesystem stores inside a
//! temporary directory: metadata parsing, catalog scan, node building,
//! asset upload and scene persistence.
//!
//! ```bash
//! cargo test -p skyline-engine --lib e2e_tests
//! ```

mod e2e_helpers;
