//! strictjson End-to-End Test Infrastructure
//!
//! Shared fixtures for the integration tests in `tests/`:
//!
//! - `e2e_validation`: the documented behavior of the validator on whole files
//! - `proptest_validation`: properties that hold for arbitrary input
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p strictjson-tests
//! ```

pub mod fixtures;

pub use fixtures::{samples, JsonFixture};
