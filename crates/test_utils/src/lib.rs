//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! discount engine test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built products and dates for common scenarios
//! - `builders`: Builder patterns for product construction relative to a fixed evaluation date
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
