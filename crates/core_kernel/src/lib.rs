//! Core Kernel - Foundational types and utilities for the discount engine
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Decimal helpers with explicit capping and round-half-up semantics
//! - The evaluation clock and calendar period arithmetic
//! - Common error types

pub mod decimal;
pub mod temporal;
pub mod error;

pub use decimal::{DecimalExt, HALF_UP};
pub use temporal::{Clock, FixedClock, SystemClock, Timezone, TemporalError};
pub use error::CoreError;
