//! # trigon-types
//!
//! Shared error types and numeric constants for the Trigon mesh
//! attribute pipeline.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Trigon crates share.

pub mod constants;
pub mod error;

pub use error::{TrigonError, TrigonResult};
