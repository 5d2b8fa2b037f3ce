//! Core types for the rangehist crates
//!
//! This crate provides the shared foundation used across the workspace:
//! the unified [`Error`] type with its [`Result`] alias, and the
//! [`WeightVector`] used by weighted histogram builds.
//!
//! # Example
//!
//! ```rust
//! use rangehist_core::{Result, WeightVector};
//!
//! fn normalized_weights(n: usize) -> Result<WeightVector> {
//!     WeightVector::uniform(n, 1.0 / n as f64)
//! }
//!
//! let w = normalized_weights(10).unwrap();
//! assert_eq!(w.len(), 10);
//! ```

pub mod error;
pub mod weights;

pub use error::{Error, Result};
pub use weights::WeightVector;
