//! Public API for the derm-transform crate.
//!
//! This module provides the high-level API: the [`UnetPreprocessor`] entry
//! point and the [`TransformError`] error type.

mod builder;
mod error;

pub use builder::UnetPreprocessor;
pub use error::TransformError;
