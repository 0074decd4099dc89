//! Common error types shared across the DataStream crates.

pub mod error;

pub use error::{Error, Result};
