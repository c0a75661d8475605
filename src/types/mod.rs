//! Shared types

pub mod error;

pub use error::{AccountError, Result};
