//! Shared primitives and traits for the nwalign workspace.
//!
//! - **Error types**: [`NwalignError`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{NwalignError, Result};
pub use traits::*;
