//! Shared types for the campaign code generator.
//!
//! - [`character`] -- code charset classification, vowels, ambiguous bigrams
//! - [`options`] -- generation options and their validation
//! - [`error`] -- the error type shared across the workspace

pub mod character;
pub mod error;
pub mod options;

pub use error::GenerateError;
pub use options::GenerateOptions;
