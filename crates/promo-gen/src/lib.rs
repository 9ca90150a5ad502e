//! Campaign code generation engine.
//!
//! Turns a free-text campaign name into a ranked list of short, typeable,
//! visually unambiguous alphanumeric codes. The pipeline is a pure function
//! of the input text, the options, and the RNG seed:
//!
//! - [`tokenizer`] -- split raw text into uppercase alphanumeric tokens
//! - [`features`] -- year extraction, letter words, acronym hints
//! - [`candidates`] -- deterministic patterns and randomized blends
//! - [`fitter`] -- charset/length normalization of raw candidates
//! - [`scoring`] -- pronounceability, readability, and length-fit scores
//! - [`rank`] -- dedup, score-descending sort, top-N selection
//! - [`handle`] -- the [`CodeGenerator`] entry point wiring it all together
//!
//! ```
//! use promo_core::GenerateOptions;
//!
//! let options = GenerateOptions::default().with_count(3).with_seed(42);
//! let codes = promo_gen::generate_codes("Summer Sale 2024", &options).unwrap();
//! assert!(!codes.is_empty() && codes.len() <= 3);
//! ```

pub mod candidates;
pub mod features;
pub mod fitter;
pub mod handle;
pub mod rank;
pub mod scoring;
pub mod tokenizer;

pub use handle::{CodeGenerator, generate_codes};
