// Error type shared by the generation pipeline.

use crate::options::{MAX_CODE_LEN, MIN_CODE_LEN};

/// Errors raised by the code generation pipeline.
///
/// The first two variants are input validation failures and are the only
/// errors a caller with well-formed input can trigger. `EmptyPool` signals
/// an internal defect: fitting guarantees every surviving candidate is in
/// bounds, so an empty pool after filtering means the pipeline is broken,
/// and the engine reports it instead of returning an empty list.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Length bounds outside `[6, 12]` or inverted.
    #[error(
        "length bounds must satisfy {MIN_CODE_LEN} <= min <= max <= {MAX_CODE_LEN}, got min={min} max={max}"
    )]
    InvalidBounds { min: usize, max: usize },

    /// The input text contained no letters or digits.
    #[error("input must contain letters or digits")]
    EmptyInput,

    /// No candidate survived normalization. Not reachable from bad input.
    #[error("candidate pool empty after normalization")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_message_names_the_offending_values() {
        let err = GenerateError::InvalidBounds { min: 4, max: 12 };
        let msg = err.to_string();
        assert!(msg.contains("min=4"));
        assert!(msg.contains("max=12"));
    }

    #[test]
    fn variants_are_distinguishable() {
        assert_ne!(
            GenerateError::EmptyInput,
            GenerateError::EmptyPool
        );
    }
}
