// Generation options and their validation.

use crate::error::GenerateError;

/// Smallest allowed code length.
pub const MIN_CODE_LEN: usize = 6;

/// Largest allowed code length.
pub const MAX_CODE_LEN: usize = 12;

/// Default number of codes returned per invocation.
pub const DEFAULT_COUNT: usize = 8;

/// Options controlling a single generation run.
///
/// `seed` makes the randomized portion of the pipeline reproducible: with
/// the same text and options, a seeded run returns the identical ordered
/// list. Without a seed the randomized blends differ between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GenerateOptions {
    /// Minimum code length, inclusive. Must be within `[6, 12]`.
    pub min_len: usize,
    /// Maximum code length, inclusive. Must be within `[6, 12]`.
    pub max_len: usize,
    /// Whether a 4-digit year found in the input contributes to patterns.
    pub include_year: bool,
    /// Upper bound on the number of codes returned.
    pub count: usize,
    /// Optional RNG seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            min_len: MIN_CODE_LEN,
            max_len: MAX_CODE_LEN,
            include_year: true,
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

impl GenerateOptions {
    /// Check the length bounds.
    ///
    /// This is the bounds half of input validation; the empty-input check
    /// happens in the tokenizer where the text is first seen.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_len < MIN_CODE_LEN || self.max_len > MAX_CODE_LEN || self.min_len > self.max_len
        {
            return Err(GenerateError::InvalidBounds {
                min: self.min_len,
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// Midpoint of the allowed length range, the ideal length for the
    /// length-fit score.
    pub fn ideal_len(&self) -> f64 {
        (self.min_len + self.max_len) as f64 / 2.0
    }

    /// Builder-style setter for the result count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Builder-style setter for year inclusion.
    pub fn with_year(mut self, include_year: bool) -> Self {
        self.include_year = include_year;
        self
    }

    /// Builder-style setter for the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style setter for the length bounds. Validation stays a
    /// separate step so callers see the error, not a silent clamp.
    pub fn with_bounds(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }
}
