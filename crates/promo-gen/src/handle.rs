// CodeGenerator: top-level entry point wiring the pipeline together.
//
// The handle owns a validated set of options; each `generate` call is a
// pure function of (text, options, seed). The RNG is constructed per
// invocation -- seeded from the options or from entropy -- and threaded
// through blend generation and fitting, so seeded calls are reproducible
// and concurrent calls never share random state.

use promo_core::{GenerateError, GenerateOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::candidates::strategy::default_strategy;
use crate::candidates::{CandidatePool, PatternContext};
use crate::features;
use crate::fitter;
use crate::rank;
use crate::tokenizer;

/// Campaign code generator with a fixed, validated configuration.
pub struct CodeGenerator {
    options: GenerateOptions,
}

impl CodeGenerator {
    /// Create a generator, validating the length bounds up front.
    pub fn new(options: GenerateOptions) -> Result<Self, GenerateError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Change the maximum number of codes returned per call.
    pub fn set_count(&mut self, count: usize) {
        self.options.count = count;
    }

    /// Enable or disable year extraction for subsequent calls.
    pub fn set_include_year(&mut self, include_year: bool) {
        self.options.include_year = include_year;
    }

    /// Generate ranked campaign codes for `text`.
    ///
    /// Returns at most `count` codes, each uppercase alphanumeric within
    /// the configured length bounds, best-scoring first. Any nonzero
    /// `count` yields at least one code (a zero `count` selects nothing
    /// and yields an empty list). Fails with
    /// [`GenerateError::EmptyInput`] when the text has no letters or
    /// digits.
    pub fn generate(&self, text: &str) -> Result<Vec<String>, GenerateError> {
        let opts = &self.options;
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let tokens = tokenizer::tokenize(text);
        if tokens.is_empty() {
            return Err(GenerateError::EmptyInput);
        }

        let year = if opts.include_year {
            features::extract_year(&tokens).unwrap_or("").to_string()
        } else {
            String::new()
        };
        let year2 = year
            .get(year.len().saturating_sub(2)..)
            .unwrap_or("")
            .to_string();
        let words = features::letters_only(&tokens);
        let hints = features::acronym_hints(text);

        let ctx = PatternContext {
            words: &words,
            hints: &hints,
            year: &year,
            year2: &year2,
        };
        let mut pool = CandidatePool::new();
        default_strategy().run(&ctx, &mut pool, &mut rng);

        let fitted: Vec<String> = pool
            .into_vec()
            .into_iter()
            .map(|candidate| fitter::fit(&candidate, opts.min_len, opts.max_len, &mut rng))
            .filter(|code| (opts.min_len..=opts.max_len).contains(&code.len()))
            .collect();
        if fitted.is_empty() {
            // Fitting guarantees the bounds, so this is a pipeline defect,
            // not bad input. Fail loudly rather than return nothing.
            return Err(GenerateError::EmptyPool);
        }

        Ok(rank::rank_and_select(
            fitted,
            opts.count,
            opts.min_len,
            opts.max_len,
        ))
    }
}

/// One-shot convenience wrapper: validate `options` and generate codes for
/// `text`.
pub fn generate_codes(
    text: &str,
    options: &GenerateOptions,
) -> Result<Vec<String>, GenerateError> {
    CodeGenerator::new(options.clone())?.generate(text)
}
