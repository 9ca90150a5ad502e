// Candidate strategy: the ordered list of generators for one invocation.

use rand::rngs::StdRng;

use super::blends::RandomBlends;
use super::patterns::{AcronymCodes, HintCodes, LeadWordCodes, TripleBlends, WordPairBlends};
use super::{CandidateGenerator, CandidatePool, PatternContext};

/// An ordered list of candidate generators.
///
/// Order is part of the determinism contract: generators run in sequence
/// against a shared RNG, so deterministic patterns go first and the
/// randomized blends last. Reordering would not change which deterministic
/// codes exist, but it would change every seeded random draw.
pub struct GenerationStrategy {
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl GenerationStrategy {
    /// Run every generator in order, filling `pool`.
    pub fn run(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, rng: &mut StdRng) {
        for generator in &self.generators {
            generator.generate(ctx, pool, rng);
        }
    }

    #[cfg(test)]
    fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

/// The standard strategy: every deterministic pattern family, then the
/// randomized blends.
pub fn default_strategy() -> GenerationStrategy {
    let generators: Vec<Box<dyn CandidateGenerator>> = vec![
        Box::new(AcronymCodes),
        Box::new(WordPairBlends),
        Box::new(LeadWordCodes),
        Box::new(TripleBlends),
        Box::new(HintCodes),
        Box::new(RandomBlends::default()),
    ];
    GenerationStrategy { generators }
}
