// Candidate generation: raw code candidates collected into a deduplicating
// pool by an ordered list of generators.
//
// - [`patterns`] -- deterministic patterns (acronyms, prefix blends, hints)
// - [`blends`] -- randomized prefix blends drawing from the invocation RNG
// - [`strategy`] -- the ordered generator list

pub mod blends;
pub mod patterns;
pub mod strategy;

use hashbrown::HashSet;
use rand::rngs::StdRng;

/// Input features shared by all candidate generators.
///
/// `year` and `year2` are empty strings when no year applies; patterns
/// concatenate them unconditionally, so an absent year simply contributes
/// nothing.
pub struct PatternContext<'a> {
    /// Letters-only words from the tokenized input, in source order.
    pub words: &'a [String],
    /// Acronym hints detected in the raw text.
    pub hints: &'a [String],
    /// The 4-digit year token, or empty.
    pub year: &'a str,
    /// Last two digits of the year, or empty.
    pub year2: &'a str,
}

/// Collects raw candidates, deduplicating on exact string equality while
/// preserving insertion order.
///
/// Insertion order matters downstream: fitting consumes the invocation RNG
/// per candidate, so iterating in a hash-dependent order would break seed
/// reproducibility.
pub struct CandidatePool {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Add a raw candidate. Duplicates are silently ignored.
    /// Returns `true` if the candidate was new.
    pub fn insert(&mut self, candidate: String) -> bool {
        if !self.seen.insert(candidate.clone()) {
            return false;
        }
        self.items.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the pool, yielding candidates in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new()
    }
}

/// A single candidate generator: one family of patterns writing raw
/// candidates into the pool.
///
/// Deterministic generators ignore the RNG; the randomized blend generator
/// and any future sampled pattern draw from it, which is why it is threaded
/// through the trait rather than constructed ad hoc.
pub trait CandidateGenerator {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, rng: &mut StdRng);
}

/// Prefix of at most `n` characters. Words are ASCII by construction, so
/// byte slicing is safe.
pub(crate) fn prefix(word: &str, n: usize) -> &str {
    &word[..word.len().min(n)]
}
