// Randomized prefix blends: a fixed number of draws that sample words,
// take random-length prefixes, and append a year or numeric suffix. This
// is the fallback breadth of the pool -- deterministic patterns cover the
// obvious codes, the blends cover the space around them.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{CandidateGenerator, CandidatePool, PatternContext, prefix};

/// Number of randomized draws per invocation.
pub const RANDOM_BLEND_DRAWS: usize = 24;

/// Randomized prefix blends. Runs last in the strategy so the RNG draw
/// sequence is identical for every input with the same seed.
///
/// Each draw samples `min(len(words), d)` words without replacement where
/// `d` is uniform in `{1, 2, 3}`, takes an independent uniform `{1, 2, 3}`
/// prefix of each, concatenates the prefixes in sampled order, and appends
/// one of: the year, the short year, a random 2-digit number (20-99), or a
/// random 4-digit number (2000-2099).
///
/// The empty year forms stay in the suffix choices even when no year was
/// extracted; an empty suffix just yields a bare blend.
pub struct RandomBlends {
    pub draws: usize,
}

impl Default for RandomBlends {
    fn default() -> Self {
        Self {
            draws: RANDOM_BLEND_DRAWS,
        }
    }
}

impl CandidateGenerator for RandomBlends {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, rng: &mut StdRng) {
        for _ in 0..self.draws {
            let k = ctx.words.len().min(rng.gen_range(1..=3));
            let mut blend = String::new();
            for word in ctx.words.choose_multiple(rng, k) {
                let take = rng.gen_range(1..=3);
                blend.push_str(prefix(word, take));
            }
            let suffix = match rng.gen_range(0..4u8) {
                0 => ctx.year.to_string(),
                1 => ctx.year2.to_string(),
                2 => rng.gen_range(20..=99u32).to_string(),
                _ => rng.gen_range(2000..=2099u32).to_string(),
            };
            blend.push_str(&suffix);
            pool.insert(blend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run_seeded(seed: u64, words: &[String]) -> Vec<String> {
        let ctx = PatternContext {
            words,
            hints: &[],
            year: "2024",
            year2: "24",
        };
        let mut pool = CandidatePool::new();
        let mut rng = StdRng::seed_from_u64(seed);
        RandomBlends::default().generate(&ctx, &mut pool, &mut rng);
        pool.into_vec()
    }

    #[test]
    fn same_seed_same_blends() {
        let w = words(&["SUMMER", "MEGA", "SALE"]);
        assert_eq!(run_seeded(42, &w), run_seeded(42, &w));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let w = words(&["SUMMER", "MEGA", "SALE"]);
        assert_ne!(run_seeded(1, &w), run_seeded(2, &w));
    }

    #[test]
    fn at_most_draws_candidates() {
        let w = words(&["SUMMER", "MEGA", "SALE"]);
        let out = run_seeded(7, &w);
        assert!(out.len() <= RANDOM_BLEND_DRAWS);
        assert!(!out.is_empty());
    }

    #[test]
    fn blends_draw_from_input_prefixes() {
        let w = words(&["SUMMER"]);
        for blend in run_seeded(9, &w) {
            let letters: String = blend.chars().filter(char::is_ascii_alphabetic).collect();
            assert!("SUMMER".starts_with(&letters), "unexpected blend {blend}");
        }
    }

    #[test]
    fn empty_word_list_yields_suffix_only_blends() {
        let out = run_seeded(3, &[]);
        // Suffixes only: year, short year, or random numbers.
        for blend in &out {
            assert!(blend.chars().all(|c| c.is_ascii_digit()), "{blend}");
        }
        assert!(!out.is_empty());
    }
}
