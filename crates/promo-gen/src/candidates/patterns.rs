// Deterministic candidate patterns. Each generator emits one family of
// codes built from word prefixes and the year features. All are guarded on
// the word list being non-empty except `HintCodes`, which works off the
// raw-text acronym hints.

use rand::rngs::StdRng;

use super::{CandidateGenerator, CandidatePool, PatternContext, prefix};

/// Acronym of all words, suffixed with the full year and the short year:
/// "Big Winter Sale 2024" -> `BWS2024`, `BWS24`.
pub struct AcronymCodes;

impl CandidateGenerator for AcronymCodes {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, _rng: &mut StdRng) {
        if ctx.words.is_empty() {
            return;
        }
        let acronym: String = ctx
            .words
            .iter()
            .filter_map(|w| w.chars().next())
            .collect();
        pool.insert(format!("{acronym}{}", ctx.year));
        pool.insert(format!("{acronym}{}", ctx.year2));
    }
}

/// Blends of the first word with the second or last word. Requires at
/// least two words.
pub struct WordPairBlends;

impl CandidateGenerator for WordPairBlends {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, _rng: &mut StdRng) {
        if ctx.words.len() < 2 {
            return;
        }
        let first = &ctx.words[0];
        let second = &ctx.words[1];
        let last = &ctx.words[ctx.words.len() - 1];
        pool.insert(format!(
            "{}{}{}",
            prefix(first, 2),
            prefix(second, 2),
            ctx.year2
        ));
        pool.insert(format!(
            "{}{}{}",
            prefix(first, 3),
            prefix(last, 2),
            ctx.year2
        ));
        pool.insert(format!(
            "{}{}{}",
            prefix(first, 2),
            prefix(last, 2),
            ctx.year
        ));
    }
}

/// Codes led by the first word alone: a 4-letter prefix, and a 3+2 blend
/// with the second word when one exists.
pub struct LeadWordCodes;

impl CandidateGenerator for LeadWordCodes {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, _rng: &mut StdRng) {
        let Some(main) = ctx.words.first() else {
            return;
        };
        pool.insert(format!("{}{}", prefix(main, 4), ctx.year2));
        let second = ctx.words.get(1).map(|w| prefix(w, 2)).unwrap_or("");
        pool.insert(format!("{}{}{}", prefix(main, 3), second, ctx.year2));
    }
}

/// Three-word blends. Requires at least three words.
pub struct TripleBlends;

impl CandidateGenerator for TripleBlends {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, _rng: &mut StdRng) {
        if ctx.words.len() < 3 {
            return;
        }
        let (a, b, c) = (&ctx.words[0], &ctx.words[1], &ctx.words[2]);
        pool.insert(format!(
            "{}{}{}{}",
            prefix(a, 2),
            prefix(b, 2),
            prefix(c, 2),
            ctx.year2
        ));
        pool.insert(format!(
            "{}{}{}{}",
            prefix(a, 1),
            prefix(b, 2),
            prefix(c, 2),
            ctx.year
        ));
    }
}

/// Codes built from acronym hints the author wrote in capitals ("VIP",
/// "BOGO"). These join the pool and compete on score like everything else.
pub struct HintCodes;

impl CandidateGenerator for HintCodes {
    fn generate(&self, ctx: &PatternContext<'_>, pool: &mut CandidatePool, _rng: &mut StdRng) {
        for hint in ctx.hints {
            pool.insert(format!("{hint}{}", ctx.year));
            pool.insert(format!("{hint}{}", ctx.year2));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ctx<'a>(
        words: &'a [String],
        hints: &'a [String],
        year: &'a str,
        year2: &'a str,
    ) -> PatternContext<'a> {
        PatternContext {
            words,
            hints,
            year,
            year2,
        }
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(generator: &dyn CandidateGenerator, ctx: &PatternContext<'_>) -> Vec<String> {
        let mut pool = CandidatePool::new();
        let mut rng = StdRng::seed_from_u64(0);
        generator.generate(ctx, &mut pool, &mut rng);
        pool.into_vec()
    }

    #[test]
    fn acronym_with_both_year_forms() {
        let w = words(&["BIG", "WINTER", "SALE"]);
        let out = run(&AcronymCodes, &ctx(&w, &[], "2024", "24"));
        assert_eq!(out, ["BWS2024", "BWS24"]);
    }

    #[test]
    fn acronym_without_year_emits_once() {
        // With both year forms empty the two patterns collapse to one.
        let w = words(&["BIG", "WINTER", "SALE"]);
        let out = run(&AcronymCodes, &ctx(&w, &[], "", ""));
        assert_eq!(out, ["BWS"]);
    }

    #[test]
    fn acronym_skipped_without_words() {
        assert!(run(&AcronymCodes, &ctx(&[], &[], "2024", "24")).is_empty());
    }

    #[test]
    fn pair_blends() {
        let w = words(&["SUMMER", "SALE"]);
        let out = run(&WordPairBlends, &ctx(&w, &[], "2024", "24"));
        // second word and last word coincide here
        assert_eq!(out, ["SUSA24", "SUMSA24", "SUSA2024"]);
    }

    #[test]
    fn pair_blends_use_last_word() {
        let w = words(&["SUMMER", "MEGA", "SALE"]);
        let out = run(&WordPairBlends, &ctx(&w, &[], "2024", "24"));
        assert_eq!(out, ["SUME24", "SUMSA24", "SUSA2024"]);
    }

    #[test]
    fn pair_blends_need_two_words() {
        let w = words(&["SUMMER"]);
        assert!(run(&WordPairBlends, &ctx(&w, &[], "2024", "24")).is_empty());
    }

    #[test]
    fn lead_word_codes() {
        let w = words(&["SUMMER", "SALE"]);
        let out = run(&LeadWordCodes, &ctx(&w, &[], "2024", "24"));
        assert_eq!(out, ["SUMM24", "SUMSA24"]);
    }

    #[test]
    fn lead_word_codes_single_word() {
        let w = words(&["SUMMER"]);
        let out = run(&LeadWordCodes, &ctx(&w, &[], "2024", "24"));
        assert_eq!(out, ["SUMM24", "SUM24"]);
    }

    #[test]
    fn lead_word_handles_short_words() {
        let w = words(&["GO"]);
        let out = run(&LeadWordCodes, &ctx(&w, &[], "", ""));
        assert_eq!(out, ["GO"]);
    }

    #[test]
    fn triple_blends() {
        let w = words(&["BIG", "WINTER", "SALE"]);
        let out = run(&TripleBlends, &ctx(&w, &[], "2024", "24"));
        assert_eq!(out, ["BIWISA24", "BWISA2024"]);
    }

    #[test]
    fn triple_blends_need_three_words() {
        let w = words(&["BIG", "SALE"]);
        assert!(run(&TripleBlends, &ctx(&w, &[], "2024", "24")).is_empty());
    }

    #[test]
    fn hint_codes() {
        let h = words(&["VIP", "BOGO"]);
        let out = run(&HintCodes, &ctx(&[], &h, "2024", "24"));
        assert_eq!(out, ["VIP2024", "VIP24", "BOGO2024", "BOGO24"]);
    }
}
