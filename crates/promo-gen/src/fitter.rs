// Normalization ("fitting"): force a raw candidate into the code charset
// and length bounds. Builds a new value; never mutates in place.

use promo_core::character::{PAD_DIGITS, is_code_char};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Normalize a raw candidate:
///
/// 1. uppercase, then drop every character outside `A-Z0-9`;
/// 2. prefix-truncate to `max_len`;
/// 3. pad with random digits from [`PAD_DIGITS`] up to `min_len`.
///
/// Padding draws from the shared invocation RNG, so it is covered by the
/// seed reproducibility contract. The result always satisfies
/// `min_len <= len <= max_len` for any valid bounds.
pub fn fit(raw: &str, min_len: usize, max_len: usize, rng: &mut StdRng) -> String {
    let mut code: String = raw
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| is_code_char(c))
        .collect();
    code.truncate(max_len);
    while code.len() < min_len {
        // PAD_DIGITS is non-empty, so choose cannot fail.
        if let Some(&d) = PAD_DIGITS.choose(rng) {
            code.push(d);
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::character::is_code_charset;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(123)
    }

    #[test]
    fn strips_and_uppercases() {
        assert_eq!(fit("sum-mer_24!", 6, 12, &mut rng()), "SUMMER24");
    }

    #[test]
    fn truncates_prefix_to_max() {
        assert_eq!(fit("MEGAWINTERSALE2024", 6, 10, &mut rng()), "MEGAWINTER");
    }

    #[test]
    fn pads_short_candidates() {
        let code = fit("AB", 6, 12, &mut rng());
        assert_eq!(code.len(), 6);
        assert!(code.starts_with("AB"));
        // Padding never introduces the 0/O and 1/I lookalikes.
        assert!(!code[2..].contains(['0', '1']));
        assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn padding_is_seed_deterministic() {
        assert_eq!(fit("AB", 8, 12, &mut rng()), fit("AB", 8, 12, &mut rng()));
    }

    #[test]
    fn empty_input_pads_to_min() {
        let code = fit("", 6, 12, &mut rng());
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn always_in_bounds_and_charset() {
        let raws = ["", "x", "Summer Sale!", "ABCDEFGHIJKLMNOP", "@@@", "a1"];
        let mut r = rng();
        for raw in raws {
            for (lo, hi) in [(6, 6), (6, 12), (8, 10), (12, 12)] {
                let code = fit(raw, lo, hi, &mut r);
                assert!((lo..=hi).contains(&code.len()), "{raw:?} -> {code:?}");
                assert!(is_code_charset(&code), "{raw:?} -> {code:?}");
            }
        }
    }
}
