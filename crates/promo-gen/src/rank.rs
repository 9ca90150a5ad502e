// Ranking and selection: dedupe fitted codes, order by composite score
// descending, return the top N.

use hashbrown::HashSet;

use crate::scoring;

/// Deduplicate `codes`, sort by score descending, and return at most
/// `count` entries.
///
/// Equal scores are broken lexicographically ascending on the code string.
/// The tie-break is an implementation choice, but it is deliberate and
/// stable: output order never depends on hash iteration or input order.
pub fn rank_and_select(
    codes: Vec<String>,
    count: usize,
    min_len: usize,
    max_len: usize,
) -> Vec<String> {
    let mut seen = HashSet::with_capacity(codes.len());
    let mut scored: Vec<(f64, String)> = codes
        .into_iter()
        .filter(|code| seen.insert(code.clone()))
        .map(|code| (scoring::score(&code, min_len, max_len), code))
        .collect();

    scored.sort_by(|(sa, ca), (sb, cb)| sb.total_cmp(sa).then_with(|| ca.cmp(cb)));
    scored.truncate(count);
    scored.into_iter().map(|(_, code)| code).collect()
}
