//! Ratcliff/Obershelp similarity ratio.
//!
//! Matching blocks are found by recursive longest-common-substring search,
//! and the ratio is `2 * M / T` where `M` is the total length of all
//! matching blocks and `T` the combined length of both strings. An
//! edit-distance ratio (Levenshtein etc.) diverges numerically from this
//! definition and must not be substituted.

use std::collections::HashMap;

/// Similarity of two strings as a fraction in 0..=1.
///
/// Two empty strings are identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_total(&a, &b) as f64 / total as f64
}

/// Longest matching block in `a[alo..ahi]` x `b[blo..bhi]`.
///
/// Returns `(i, j, size)` with the earliest `i`, then earliest `j`, on
/// ties, matching the classic SequenceMatcher behavior.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // j2len[j] = length of the longest match ending at a[i], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = match j.checked_sub(1) {
                    Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                new_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}

/// Total length of all matching blocks between `a` and `b`.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}
