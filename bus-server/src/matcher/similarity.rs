//! Token-set fuzzy string similarity.
//!
//! Scores two strings in `[0, 100]`. Both strings are lowercased and
//! tokenized on non-alphanumeric characters, then compared as token
//! sets: the intersection and both set differences are rebuilt into
//! comparison strings and the best pairwise agreement wins. This makes
//! the score robust to word reordering ("tirupati bus" vs "bus
//! tirupati"), extra words ("bus to tirupati" vs "tirupati"), and
//! small misspellings ("tirupathi" vs "tirupati").

use std::collections::BTreeSet;

/// Token-set similarity between two strings, in `[0, 100]`.
///
/// Returns 0 if either string has no tokens.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    // BTreeSet iteration keeps each piece sorted, so equal token sets
    // always rebuild to identical strings.
    let sect = intersection.join(" ");
    let combined_a = join_pieces(&sect, &only_a);
    let combined_b = join_pieces(&sect, &only_b);

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Lowercase and split into the set of alphanumeric tokens.
fn tokenize(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append the extra tokens to the shared prefix, space-separated.
fn join_pieces(sect: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return sect.to_string();
    }
    if sect.is_empty() {
        return rest.join(" ");
    }
    format!("{sect} {}", rest.join(" "))
}

/// Normalized indel similarity: `100 * 2*LCS / (len_a + len_b)`, rounded.
fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let lcs = lcs_length(&a, &b);
    let score = 100.0 * (2 * lcs) as f64 / (a.len() + b.len()) as f64;
    score.round() as u8
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
