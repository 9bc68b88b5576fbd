//! Fuzzy string scoring on a 0–100 scale.
//!
//! [`weighted_ratio`] picks the most suitable of several Indel-based ratios
//! depending on how different the two string lengths are, so that short
//! keywords still match inside long free-form descriptions. The Indel
//! primitives come from `rapidfuzz`; the partial, token and weighted
//! compositions are built on top of them here.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

const UNBASE_SCALE: f64 = 0.95;

/// Lowercase `text`, replace every non-alphanumeric character with a space
/// and trim the result.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .flat_map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![' ']
            }
        })
        .collect();
    mapped.trim().to_string()
}

fn norm_distance(distance: usize, len_sum: usize) -> f64 {
    if len_sum == 0 {
        100.0
    } else {
        100.0 - 100.0 * distance as f64 / len_sum as f64
    }
}

fn chars_ratio(a: &[char], b: &[char]) -> f64 {
    indel::normalized_similarity(a.iter().copied(), b.iter().copied()) * 100.0
}

/// Normalized Indel similarity of two strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

fn best_window(shorter: &[char], longer: &[char]) -> f64 {
    let m = shorter.len();
    let n = longer.len();
    let mut best: f64 = 0.0;

    for i in 1..m {
        best = best.max(chars_ratio(shorter, &longer[..i]));
        best = best.max(chars_ratio(shorter, &longer[n - i..]));
    }
    for start in 0..=(n - m) {
        best = best.max(chars_ratio(shorter, &longer[start..start + m]));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Best [`ratio`] between the shorter string and any equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return if a.is_empty() && b.is_empty() { 100.0 } else { 0.0 };
    }

    if a.len() < b.len() {
        best_window(&a, &b)
    } else if a.len() > b.len() {
        best_window(&b, &a)
    } else {
        best_window(&a, &b).max(best_window(&b, &a))
    }
}

fn sorted_tokens(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

fn join(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    tokens
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`ratio`] after sorting the whitespace-separated tokens of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&join(sorted_tokens(a)), &join(sorted_tokens(b)))
}

/// Compare the shared tokens against each side's remainder.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab_joined = join(&diff_ab);
    let diff_ba_joined = join(&diff_ba);
    let ab_len = diff_ab_joined.chars().count();
    let ba_len = diff_ba_joined.chars().count();
    let sect_len = join(&intersection).chars().count();
    let separator = usize::from(sect_len != 0);

    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    let distance = indel::distance(diff_ab_joined.chars(), diff_ba_joined.chars());
    let result = norm_distance(distance, sect_ab_len + sect_ba_len);
    if sect_len == 0 {
        return result;
    }

    let sect_ab_ratio = norm_distance(separator + ab_len, sect_len + sect_ab_len);
    let sect_ba_ratio = norm_distance(separator + ba_len, sect_len + sect_ba_len);
    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

/// Maximum of [`token_sort_ratio`] and [`token_set_ratio`].
pub fn token_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio(a, b).max(token_set_ratio(a, b))
}

/// [`partial_ratio`] over sorted tokens; any shared token is a full match.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }

    partial_ratio(&join(sorted_tokens(a)), &join(sorted_tokens(b))).max(partial_ratio(
        &join(&tokens_a),
        &join(&tokens_b),
    ))
}

/// Weighted combination of the ratios above.
///
/// Both inputs are expected to be [`normalize`]d already. Returns 0 when
/// either side is empty.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let len_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let end_ratio = ratio(a, b);

    if len_ratio < 1.5 {
        return end_ratio.max(token_ratio(a, b) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    end_ratio
        .max(partial_ratio(a, b) * partial_scale)
        .max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-6
    }

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("  Red, Cotton-KURTA! "), "red  cotton kurta");
        assert_eq!(normalize("₹250"), "250");
    }

    #[test]
    fn ratio_is_indel_based() {
        assert!(approx(ratio("kurta", "kurta"), 100.0));
        assert!(approx(ratio("kutra", "kurta"), 80.0));
        assert!(approx(ratio("abc", "xyz"), 0.0));
        assert!(approx(ratio("", ""), 100.0));
        assert!(approx(ratio("water bottle", "water botle"), 100.0 * 22.0 / 23.0));
    }

    #[test]
    fn partial_ratio_finds_substring() {
        assert!(approx(partial_ratio("kurta", "red cotton kurta size m"), 100.0));
        assert!(partial_ratio("saree", "red cotton kurta") < 70.0);
    }

    #[test]
    fn token_set_ratio_ignores_extra_tokens_on_one_side() {
        assert!(approx(token_set_ratio("steel bottle", "bottle steel water"), 100.0));
        assert!(approx(token_sort_ratio("steel bottle", "bottle steel"), 100.0));
    }

    #[test]
    fn weighted_ratio_scales_partial_matches() {
        assert!(approx(weighted_ratio("red cotton kurta size m", "kurta"), 90.0));
        assert!(approx(weighted_ratio("kurta", "kurta"), 100.0));
        assert!(approx(weighted_ratio("", "kurta"), 0.0));
    }

    #[test]
    fn weighted_ratio_tolerates_transpositions() {
        assert!(weighted_ratio("kutra", "kurta") >= 70.0);
    }
}
