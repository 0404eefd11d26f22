// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Spelling helpers for intention detection.

/// Compute edit distance (Levenshtein) between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, a_ch) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_ch) in b.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Whether `word` looks like a typo of `keyword` without being it.
pub fn is_misspelling(word: &str, keyword: &str) -> bool {
    let max_distance = match keyword.chars().count() {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    };
    if word == keyword || word.chars().count() < 3 {
        return false;
    }
    // Quick length check to avoid computing distance for very different strings
    if word.chars().count().abs_diff(keyword.chars().count()) > max_distance {
        return false;
    }
    edit_distance(word, keyword) <= max_distance
}
