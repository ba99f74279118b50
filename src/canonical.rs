//! Canonical keys: letters only, lowercased, sorted.

/// Canonical form of `s`: alphabetic chars of `s`, lowercased, sorted by
/// code point. Everything else is dropped, not replaced.
///
/// Two strings with equal, non-empty canonical forms are anagrams.
pub fn canonicalize(s: &str) -> String {
    let mut letters: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// True when `a` and `b` share a non-empty canonical form.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let ka = canonicalize(a);
    !ka.is_empty() && ka == canonicalize(b)
}
