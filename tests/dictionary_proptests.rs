// Dictionary property tests.
//
// Property 1: anagram symmetry. For lettered words w1, w2 with equal
// canonical forms, inserting w1 makes lookup(w2) visit w1.
//
// Property 2: model equivalence. Against a plain Vec model, lookup(q)
// visits exactly the stored words whose canonical form equals q's, and in
// insertion order while no growth occurs in between; the bucket count
// never exceeds max_buckets.
//
// Property 3: permuted queries visit the same words.
use anagram_table::{canonicalize, Dictionary};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-eA-E0-9 !-]{0,6}"
}

fn visited(d: &Dictionary, q: &str) -> Vec<String> {
    d.anagrams(q).map(str::to_string).collect()
}

proptest! {
    #[test]
    fn prop_anagram_symmetry(w in "[a-zA-Z]{1,8}[0-9 ]{0,3}", seed in any::<u64>()) {
        // Build w2 as a shuffled copy of w1's characters.
        let mut chars: Vec<char> = w.chars().collect();
        let mut s = seed;
        for i in (1..chars.len()).rev() {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            chars.swap(i, (s >> 33) as usize % (i + 1));
        }
        let w2: String = chars.into_iter().collect();

        let mut d = Dictionary::new(16).unwrap();
        d.insert(w.clone());
        prop_assert_eq!(visited(&d, &w2), vec![w.clone()]);

        let mut d = Dictionary::new(16).unwrap();
        d.insert(w2.clone());
        prop_assert_eq!(visited(&d, &w), vec![w2]);
    }
}

proptest! {
    #[test]
    fn prop_matches_model(
        max_buckets in 1usize..=64,
        words in proptest::collection::vec(word(), 0..120),
        queries in proptest::collection::vec(word(), 1..20),
    ) {
        let mut d = Dictionary::new(max_buckets).unwrap();
        d.extend(&words);
        prop_assert_eq!(d.len(), words.len());
        prop_assert!(d.table().bucket_count() <= max_buckets);

        for q in queries.iter().chain(words.iter()) {
            let key = canonicalize(q);
            let mut got = visited(&d, q);
            let mut want: Vec<String> = if key.is_empty() {
                Vec::new()
            } else {
                words.iter().filter(|w| canonicalize(w) == key).cloned().collect()
            };
            // Growth may interleave a chain; compare as multisets.
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }
}

proptest! {
    #[test]
    fn prop_insertion_order_without_growth(n in 1usize..=7, seed in any::<u64>()) {
        // Seven items in ten buckets stay under the 0.7 load factor.
        let base = ["stop", "pots", "tops", "spot", "opts", "post", "Stop!"];
        let mut d = Dictionary::new(10).unwrap();
        let picked: Vec<&str> = (0..n).map(|i| base[(seed as usize).wrapping_add(i) % base.len()]).collect();
        d.extend(&picked);
        prop_assert_eq!(d.table().bucket_count(), 10);
        prop_assert_eq!(d.anagrams("post").collect::<Vec<_>>(), picked);
    }
}

proptest! {
    #[test]
    fn prop_permuted_queries_agree(words in proptest::collection::vec(word(), 0..60), q in word()) {
        let mut d = Dictionary::new(32).unwrap();
        d.extend(&words);
        let reversed: String = q.chars().rev().collect();
        prop_assert_eq!(visited(&d, &q), visited(&d, &reversed));
    }
}
