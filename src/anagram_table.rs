//! AnagramTable: structural layer with chained buckets and bounded growth.

use crate::canonical::canonicalize;
use crate::error::{ConfigError, Result};
use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Bucket count a fresh table starts with, unless `max_buckets` is smaller.
pub const INITIAL_BUCKETS: usize = 10;

/// Growth is attempted once `len / bucket_count` exceeds this ratio.
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// Hash table of words keyed by their canonical form.
///
/// Buckets hold the caller's original words in insertion order. A bucket
/// that never received a word stays `None`. The bucket count doubles (capped
/// at `max_buckets`) whenever the load factor would exceed
/// [`MAX_LOAD_FACTOR`], and never shrinks.
pub struct AnagramTable<S = DefaultHashBuilder> {
    hasher: S,
    buckets: Vec<Option<Vec<String>>>,
    max_buckets: usize,
    item_count: usize,
}

impl AnagramTable {
    pub fn new(max_buckets: usize) -> Result<Self> {
        Self::with_hasher(max_buckets, DefaultHashBuilder::default())
    }
}

/// Iterator over the stored anagrams of a query, in chain order.
pub struct Anagrams<'a> {
    key: String,
    chain: core::slice::Iter<'a, String>,
}

impl<'a> Iterator for Anagrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Hash collisions share a chain; only equal canonical forms match.
        self.chain
            .by_ref()
            .find(|w| canonicalize(w) == self.key)
            .map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.chain.size_hint().1)
    }
}

/// Iterator over every stored word, bucket by bucket.
pub struct Iter<'a> {
    it: core::iter::Flatten<core::iter::Flatten<core::slice::Iter<'a, Option<Vec<String>>>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(String::as_str)
    }
}

impl<S> AnagramTable<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(max_buckets: usize, hasher: S) -> Result<Self> {
        if max_buckets == 0 {
            return Err(ConfigError::InvalidConfiguration { max_buckets });
        }
        let initial = max_buckets.min(INITIAL_BUCKETS);
        Ok(Self {
            hasher,
            buckets: empty_buckets(initial),
            max_buckets,
            item_count: 0,
        })
    }

    fn bucket_index(&self, key: &str, bucket_count: usize) -> usize {
        (self.hasher.hash_one(key) % bucket_count as u64) as usize
    }

    /// Number of insert calls, including words discarded for having no letters.
    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of words actually held in buckets.
    pub fn stored_len(&self) -> usize {
        self.buckets.iter().flatten().map(Vec::len).sum()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    pub fn load_factor(&self) -> f64 {
        self.item_count as f64 / self.buckets.len() as f64
    }

    /// Insert `word`. Every call counts toward `len()` and may grow the
    /// table before the word is placed; a word without letters is then
    /// dropped.
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.item_count += 1;
        self.try_grow();

        let key = canonicalize(&word);
        if key.is_empty() {
            log::trace!("discarding letterless word {:?}", word);
            return;
        }
        let idx = self.bucket_index(&key, self.buckets.len());
        self.buckets[idx].get_or_insert_with(Vec::new).push(word);
    }

    /// Double the bucket count (capped at `max_buckets`) when over the load
    /// factor. All words are rehashed into a fresh array which then replaces
    /// the old one.
    fn try_grow(&mut self) {
        let old_count = self.buckets.len();
        if old_count >= self.max_buckets || self.load_factor() <= MAX_LOAD_FACTOR {
            return;
        }
        let new_count = old_count.saturating_mul(2).min(self.max_buckets);
        let mut grown = empty_buckets(new_count);
        let old = core::mem::take(&mut self.buckets);
        for word in old.into_iter().flatten().flatten() {
            let idx = self.bucket_index(&canonicalize(&word), new_count);
            grown[idx].get_or_insert_with(Vec::new).push(word);
        }
        self.buckets = grown;
        log::debug!(
            "grew anagram table from {} to {} buckets at {} items",
            old_count,
            new_count,
            self.item_count
        );
    }

    /// Stored anagrams of `query`. Empty when `query` has no letters.
    pub fn anagrams(&self, query: &str) -> Anagrams<'_> {
        let key = canonicalize(query);
        let chain: &[String] = if key.is_empty() {
            &[]
        } else {
            let idx = self.bucket_index(&key, self.buckets.len());
            self.buckets[idx].as_deref().unwrap_or(&[])
        };
        Anagrams {
            key,
            chain: chain.iter(),
        }
    }

    /// Call `visit` once per stored anagram of `query`, in chain order.
    /// `None` is the no-op callback.
    pub fn lookup(&self, query: &str, visit: Option<&mut dyn FnMut(&str)>) {
        let Some(visit) = visit else {
            return;
        };
        for word in self.anagrams(query) {
            visit(word);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.buckets.iter().flatten().flatten(),
        }
    }

    /// Every stored word must sit in the bucket its canonical key hashes to.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.buckets.len() <= self.max_buckets);
        for (i, chain) in self.buckets.iter().enumerate() {
            for word in chain.iter().flatten() {
                let key = canonicalize(word);
                assert!(!key.is_empty(), "letterless word {:?} stored", word);
                assert_eq!(self.bucket_index(&key, self.buckets.len()), i);
            }
        }
    }
}

impl<S, T> Extend<T> for AnagramTable<S>
where
    S: BuildHasher,
    T: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S> core::fmt::Debug for AnagramTable<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnagramTable")
            .field("item_count", &self.item_count)
            .field("bucket_count", &self.buckets.len())
            .field("max_buckets", &self.max_buckets)
            .finish()
    }
}

fn empty_buckets(n: usize) -> Vec<Option<Vec<String>>> {
    let mut buckets = Vec::with_capacity(n);
    buckets.resize_with(n, || None);
    buckets
}
