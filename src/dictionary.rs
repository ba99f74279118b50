//! Dictionary: public facade over `AnagramTable`.

use crate::anagram_table::{AnagramTable, Anagrams, Iter};
use crate::error::Result;
use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Anagram dictionary. Insert words, then look up every stored word that is
/// an anagram of a query.
///
/// ```
/// use anagram_table::Dictionary;
///
/// let mut d = Dictionary::new(10).unwrap();
/// for w in ["listen", "enlist", "banana", "inlets"] {
///     d.insert(w);
/// }
/// let mut found = Vec::new();
/// d.for_each_anagram("silent", |w| found.push(w.to_string()));
/// assert_eq!(found, ["listen", "enlist", "inlets"]);
/// ```
pub struct Dictionary<S = DefaultHashBuilder> {
    table: AnagramTable<S>,
}

impl Dictionary {
    /// Create a dictionary that grows to at most `max_buckets` buckets.
    /// Fails with `InvalidConfiguration` when `max_buckets` is zero.
    pub fn new(max_buckets: usize) -> Result<Self> {
        Ok(Self {
            table: AnagramTable::new(max_buckets)?,
        })
    }
}

impl<S> Dictionary<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(max_buckets: usize, hasher: S) -> Result<Self> {
        Ok(Self {
            table: AnagramTable::with_hasher(max_buckets, hasher)?,
        })
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.table.insert(word)
    }

    /// Call `visit` for each stored anagram of `letters`; `None` does nothing.
    pub fn lookup(&self, letters: &str, visit: Option<&mut dyn FnMut(&str)>) {
        self.table.lookup(letters, visit)
    }

    pub fn for_each_anagram<F>(&self, letters: &str, mut visit: F)
    where
        F: FnMut(&str),
    {
        self.table.lookup(letters, Some(&mut visit))
    }

    pub fn anagrams(&self, letters: &str) -> Anagrams<'_> {
        self.table.anagrams(letters)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.table.iter()
    }

    /// Read-only view of the underlying table, for sizing and load queries.
    pub fn table(&self) -> &AnagramTable<S> {
        &self.table
    }
}

impl<S, T> Extend<T> for Dictionary<S>
where
    S: BuildHasher,
    T: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.table.extend(iter)
    }
}

impl<S> core::fmt::Debug for Dictionary<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dictionary")
            .field("table", &self.table)
            .finish()
    }
}
