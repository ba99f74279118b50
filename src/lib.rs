//! anagram-table: an in-memory anagram dictionary backed by a chained hash
//! table keyed by each word's canonical form.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: insert words, then visit every stored word that is an anagram of
//!   a query (same letters after lowercasing and dropping non-letters).
//! - Layers:
//!   - `canonical`: pure helper producing the canonical key (letters only,
//!     lowercased, sorted). Used as hash input, never stored.
//!   - `AnagramTable<S>`: structural layer owning the bucket array, item
//!     count and growth policy.
//!   - `Dictionary<S>`: public facade delegating to `AnagramTable`.
//!
//! Constraints
//! - Single-threaded: no internal locking. Share across threads by wrapping
//!   the whole dictionary in one `Mutex`; growth rewrites the bucket array.
//! - No deletion and no mutation of stored words.
//! - Bucket count starts at `min(max_buckets, 10)`, doubles while the load
//!   factor exceeds 0.7, and never exceeds `max_buckets`. Past the ceiling
//!   the load factor is unbounded.
//!
//! Hasher and rehashing invariants
//! - The `BuildHasher` is fixed at construction, so equal canonical keys
//!   map to the same bucket at a given bucket count.
//! - Every stored word sits in the bucket its canonical key hashes to under
//!   the current bucket count. Growth builds a complete new bucket array
//!   and then swaps it in; relative order within a new bucket follows the
//!   old bucket-index order, then chain order.
//! - Lookup compares canonical forms, not hashes, so collisions between
//!   non-anagrams never produce matches.
//!
//! Counting
//! - `len()` counts insert calls, including words with no letters that are
//!   discarded. Such inserts still feed the growth check.
//!
//! Notes and non-goals
//! - No persistence and no ordering guarantee across buckets.
//! - Callbacks receive `&str` views; the table keeps ownership.

mod anagram_table;
mod canonical;
mod dictionary;
mod error;

// Public surface
pub use anagram_table::{AnagramTable, Anagrams, Iter, INITIAL_BUCKETS, MAX_LOAD_FACTOR};
pub use canonical::{canonicalize, is_anagram};
pub use dictionary::Dictionary;
pub use error::{ConfigError, Result};
