//! LAYERED MAP - Trie-Keyed Multimap with Per-Entry TTL
//!
//! A byte-trie where every key maps to an ordered sequence of values,
//! each carrying an optional expiration. Reads purge expired entries
//! lazily as they pass over them, so no background sweeper is needed.

pub mod map;

pub use map::LayeredMap;
