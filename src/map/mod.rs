//! Layered Map Engine
//!
//! Byte-trie with per-node value deques and lazy TTL eviction.

mod layered;
mod node;

pub use layered::LayeredMap;
