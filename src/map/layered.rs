//! Layered Map
//!
//! Byte-trie multimap with per-entry TTL and deque-style access.

use std::time::Duration;
use tracing::trace;

use super::node::{Entry, Node};

/// Trie-keyed multimap with lazy TTL eviction
///
/// Keys are byte sequences; the empty key is valid and terminates at the
/// root. Every key owns an ordered sequence of entries, appended at the
/// back by [`add`](Self::add) and consumed from either end by the pop
/// operations. Any read that passes over an expired entry removes it
/// permanently, so expiry needs no background task.
///
/// Absence is reported through `Option`, never an error: looking up a
/// key that was never written, or one whose entries have all expired or
/// been popped, returns `None`.
#[derive(Debug)]
pub struct LayeredMap<T> {
    root: Node<T>,
}

impl<T> Default for LayeredMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LayeredMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Append `value` at the back of `key`'s sequence
    ///
    /// Missing trie nodes along the path are created. With a `ttl` the
    /// entry expires that long after this call; without one it never
    /// expires. Never fails.
    pub fn add(&mut self, key: &[u8], value: T, ttl: Option<Duration>) {
        let mut current = &mut self.root;
        for &byte in key {
            current = current.child_or_insert(byte);
        }
        current.values.push_back(Entry::new(value, ttl));
    }

    /// All live values at `key`, in insertion order
    ///
    /// Every expired entry at the key is removed as a side effect of
    /// this read. Returns `None` when the key was never written to this
    /// depth or nothing live remains.
    pub fn get_all(&mut self, key: &[u8]) -> Option<Vec<T>>
    where
        T: Clone,
    {
        let node = self.descend_mut(key)?;
        if node.values.is_empty() {
            return None;
        }

        let before = node.values.len();
        node.values.retain(|entry| !entry.is_expired());
        let removed = before - node.values.len();
        if removed > 0 {
            trace!(removed, "purged expired entries on read");
        }

        if node.values.is_empty() {
            return None;
        }
        Some(node.values.iter().map(|e| e.value.clone()).collect())
    }

    /// Most recently added live value at `key`, without removing it
    ///
    /// Scans back to front, removing each expired entry it passes; the
    /// first live entry stops the scan. Expired entries in front of it
    /// are left for a later read to purge.
    pub fn get_last(&mut self, key: &[u8]) -> Option<T>
    where
        T: Clone,
    {
        let node = self.descend_mut(key)?;
        while let Some(entry) = node.values.back() {
            if !entry.is_expired() {
                return Some(entry.value.clone());
            }
            node.values.pop_back();
        }
        None
    }

    /// Remove and return the most recently added live value at `key`
    ///
    /// Same back-to-front scan and purge as [`get_last`](Self::get_last),
    /// but the live entry found is removed as well.
    pub fn pop_last(&mut self, key: &[u8]) -> Option<T> {
        let node = self.descend_mut(key)?;
        while let Some(entry) = node.values.pop_back() {
            if !entry.is_expired() {
                return Some(entry.value);
            }
        }
        None
    }

    /// Remove and return the oldest live value at `key`
    ///
    /// Front-to-back mirror of [`pop_last`](Self::pop_last).
    pub fn pop_first(&mut self, key: &[u8]) -> Option<T> {
        let node = self.descend_mut(key)?;
        while let Some(entry) = node.values.pop_front() {
            if !entry.is_expired() {
                return Some(entry.value);
            }
        }
        None
    }

    /// Walk the trie for `key`, `None` as soon as the path breaks
    fn descend_mut(&mut self, key: &[u8]) -> Option<&mut Node<T>> {
        let mut current = &mut self.root;
        for &byte in key {
            current = current.child_mut(byte)?;
        }
        Some(current)
    }
}
