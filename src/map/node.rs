//! Trie Node
//!
//! One vertex per key byte, holding the value deque for the key that
//! terminates here.

use hashbrown::HashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Stored value with optional expiration
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    expires_at: Option<Instant>,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|d| Instant::now() + d),
        }
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.expires_at.map(|t| Instant::now() > t).unwrap_or(false)
    }
}

/// Trie vertex with one child per key byte
///
/// Children are owned exclusively by their parent and created lazily on
/// first traversal. Nodes are never removed once created, even when
/// their value deque drains empty.
#[derive(Debug)]
pub(crate) struct Node<T> {
    children: HashMap<u8, Node<T>>,
    pub(crate) values: VecDeque<Entry<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            values: VecDeque::new(),
        }
    }

    /// Child for `byte`, created if missing
    pub(crate) fn child_or_insert(&mut self, byte: u8) -> &mut Node<T> {
        self.children.entry(byte).or_insert_with(Node::new)
    }

    pub(crate) fn child_mut(&mut self, byte: u8) -> Option<&mut Node<T>> {
        self.children.get_mut(&byte)
    }
}
