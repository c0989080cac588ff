//! Request sequencing
//!
//! Every request gets a tag from a monotonic counter when it is issued.
//! When it completes, the tag is compared against the newest tag already
//! applied; anything older is stale and must not touch client state.
//!
//! Requests that touch unrelated state must not overtake each other, so
//! sequences are kept per channel (the clipboard, one item, ...).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Tag handed out when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl RequestTag {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic request counter with last-applied tracking
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a request about to be sent
    pub fn issue(&self) -> RequestTag {
        RequestTag(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record a completion. Returns false if a newer request already applied.
    pub fn try_apply(&self, tag: RequestTag) -> bool {
        let previous = self.applied.fetch_max(tag.0, Ordering::SeqCst);
        previous < tag.0
    }

    /// Newest tag applied so far (0 before any completion)
    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

/// Independent request sequences, one per channel key
#[derive(Debug)]
pub struct RequestChannels<K> {
    channels: Mutex<HashMap<K, Arc<RequestSequence>>>,
}

impl<K: Eq + Hash> RequestChannels<K> {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Sequence for a channel, created on first use
    pub fn channel(&self, key: K) -> Arc<RequestSequence> {
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(channels.entry(key).or_default())
    }
}

impl<K: Eq + Hash> Default for RequestChannels<K> {
    fn default() -> Self {
        Self::new()
    }
}
