//! Transient user-facing notices
//!
//! Messages are evicted oldest-first, one per tick. The eviction timer exists
//! only while the queue holds messages: it is armed by the first push into an
//! empty queue and torn down when the last message leaves.

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub created_at: Duration,
}

#[derive(Debug, Clone)]
pub struct MessageQueue {
    messages: VecDeque<Message>,
    next_id: u64,
    tick: Duration,
    next_eviction: Option<Duration>,
}

impl MessageQueue {
    #[must_use]
    pub fn new(tick: Duration) -> Self {
        Self {
            messages: VecDeque::new(),
            next_id: 0,
            tick,
            next_eviction: None,
        }
    }

    /// Append a message; arms the eviction timer if it was idle
    pub fn push(&mut self, text: impl Into<String>, now: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push_back(Message {
            id,
            text: text.into(),
            created_at: now,
        });
        if self.next_eviction.is_none() {
            self.next_eviction = Some(now + self.tick);
        }
        id
    }

    /// Run every eviction tick due by `now`, returning evicted messages in order
    pub fn advance(&mut self, now: Duration) -> Vec<Message> {
        let mut evicted = Vec::new();
        while let Some(due) = self.next_eviction
            && due <= now
        {
            if let Some(message) = self.messages.pop_front() {
                evicted.push(message);
            }
            self.next_eviction = if self.messages.is_empty() {
                None
            } else {
                Some(due + self.tick)
            };
        }
        evicted
    }

    /// When the next eviction fires, if the timer is armed
    #[must_use]
    pub const fn next_eviction(&self) -> Option<Duration> {
        self.next_eviction
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Message> {
        self.messages.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
