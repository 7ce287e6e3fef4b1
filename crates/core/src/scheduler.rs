//! Scheduler module - deferred events on a millisecond clock
//!
//! The scheduler never reads a clock itself. Callers pass `now_ms`, so the
//! same queue runs against a virtual clock in tests and `Instant` in the
//! terminal binary.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::{GameEvent, Schedule};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    seq: u64,
    event: GameEvent,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the earliest (then oldest) entry wins.
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of (fire time, event) pairs.
///
/// Events with the same due time fire in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Pending>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `schedule` to fire `schedule.delay_ms()` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, schedule: Schedule) {
        self.schedule_event(now_ms + schedule.delay_ms() as u64, schedule.event());
    }

    /// Queue an arbitrary event at an absolute time.
    pub fn schedule_event(&mut self, due_ms: u64, event: GameEvent) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Pending { due_ms, seq, event });
    }

    /// Remove and return the earliest event due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<GameEvent> {
        if self.queue.peek()?.due_ms > now_ms {
            return None;
        }
        self.queue.pop().map(|p| p.event)
    }

    /// Fire time of the earliest pending event.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|p| p.due_ms)
    }

    /// Number of pending events matching `event`.
    pub fn count(&self, event: &GameEvent) -> usize {
        self.queue.iter().filter(|p| &p.event == event).count()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
