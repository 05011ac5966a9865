//! Cooperative virtual-time scheduling.
//!
//! All suspension in the game is "schedule an event after a delay". There
//! is one logical timeline, no threads, and no blocking: the application
//! advances the clock and due events are handed back one at a time. Every
//! schedule returns a [`TimerToken`] so the owner can invalidate it later,
//! which is what keeps a stale schedule from firing into a fresh session.

use crate::game::event::GameEvent;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Identity of one scheduled event.
///
/// Tokens are issued in scheduling order and never reused by a queue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerToken(u64);

/// A cancellable single-timeline event scheduler.
///
/// The contract the controller relies on:
/// - events become due in `(deadline, token)` order, so two events with the
///   same deadline fire in the order they were scheduled;
/// - a cancelled token never fires;
/// - [`pop_due`](Scheduler::pop_due) moves the clock to each event's
///   deadline before handing it back, so handlers that schedule relative
///   delays observe the correct logical time.
pub trait Scheduler {
    /// Schedule `event` to fire `delay` after the current clock.
    fn schedule_after(&mut self, delay: Duration, event: GameEvent) -> TimerToken;

    /// Invalidate a token. Returns whether it was still pending.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Pop the next event due at or before `until`, advancing the clock to
    /// its deadline. `None` once nothing else is due in the window.
    fn pop_due(&mut self, until: Duration) -> Option<(TimerToken, GameEvent)>;

    /// The current clock reading.
    fn now(&self) -> Duration;

    /// Move the clock forward to `until` (never backward).
    fn fast_forward(&mut self, until: Duration);

    /// How many scheduled events are still live.
    fn pending(&self) -> usize;
}

#[derive(Debug)]
struct Entry {
    due: Duration,
    token: TimerToken,
    event: GameEvent,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.token == other.token
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Deadline first, then scheduling order.
        self.due
            .cmp(&other.due)
            .then(self.token.0.cmp(&other.token.0))
    }
}

/// The provided [`Scheduler`]: a virtual-time binary-heap queue.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use simon_says::game::{GameEvent, Scheduler, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// queue.schedule_after(Duration::from_millis(600), GameEvent::FlashSignal { position: 0 });
/// queue.schedule_after(Duration::from_millis(1200), GameEvent::PlaybackFinished);
///
/// let (_, first) = queue.pop_due(Duration::from_millis(2000)).unwrap();
/// assert_eq!(first, GameEvent::FlashSignal { position: 0 });
/// assert_eq!(queue.now(), Duration::from_millis(600));
/// ```
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_token: u64,
    entries: BinaryHeap<Reverse<Entry>>,
    cancelled: HashSet<TimerToken>,
}

impl TimerQueue {
    /// Create an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_after(&mut self, delay: Duration, event: GameEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(Reverse(Entry {
            due: self.now + delay,
            token,
            event,
        }));
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let pending = self.entries.iter().any(|Reverse(entry)| entry.token == token)
            && !self.cancelled.contains(&token);
        if pending {
            self.cancelled.insert(token);
        }
        pending
    }

    fn pop_due(&mut self, until: Duration) -> Option<(TimerToken, GameEvent)> {
        loop {
            match self.entries.peek() {
                Some(Reverse(entry)) if entry.due <= until => {}
                _ => return None,
            }
            let Some(Reverse(entry)) = self.entries.pop() else {
                return None;
            };
            if self.cancelled.remove(&entry.token) {
                continue;
            }
            self.now = self.now.max(entry.due);
            return Some((entry.token, entry.event));
        }
    }

    fn now(&self) -> Duration {
        self.now
    }

    fn fast_forward(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|Reverse(entry)| !self.cancelled.contains(&entry.token))
            .count()
    }
}
