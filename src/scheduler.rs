//! One-shot delayed ticks for event loops that poll.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::display::TickId;

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: BinaryHeap<Reverse<(Instant, TickId)>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, tick: TickId) {
        self.pending.push(Reverse((now + delay, tick)));
    }

    /// Remove and return every tick whose deadline has passed, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TickId> {
        let mut due = Vec::new();
        while let Some(Reverse((deadline, tick))) = self.pending.peek().copied() {
            if deadline > now {
                break;
            }
            self.pending.pop();
            due.push(tick);
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Time left until the next deadline, zero if one is already due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
