use std::collections::BTreeMap;
use std::time::Duration;

use crate::puzzle::feedback::Effect;

/// Deferred-effect sink. Sessions never own a clock; they hand effects to
/// whatever scheduler the host injects.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, effect: Effect);
}

/// Effects keyed by due time, measured from the queue's own origin.
///
/// The host drains it with wall-clock elapsed time on every tick. Tests drive
/// it with virtual time, so timed behaviour needs no sleeping.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    pending: BTreeMap<(Duration, u64), Effect>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time as of the last drain.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every effect due at or before `now`, earliest first.
    /// Effects due at the same instant come out in scheduling order.
    /// Time never runs backwards: an older `now` is ignored.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Effect> {
        self.now = self.now.max(now);
        let cutoff = (self.now + Duration::from_nanos(1), 0);
        let later = self.pending.split_off(&cutoff);
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().collect()
    }

    /// Advance by `step` and drain.
    pub fn advance(&mut self, step: Duration) -> Vec<Effect> {
        let now = self.now + step;
        self.drain_due(now)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, effect: Effect) {
        self.seq += 1;
        self.pending.insert((self.now + delay, self.seq), effect);
    }
}
